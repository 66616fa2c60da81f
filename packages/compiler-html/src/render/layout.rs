use super::{render_all, MAX_NESTING_DEPTH, RenderContext, RenderFragment};
use crate::css::Declarations;
use crate::escape::escape_html;
use crate::frame::FrameStyle;
use gazette_model::props::{DividerProps, NoteContainerProps, SpacerProps, TableProps};
use gazette_model::Component;
use tracing::warn;

impl RenderFragment for DividerProps {
    fn render(&self, component: &Component, _ctx: &RenderContext) -> String {
        let line_style = match self.line_style.as_str() {
            "dashed" | "dotted" | "double" => self.line_style.as_str(),
            _ => "solid",
        };
        let style = Declarations::new()
            .push("border", "none")
            .push(
                "borderTop",
                format!("{}px {} {}", self.thickness(), line_style, self.color),
            )
            .push("width", &self.width)
            .push("margin", "24px auto")
            .extend_custom(&component.style);

        format!("<hr class=\"component-divider\"{}>", style.to_attr())
    }
}

impl RenderFragment for SpacerProps {
    fn render(&self, component: &Component, _ctx: &RenderContext) -> String {
        let height = format!("{}px", self.height());
        let style = Declarations::new()
            .push("height", &height)
            .push("lineHeight", &height)
            .push("fontSize", "1px")
            .extend_custom(&component.style);

        format!("<div class=\"component-spacer\"{}>&nbsp;</div>", style.to_attr())
    }
}

impl RenderFragment for TableProps {
    fn render(&self, component: &Component, _ctx: &RenderContext) -> String {
        let table = Declarations::new()
            .push("borderCollapse", "collapse")
            .push("margin", "16px 0")
            .push("fontSize", "14px")
            .extend_custom(&component.style);
        let cell_border = format!("1px solid {}", self.border_color);
        let th = Declarations::new()
            .push("backgroundColor", &self.header_background)
            .push("border", &cell_border)
            .push("padding", "10px")
            .push("textAlign", "left")
            .push("fontWeight", "bold");
        let td = Declarations::new()
            .push("border", &cell_border)
            .push("padding", "10px");

        let head = if self.headers.is_empty() {
            String::new()
        } else {
            let cells: String = self
                .headers
                .iter()
                .map(|h| format!("<th{}>{}</th>", th.to_attr(), escape_html(h)))
                .collect();
            format!("<thead><tr>{}</tr></thead>", cells)
        };

        let rows: String = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let stripe = if self.striped() && index % 2 == 1 {
                    " style=\"background-color: #fafafa;\""
                } else {
                    ""
                };
                let cells: String = row
                    .iter()
                    .map(|c| format!("<td{}>{}</td>", td.to_attr(), escape_html(c)))
                    .collect();
                format!("<tr{}>{}</tr>", stripe, cells)
            })
            .collect();

        format!(
            "<table class=\"component-table\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\"{}>{}<tbody>{}</tbody></table>",
            table.to_attr(),
            head,
            rows
        )
    }
}

impl RenderFragment for NoteContainerProps {
    fn render(&self, component: &Component, ctx: &RenderContext) -> String {
        if ctx.depth >= MAX_NESTING_DEPTH {
            warn!(component_id = %component.id, depth = ctx.depth, "note containers nested too deeply, skipping");
            return String::from(
                "<div class=\"component-note-container component-unknown\">Contenedor anidado demasiado profundo</div>",
            );
        }

        let style = FrameStyle::from_container(self)
            .declarations()
            .push("marginBottom", "16px")
            .extend_custom(&component.style);

        let title = match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => format!(
                "<p class=\"note-container-title\" style=\"margin: 0 0 8px 0; font-size: 18px; font-weight: bold;\">{}</p>",
                escape_html(title)
            ),
            _ => String::new(),
        };

        format!(
            "<div class=\"component-note-container\" data-component-id=\"{}\"{}>{}{}</div>",
            escape_html(&component.id),
            style.to_attr(),
            title,
            render_all(&self.components_data, &ctx.nested()).concat()
        )
    }
}
