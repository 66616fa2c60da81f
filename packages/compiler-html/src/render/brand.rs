use super::{non_empty, or_default, placeholder, RenderContext, RenderFragment};
use crate::color::with_opacity;
use crate::css::Declarations;
use crate::escape::{escape_html, escape_url};
use gazette_model::props::{AuthorProps, CategoryProps, HerramientasProps, RespaldadoPorProps};
use gazette_model::Component;

fn pill(background: &str, color: &str, label: &str) -> String {
    let style = Declarations::new()
        .push("display", "inline-block")
        .push("padding", "4px 12px")
        .push("borderRadius", "16px")
        .push("backgroundColor", background)
        .push("color", color)
        .push("fontSize", "12px")
        .push("fontWeight", "bold")
        .push("margin", "0 6px 6px 0");
    format!("<span class=\"category-pill\"{}>{}</span>", style.to_attr(), label)
}

impl RenderFragment for CategoryProps {
    fn render(&self, component: &Component, _ctx: &RenderContext) -> String {
        let wrapper = Declarations::new()
            .push("margin", "8px 0")
            .extend_custom(&component.style);

        let pills = if self.categorias.is_empty() {
            let label = if self.rich_content() {
                component.content.clone()
            } else {
                escape_html(&component.content)
            };
            pill(&self.color, &self.text_color, &label)
        } else {
            self.categorias
                .iter()
                .map(|categoria| {
                    pill(
                        or_default(categoria.color_fondo.as_deref().unwrap_or(""), &self.color),
                        or_default(
                            categoria.color_texto.as_deref().unwrap_or(""),
                            &self.text_color,
                        ),
                        &escape_html(&categoria.texto),
                    )
                })
                .collect()
        };

        format!(
            "<div class=\"component-category\"{}>{}</div>",
            wrapper.to_attr(),
            pills
        )
    }
}

impl RenderFragment for AuthorProps {
    fn render(&self, component: &Component, _ctx: &RenderContext) -> String {
        let table = Declarations::new()
            .push("margin", "16px 0")
            .extend_custom(&component.style);
        let name = escape_html(&self.name);

        let avatar = match non_empty(&self.avatar) {
            Some(src) => format!(
                "<td style=\"padding-right: 12px; vertical-align: middle;\"><img src=\"{}\" alt=\"{}\" width=\"48\" height=\"48\" style=\"border-radius: 24px; display: block; border: 0;\"></td>",
                escape_url(src),
                name
            ),
            None => String::new(),
        };
        let role = match non_empty(&self.role) {
            Some(role) => format!(
                "<p class=\"author-role\" style=\"margin: 2px 0 0 0; font-size: 14px; color: #666666;\">{}</p>",
                escape_html(role)
            ),
            None => String::new(),
        };
        let email = match non_empty(&self.email) {
            Some(email) => {
                let email = escape_html(email);
                format!(
                    "<p class=\"author-email\" style=\"margin: 2px 0 0 0; font-size: 14px;\"><a href=\"mailto:{}\" style=\"color: #007bff; text-decoration: none;\">{}</a></p>",
                    email, email
                )
            }
            None => String::new(),
        };

        format!(
            "<table role=\"presentation\" class=\"component-author\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\"{}><tr>{}<td style=\"vertical-align: middle;\"><p class=\"author-name\" style=\"margin: 0; font-weight: bold; font-size: 16px;\">{}</p>{}{}</td></tr></table>",
            table.to_attr(),
            avatar,
            name,
            role,
            email
        )
    }
}

// Opacity applies to the card background only; text, icon and pills keep
// their colors.
impl RenderFragment for HerramientasProps {
    fn render(&self, component: &Component, _ctx: &RenderContext) -> String {
        let card = Declarations::new()
            .push(
                "backgroundColor",
                with_opacity(&self.background_color, self.background_opacity()),
            )
            .push("borderRadius", "12px")
            .push("padding", "16px 20px")
            .push("margin", "16px 0")
            .push("color", &self.text_color)
            .extend_custom(&component.style);
        let icon = Declarations::new()
            .push("marginRight", "8px")
            .push_opt("color", self.icon_color.as_deref());
        let tool = Declarations::new()
            .push("display", "inline-block")
            .push("padding", "6px 14px")
            .push("margin", "0 8px 8px 0")
            .push("borderRadius", "20px")
            .push("backgroundColor", &self.pill_color)
            .push("color", &self.pill_text_color)
            .push("fontSize", "13px")
            .push("border", "1px solid #e0e0e0");

        let tools: String = self
            .tools
            .iter()
            .filter_map(|name| non_empty(name))
            .map(|name| {
                format!(
                    "<span class=\"tool-pill\"{}>{}</span>",
                    tool.to_attr(),
                    escape_html(name)
                )
            })
            .collect();

        format!(
            "<div class=\"component-herramientas\"{}><p class=\"herramientas-title\" style=\"margin: 0 0 12px 0; font-weight: bold; font-size: 16px;\"><span{}>{}</span>{}</p><div class=\"herramientas-tools\">{}</div></div>",
            card.to_attr(),
            icon.to_attr(),
            escape_html(&self.icon),
            escape_html(&self.title),
            tools
        )
    }
}

impl RenderFragment for RespaldadoPorProps {
    fn render(&self, component: &Component, ctx: &RenderContext) -> String {
        let logos: Vec<String> = self
            .logos
            .iter()
            .filter_map(|logo| {
                let src = non_empty(&logo.src)?;
                let img = format!(
                    "<img src=\"{}\" alt=\"{}\" style=\"max-height: 48px; max-width: 140px; margin: 0 12px 8px 12px; vertical-align: middle; border: 0;\">",
                    escape_url(src),
                    escape_html(&logo.alt)
                );
                Some(match non_empty(&logo.url) {
                    Some(url) => format!("<a href=\"{}\" target=\"_blank\">{}</a>", escape_url(url), img),
                    None => img,
                })
            })
            .collect();

        if logos.is_empty() {
            return placeholder(ctx, "component-respaldado-por", "🤝", "Sin logos de respaldo");
        }

        let wrapper = Declarations::new()
            .push("textAlign", self.align.as_str())
            .push("margin", "16px 0")
            .extend_custom(&component.style);
        let label = Declarations::new()
            .push("margin", "0 0 12px 0")
            .push("fontSize", "12px")
            .push("textTransform", "uppercase")
            .push("letterSpacing", "1px")
            .push("color", &self.text_color);
        let label = match non_empty(&self.label) {
            Some(text) => format!(
                "<p class=\"respaldado-por-label\"{}>{}</p>",
                label.to_attr(),
                escape_html(text)
            ),
            None => String::new(),
        };

        format!(
            "<div class=\"component-respaldado-por\"{}>{}<div class=\"respaldado-por-logos\">{}</div></div>",
            wrapper.to_attr(),
            label,
            logos.concat()
        )
    }
}
