use super::{non_empty, RenderContext, RenderFragment};
use crate::css::Declarations;
use crate::escape::escape_html;
use gazette_model::props::{
    ExampleBoxProps, HighlightBoxProps, IconListProps, InfoCardProps, StepProcessProps,
    SummaryProps, TimelineProps,
};
use gazette_model::Component;

fn boxed(background: &str) -> Declarations {
    Declarations::new()
        .push("backgroundColor", background)
        .push("borderRadius", "8px")
        .push("padding", "16px 20px")
        .push("margin", "16px 0")
}

impl RenderFragment for InfoCardProps {
    fn render(&self, component: &Component, _ctx: &RenderContext) -> String {
        let style = boxed(&self.background_color)
            .push("borderLeft", format!("4px solid {}", self.border_color))
            .push_opt("color", self.text_color.as_deref())
            .extend_custom(&component.style);

        let icon = non_empty(&self.icon)
            .map(|icon| format!("<span style=\"margin-right: 8px;\">{}</span>", escape_html(icon)))
            .unwrap_or_default();

        format!(
            "<div class=\"component-info-card\"{}><p class=\"info-card-title\" style=\"margin: 0 0 8px 0; font-weight: bold; font-size: 16px;\">{}{}</p><div class=\"info-card-content\">{}</div></div>",
            style.to_attr(),
            icon,
            escape_html(&self.title),
            component.content
        )
    }
}

impl RenderFragment for HighlightBoxProps {
    fn render(&self, component: &Component, _ctx: &RenderContext) -> String {
        let style = boxed(&self.background_color)
            .push("border", format!("2px solid {}", self.border_color))
            .extend_custom(&component.style);

        let icon = non_empty(&self.icon)
            .map(|icon| {
                format!(
                    "<span style=\"font-size: 20px; margin-right: 8px;\">{}</span>",
                    escape_html(icon)
                )
            })
            .unwrap_or_default();

        format!(
            "<div class=\"component-highlight-box\"{}>{}{}</div>",
            style.to_attr(),
            icon,
            component.content
        )
    }
}

impl RenderFragment for ExampleBoxProps {
    fn render(&self, component: &Component, _ctx: &RenderContext) -> String {
        let style = boxed(&self.background_color)
            .push("border", format!("1px dashed {}", self.border_color))
            .extend_custom(&component.style);

        format!(
            "<div class=\"component-example-box\"{}><p class=\"example-box-title\" style=\"margin: 0 0 8px 0; font-weight: bold; color: {};\">{}</p><div class=\"example-box-content\">{}</div></div>",
            style.to_attr(),
            escape_html(&self.border_color),
            escape_html(&self.title),
            component.content
        )
    }
}

impl RenderFragment for SummaryProps {
    fn render(&self, component: &Component, _ctx: &RenderContext) -> String {
        let resolved = self.resolve();
        let style = boxed(&resolved.background_color)
            .push("color", &resolved.text_color)
            .extend_custom(&component.style);
        let label = Declarations::new()
            .push("margin", "0 0 8px 0")
            .push("fontWeight", "bold")
            .push("fontSize", "14px")
            .push("textTransform", "uppercase")
            .push("letterSpacing", "0.5px")
            .push("color", &resolved.icon_color);

        format!(
            "<div class=\"component-summary summary-{}\"{}><p class=\"summary-label\"{}><span style=\"margin-right: 6px;\">{}</span>{}</p><div class=\"summary-content\" style=\"font-size: 15px; line-height: 1.6;\">{}</div></div>",
            self.preset().key,
            style.to_attr(),
            label.to_attr(),
            escape_html(&resolved.icon),
            escape_html(&resolved.label),
            component.content
        )
    }
}

impl RenderFragment for IconListProps {
    fn render(&self, component: &Component, _ctx: &RenderContext) -> String {
        let table = Declarations::new()
            .push("margin", "16px 0")
            .extend_custom(&component.style);
        let icon_cell = Declarations::new()
            .push("verticalAlign", "top")
            .push("padding", "4px 10px 4px 0")
            .push("fontSize", "18px")
            .push_opt("color", self.icon_color.as_deref());

        let rows: String = self
            .items
            .iter()
            .map(|item| {
                format!(
                    "<tr><td{}>{}</td><td style=\"vertical-align: top; padding: 4px 0; font-size: 16px; line-height: 1.5;\">{}</td></tr>",
                    icon_cell.to_attr(),
                    escape_html(&item.icon),
                    escape_html(&item.text)
                )
            })
            .collect();

        format!(
            "<table role=\"presentation\" class=\"component-icon-list\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\"{}>{}</table>",
            table.to_attr(),
            rows
        )
    }
}

impl RenderFragment for StepProcessProps {
    fn render(&self, component: &Component, _ctx: &RenderContext) -> String {
        let table = Declarations::new()
            .push("margin", "16px 0")
            .extend_custom(&component.style);
        let badge = Declarations::new()
            .push("width", "32px")
            .push("height", "32px")
            .push("lineHeight", "32px")
            .push("borderRadius", "16px")
            .push("backgroundColor", &self.color)
            .push("color", "#ffffff")
            .push("textAlign", "center")
            .push("fontWeight", "bold");

        let rows: String = self
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                format!(
                    "<tr><td width=\"40\" style=\"vertical-align: top; padding: 0 12px 16px 0;\"><div{}>{}</div></td><td style=\"vertical-align: top; padding: 0 0 16px 0;\"><p style=\"margin: 0 0 4px 0; font-weight: bold;\">{}</p><p style=\"margin: 0; color: #555555; font-size: 14px;\">{}</p></td></tr>",
                    badge.to_attr(),
                    index + 1,
                    escape_html(&step.title),
                    escape_html(&step.description)
                )
            })
            .collect();

        format!(
            "<table role=\"presentation\" class=\"component-step-process\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\"{}>{}</table>",
            table.to_attr(),
            rows
        )
    }
}

impl RenderFragment for TimelineProps {
    fn render(&self, component: &Component, _ctx: &RenderContext) -> String {
        let wrapper = Declarations::new()
            .push("margin", "16px 0")
            .extend_custom(&component.style);
        let item = Declarations::new()
            .push("borderLeft", format!("3px solid {}", self.color))
            .push("padding", "0 0 16px 16px")
            .push("marginLeft", "6px");
        let date = Declarations::new()
            .push("fontSize", "12px")
            .push("fontWeight", "bold")
            .push("color", &self.color)
            .push("textTransform", "uppercase");

        let items: String = self
            .items
            .iter()
            .map(|entry| {
                format!(
                    "<div class=\"timeline-item\"{}><div class=\"timeline-date\"{}>{}</div><div class=\"timeline-title\" style=\"font-size: 16px; font-weight: bold; margin: 4px 0;\">{}</div><div class=\"timeline-description\" style=\"font-size: 14px; color: #555555;\">{}</div></div>",
                    item.to_attr(),
                    date.to_attr(),
                    escape_html(&entry.date),
                    escape_html(&entry.title),
                    escape_html(&entry.description)
                )
            })
            .collect();

        format!(
            "<div class=\"component-timeline\"{}>{}</div>",
            wrapper.to_attr(),
            items
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::CompileOptions;
    use crate::render::render_component_to_html;
    use gazette_model::props::{IconListItem, Step, TimelineItem};
    use gazette_model::ComponentKind;

    fn render(component: &Component) -> String {
        render_component_to_html(component, &CompileOptions::default())
    }

    #[test]
    fn test_summary_preset_and_override() {
        let component = Component::new(ComponentKind::Summary(SummaryProps {
            summary_type: "dato".to_string(),
            label: Some("¿Sabías que?".to_string()),
            ..Default::default()
        }))
        .with_content("<p>El <b>dato</b></p>");
        let html = render(&component);

        assert!(html.contains("summary-dato"));
        assert!(html.contains("¿Sabías que?"));
        assert!(html.contains("background-color: #e8f5e9;"));
        assert!(html.contains("<p>El <b>dato</b></p>"));
    }

    #[test]
    fn test_summary_unknown_type_uses_resumen() {
        let component = Component::new(ComponentKind::Summary(SummaryProps {
            summary_type: "otro".to_string(),
            ..Default::default()
        }));
        let html = render(&component);

        assert!(html.contains("summary-resumen"));
        assert!(html.contains(">Resumen</p>"));
    }

    #[test]
    fn test_info_card_title_escaped_content_raw() {
        let component = Component::new(ComponentKind::InfoCard(InfoCardProps {
            title: "A < B".to_string(),
            ..Default::default()
        }))
        .with_content("<em>nota</em>");
        let html = render(&component);

        assert!(html.contains("A &lt; B"));
        assert!(html.contains("<em>nota</em>"));
        assert!(html.contains("border-left: 4px solid #2196f3;"));
    }

    #[test]
    fn test_icon_list_and_steps_escape_text() {
        let list = render(&Component::new(ComponentKind::IconList(IconListProps {
            items: vec![IconListItem {
                icon: "⭐".to_string(),
                text: "<b>uno</b>".to_string(),
            }],
            icon_color: None,
        })));
        assert!(list.contains("&lt;b&gt;uno&lt;/b&gt;"));

        let steps = render(&Component::new(ComponentKind::StepProcess(StepProcessProps {
            steps: vec![
                Step {
                    title: "Inicio".to_string(),
                    description: "a".to_string(),
                },
                Step {
                    title: "Fin".to_string(),
                    description: "b".to_string(),
                },
            ],
            color: "#ff0000".to_string(),
        })));
        assert!(steps.contains(">1</div>"));
        assert!(steps.contains(">2</div>"));
        assert!(steps.find("Inicio").unwrap() < steps.find("Fin").unwrap());
    }

    #[test]
    fn test_timeline_items() {
        let html = render(&Component::new(ComponentKind::Timeline(TimelineProps {
            items: vec![TimelineItem {
                date: "2025".to_string(),
                title: "Lanzamiento".to_string(),
                description: "v1 & v2".to_string(),
            }],
            color: "#00aa00".to_string(),
        })));

        assert!(html.contains("border-left: 3px solid #00aa00;"));
        assert!(html.contains("v1 &amp; v2"));
    }
}
