use super::{or_default, RenderContext, RenderFragment};
use crate::css::Declarations;
use crate::escape::{escape_html, escape_url};
use gazette_model::props::{AccordionProps, ButtonProps, QuizProps};
use gazette_model::Component;

/// Table-wrapped link so the button keeps its padding in Outlook
impl RenderFragment for ButtonProps {
    fn render(&self, component: &Component, _ctx: &RenderContext) -> String {
        let link = Declarations::new()
            .push("display", "inline-block")
            .push("padding", "12px 24px")
            .push("backgroundColor", &self.background_color)
            .push("color", &self.text_color)
            .push("textDecoration", "none")
            .push("borderRadius", self.border_radius.to_css("borderRadius"))
            .push("fontWeight", "bold")
            .push("fontSize", "16px")
            .extend_custom(&component.style);

        format!(
            "<table role=\"presentation\" class=\"component-button\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\"><tr><td align=\"{align}\" style=\"padding: 16px 0; text-align: {align};\"><a href=\"{}\" target=\"_blank\"{}>{}</a></td></tr></table>",
            escape_url(or_default(&self.url, "#")),
            link.to_attr(),
            escape_html(&self.text),
            align = self.align.as_str()
        )
    }
}

/// Option label: A, B, ... Z, then numbers
fn option_label(index: usize) -> String {
    if index < 26 {
        ((b'A' + index as u8) as char).to_string()
    } else {
        (index + 1).to_string()
    }
}

impl RenderFragment for QuizProps {
    fn render(&self, component: &Component, _ctx: &RenderContext) -> String {
        let wrapper = Declarations::new()
            .push("backgroundColor", "#f8f9fa")
            .push("border", "1px solid #e0e0e0")
            .push("borderRadius", "8px")
            .push("padding", "20px")
            .push("margin", "16px 0")
            .extend_custom(&component.style);

        let mut html = format!(
            "<div class=\"component-quiz\"{}><p class=\"quiz-question\" style=\"font-size: 18px; font-weight: bold; margin: 0 0 12px 0;\">{}</p>",
            wrapper.to_attr(),
            escape_html(&self.question)
        );

        for (index, option) in self.options.iter().enumerate() {
            html.push_str(&format!(
                "<div class=\"quiz-option\" style=\"padding: 10px 14px; margin: 6px 0; border: 1px solid #dddddd; border-radius: 6px; background-color: #ffffff;\"><strong>{}.</strong> {}</div>",
                option_label(index),
                escape_html(option)
            ));
        }

        if self.show_answer() {
            if let Some(correct) = self.correct_answer() {
                html.push_str(&format!(
                    "<p class=\"quiz-answer\" style=\"margin: 12px 0 0 0; font-size: 14px; color: #2e7d32;\">Respuesta correcta: <strong>{}. {}</strong></p>",
                    option_label(correct),
                    escape_html(&self.options[correct])
                ));
            }
        }

        if !self.explanation.trim().is_empty() {
            html.push_str(&format!(
                "<p class=\"quiz-explanation\" style=\"margin: 8px 0 0 0; font-size: 14px; color: #555555;\">{}</p>",
                escape_html(&self.explanation)
            ));
        }

        html.push_str("</div>");
        html
    }
}

// Mail clients cannot toggle sections, so every item is rendered open
impl RenderFragment for AccordionProps {
    fn render(&self, component: &Component, _ctx: &RenderContext) -> String {
        let wrapper = Declarations::new()
            .push("margin", "16px 0")
            .extend_custom(&component.style);
        let title = Declarations::new()
            .push("backgroundColor", &self.header_color)
            .push("padding", "12px 16px")
            .push("fontWeight", "bold");

        let items: String = self
            .items
            .iter()
            .map(|item| {
                format!(
                    "<div class=\"accordion-item\" style=\"border: 1px solid #e0e0e0; border-radius: 6px; margin-bottom: 8px;\"><div class=\"accordion-title\"{}>{}</div><div class=\"accordion-content\" style=\"padding: 12px 16px;\">{}</div></div>",
                    title.to_attr(),
                    escape_html(&item.title),
                    escape_html(&item.content)
                )
            })
            .collect();

        format!(
            "<div class=\"component-accordion\"{}>{}</div>",
            wrapper.to_attr(),
            items
        )
    }
}
