use super::{non_empty, RenderContext, RenderFragment};
use crate::css::Declarations;
use crate::escape::escape_html;
use gazette_model::props::{
    BulletListProps, CodeSnippetProps, HeadingProps, ParagraphProps, TituloConIconoProps,
};
use gazette_model::Component;

const TEXT_COLOR: &str = "#333333";

// Rendered as a paragraph rather than <h1>-<h6>: mail clients apply their own
// heading margins and sizes.
impl RenderFragment for HeadingProps {
    fn render(&self, component: &Component, _ctx: &RenderContext) -> String {
        let style = Declarations::new()
            .push("fontSize", format!("{}px", self.font_size()))
            .push("fontWeight", "bold")
            .push("lineHeight", "1.3")
            .push("margin", "0 0 12px 0")
            .push("color", self.color.as_deref().unwrap_or(TEXT_COLOR))
            .push_opt("textAlign", self.align.map(|a| a.as_str()))
            .extend_custom(&component.style);

        format!(
            "<p class=\"component-heading\" data-level=\"{}\"{}>{}</p>",
            self.level(),
            style.to_attr(),
            component.content
        )
    }
}

impl RenderFragment for ParagraphProps {
    fn render(&self, component: &Component, _ctx: &RenderContext) -> String {
        let base = Declarations::new()
            .push("fontSize", "16px")
            .push("lineHeight", "1.6")
            .push("color", TEXT_COLOR)
            .push_opt("textAlign", self.align.map(|a| a.as_str()));

        let style = if component.style.is_empty() {
            base.push("marginTop", "16px").push("marginBottom", "0")
        } else {
            base.extend_custom(&component.style)
        };

        format!(
            "<div class=\"component-paragraph\"{}>{}</div>",
            style.to_attr(),
            component.content
        )
    }
}

impl RenderFragment for BulletListProps {
    fn render(&self, component: &Component, _ctx: &RenderContext) -> String {
        let tag = if self.ordered() { "ol" } else { "ul" };
        let list_style = Declarations::new()
            .push("margin", "16px 0")
            .push("paddingLeft", "24px")
            .push("color", TEXT_COLOR)
            .push("fontSize", "16px")
            .push("lineHeight", "1.6")
            .extend_custom(&component.style);
        let item_style = Declarations::new()
            .push("marginBottom", "8px")
            .push_opt("color", self.bullet_color.as_deref());

        let items: String = self
            .items
            .iter()
            .map(|item| format!("<li{}>{}</li>", item_style.to_attr(), escape_html(item)))
            .collect();

        format!(
            "<{tag} class=\"component-list\"{}>{}</{tag}>",
            list_style.to_attr(),
            items,
            tag = tag
        )
    }
}

impl RenderFragment for CodeSnippetProps {
    fn render(&self, component: &Component, _ctx: &RenderContext) -> String {
        // Older documents kept the code in `content`
        let code = non_empty(&self.code).unwrap_or(component.content.as_str());

        let wrapper = Declarations::new()
            .push("margin", "16px 0")
            .extend_custom(&component.style);
        let pre = Declarations::new()
            .push(
                "backgroundColor",
                self.background_color.as_deref().unwrap_or("#1e1e1e"),
            )
            .push("color", self.text_color.as_deref().unwrap_or("#d4d4d4"))
            .push("padding", "16px")
            .push("borderRadius", "6px")
            .push("overflowX", "auto")
            .push("fontFamily", "Consolas, Monaco, monospace")
            .push("fontSize", "14px")
            .push("lineHeight", "1.5")
            .push("margin", "0")
            .push("whiteSpace", "pre-wrap");

        let language = match non_empty(&self.language) {
            Some(language) if self.show_language() => format!(
                "<div class=\"code-language\" style=\"font-size: 12px; color: #999999; margin-bottom: 4px; text-transform: uppercase;\">{}</div>",
                escape_html(language)
            ),
            _ => String::new(),
        };

        format!(
            "<div class=\"component-code\"{}>{}<pre{}><code>{}</code></pre></div>",
            wrapper.to_attr(),
            language,
            pre.to_attr(),
            escape_html(code)
        )
    }
}

impl RenderFragment for TituloConIconoProps {
    fn render(&self, component: &Component, _ctx: &RenderContext) -> String {
        let table = Declarations::new()
            .push("margin", "24px 0 12px 0")
            .push_opt(
                "borderBottom",
                self.border_color
                    .as_deref()
                    .and_then(non_empty)
                    .map(|color| format!("2px solid {}", color)),
            )
            .extend_custom(&component.style);
        let icon_cell = Declarations::new()
            .push("verticalAlign", "middle")
            .push("fontSize", "28px")
            .push("paddingRight", "10px")
            .push_opt("color", self.icon_color.as_deref());
        let text_cell = Declarations::new()
            .push("verticalAlign", "middle")
            .push(
                "fontSize",
                self.font_size
                    .as_ref()
                    .map(|size| size.to_css("fontSize"))
                    .unwrap_or_else(|| "22px".to_string()),
            )
            .push("fontWeight", "bold")
            .push("color", self.text_color.as_deref().unwrap_or(TEXT_COLOR));

        format!(
            "<table role=\"presentation\" class=\"component-titulo-con-icono\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\" width=\"100%\"{}><tr><td width=\"40\"{}>{}</td><td{}>{}</td></tr></table>",
            table.to_attr(),
            icon_cell.to_attr(),
            escape_html(&self.icon),
            text_cell.to_attr(),
            component.content
        )
    }
}
