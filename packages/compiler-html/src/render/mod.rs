//! Component renderer: one component in, one HTML fragment out.
//!
//! Each props payload implements [`RenderFragment`] in the module for its
//! family of components; [`fragment_renderer`] is the lookup from kind to
//! renderer. Kinds without a renderer (persisted types this version does not
//! know) go to the labelled fallback block, so rendering never fails.
//!
//! Plain-text props are escaped; `content` is editor markup and is inserted
//! as-is.

mod brand;
mod cards;
mod fallback;
mod interactive;
mod layout;
mod media;
mod text;

use crate::context::{CompileOptions, PlaceholderPolicy};
use crate::css::Declarations;
use crate::escape::escape_html;
use gazette_model::{Component, ComponentKind};

/// Nesting limit for `noteContainer` inside `noteContainer`
pub const MAX_NESTING_DEPTH: usize = 8;

/// Per-call render state
#[derive(Debug, Clone, Copy)]
pub(crate) struct RenderContext<'a> {
    pub options: &'a CompileOptions,
    pub depth: usize,
}

impl<'a> RenderContext<'a> {
    pub fn new(options: &'a CompileOptions) -> Self {
        Self { options, depth: 0 }
    }

    pub fn nested(&self) -> Self {
        Self {
            options: self.options,
            depth: self.depth + 1,
        }
    }
}

pub(crate) trait RenderFragment {
    fn render(&self, component: &Component, ctx: &RenderContext) -> String;
}

fn fragment_renderer(kind: &ComponentKind) -> Option<&dyn RenderFragment> {
    let renderer: &dyn RenderFragment = match kind {
        ComponentKind::Heading(props) => props,
        ComponentKind::Paragraph(props) => props,
        ComponentKind::BulletList(props) => props,
        ComponentKind::Button(props) => props,
        ComponentKind::Divider(props) => props,
        ComponentKind::Spacer(props) => props,
        ComponentKind::Image(props) => props,
        ComponentKind::Gallery(props) => props,
        ComponentKind::Video(props) => props,
        ComponentKind::Audio(props) => props,
        ComponentKind::Quiz(props) => props,
        ComponentKind::CodeSnippet(props) => props,
        ComponentKind::Table(props) => props,
        ComponentKind::Timeline(props) => props,
        ComponentKind::Accordion(props) => props,
        ComponentKind::InfoCard(props) => props,
        ComponentKind::HighlightBox(props) => props,
        ComponentKind::IconList(props) => props,
        ComponentKind::StepProcess(props) => props,
        ComponentKind::ExampleBox(props) => props,
        ComponentKind::Category(props) => props,
        ComponentKind::Author(props) => props,
        ComponentKind::Summary(props) => props,
        ComponentKind::TituloConIcono(props) => props,
        ComponentKind::Herramientas(props) => props,
        ComponentKind::RespaldadoPor(props) => props,
        ComponentKind::NoteContainer(props) => props,
        ComponentKind::Unknown { .. } => return None,
    };
    Some(renderer)
}

/// Render one component to an HTML fragment
pub fn render_component_to_html(component: &Component, options: &CompileOptions) -> String {
    render_with(component, &RenderContext::new(options))
}

pub(crate) fn render_with(component: &Component, ctx: &RenderContext) -> String {
    match fragment_renderer(&component.kind) {
        Some(renderer) => renderer.render(component, ctx),
        None => fallback::render_unknown(component),
    }
}

/// Renders a sequence of components in order
pub(crate) fn render_all(components: &[Component], ctx: &RenderContext) -> Vec<String> {
    components
        .iter()
        .map(|component| render_with(component, ctx))
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Dashed box shown in place of media with no source. Empty under
/// [`PlaceholderPolicy::Omit`].
pub(crate) fn placeholder(ctx: &RenderContext, class: &str, icon: &str, caption: &str) -> String {
    if ctx.options.placeholders == PlaceholderPolicy::Omit {
        return String::new();
    }

    let style = Declarations::new()
        .push("border", "2px dashed #cccccc")
        .push("borderRadius", "8px")
        .push("padding", "24px")
        .push("margin", "16px 0")
        .push("textAlign", "center")
        .push("color", "#999999")
        .push("backgroundColor", "#fafafa");

    format!(
        "<div class=\"{} component-placeholder\"{}><div style=\"font-size: 32px; line-height: 1;\">{}</div><p style=\"margin: 8px 0 0 0; font-size: 14px;\">{}</p></div>",
        class,
        style.to_attr(),
        icon,
        escape_html(caption)
    )
}

/// `value` unless it is blank
pub(crate) fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// First non-blank value among `value` and `fallback`
pub(crate) fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    non_empty(value).unwrap_or(fallback)
}
