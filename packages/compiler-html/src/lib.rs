//! # Gazette HTML compiler
//!
//! Serializes typed newsletter content into a single email-safe HTML
//! document. Rendering is pure: no I/O, no shared state, and no input makes
//! it fail.

mod background;
mod color;
mod context;
mod css;
mod document;
mod escape;
mod frame;
mod render;
mod stylesheet;

pub use background::{background_fallback, resolve_background};
pub use color::{parse_hex, with_opacity};
pub use context::{CompileOptions, PlaceholderPolicy};
pub use css::{inline_style, to_kebab_case, Declarations};
pub use document::{generate_newsletter_html, generate_single_note_html};
pub use escape::{escape_html, escape_url};
pub use frame::FrameStyle;
pub use render::{render_component_to_html, MAX_NESTING_DEPTH};
pub use stylesheet::{DOCUMENT_CLASSES, STYLESHEET};

#[cfg(test)]
mod tests;
