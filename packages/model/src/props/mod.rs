//! Typed props payloads, one per component kind.
//!
//! Every struct decodes from `{}` and tolerates the loosely-typed values the
//! editor persists; accessor methods resolve the documented defaults.

mod brand;
mod cards;
mod interactive;
mod layout;
mod media;
mod text;

pub use brand::*;
pub use cards::*;
pub use interactive::*;
pub use layout::*;
pub use media::*;
pub use text::*;
