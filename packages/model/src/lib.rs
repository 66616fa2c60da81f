//! # Gazette Model
//!
//! Typed content model for newsletters: components with one props payload per
//! kind, header/footer chrome, notes and their ordering, and the single decode
//! boundary for stored note data.

pub mod chrome;
pub mod component;
pub mod de;
pub mod error;
pub mod note;
pub mod props;
pub mod style;

pub use chrome::{Background, FooterConfig, GradientType, HeaderConfig, SocialLink, SponsorConfig};
pub use component::{default_content, Component, ComponentKind, KNOWN_TYPES};
pub use error::{DecodeError, DecodeResult};
pub use note::{
    decode_components, decode_notes, encode_components, DecodedNotes, Newsletter,
    NewsletterNote, Note, NoteDecodeFailure, NoteFrame, StoredNewsletter, StoredNewsletterNote,
    StoredNote,
};
pub use style::{format_number, Alignment, CssValue, StyleMap};
