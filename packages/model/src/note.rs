//! Notes, newsletter note lists, and the decode boundary for stored note data.
//!
//! Stored notes keep their components as a JSON string (`objData`). That
//! string is parsed exactly once, here, into typed [`Component`]s; rendering
//! code never sees raw JSON.

use crate::chrome::{FooterConfig, HeaderConfig};
use crate::component::Component;
use crate::de::lenient_string;
use crate::error::{DecodeError, DecodeResult};
use crate::style::CssValue;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Decodes a serialized component list.
///
/// Accepts either a bare array or an object with a `components` array. An
/// empty or whitespace-only string is an empty note.
pub fn decode_components(json: &str) -> DecodeResult<Vec<Component>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(json)?;
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("components") {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(DecodeError::InvalidShape(
                    "`components` is not an array".to_string(),
                ))
            }
            None => return Err(DecodeError::MissingField("components")),
        },
        other => {
            return Err(DecodeError::InvalidShape(format!(
                "expected an array of components, found {}",
                json_kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                return Err(DecodeError::InvalidShape(format!(
                    "component {} is {}, expected an object",
                    index,
                    json_kind(&item)
                )));
            }
            Ok(serde_json::from_value(item)?)
        })
        .collect()
}

/// Serializes components back to the stored `objData` form
pub fn encode_components(components: &[Component]) -> Result<String, serde_json::Error> {
    serde_json::to_string(components)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A note with its components decoded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub components: Vec<Component>,
}

impl Note {
    pub fn new(id: impl Into<String>, components: Vec<Component>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            components,
        }
    }
}

/// Per-note overrides for the bordered frame each note renders inside
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NoteFrame {
    pub border_width: Option<CssValue>,
    pub border_color: Option<String>,
    pub border_radius: Option<CssValue>,
    pub padding: Option<CssValue>,
    pub max_width: Option<CssValue>,
    pub background_color: Option<String>,
}

/// A note attached to a newsletter at a display position
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsletterNote {
    pub note: Note,
    pub order: i64,
    pub frame: NoteFrame,
}

impl NewsletterNote {
    pub fn new(note: Note, order: i64) -> Self {
        Self {
            note,
            order,
            frame: NoteFrame::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.note.id
    }

    pub fn components(&self) -> &[Component] {
        &self.note.components
    }

    pub fn to_stored(&self) -> Result<StoredNewsletterNote, serde_json::Error> {
        Ok(StoredNewsletterNote {
            order: self.order,
            frame: self.frame.clone(),
            note_data: StoredNote {
                id: self.note.id.clone(),
                title: self.note.title.clone(),
                obj_data: encode_components(&self.note.components)?,
            },
        })
    }
}

/// Persisted note as the authoring backend returns it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredNote {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    /// JSON-encoded component array
    #[serde(deserialize_with = "lenient_string")]
    pub obj_data: String,
}

impl StoredNote {
    pub fn decode(&self) -> DecodeResult<Note> {
        Ok(Note {
            id: self.id.clone(),
            title: self.title.clone(),
            components: decode_components(&self.obj_data)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredNewsletterNote {
    pub order: i64,
    pub note_data: StoredNote,
    pub frame: NoteFrame,
}

impl StoredNewsletterNote {
    pub fn decode(&self) -> DecodeResult<NewsletterNote> {
        Ok(NewsletterNote {
            note: self.note_data.decode()?,
            order: self.order,
            frame: self.frame.clone(),
        })
    }
}

/// A stored note that could not be decoded
#[derive(Debug)]
pub struct NoteDecodeFailure {
    pub note_id: String,
    pub order: i64,
    pub error: DecodeError,
}

/// Result of leniently decoding a note list
#[derive(Debug, Default)]
pub struct DecodedNotes {
    pub notes: Vec<NewsletterNote>,
    pub failures: Vec<NoteDecodeFailure>,
}

/// Decodes every stored note, skipping the ones whose data is malformed.
///
/// Array order is preserved for the notes that decode.
pub fn decode_notes(stored: &[StoredNewsletterNote]) -> DecodedNotes {
    let mut decoded = DecodedNotes::default();

    for entry in stored {
        match entry.decode() {
            Ok(note) => {
                debug!(note_id = %note.id(), components = note.components().len(), "decoded note");
                decoded.notes.push(note);
            }
            Err(error) => {
                warn!(note_id = %entry.note_data.id, %error, "skipping note with malformed data");
                decoded.failures.push(NoteDecodeFailure {
                    note_id: entry.note_data.id.clone(),
                    order: entry.order,
                    error,
                });
            }
        }
    }

    decoded
}

/// Persisted newsletter document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredNewsletter {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    pub header: Option<HeaderConfig>,
    pub footer: Option<FooterConfig>,
    pub notes: Vec<StoredNewsletterNote>,
}

/// Newsletter document with its ordered note list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Newsletter {
    pub title: String,
    pub description: String,
    pub header: HeaderConfig,
    pub footer: FooterConfig,
    pub notes: Vec<NewsletterNote>,
}

impl Newsletter {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Builds a newsletter from its stored form. Missing header/footer fall back
    /// to the given defaults; notes that fail to decode are returned separately.
    pub fn from_stored(
        stored: &StoredNewsletter,
        default_header: &HeaderConfig,
        default_footer: &FooterConfig,
    ) -> (Self, Vec<NoteDecodeFailure>) {
        let DecodedNotes { notes, failures } = decode_notes(&stored.notes);
        let newsletter = Self {
            title: stored.title.clone(),
            description: stored.description.clone(),
            header: stored.header.clone().unwrap_or_else(|| default_header.clone()),
            footer: stored.footer.clone().unwrap_or_else(|| default_footer.clone()),
            notes,
        };
        (newsletter, failures)
    }

    /// Appends a note at the end of the list
    pub fn attach_note(&mut self, note: Note) {
        let order = self.notes.len() as i64;
        self.notes.push(NewsletterNote::new(note, order));
    }

    /// Removes a note by id and renumbers the rest. Returns the removed note.
    pub fn remove_note(&mut self, note_id: &str) -> Option<NewsletterNote> {
        self.sort_by_order();
        let index = self.position(note_id)?;
        let removed = self.notes.remove(index);
        self.renumber();
        Some(removed)
    }

    /// Swaps a note with its predecessor. Returns false when the note is
    /// missing or already first.
    pub fn move_note_up(&mut self, note_id: &str) -> bool {
        self.sort_by_order();
        match self.position(note_id) {
            Some(index) if index > 0 => {
                self.notes.swap(index, index - 1);
                self.renumber();
                true
            }
            _ => false,
        }
    }

    /// Swaps a note with its successor. Returns false when the note is
    /// missing or already last.
    pub fn move_note_down(&mut self, note_id: &str) -> bool {
        self.sort_by_order();
        match self.position(note_id) {
            Some(index) if index + 1 < self.notes.len() => {
                self.notes.swap(index, index + 1);
                self.renumber();
                true
            }
            _ => false,
        }
    }

    /// Notes sorted by `order`; ties keep their list position
    pub fn sorted_notes(&self) -> Vec<NewsletterNote> {
        let mut notes = self.notes.clone();
        notes.sort_by_key(|note| note.order);
        notes
    }

    fn sort_by_order(&mut self) {
        self.notes.sort_by_key(|note| note.order);
    }

    fn position(&self, note_id: &str) -> Option<usize> {
        self.notes.iter().position(|note| note.id() == note_id)
    }

    fn renumber(&mut self) {
        for (index, note) in self.notes.iter_mut().enumerate() {
            note.order = index as i64;
        }
    }
}
