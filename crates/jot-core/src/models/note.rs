//! Note model

use std::fmt;

use chrono::{DateTime, Local, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Maximum title length accepted by the editor form
pub const TITLE_MAX_CHARS: usize = 100;

/// Maximum content length accepted by the editor form
pub const CONTENT_MAX_CHARS: usize = 10_000;

/// Server-assigned note identifier.
///
/// The backend owns id generation, so the client treats ids as opaque text.
/// Both JSON strings and JSON integers are accepted on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(String);

impl NoteId {
    /// Wrap a raw server id
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Get the raw id text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<u64> for NoteId {
    fn from(raw: u64) -> Self {
        Self(raw.to_string())
    }
}

impl Serialize for NoteId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NoteIdVisitor;

        impl Visitor<'_> for NoteIdVisitor {
            type Value = NoteId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer note id")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<NoteId, E> {
                Ok(NoteId::new(value))
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<NoteId, E> {
                Ok(NoteId(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<NoteId, E> {
                Ok(NoteId(value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<NoteId, E> {
                Ok(NoteId(value.to_string()))
            }
        }

        deserializer.deserialize_any(NoteIdVisitor)
    }
}

/// A note as returned by the notes service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Server-assigned identifier
    pub id: NoteId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Last update time, when the server reports one
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    /// Check if the note has no title
    #[must_use]
    pub fn is_untitled(&self) -> bool {
        self.title.is_empty()
    }

    /// Local calendar date of the last update, e.g. `2024-05-01`
    #[must_use]
    pub fn updated_date_label(&self) -> Option<String> {
        self.updated_at.map(|at| {
            at.with_timezone(&Local)
                .format("%Y-%m-%d")
                .to_string()
        })
    }

    /// Local date and time of the last update, e.g. `2024-05-01 14:03`
    #[must_use]
    pub fn updated_at_label(&self) -> Option<String> {
        self.updated_at.map(|at| {
            at.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        })
    }
}

/// Title and content submitted on create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Whether both fields are filled in (the form's `required` check)
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.content.is_empty()
    }
}

/// Truncate form input to at most `max_chars` characters
#[must_use]
pub fn clamp_chars(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}
