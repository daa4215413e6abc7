//! Data models for Jot

mod note;

pub use note::{clamp_chars, Note, NoteDraft, NoteId, CONTENT_MAX_CHARS, TITLE_MAX_CHARS};
