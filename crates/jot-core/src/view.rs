//! Render-ready projections of a [`Session`].
//!
//! The desktop components are thin `rsx!` wrappers around these values, so
//! what the user sees for a given state is decided (and tested) here.

use crate::models::{NoteDraft, NoteId};
use crate::session::{Selection, Session};

/// Shown in the main area when nothing is selected
pub const EMPTY_SELECTION_PROMPT: &str = "Select a note or create a new one.";

/// Shown in the sidebar when the list is empty
pub const EMPTY_LIST_MESSAGE: &str = "No notes yet.";

/// Shown in place of blank content in the viewer
pub const EMPTY_NOTE_MESSAGE: &str = "This note is empty.";

/// One row of the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItem {
    pub id: NoteId,
    /// Note title; `None` renders as an "Untitled" placeholder
    pub title: Option<String>,
    pub date_label: String,
    pub tooltip: String,
    pub selected: bool,
}

/// Sidebar rows in store order
#[must_use]
pub fn sidebar_items(session: &Session) -> Vec<SidebarItem> {
    let selected = session.selection().note_id();
    session
        .notes()
        .iter()
        .map(|note| SidebarItem {
            id: note.id.clone(),
            title: (!note.is_untitled()).then(|| note.title.clone()),
            date_label: note.updated_date_label().unwrap_or_default(),
            tooltip: note
                .updated_at_label()
                .map(|at| format!("Last updated: {at}"))
                .unwrap_or_default(),
            selected: selected == Some(&note.id),
        })
        .collect()
}

/// Identity of the record the editor form is bound to.
///
/// The form's local buffers are reseeded whenever this changes. Each draft
/// carries its ordinal, so a new draft never inherits an abandoned one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorKey {
    Draft(u64),
    Note(NoteId),
}

/// What the main area renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainView {
    /// Nothing selected
    Prompt,
    /// Editor form, seeded with the values to show initially
    Editing {
        key: EditorKey,
        title: String,
        content: String,
    },
    /// Read-only note; `content` is `None` when the note body is empty
    Viewing {
        title: String,
        content: Option<String>,
    },
}

/// Main area state for the current selection
#[must_use]
pub fn main_view(session: &Session) -> MainView {
    if *session.selection() == Selection::Draft {
        return MainView::Editing {
            key: EditorKey::Draft(session.drafts_started()),
            title: String::new(),
            content: String::new(),
        };
    }
    let Some(note) = session.current_note() else {
        return MainView::Prompt;
    };
    if session.is_editing() {
        MainView::Editing {
            key: EditorKey::Note(note.id.clone()),
            title: note.title.clone(),
            content: note.content.clone(),
        }
    } else {
        MainView::Viewing {
            title: note.title.clone(),
            content: (!note.content.is_empty()).then(|| note.content.clone()),
        }
    }
}

/// Title and content typed into the editor form, not yet saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorBuffer {
    /// Record the buffers were seeded from; `None` outside the editor
    pub key: Option<EditorKey>,
    pub title: String,
    pub content: String,
}

impl EditorBuffer {
    /// Buffers holding the session's current editor values
    #[must_use]
    pub fn seeded(session: &Session) -> Self {
        match main_view(session) {
            MainView::Editing {
                key,
                title,
                content,
            } => Self {
                key: Some(key),
                title,
                content,
            },
            MainView::Prompt | MainView::Viewing { .. } => Self::default(),
        }
    }

    /// Reseed when the session now edits a different record.
    ///
    /// Typed text survives any session change that keeps the same record.
    /// Returns whether the buffers were replaced.
    pub fn sync(&mut self, session: &Session) -> bool {
        let seed = Self::seeded(session);
        if seed.key == self.key {
            return false;
        }
        *self = seed;
        true
    }

    /// Draft built from the current buffers
    #[must_use]
    pub fn draft(&self) -> NoteDraft {
        NoteDraft::new(self.title.clone(), self.content.clone())
    }
}

/// Inline error message, if any
#[must_use]
pub fn error_message(session: &Session) -> Option<String> {
    session.error().map(|error| error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OperationError;
    use crate::models::Note;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn session_with(notes: Vec<Note>) -> Session {
        let mut session = Session::new();
        let generation = session.begin_refresh();
        session.finish_refresh(generation, Ok(notes));
        session
    }

    fn note(id: u64, title: &str, content: &str) -> Note {
        Note {
            id: NoteId::from(id),
            title: title.to_string(),
            content: content.to_string(),
            updated_at: None,
        }
    }

    #[test]
    fn sidebar_marks_selection_and_untitled() {
        let mut session = session_with(vec![note(1, "A", "a"), note(2, "", "b")]);
        session.select(NoteId::from(2));
        let items = sidebar_items(&session);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title.as_deref(), Some("A"));
        assert!(!items[0].selected);
        assert_eq!(items[1].title, None);
        assert!(items[1].selected);
    }

    #[test]
    fn sidebar_labels_timestamps() {
        let mut dated = note(1, "A", "a");
        dated.updated_at = Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
        let items = sidebar_items(&session_with(vec![dated, note(2, "B", "b")]));
        assert!(items[0].tooltip.starts_with("Last updated: "));
        assert_eq!(items[0].date_label.len(), "2024-05-01".len());
        assert_eq!(items[1].date_label, "");
        assert_eq!(items[1].tooltip, "");
    }

    #[test]
    fn prompt_when_nothing_selected() {
        let session = session_with(vec![note(1, "A", "a")]);
        assert_eq!(main_view(&session), MainView::Prompt);
    }

    #[test]
    fn draft_renders_blank_form() {
        let mut session = Session::new();
        session.create();
        assert_eq!(
            main_view(&session),
            MainView::Editing {
                key: EditorKey::Draft(1),
                title: String::new(),
                content: String::new(),
            }
        );
    }

    #[test]
    fn viewing_and_editing_existing_note() {
        let mut session = session_with(vec![note(1, "A", ""), note(2, "B", "body")]);
        session.select(NoteId::from(1));
        assert_eq!(
            main_view(&session),
            MainView::Viewing {
                title: "A".to_string(),
                content: None,
            }
        );

        session.select(NoteId::from(2));
        session.edit();
        assert_eq!(
            main_view(&session),
            MainView::Editing {
                key: EditorKey::Note(NoteId::from(2)),
                title: "B".to_string(),
                content: "body".to_string(),
            }
        );
    }

    #[test]
    fn vanished_selection_falls_back_to_prompt() {
        let mut session = session_with(vec![note(1, "A", "a")]);
        session.select(NoteId::from(1));
        let generation = session.begin_refresh();
        session.finish_refresh(generation, Ok(vec![]));
        assert_eq!(main_view(&session), MainView::Prompt);
        assert!(sidebar_items(&session).is_empty());
    }

    fn typed(buffer: &mut EditorBuffer, title: &str, content: &str) {
        buffer.title = title.to_string();
        buffer.content = content.to_string();
    }

    #[test]
    fn editor_reseeds_when_switching_from_draft_to_note() {
        let mut session = session_with(vec![note(1, "A", "a")]);
        session.create();
        let mut buffer = EditorBuffer::seeded(&session);
        typed(&mut buffer, "half", "written");

        session.select(NoteId::from(1));
        session.edit();
        assert!(buffer.sync(&session));
        assert_eq!(buffer.key, Some(EditorKey::Note(NoteId::from(1))));
        assert_eq!(buffer.draft(), NoteDraft::new("A", "a"));
    }

    #[test]
    fn editor_keeps_typed_text_for_same_record() {
        let mut session = session_with(vec![note(1, "A", "a")]);
        session.select(NoteId::from(1));
        session.edit();
        let mut buffer = EditorBuffer::seeded(&session);
        typed(&mut buffer, "A2", "edited");

        let mutation = session.begin_save(buffer.draft()).unwrap();
        session.finish_mutation(&mutation, Err(OperationError::UpdateFailed));
        let generation = session.begin_refresh();
        session.finish_refresh(generation, Ok(vec![note(1, "A", "a")]));

        assert!(!buffer.sync(&session));
        assert_eq!(buffer.draft(), NoteDraft::new("A2", "edited"));
    }

    #[test]
    fn cancelled_draft_text_does_not_reach_next_draft() {
        let mut session = Session::new();
        session.create();
        let mut buffer = EditorBuffer::seeded(&session);
        typed(&mut buffer, "abandoned", "text");

        session.cancel();
        assert!(buffer.sync(&session));
        assert_eq!(buffer, EditorBuffer::default());

        session.create();
        assert!(buffer.sync(&session));
        assert_eq!(buffer.key, Some(EditorKey::Draft(2)));
        assert_eq!(buffer.draft(), NoteDraft::new("", ""));
    }

    #[test]
    fn new_draft_reseeds_even_without_seeing_cancel() {
        let mut session = Session::new();
        session.create();
        let mut buffer = EditorBuffer::seeded(&session);
        typed(&mut buffer, "abandoned", "text");

        session.cancel();
        session.create();
        assert!(buffer.sync(&session));
        assert_eq!(buffer.draft(), NoteDraft::new("", ""));
    }

    #[test]
    fn error_message_uses_operation_text() {
        let mut session = Session::new();
        session.create();
        let mutation = session.begin_save(NoteDraft::new("t", "c")).unwrap();
        session.finish_mutation(&mutation, Err(OperationError::CreateFailed));
        assert_eq!(
            error_message(&session).as_deref(),
            Some("Could not create note")
        );
    }
}
