//! Client-side session state machine.
//!
//! A [`Session`] owns everything the UI shows: the cached note list, the
//! selection, the edit flag, and the loading/error indicators. Network-backed
//! operations are split in two: a `begin_*` call validates the current state
//! and hands back the request to issue, and a `finish_*` call applies the
//! outcome. Nothing is borrowed across the network round-trip.
//!
//! Writes never patch `notes` directly. A successful mutation bumps the reload
//! generation and the caller refetches the list for that generation.

use crate::api::Mutation;
use crate::error::OperationError;
use crate::models::{Note, NoteDraft, NoteId};

/// Which note the main area is showing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    /// Unsaved note being composed
    Draft,
    Note(NoteId),
}

impl Selection {
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[must_use]
    pub const fn note_id(&self) -> Option<&NoteId> {
        match self {
            Self::Note(id) => Some(id),
            Self::None | Self::Draft => None,
        }
    }
}

/// All mutable client state for one page load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    notes: Vec<Note>,
    selection: Selection,
    edit_mode: bool,
    loading: bool,
    error: Option<OperationError>,
    reload_generation: u64,
    drafts_started: u64,
    in_flight: Option<Mutation>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached notes in server order
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected note, if the selection names a note present in the cache
    #[must_use]
    pub fn current_note(&self) -> Option<&Note> {
        let id = self.selection.note_id()?;
        self.notes.iter().find(|note| &note.id == id)
    }

    /// Whether the main area shows the editor form
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.edit_mode || self.selection == Selection::Draft
    }

    /// True only while a list fetch is outstanding
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// True while a create, update or delete is in flight
    #[must_use]
    pub const fn busy(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub const fn error(&self) -> Option<OperationError> {
        self.error
    }

    /// Counter bumped by every successful mutation; each value wants one refetch
    #[must_use]
    pub const fn reload_generation(&self) -> u64 {
        self.reload_generation
    }

    /// Number of drafts started so far; tells one draft from the next
    #[must_use]
    pub const fn drafts_started(&self) -> u64 {
        self.drafts_started
    }

    /// Start composing a new note.
    pub fn create(&mut self) {
        self.drafts_started += 1;
        tracing::debug!("Starting draft {}", self.drafts_started);
        self.selection = Selection::Draft;
        self.edit_mode = true;
        self.error = None;
    }

    /// Show a note read-only.
    pub fn select(&mut self, id: NoteId) {
        tracing::debug!("Selecting note {}", id);
        self.selection = Selection::Note(id);
        self.edit_mode = false;
        self.error = None;
    }

    /// Switch the selected note to the editor; no-op without a selected note.
    pub fn edit(&mut self) {
        if self.current_note().is_none() {
            tracing::debug!("Ignoring edit: no note selected");
            return;
        }
        self.edit_mode = true;
    }

    /// Leave the editor, discarding a draft.
    pub fn cancel(&mut self) {
        self.edit_mode = false;
        self.error = None;
        if self.selection == Selection::Draft {
            self.selection = Selection::None;
        }
    }

    /// Note a delete intent would remove; capture it before prompting.
    #[must_use]
    pub fn delete_target(&self) -> Option<NoteId> {
        if self.busy() {
            return None;
        }
        self.current_note().map(|note| note.id.clone())
    }

    /// Prepare a save of the editor contents.
    ///
    /// Returns a create for a draft, an update for an existing note, and
    /// `None` when nothing is selected or another mutation is in flight.
    pub fn begin_save(&mut self, draft: NoteDraft) -> Option<Mutation> {
        if self.busy() {
            tracing::debug!("Ignoring save: another request is in flight");
            return None;
        }
        let mutation = match &self.selection {
            Selection::Draft => Mutation::Create(draft),
            Selection::Note(_) => {
                let id = self.current_note()?.id.clone();
                Mutation::Update { id, draft }
            }
            Selection::None => return None,
        };
        self.error = None;
        self.in_flight = Some(mutation.clone());
        Some(mutation)
    }

    /// Prepare deletion of `target`, the note the confirmation prompt named.
    ///
    /// `confirmed` is the answer of that prompt; an unconfirmed intent changes
    /// nothing. If the selection moved away from `target` while the prompt was
    /// open the intent is dropped.
    pub fn begin_delete(&mut self, target: &NoteId, confirmed: bool) -> Option<Mutation> {
        if !confirmed {
            tracing::debug!("Delete not confirmed");
            return None;
        }
        let id = self.delete_target()?;
        if &id != target {
            tracing::debug!("Ignoring delete of {}: selection moved to {}", target, id);
            return None;
        }
        self.error = None;
        let mutation = Mutation::Delete(id);
        self.in_flight = Some(mutation.clone());
        Some(mutation)
    }

    /// Apply the outcome of a mutation returned by `begin_save`/`begin_delete`.
    pub fn finish_mutation(
        &mut self,
        mutation: &Mutation,
        outcome: Result<(), OperationError>,
    ) {
        self.in_flight = None;
        // The user may have moved on while the request was in flight.
        let still_current = match mutation {
            Mutation::Create(_) => self.selection == Selection::Draft,
            Mutation::Update { id, .. } | Mutation::Delete(id) => {
                self.selection.note_id() == Some(id)
            }
        };

        if let Err(error) = outcome {
            if still_current {
                self.error = Some(error);
            } else {
                tracing::warn!(note = ?mutation.target(), "Dropping late failure: {}", error);
            }
            return;
        }

        self.reload_generation += 1;
        tracing::debug!(
            "Mutation succeeded, reload generation {}",
            self.reload_generation
        );
        if !still_current {
            return;
        }
        self.edit_mode = false;
        if !matches!(mutation, Mutation::Update { .. }) {
            self.selection = Selection::None;
        }
    }

    /// Mark a list fetch as started; returns the generation it fetches for.
    pub fn begin_refresh(&mut self) -> u64 {
        self.loading = true;
        self.reload_generation
    }

    /// Apply a list fetch result.
    ///
    /// Results for a generation older than the latest one are dropped and
    /// `false` is returned.
    pub fn finish_refresh(
        &mut self,
        generation: u64,
        outcome: Result<Vec<Note>, OperationError>,
    ) -> bool {
        if generation < self.reload_generation {
            tracing::debug!(
                "Dropping stale note list for generation {} (latest {})",
                generation,
                self.reload_generation
            );
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(notes) => {
                tracing::debug!("Loaded {} notes", notes.len());
                self.notes = notes;
                if let Selection::Note(id) = &self.selection {
                    if !self.notes.iter().any(|note| &note.id == id) {
                        tracing::debug!("Selected note {} is gone, clearing selection", id);
                        self.selection = Selection::None;
                        self.edit_mode = false;
                    }
                }
            }
            Err(error) => self.error = Some(error),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn note(id: u64, title: &str) -> Note {
        Note {
            id: NoteId::from(id),
            title: title.to_string(),
            content: format!("{title} body"),
            updated_at: None,
        }
    }

    fn loaded(notes: Vec<Note>) -> Session {
        let mut session = Session::new();
        let generation = session.begin_refresh();
        assert!(session.finish_refresh(generation, Ok(notes)));
        session
    }

    #[test]
    fn create_enters_draft_editing() {
        let mut session = Session::new();
        session.create();
        assert_eq!(session.selection(), &Selection::Draft);
        assert!(session.is_editing());
        assert!(session.current_note().is_none());
        assert_eq!(session.drafts_started(), 1);
    }

    #[test]
    fn select_clears_edit_mode_and_error() {
        let mut session = loaded(vec![note(1, "A"), note(2, "B")]);
        session.select(NoteId::from(1));
        session.edit();
        let mutation = session.begin_save(NoteDraft::new("A", "x")).unwrap();
        session.finish_mutation(&mutation, Err(OperationError::UpdateFailed));
        assert!(session.is_editing());

        session.select(NoteId::from(2));
        assert!(!session.is_editing());
        assert_eq!(session.error(), None);
        assert_eq!(session.current_note().map(|n| n.title.as_str()), Some("B"));
    }

    #[test]
    fn edit_without_selection_is_noop() {
        let mut session = loaded(vec![note(1, "A")]);
        session.edit();
        assert!(!session.is_editing());
    }

    #[test]
    fn cancel_discards_draft() {
        let mut session = Session::new();
        session.create();
        session.cancel();
        assert_eq!(session.selection(), &Selection::None);
        assert!(!session.is_editing());
    }

    #[test]
    fn cancel_keeps_existing_selection() {
        let mut session = loaded(vec![note(1, "A")]);
        session.select(NoteId::from(1));
        session.edit();
        session.cancel();
        assert_eq!(session.selection(), &Selection::Note(NoteId::from(1)));
        assert!(!session.is_editing());
    }

    #[test]
    fn save_draft_creates_then_clears_selection() {
        let mut session = Session::new();
        session.create();
        let mutation = session.begin_save(NoteDraft::new("t", "c")).unwrap();
        assert_eq!(mutation, Mutation::Create(NoteDraft::new("t", "c")));
        assert!(session.busy());
        assert!(!session.loading());

        session.finish_mutation(&mutation, Ok(()));
        assert_eq!(session.selection(), &Selection::None);
        assert!(!session.is_editing());
        assert_eq!(session.reload_generation(), 1);
        assert!(!session.busy());
    }

    #[test]
    fn save_existing_updates_and_keeps_selection() {
        let mut session = loaded(vec![note(1, "A")]);
        session.select(NoteId::from(1));
        session.edit();
        let mutation = session.begin_save(NoteDraft::new("B", "x")).unwrap();
        assert_eq!(
            mutation,
            Mutation::Update {
                id: NoteId::from(1),
                draft: NoteDraft::new("B", "x"),
            }
        );
        session.finish_mutation(&mutation, Ok(()));
        assert_eq!(session.selection(), &Selection::Note(NoteId::from(1)));
        assert!(!session.is_editing());
        assert_eq!(session.reload_generation(), 1);
    }

    #[test]
    fn failed_save_stays_in_editor_with_error() {
        let mut session = Session::new();
        session.create();
        let mutation = session.begin_save(NoteDraft::new("t", "c")).unwrap();
        session.finish_mutation(&mutation, Err(OperationError::CreateFailed));
        assert_eq!(session.selection(), &Selection::Draft);
        assert!(session.is_editing());
        assert_eq!(session.error(), Some(OperationError::CreateFailed));
        assert_eq!(session.reload_generation(), 0);
    }

    #[test]
    fn save_without_selection_is_noop() {
        let mut session = loaded(vec![note(1, "A")]);
        assert_eq!(session.begin_save(NoteDraft::new("t", "c")), None);
        assert!(!session.busy());
    }

    #[test]
    fn second_save_while_in_flight_is_ignored() {
        let mut session = Session::new();
        session.create();
        let first = session.begin_save(NoteDraft::new("t", "c"));
        assert!(first.is_some());
        assert_eq!(session.begin_save(NoteDraft::new("t", "c")), None);
        assert_eq!(session.begin_delete(&NoteId::from(1), true), None);
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut session = loaded(vec![note(1, "A")]);
        session.select(NoteId::from(1));
        assert_eq!(session.begin_delete(&NoteId::from(1), false), None);
        assert!(!session.busy());
        assert_eq!(
            session.begin_delete(&NoteId::from(1), true),
            Some(Mutation::Delete(NoteId::from(1)))
        );
        // Edit and Delete are disabled on this flag
        assert!(session.busy());
    }

    #[test]
    fn delete_success_clears_selection() {
        let mut session = loaded(vec![note(1, "A")]);
        session.select(NoteId::from(1));
        let mutation = session.begin_delete(&NoteId::from(1), true).unwrap();
        session.finish_mutation(&mutation, Ok(()));
        assert_eq!(session.selection(), &Selection::None);
        assert_eq!(session.reload_generation(), 1);
    }

    #[test]
    fn delete_failure_keeps_state() {
        let mut session = loaded(vec![note(1, "A")]);
        session.select(NoteId::from(1));
        let mutation = session.begin_delete(&NoteId::from(1), true).unwrap();
        session.finish_mutation(&mutation, Err(OperationError::DeleteFailed));
        assert_eq!(session.selection(), &Selection::Note(NoteId::from(1)));
        assert_eq!(session.error(), Some(OperationError::DeleteFailed));
    }

    #[test]
    fn late_completion_does_not_reset_newer_selection() {
        let mut session = loaded(vec![note(1, "A"), note(2, "B")]);
        session.create();
        let mutation = session.begin_save(NoteDraft::new("t", "c")).unwrap();
        session.select(NoteId::from(2));
        session.finish_mutation(&mutation, Ok(()));
        assert_eq!(session.selection(), &Selection::Note(NoteId::from(2)));
        assert_eq!(session.reload_generation(), 1);
    }

    #[test]
    fn delete_is_dropped_when_selection_moves_during_prompt() {
        let mut session = loaded(vec![note(1, "A"), note(2, "B")]);
        session.select(NoteId::from(1));
        let target = session.delete_target().unwrap();
        assert_eq!(target, NoteId::from(1));

        session.select(NoteId::from(2));
        assert_eq!(session.begin_delete(&target, true), None);
        assert!(!session.busy());
        assert_eq!(session.selection(), &Selection::Note(NoteId::from(2)));
    }

    #[test]
    fn no_delete_target_while_busy_or_unselected() {
        let mut session = loaded(vec![note(1, "A")]);
        assert_eq!(session.delete_target(), None);
        session.select(NoteId::from(1));
        session.edit();
        session.begin_save(NoteDraft::new("t", "c")).unwrap();
        assert_eq!(session.delete_target(), None);
    }

    #[test]
    fn late_failure_is_not_shown_on_newer_selection() {
        let mut session = loaded(vec![note(1, "A"), note(2, "B")]);
        session.select(NoteId::from(1));
        session.edit();
        let mutation = session.begin_save(NoteDraft::new("A", "x")).unwrap();

        session.select(NoteId::from(2));
        session.finish_mutation(&mutation, Err(OperationError::UpdateFailed));
        assert_eq!(session.error(), None);
        assert!(!session.busy());
        assert!(!session.is_editing());
        assert_eq!(session.selection(), &Selection::Note(NoteId::from(2)));
        assert_eq!(session.reload_generation(), 0);
    }

    #[test]
    fn refresh_clears_vanished_selection() {
        let mut session = loaded(vec![note(1, "A"), note(2, "B")]);
        session.select(NoteId::from(1));
        session.edit();
        let generation = session.begin_refresh();
        assert!(session.loading());
        session.finish_refresh(generation, Ok(vec![note(2, "B")]));
        assert_eq!(session.selection(), &Selection::None);
        assert!(!session.is_editing());
        assert!(!session.loading());
    }

    #[test]
    fn refresh_keeps_draft_selection() {
        let mut session = Session::new();
        session.create();
        let generation = session.begin_refresh();
        session.finish_refresh(generation, Ok(vec![note(1, "A")]));
        assert_eq!(session.selection(), &Selection::Draft);
    }

    #[test]
    fn refresh_failure_keeps_cache_and_sets_error() {
        let mut session = loaded(vec![note(1, "A")]);
        let generation = session.begin_refresh();
        session.finish_refresh(generation, Err(OperationError::FetchListFailed));
        assert_eq!(session.notes().len(), 1);
        assert_eq!(session.error(), Some(OperationError::FetchListFailed));
        assert!(!session.loading());
    }

    #[test]
    fn stale_refresh_is_dropped() {
        let mut session = loaded(vec![note(1, "A")]);
        session.select(NoteId::from(1));
        let stale = session.begin_refresh();

        let mutation = session.begin_delete(&NoteId::from(1), true).unwrap();
        session.finish_mutation(&mutation, Ok(()));
        let fresh = session.begin_refresh();

        assert!(!session.finish_refresh(stale, Ok(vec![note(1, "A"), note(9, "Old")])));
        assert!(session.loading());
        assert!(session.finish_refresh(fresh, Ok(vec![])));
        assert!(session.notes().is_empty());
    }
}
