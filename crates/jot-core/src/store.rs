//! Headless driver that runs a [`Session`] against a [`NoteResource`].
//!
//! UI shells that cannot hold `&mut Session` across an await use the
//! two-phase session API directly; this driver is the sequential composition
//! of the same steps.

use crate::api::{fetch_notes, Mutation, NoteResource};
use crate::models::{NoteDraft, NoteId};
use crate::session::Session;

/// A session paired with the resource it synchronizes with
#[derive(Debug)]
pub struct NoteStore<R> {
    session: Session,
    resource: R,
}

impl<R: NoteResource> NoteStore<R> {
    /// Create a store with an empty session; call [`Self::refresh`] to load.
    pub fn new(resource: R) -> Self {
        Self {
            session: Session::new(),
            resource,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn resource(&self) -> &R {
        &self.resource
    }

    /// Fetch the list for the current reload generation.
    pub async fn refresh(&mut self) {
        let generation = self.session.begin_refresh();
        let outcome = fetch_notes(&self.resource).await;
        self.session.finish_refresh(generation, outcome);
    }

    pub fn create(&mut self) {
        self.session.create();
    }

    pub fn select(&mut self, id: NoteId) {
        self.session.select(id);
    }

    pub fn edit(&mut self) {
        self.session.edit();
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    /// Save the editor contents, then refetch once if the save succeeded.
    pub async fn save(&mut self, title: impl Into<String>, content: impl Into<String>) {
        let draft = NoteDraft::new(title, content);
        if let Some(mutation) = self.session.begin_save(draft) {
            self.run(mutation).await;
        }
    }

    /// Delete the selected note if `confirmed`, then refetch once on success.
    pub async fn delete(&mut self, confirmed: bool) {
        let Some(target) = self.session.delete_target() else {
            return;
        };
        if let Some(mutation) = self.session.begin_delete(&target, confirmed) {
            self.run(mutation).await;
        }
    }

    async fn run(&mut self, mutation: Mutation) {
        let generation = self.session.reload_generation();
        let outcome = mutation.apply(&self.resource).await;
        self.session.finish_mutation(&mutation, outcome);
        if self.session.reload_generation() != generation {
            self.refresh().await;
        }
    }
}
