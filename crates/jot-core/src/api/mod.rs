//! Remote note resource.
//!
//! [`NoteResource`] is the seam between the session and the notes service.
//! The production implementation is [`HttpNoteResource`]; tests substitute an
//! in-memory recorder.

mod http;

pub use http::HttpNoteResource;

use crate::error::{OperationError, Result};
use crate::models::{Note, NoteDraft, NoteId};

/// List/create/update/delete over server-owned notes
#[allow(async_fn_in_trait)]
pub trait NoteResource {
    /// Fetch the whole collection in server order
    async fn list(&self) -> Result<Vec<Note>>;

    /// Create a note; the response body is not used
    async fn create(&self, draft: &NoteDraft) -> Result<()>;

    /// Replace title and content of an existing note
    async fn update(&self, id: &NoteId, draft: &NoteDraft) -> Result<()>;

    /// Delete a note
    async fn delete(&self, id: &NoteId) -> Result<()>;
}

/// A state-changing request prepared by the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Create(NoteDraft),
    Update { id: NoteId, draft: NoteDraft },
    Delete(NoteId),
}

impl Mutation {
    /// Note this mutation targets, if it already exists on the server
    #[must_use]
    pub const fn target(&self) -> Option<&NoteId> {
        match self {
            Self::Create(_) => None,
            Self::Update { id, .. } | Self::Delete(id) => Some(id),
        }
    }

    /// User-visible error reported when this mutation fails
    #[must_use]
    pub const fn failure(&self) -> OperationError {
        match self {
            Self::Create(_) => OperationError::CreateFailed,
            Self::Update { .. } => OperationError::UpdateFailed,
            Self::Delete(_) => OperationError::DeleteFailed,
        }
    }

    /// Issue this mutation against `resource`.
    ///
    /// The detailed error is logged here and collapsed into the operation's
    /// generic failure.
    pub async fn apply<R: NoteResource>(
        &self,
        resource: &R,
    ) -> std::result::Result<(), OperationError> {
        let outcome = match self {
            Self::Create(draft) => resource.create(draft).await,
            Self::Update { id, draft } => resource.update(id, draft).await,
            Self::Delete(id) => resource.delete(id).await,
        };
        outcome.map_err(|error| {
            tracing::warn!(note = ?self.target(), "{}: {}", self.failure(), error);
            self.failure()
        })
    }
}

/// Fetch the note list, collapsing any failure into `FetchListFailed`
pub async fn fetch_notes<R: NoteResource>(
    resource: &R,
) -> std::result::Result<Vec<Note>, OperationError> {
    resource.list().await.map_err(|error| {
        tracing::warn!("Failed to fetch notes: {}", error);
        OperationError::FetchListFailed
    })
}
