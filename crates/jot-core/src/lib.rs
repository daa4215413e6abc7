//! jot-core - Core library for Jot
//!
//! This crate contains the note models, the REST client for the notes
//! service, and the session state machine shared by Jot front-ends.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod store;
pub mod view;

pub use api::{HttpNoteResource, Mutation, NoteResource};
pub use config::ClientConfig;
pub use error::{Error, OperationError, Result};
pub use models::{Note, NoteDraft, NoteId};
pub use session::{Selection, Session};
pub use store::NoteStore;
