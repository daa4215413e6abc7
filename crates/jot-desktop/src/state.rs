//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use jot_core::{HttpNoteResource, Session};

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Notes, selection and edit/loading/error flags
    pub session: Signal<Session>,
    /// Client for the notes service
    pub resource: Signal<HttpNoteResource>,
}
