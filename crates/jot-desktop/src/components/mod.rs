//! UI Components
//!
//! Reusable UI components for the desktop application.

mod button;
mod header;
mod note_main;
mod sidebar;

pub use button::{Button, ButtonVariant};
pub use header::Header;
pub use note_main::NoteMain;
pub use sidebar::Sidebar;
