//! Network-backed session actions used by UI components.
//!
//! Each action runs the session's `begin_*` step synchronously, performs the
//! request on a spawned task, and applies the outcome with `finish_*`.

use dioxus::desktop::tao::window::Window;
use dioxus::desktop::window;
use dioxus::prelude::*;
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};

use jot_core::api::fetch_notes;
use jot_core::{Mutation, NoteDraft};

use crate::state::AppState;

/// Fetch the note list for the session's current reload generation.
pub fn refresh_notes(state: AppState) {
    let mut session = state.session;
    let resource = state.resource.peek().clone();
    let generation = session.write().begin_refresh();

    spawn(async move {
        let outcome = fetch_notes(&resource).await;
        session.write().finish_refresh(generation, outcome);
    });
}

/// Save the editor form as a new note or an update of the selected one.
pub fn save_note(state: AppState, draft: NoteDraft) {
    let mut session = state.session;
    let Some(mutation) = session.write().begin_save(draft) else {
        return;
    };
    spawn(apply_mutation(state, mutation));
}

/// Ask for confirmation, then delete the note selected when Delete was clicked.
pub fn delete_note(state: AppState) {
    let Some(target) = state.session.read().delete_target() else {
        return;
    };
    let mut session = state.session;

    spawn(async move {
        let confirmed = confirm_delete().await;
        let mutation = session.write().begin_delete(&target, confirmed);
        if let Some(mutation) = mutation {
            apply_mutation(state, mutation).await;
        }
    });
}

async fn apply_mutation(state: AppState, mutation: Mutation) {
    let mut session = state.session;
    let resource = state.resource.peek().clone();
    match mutation.target() {
        Some(id) => tracing::info!("Sending request for note {}", id),
        None => tracing::info!("Sending create request"),
    }

    let outcome = mutation.apply(&resource).await;
    // A successful mutation bumps the reload generation, which the app root
    // observes to refetch the list.
    session.write().finish_mutation(&mutation, outcome);
}

/// Yes/No prompt, modal to the main window so the selection cannot change
/// underneath it.
async fn confirm_delete() -> bool {
    let desktop = window();
    let parent: &Window = &desktop;
    let answer = AsyncMessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Delete note")
        .set_description("Delete this note?")
        .set_buttons(MessageButtons::YesNo)
        .set_parent(parent)
        .show()
        .await;
    matches!(answer, MessageDialogResult::Yes)
}
