//! Main application component

use dioxus::prelude::*;

use jot_core::{HttpNoteResource, Session};

use crate::actions::refresh_notes;
use crate::components::{Header, NoteMain, Sidebar};
use crate::state::AppState;
use crate::theme::PALETTE;

/// Root application component
#[component]
pub fn App() -> Element {
    let resource = use_context::<HttpNoteResource>();
    let session = use_signal(Session::new);
    let resource = use_signal(move || resource);

    let state = use_context_provider(|| AppState { session, resource });

    // Only a change of generation should refetch, not every session write.
    let reload_generation = use_memo(move || session.read().reload_generation());

    use_effect(move || {
        let generation = reload_generation();
        tracing::debug!("Refreshing notes for generation {}", generation);
        refresh_notes(state);
    });

    let loading = session.read().loading();
    let colors = PALETTE;

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                display: flex;
                flex-direction: column;
                font-family: system-ui, -apple-system, sans-serif;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",

            Header {}

            div {
                class: "main-layout",
                style: "flex: 1; display: flex; overflow: hidden;",

                Sidebar {}

                section {
                    class: "main-section",
                    style: "flex: 1; padding: 24px; overflow-y: auto;",

                    if loading {
                        div {
                            class: "loading",
                            style: "color: {colors.text_muted}; margin-bottom: 12px;",
                            "Loading..."
                        }
                    }

                    NoteMain {}
                }
            }
        }
    }
}
