//! Main area: prompt, note viewer, or note editor form

use dioxus::prelude::*;

use jot_core::models::{clamp_chars, CONTENT_MAX_CHARS, TITLE_MAX_CHARS};
use jot_core::view::{
    error_message, main_view, EditorBuffer, MainView, EMPTY_NOTE_MESSAGE, EMPTY_SELECTION_PROMPT,
};

use super::{Button, ButtonVariant};
use crate::actions::{delete_note, save_note};
use crate::state::AppState;
use crate::theme::PALETTE;

/// Renders whichever of the three main-area states the session is in
#[component]
pub fn NoteMain() -> Element {
    let state = use_context::<AppState>();
    let colors = PALETTE;
    let (view, error, busy) = {
        let session = state.session.read();
        (main_view(&session), error_message(&session), session.busy())
    };

    let body = match view {
        MainView::Prompt => rsx! {
            div {
                class: "empty-state",
                style: "color: {colors.text_muted};",
                {EMPTY_SELECTION_PROMPT}
            }
            ErrorLine { error: error }
        },
        MainView::Editing { .. } => rsx! {
            NoteForm { error: error, busy: busy }
        },
        MainView::Viewing { title, content } => rsx! {
            NoteView {
                title: title,
                content: content,
                error: error,
                busy: busy,
            }
        },
    };

    rsx! {
        main {
            class: "main-area",
            style: "max-width: 760px;",
            {body}
        }
    }
}

/// Editor form with title/content buffers local to the component.
///
/// The buffers are reseeded from the session whenever the edited record
/// changes, and only reach the session on submit.
#[component]
fn NoteForm(error: Option<String>, busy: bool) -> Element {
    let state = use_context::<AppState>();
    let mut session = state.session;

    let mut buffer = use_signal(move || EditorBuffer::seeded(&session.peek()));

    // Reset buffers when a different note (or a fresh draft) is opened
    use_effect(move || {
        let session = session.read();
        let mut next = buffer.peek().clone();
        if next.sync(&session) {
            buffer.set(next);
        }
    });

    let (title, content, complete) = {
        let buffer = buffer.read();
        (
            buffer.title.clone(),
            buffer.content.clone(),
            buffer.draft().is_complete(),
        )
    };
    let colors = PALETTE;

    rsx! {
        form {
            class: "note-form",
            style: "display: flex; flex-direction: column; gap: 10px;",
            onsubmit: move |evt: Event<FormData>| {
                evt.prevent_default();
                let draft = buffer.peek().draft();
                if draft.is_complete() {
                    save_note(state, draft);
                }
            },

            input {
                class: "note-title-input",
                value: "{title}",
                placeholder: "Title",
                maxlength: "{TITLE_MAX_CHARS}",
                required: true,
                autofocus: true,
                style: "font-size: 18px; padding: 8px; border: 1px solid {colors.border}; border-radius: 6px;",
                oninput: move |evt: Event<FormData>| {
                    buffer.write().title = clamp_chars(&evt.value(), TITLE_MAX_CHARS);
                },
            }

            textarea {
                class: "note-content-input",
                value: "{content}",
                placeholder: "Content",
                rows: "10",
                maxlength: "{CONTENT_MAX_CHARS}",
                required: true,
                style: "padding: 8px; border: 1px solid {colors.border}; border-radius: 6px; resize: vertical;",
                oninput: move |evt: Event<FormData>| {
                    buffer.write().content = clamp_chars(&evt.value(), CONTENT_MAX_CHARS);
                },
            }

            ErrorLine { error: error }

            div {
                style: "margin-top: 1em;",
                Button {
                    button_type: "submit",
                    disabled: busy || !complete,
                    "Save"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| session.write().cancel(),
                    "Cancel"
                }
            }
        }
    }
}

/// Read-only note display with edit and delete actions
#[component]
fn NoteView(title: String, content: Option<String>, error: Option<String>, busy: bool) -> Element {
    let state = use_context::<AppState>();
    let mut session = state.session;
    let colors = PALETTE;

    let body = match content {
        Some(content) => rsx! {
            pre {
                class: "note-preview",
                style: "white-space: pre-wrap; font-family: inherit;",
                "{content}"
            }
        },
        None => rsx! { em { {EMPTY_NOTE_MESSAGE} } },
    };

    rsx! {
        div {
            class: "note-view",
            tabindex: "0",
            h2 {
                style: "color: {colors.primary}; margin: 0;",
                "{title}"
            }
            {body}

            ErrorLine { error: error }

            div {
                class: "note-actions",
                Button {
                    disabled: busy,
                    onclick: move |_| session.write().edit(),
                    "Edit"
                }
                Button {
                    variant: ButtonVariant::Accent,
                    disabled: busy,
                    onclick: move |_| delete_note(state),
                    "Delete"
                }
            }
        }
    }
}

/// Inline error text, rendered only when there is an error
#[component]
fn ErrorLine(error: Option<String>) -> Element {
    let Some(error) = error else {
        return rsx! {};
    };
    let colors = PALETTE;

    rsx! {
        div {
            class: "error",
            style: "color: {colors.error}; margin-top: 8px;",
            "{error}"
        }
    }
}
