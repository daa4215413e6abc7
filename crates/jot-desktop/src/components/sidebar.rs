//! Sidebar component with the note list

use dioxus::prelude::*;

use jot_core::view::{sidebar_items, SidebarItem, EMPTY_LIST_MESSAGE};
use jot_core::NoteId;

use super::{Button, ButtonVariant};
use crate::state::AppState;
use crate::theme::PALETTE;

/// Sidebar listing notes in server order, with a create button
#[component]
pub fn Sidebar() -> Element {
    let state = use_context::<AppState>();
    let mut session = state.session;
    let items = sidebar_items(&session.read());
    let is_empty = items.is_empty();
    let colors = PALETTE;

    rsx! {
        aside {
            class: "sidebar",
            style: "
                width: 260px;
                background: {colors.bg_secondary};
                border-right: 1px solid {colors.border};
                overflow-y: auto;
            ",

            div {
                class: "sidebar-header",
                style: "
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 12px 16px;
                    font-weight: 600;
                ",
                span { "Notes" }
                Button {
                    variant: ButtonVariant::Accent,
                    onclick: move |_| session.write().create(),
                    "+"
                }
            }

            ul {
                class: "notes-list",
                style: "list-style: none; margin: 0; padding: 0;",

                for item in items {
                    NoteListItem {
                        key: "{item.id}",
                        item: item.clone(),
                        onselect: move |id: NoteId| session.write().select(id),
                    }
                }

                if is_empty {
                    div {
                        class: "empty-state",
                        style: "padding: 20px; text-align: center; color: {colors.text_muted};",
                        {EMPTY_LIST_MESSAGE}
                    }
                }
            }
        }
    }
}

/// One clickable note row
#[component]
fn NoteListItem(item: SidebarItem, onselect: EventHandler<NoteId>) -> Element {
    let colors = PALETTE;
    let id = item.id.clone();

    let (class, background, border_left) = if item.selected {
        (
            "note-list-item selected",
            colors.bg_selected,
            colors.primary,
        )
    } else {
        ("note-list-item", "transparent", "transparent")
    };

    let title = match &item.title {
        Some(title) => rsx! { "{title}" },
        None => rsx! { em { "Untitled" } },
    };

    rsx! {
        li {
            class: class,
            style: "
                padding: 10px 16px;
                cursor: pointer;
                border-bottom: 1px solid {colors.border};
                border-left: 3px solid {border_left};
                background: {background};
            ",
            onclick: move |_| onselect.call(id.clone()),

            strong { {title} }
            div {
                class: "note-list-meta",
                title: "{item.tooltip}",
                style: "font-size: 12px; color: {colors.text_muted};",
                "{item.date_label}"
            }
        }
    }
}
