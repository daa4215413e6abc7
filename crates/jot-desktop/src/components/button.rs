//! Minimal styled button

use dioxus::prelude::*;

use crate::theme::PALETTE;

/// Color scheme of a [`Button`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Accent,
}

impl ButtonVariant {
    /// Background and text color
    const fn colors(self) -> (&'static str, &'static str) {
        match self {
            Self::Primary => (PALETTE.primary, "#ffffff"),
            Self::Secondary => (PALETTE.secondary, "#ffffff"),
            Self::Accent => (PALETTE.accent, PALETTE.text_on_accent),
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    /// `button` or `submit`
    #[props(default = "button".to_string())]
    button_type: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let (background, color) = variant.colors();
    let (cursor, opacity) = if disabled {
        ("not-allowed", "0.6")
    } else {
        ("pointer", "1")
    };

    rsx! {
        button {
            r#type: "{button_type}",
            disabled: disabled,
            style: "
                background: {background};
                color: {color};
                border: none;
                border-radius: 6px;
                padding: 7px 15px;
                font-weight: 500;
                margin: 2px;
                cursor: {cursor};
                opacity: {opacity};
            ",
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
