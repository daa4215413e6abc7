//! App header bar

use dioxus::prelude::*;

use crate::theme::PALETTE;

#[component]
pub fn Header() -> Element {
    let colors = PALETTE;

    rsx! {
        header {
            class: "app-header",
            style: "
                background: {colors.primary};
                color: #ffffff;
                padding: 18px 20px;
                letter-spacing: 0.01em;
                font-weight: 700;
                font-size: 24px;
                box-shadow: 0 2px 4px rgba(80, 99, 140, 0.09);
            ",
            span { "📝 Personal Notes" }
        }
    }
}
