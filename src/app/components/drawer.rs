use dioxus::prelude::*;

use crate::shared::hooks::Toggle;

/// Slide-out panel anchored to the right edge.
/// Clicking the backdrop closes it; content decides when else to close.
#[component]
pub fn Drawer(toggle: Toggle, children: Element) -> Element {
    let mut toggle = toggle;

    if !toggle.is_open() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "c-drawer__backdrop",
            onclick: move |_| toggle.close(),
        }
        aside { class: "c-drawer",
            {children}
        }
    }
}
