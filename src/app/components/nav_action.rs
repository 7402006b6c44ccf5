use dioxus::prelude::*;

use crate::domain::models::NavAction;

/// Icon with its caption underneath, as shown in the navbar row
#[component]
pub fn NavActionButton(action: NavAction) -> Element {
    rsx! {
        div { class: "c-nav-action",
            button { class: "c-icon-button c-icon-button--ghost", title: "{action.label}",
                "{action.icon.glyph()}"
            }
            span { class: "c-nav-action__label", "{action.label}" }
        }
    }
}
