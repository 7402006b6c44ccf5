//! Navbar search input
//!
//! Holds the typed text only; searching is left to the host application.

use dioxus::prelude::*;

use crate::domain::models::MenuIcon;

#[component]
pub fn SearchBox() -> Element {
    let mut query = use_signal(String::new);

    rsx! {
        div { class: "c-search-box",
            span { class: "c-search-box__icon", "{MenuIcon::Search.glyph()}" }
            input {
                r#type: "search",
                class: "c-search-box__input",
                placeholder: "Search...",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }
        }
    }
}
