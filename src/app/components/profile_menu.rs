use dioxus::prelude::*;

use crate::domain::models::{ProfileAction, UserProfile};
use crate::shared::hooks::Toggle;

#[component]
pub fn Avatar(profile: UserProfile, large: Option<bool>) -> Element {
    let size_class = if large.unwrap_or(false) {
        "c-avatar c-avatar--large"
    } else {
        "c-avatar"
    };

    rsx! {
        if let Some(src) = profile.avatar_url.clone() {
            img { class: "{size_class}", src: "{src}", alt: "{profile.name}" }
        } else {
            span { class: "{size_class}", "{profile.initials()}" }
        }
    }
}

/// Avatar trigger plus its dropdown. Any action or an outside click closes it.
#[component]
pub fn ProfileMenu(profile: UserProfile, toggle: Toggle) -> Element {
    let mut toggle = toggle;

    rsx! {
        div { class: "c-profile",
            div {
                class: "c-profile__trigger",
                role: "button",
                tabindex: "0",
                onclick: move |_| toggle.toggle(),
                Avatar { profile: profile.clone() }
                span { class: "c-profile__caption", "Profile ▾" }
            }

            if toggle.is_open() {
                div {
                    class: "c-profile__backdrop",
                    onclick: move |_| toggle.close(),
                }
                div { class: "c-profile__menu",
                    div { class: "c-profile__header",
                        Avatar { profile: profile.clone(), large: true }
                        div {
                            p { class: "c-profile__name", "{profile.name}" }
                            p { class: "c-profile__title", "{profile.title}" }
                        }
                    }
                    hr { class: "c-profile__divider" }
                    for action in ProfileAction::all() {
                        if action.is_destructive() {
                            hr { class: "c-profile__divider" }
                        }
                        button {
                            class: if action.is_destructive() { "c-profile__action c-profile__action--danger" } else { "c-profile__action" },
                            onclick: move |_| {
                                tracing::debug!(action = action.label(), "Profile action selected");
                                toggle.close();
                            },
                            "{action.label()}"
                        }
                    }
                }
            }
        }
    }
}
