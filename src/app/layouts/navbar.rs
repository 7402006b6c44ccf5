use dioxus::prelude::*;

use crate::app::components::{Drawer, IconButton, NavActionButton, ProfileMenu, SearchBox};
use crate::config::ShellConfig;
use crate::domain::models::MenuIcon;
use crate::shared::hooks::use_toggle;

#[component]
pub fn Navbar() -> Element {
    let config = use_context::<ShellConfig>();
    let profile_menu = use_toggle();
    let mut mobile_drawer = use_toggle();

    let destinations: Vec<String> = config
        .all_actions()
        .map(|action| action.label.clone())
        .collect();

    rsx! {
        nav { class: "c-navbar",
            // Brand and search
            div { class: "c-navbar__start",
                span { class: "c-navbar__brand", "{config.brand}" }
                SearchBox {}
            }

            // Desktop icon row
            div { class: "c-navbar__actions",
                for action in config.primary_actions.iter() {
                    NavActionButton { key: "{action.label}", action: action.clone() }
                }
                span { class: "c-navbar__divider", "|" }
                for action in config.social_actions.iter() {
                    NavActionButton { key: "{action.label}", action: action.clone() }
                }
                ProfileMenu { profile: config.profile.clone(), toggle: profile_menu }
            }

            IconButton {
                glyph: MenuIcon::Menu.glyph().to_string(),
                title: "Open navigation".to_string(),
                extra_class: "c-navbar__menu-button".to_string(),
                onclick: move |_| mobile_drawer.toggle(),
            }
        }

        Drawer { toggle: mobile_drawer,
            ul { class: "c-drawer__list",
                for label in destinations {
                    li {
                        key: "{label}",
                        class: "c-drawer__item",
                        onclick: move |_| mobile_drawer.close(),
                        "{label}"
                    }
                }
            }
        }
    }
}
