use dioxus::prelude::*;

use crate::app::components::{ButtonVariant, Drawer, IconButton, NavList};
use crate::config::ShellConfig;
use crate::domain::models::MenuIcon;
use crate::shared::hooks::{use_nav_menu, use_toggle, NavMenu};

/// Sidebar shell: owns the menu state and shows the list either as a
/// permanent panel (wide viewports) or inside a drawer (narrow viewports).
#[component]
pub fn Sidebar() -> Element {
    let config = use_context::<ShellConfig>();
    let menu = use_nav_menu(config.menu.clone());
    let mut mobile_drawer = use_toggle();

    rsx! {
        Drawer { toggle: mobile_drawer,
            IconButton {
                glyph: MenuIcon::Menu.glyph().to_string(),
                title: "Close menu".to_string(),
                onclick: move |_| mobile_drawer.close(),
            }
            NavList { menu: menu }
        }

        div { class: "c-sidebar",
            SidebarHeader { menu: menu }
            nav { class: "c-sidebar__nav",
                NavList { menu: menu }
            }
        }

        IconButton {
            glyph: MenuIcon::Menu.glyph().to_string(),
            title: "Open menu".to_string(),
            extra_class: "c-sidebar__menu-button".to_string(),
            onclick: move |_| mobile_drawer.toggle(),
        }
    }
}

/// Title plus the edit-mode controls: a settings button when idle,
/// confirm/cancel while editing. Both leave edit mode and keep the order.
#[component]
fn SidebarHeader(menu: NavMenu) -> Element {
    let mut menu = menu;

    rsx! {
        div { class: "c-sidebar__header",
            h2 { class: "c-sidebar__title", "Menu" }
            if menu.edit_mode() {
                div { class: "c-sidebar__edit-controls",
                    IconButton {
                        glyph: "✔".to_string(),
                        title: "Done".to_string(),
                        variant: ButtonVariant::Confirm,
                        onclick: move |_| menu.toggle_edit_mode(),
                    }
                    IconButton {
                        glyph: "✖".to_string(),
                        title: "Exit edit mode".to_string(),
                        variant: ButtonVariant::Cancel,
                        onclick: move |_| menu.toggle_edit_mode(),
                    }
                }
            } else {
                IconButton {
                    glyph: MenuIcon::Settings.glyph().to_string(),
                    title: "Edit menu".to_string(),
                    onclick: move |_| menu.toggle_edit_mode(),
                }
            }
        }
    }
}
