//! Reorderable sidebar list
//!
//! Pointer wiring: mouse down on a drag handle starts the drag, entering
//! another row moves the dragged entry there (live preview), mouse up drops,
//! leaving the list cancels. A focused handle also reorders with ArrowUp /
//! ArrowDown. All of it goes through the `NavMenu` handle.

use dioxus::prelude::*;

use crate::domain::models::MenuEntry;
use crate::shared::hooks::NavMenu;

#[component]
pub fn NavList(menu: NavMenu) -> Element {
    let mut menu = menu;
    let items = menu.items();
    let list_class = if menu.edit_mode() {
        "c-nav-list c-nav-list--editing"
    } else {
        "c-nav-list"
    };

    rsx! {
        ul {
            class: "{list_class}",
            onmouseup: move |_| menu.end_drag(),
            onmouseleave: move |_| menu.cancel_drag(),
            for entry in items {
                DraggableItem {
                    key: "{entry.id}",
                    entry: entry.clone(),
                    menu: menu,
                }
            }
        }
    }
}

#[component]
fn DraggableItem(entry: MenuEntry, menu: NavMenu) -> Element {
    let mut menu = menu;
    let expandable = entry.is_expandable();
    let expanded = expandable && menu.is_expanded(&entry.id);
    let edit_mode = menu.edit_mode();

    let item_class = if menu.is_dragged(&entry.id) {
        "c-nav-list__item c-nav-list__item--dragging"
    } else {
        "c-nav-list__item"
    };

    let hover_id = entry.id.clone();
    let drag_id = entry.id.clone();
    let nudge_id = entry.id.clone();
    let toggle_id = entry.id.clone();

    rsx! {
        li {
            class: "{item_class}",
            onmouseenter: move |_| menu.hover(&hover_id),

            div { class: "c-nav-list__row",
                if edit_mode {
                    span {
                        class: "c-nav-list__handle",
                        role: "button",
                        tabindex: "0",
                        title: "Drag to reorder",
                        aria_label: "Reorder {entry.label}",
                        onmousedown: move |evt| {
                            evt.prevent_default();
                            menu.begin_drag(&drag_id);
                        },
                        onkeydown: move |evt: KeyboardEvent| {
                            match evt.key() {
                                Key::ArrowUp => {
                                    evt.prevent_default();
                                    menu.nudge(&nudge_id, -1);
                                }
                                Key::ArrowDown => {
                                    evt.prevent_default();
                                    menu.nudge(&nudge_id, 1);
                                }
                                _ => {}
                            }
                        },
                        "⠿"
                    }
                }

                button {
                    class: "c-nav-list__button",
                    onclick: move |_| {
                        if expandable {
                            menu.toggle_expand(&toggle_id);
                        }
                    },
                    if let Some(icon) = entry.icon {
                        span { class: "c-nav-list__icon", "{icon.glyph()}" }
                    }
                    span { class: "c-nav-list__label", "{entry.label}" }
                    if expandable {
                        span { class: "c-nav-list__chevron",
                            if expanded { "▴" } else { "▾" }
                        }
                    }
                }
            }

            // Children are rendered only while expanded
            if expanded {
                ul { class: "c-nav-list__children",
                    for child in entry.children.iter() {
                        li {
                            key: "{child.id}",
                            class: "c-nav-list__child",
                            button { class: "c-nav-list__button c-nav-list__button--child",
                                span { class: "c-nav-list__label", "{child.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
