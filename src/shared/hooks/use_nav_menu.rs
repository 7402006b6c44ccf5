use dioxus::prelude::*;

use crate::domain::models::MenuEntry;
use crate::domain::services::{DragSource, HoverTarget, NavMenuState};
use crate::shared::logging::{
    LogOperation, log_drag_end, log_drag_start, log_edit_mode, log_rejected, log_reorder,
    log_toggle_expand,
};

/// Sidebar menu handle.
///
/// Wraps the one signal holding the menu state. Children receive a copy of
/// this handle and request changes through its methods; rejected requests
/// (unknown ids, stale indices, drags outside edit mode) are logged and
/// dropped.
#[derive(Clone, Copy, PartialEq)]
pub struct NavMenu {
    pub state: Signal<NavMenuState>,
}

impl NavMenu {
    pub fn items(&self) -> Vec<MenuEntry> {
        self.state.read().items().to_vec()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.state.read().is_expanded(id)
    }

    pub fn edit_mode(&self) -> bool {
        self.state.read().edit_mode()
    }

    pub fn is_dragged(&self, id: &str) -> bool {
        self.state.read().dragged_id() == Some(id)
    }

    pub fn toggle_expand(&mut self, id: &str) {
        match self.state.write().toggle_expand(id) {
            Ok(expansion) => log_toggle_expand(id, expansion.is_expanded()),
            Err(e) => log_rejected(LogOperation::ToggleExpand, &e),
        }
    }

    pub fn move_item(&mut self, source: usize, target: usize) {
        let mut state = self.state.write();
        match state.move_item(source, target) {
            Ok(()) => log_reorder(&state.items()[target].id, source, target),
            Err(e) => log_rejected(LogOperation::Reorder, &e),
        }
    }

    /// Keyboard reorder: shift the entry one step up (`-1`) or down (`1`)
    pub fn nudge(&mut self, id: &str, step: isize) {
        match self.state.write().nudge(id, step) {
            Ok((from, to)) => log_reorder(id, from, to),
            Err(e) => log_rejected(LogOperation::Reorder, &e),
        }
    }

    pub fn toggle_edit_mode(&mut self) {
        let enabled = self.state.write().toggle_edit_mode();
        log_edit_mode(enabled);
    }

    pub fn begin_drag(&mut self, id: &str) {
        let mut state = self.state.write();
        match state.begin_drag(id) {
            Ok(()) => {
                let index = state.items().iter().position(|entry| entry.id == id);
                log_drag_start(id, index.unwrap_or_default());
            }
            Err(e) => log_rejected(LogOperation::Drag, &e),
        }
    }

    /// Pointer entered an entry's row. Only writes when a drag is active, so
    /// plain mouse movement over the list does not re-render it.
    pub fn hover(&mut self, target_id: &str) {
        if !self.state.read().is_dragging() {
            return;
        }
        if let Err(e) = self.state.write().hover(target_id) {
            log_rejected(LogOperation::Drag, &e);
        }
    }

    pub fn end_drag(&mut self) {
        self.release(false);
    }

    pub fn cancel_drag(&mut self) {
        self.release(true);
    }

    fn release(&mut self, cancelled: bool) {
        if !self.state.read().is_dragging() {
            return;
        }
        let mut state = self.state.write();
        let outcome = if cancelled {
            state.cancel_drag()
        } else {
            state.end_drag()
        };
        match outcome {
            Ok(outcome) => log_drag_end(
                &outcome.dragged_id,
                outcome.start_index,
                outcome.end_index,
                outcome.moves,
                cancelled,
            ),
            Err(e) => log_rejected(LogOperation::Drag, &e),
        }
    }
}

/// Hook to own the sidebar menu state for one mounted sidebar
pub fn use_nav_menu(initial: Vec<MenuEntry>) -> NavMenu {
    let state = use_signal(move || NavMenuState::new(initial));
    NavMenu { state }
}
