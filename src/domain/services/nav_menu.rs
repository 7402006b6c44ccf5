//! Sidebar menu state: the ordered entries, their expand/collapse state,
//! edit mode and the drag in progress.
//!
//! This is the single writer of the entry list. Components only read it and
//! route every change through these methods.

use crate::domain::models::{Expansion, ExpansionState, MenuEntry, contains_id, position_of};
use crate::domain::services::reorder::{self, DragOutcome, DragSession, DragSource, HoverTarget};
use crate::shared::errors::{NavError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct NavMenuState {
    items: Vec<MenuEntry>,
    expansion: ExpansionState,
    edit_mode: bool,
    drag: Option<DragSession>,
}

impl NavMenuState {
    pub fn new(items: Vec<MenuEntry>) -> Self {
        Self {
            items,
            expansion: ExpansionState::new(),
            edit_mode: false,
            drag: None,
        }
    }

    pub fn items(&self) -> &[MenuEntry] {
        &self.items
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expansion.is_expanded(id)
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn dragged_id(&self) -> Option<&str> {
        self.drag.as_ref().map(DragSession::dragged_id)
    }

    /// Flip the expand state of a known entry
    pub fn toggle_expand(&mut self, id: &str) -> Result<Expansion> {
        if !contains_id(&self.items, id) {
            return Err(NavError::UnknownEntry(id.to_string()));
        }
        Ok(self.expansion.toggle(id))
    }

    /// Reorder by position. Only permitted in edit mode.
    pub fn move_item(&mut self, source: usize, target: usize) -> Result<()> {
        if !self.edit_mode {
            return Err(NavError::EditModeDisabled);
        }
        reorder::move_item(&mut self.items, source, target)
    }

    /// Keyboard reorder: shift the entry `id` one step up (`-1`) or down (`1`).
    ///
    /// The position is looked up at call time, so repeated key presses
    /// handled before a re-render keep moving the same entry. Returns the
    /// `(from, to)` pair applied.
    pub fn nudge(&mut self, id: &str, step: isize) -> Result<(usize, usize)> {
        if !self.edit_mode {
            return Err(NavError::EditModeDisabled);
        }
        let from = position_of(&self.items, id)
            .ok_or_else(|| NavError::UnknownEntry(id.to_string()))?;
        let len = self.items.len();
        let to = from
            .checked_add_signed(step)
            .ok_or(NavError::IndexOutOfRange { index: 0, len })?;
        reorder::move_item(&mut self.items, from, to)?;
        Ok((from, to))
    }

    /// Returns the new edit mode. Leaving edit mode releases any active drag.
    pub fn toggle_edit_mode(&mut self) -> bool {
        self.edit_mode = !self.edit_mode;
        if !self.edit_mode {
            self.drag = None;
        }
        self.edit_mode
    }

    fn release(&mut self) -> Result<DragOutcome> {
        let session = self.drag.take().ok_or(NavError::NoActiveDrag)?;
        Ok(session.finish(&self.items))
    }
}

impl DragSource for NavMenuState {
    fn begin_drag(&mut self, id: &str) -> Result<()> {
        if !self.edit_mode {
            return Err(NavError::EditModeDisabled);
        }
        self.drag = Some(DragSession::start(&self.items, id)?);
        Ok(())
    }

    fn end_drag(&mut self) -> Result<DragOutcome> {
        self.release()
    }

    fn cancel_drag(&mut self) -> Result<DragOutcome> {
        self.release()
    }

    fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

impl HoverTarget for NavMenuState {
    /// Returns whether the list changed
    fn hover(&mut self, target_id: &str) -> Result<bool> {
        let session = self.drag.as_mut().ok_or(NavError::NoActiveDrag)?;
        Ok(session.hover(&mut self.items, target_id)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> NavMenuState {
        NavMenuState::new(vec![
            MenuEntry::new("dashboard", "Dashboard"),
            MenuEntry::new("jobApplications", "Job Applications").with_children(vec![
                MenuEntry::new("applied", "Applied"),
                MenuEntry::new("interviews", "Interviews"),
            ]),
            MenuEntry::new("qualifications", "Qualifications"),
            MenuEntry::new("about", "About"),
            MenuEntry::new("contact", "Contact"),
        ])
    }

    fn ids(state: &NavMenuState) -> Vec<&str> {
        state.items().iter().map(|entry| entry.id.as_str()).collect()
    }

    #[test]
    fn test_toggle_expand_shows_then_hides_children() {
        let mut menu = state();
        assert_eq!(menu.toggle_expand("jobApplications").unwrap(), Expansion::Expanded);
        assert!(menu.is_expanded("jobApplications"));
        assert_eq!(menu.items()[1].children.len(), 2);

        assert_eq!(menu.toggle_expand("jobApplications").unwrap(), Expansion::Collapsed);
        assert!(!menu.is_expanded("jobApplications"));
    }

    #[test]
    fn test_toggle_unknown_id_is_rejected() {
        let mut menu = state();
        assert!(matches!(
            menu.toggle_expand("ghost"),
            Err(NavError::UnknownEntry(_))
        ));
        assert_eq!(menu.expansion().tracked(), 0);
    }

    #[test]
    fn test_move_item_scenario() {
        let mut menu = state();
        menu.toggle_edit_mode();
        menu.move_item(0, 3).unwrap();
        assert_eq!(
            ids(&menu),
            vec!["jobApplications", "qualifications", "about", "dashboard", "contact"]
        );
    }

    #[test]
    fn test_expansion_follows_entry_after_move() {
        let mut menu = state();
        menu.toggle_edit_mode();
        menu.toggle_expand("jobApplications").unwrap();
        menu.move_item(1, 4).unwrap();
        assert!(menu.is_expanded("jobApplications"));
        assert_eq!(menu.items()[4].id, "jobApplications");
    }

    #[test]
    fn test_drag_without_edit_mode_has_no_effect() {
        let mut menu = state();
        assert!(matches!(
            menu.begin_drag("dashboard"),
            Err(NavError::EditModeDisabled)
        ));
        assert!(menu.hover("about").is_err());
        assert!(menu.end_drag().is_err());
        assert_eq!(menu, state());
    }

    #[test]
    fn test_reorder_without_edit_mode_has_no_effect() {
        let mut menu = state();
        assert!(matches!(menu.move_item(0, 2), Err(NavError::EditModeDisabled)));
        assert!(matches!(menu.nudge("dashboard", 1), Err(NavError::EditModeDisabled)));
        assert_eq!(menu, state());
    }

    #[test]
    fn test_repeated_nudges_follow_the_entry() {
        let mut menu = state();
        menu.toggle_edit_mode();
        assert_eq!(menu.nudge("dashboard", 1).unwrap(), (0, 1));
        assert_eq!(menu.nudge("dashboard", 1).unwrap(), (1, 2));
        assert_eq!(menu.nudge("about", -1).unwrap(), (3, 2));
        assert_eq!(
            ids(&menu),
            vec!["jobApplications", "qualifications", "about", "dashboard", "contact"]
        );
    }

    #[test]
    fn test_nudge_past_either_end_is_rejected() {
        let mut menu = state();
        menu.toggle_edit_mode();
        assert!(matches!(
            menu.nudge("dashboard", -1),
            Err(NavError::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            menu.nudge("contact", 1),
            Err(NavError::IndexOutOfRange { index: 5, len: 5 })
        ));
        assert!(matches!(menu.nudge("ghost", 1), Err(NavError::UnknownEntry(_))));
        menu.toggle_edit_mode();
        assert_eq!(menu, state());
    }

    #[test]
    fn test_drag_in_edit_mode_reorders() {
        let mut menu = state();
        assert!(menu.toggle_edit_mode());
        menu.begin_drag("dashboard").unwrap();
        assert_eq!(menu.dragged_id(), Some("dashboard"));

        assert!(menu.hover("jobApplications").unwrap());
        assert!(menu.hover("qualifications").unwrap());
        assert!(menu.hover("about").unwrap());
        assert!(!menu.hover("dashboard").unwrap());

        let outcome = menu.end_drag().unwrap();
        assert_eq!(outcome.end_index, 3);
        assert_eq!(outcome.moves, 3);
        assert!(!menu.is_dragging());
        assert_eq!(
            ids(&menu),
            vec!["jobApplications", "qualifications", "about", "dashboard", "contact"]
        );
    }

    #[test]
    fn test_cancel_keeps_preview() {
        let mut menu = state();
        menu.toggle_edit_mode();
        menu.begin_drag("contact").unwrap();
        menu.hover("dashboard").unwrap();
        let outcome = menu.cancel_drag().unwrap();
        assert_eq!(outcome.end_index, 0);
        assert_eq!(menu.items()[0].id, "contact");
        assert!(menu.hover("about").is_err());
    }

    #[test]
    fn test_leaving_edit_mode_releases_drag() {
        let mut menu = state();
        menu.toggle_edit_mode();
        menu.begin_drag("about").unwrap();
        assert!(!menu.toggle_edit_mode());
        assert!(!menu.is_dragging());
        assert!(matches!(menu.hover("dashboard"), Err(NavError::NoActiveDrag)));
    }

    #[test]
    fn test_children_are_not_draggable() {
        let mut menu = state();
        menu.toggle_edit_mode();
        assert!(menu.begin_drag("applied").is_err());
        assert!(!menu.is_dragging());
    }
}
