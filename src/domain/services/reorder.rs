//! Reordering of top-level menu entries
//!
//! `move_item` is the only mutation applied to the ordered list. Drag
//! gestures go through [`DragSession`], which remembers the dragged entry by
//! id and resolves indices against the current list at every hover, so that
//! consecutive hovers never act on a stale position.

use crate::domain::models::{MenuEntry, position_of};
use crate::shared::errors::{NavError, Result};

/// Move the entry at `source` so that it ends up at `target`.
///
/// Out-of-range indices are rejected and leave `entries` untouched.
pub fn move_item(entries: &mut Vec<MenuEntry>, source: usize, target: usize) -> Result<()> {
    let len = entries.len();
    for index in [source, target] {
        if index >= len {
            return Err(NavError::IndexOutOfRange { index, len });
        }
    }
    if source == target {
        return Ok(());
    }

    let moved = entries.remove(source);
    entries.insert(target, moved);
    Ok(())
}

/// In-progress drag of one top-level entry
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    dragged_id: String,
    start_index: usize,
    moves: usize,
}

/// Result of releasing a drag
#[derive(Debug, Clone, PartialEq)]
pub struct DragOutcome {
    pub dragged_id: String,
    pub start_index: usize,
    pub end_index: usize,
    pub moves: usize,
}

impl DragSession {
    pub fn start(entries: &[MenuEntry], id: &str) -> Result<Self> {
        let start_index =
            position_of(entries, id).ok_or_else(|| NavError::UnknownEntry(id.to_string()))?;
        Ok(Self {
            dragged_id: id.to_string(),
            start_index,
            moves: 0,
        })
    }

    pub fn dragged_id(&self) -> &str {
        &self.dragged_id
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Live-preview step: move the dragged entry onto the hovered one.
    ///
    /// Returns the `(from, to)` pair applied, or `None` when hovering over the
    /// dragged entry itself.
    pub fn hover(
        &mut self,
        entries: &mut Vec<MenuEntry>,
        target_id: &str,
    ) -> Result<Option<(usize, usize)>> {
        let from = position_of(entries, &self.dragged_id)
            .ok_or_else(|| NavError::UnknownEntry(self.dragged_id.clone()))?;
        let to = position_of(entries, target_id)
            .ok_or_else(|| NavError::UnknownEntry(target_id.to_string()))?;
        if from == to {
            return Ok(None);
        }

        move_item(entries, from, to)?;
        self.moves += 1;
        Ok(Some((from, to)))
    }

    pub fn finish(self, entries: &[MenuEntry]) -> DragOutcome {
        let end_index = position_of(entries, &self.dragged_id).unwrap_or(self.start_index);
        DragOutcome {
            dragged_id: self.dragged_id,
            start_index: self.start_index,
            end_index,
            moves: self.moves,
        }
    }
}

/// Begin/continue/end side of a drag gesture, independent of the input backend
pub trait DragSource {
    fn begin_drag(&mut self, id: &str) -> Result<()>;
    fn end_drag(&mut self) -> Result<DragOutcome>;
    /// Stops the gesture; moves already previewed are kept
    fn cancel_drag(&mut self) -> Result<DragOutcome>;
    fn is_dragging(&self) -> bool;
}

/// Hover side of a drag gesture: an entry the pointer (or keyboard) is over
pub trait HoverTarget {
    fn hover(&mut self, target_id: &str) -> Result<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(entries: &[MenuEntry]) -> Vec<&str> {
        entries.iter().map(|entry| entry.id.as_str()).collect()
    }

    fn menu() -> Vec<MenuEntry> {
        ["dashboard", "jobApplications", "qualifications", "about", "contact"]
            .into_iter()
            .map(|id| MenuEntry::new(id, id))
            .collect()
    }

    #[test]
    fn test_move_forward() {
        let mut entries = menu();
        move_item(&mut entries, 0, 3).unwrap();
        assert_eq!(
            ids(&entries),
            vec!["jobApplications", "qualifications", "about", "dashboard", "contact"]
        );
    }

    #[test]
    fn test_move_backward() {
        let mut entries = menu();
        move_item(&mut entries, 4, 1).unwrap();
        assert_eq!(
            ids(&entries),
            vec!["dashboard", "contact", "jobApplications", "qualifications", "about"]
        );
    }

    #[test]
    fn test_move_same_index_is_noop() {
        for i in 0..5 {
            let mut entries = menu();
            move_item(&mut entries, i, i).unwrap();
            assert_eq!(entries, menu());
        }
    }

    #[test]
    fn test_move_and_back_restores_order() {
        for s in 0..5 {
            for t in 0..5 {
                let mut entries = menu();
                move_item(&mut entries, s, t).unwrap();
                move_item(&mut entries, t, s).unwrap();
                assert_eq!(entries, menu(), "pair ({s}, {t})");
            }
        }
    }

    #[test]
    fn test_move_out_of_range_rejected() {
        let mut entries = menu();
        let err = move_item(&mut entries, 1, 5).unwrap_err();
        assert!(matches!(err, NavError::IndexOutOfRange { index: 5, len: 5 }));
        assert!(move_item(&mut entries, 9, 0).is_err());
        assert_eq!(entries, menu());
    }

    #[test]
    fn test_move_on_empty_list_rejected() {
        let mut entries: Vec<MenuEntry> = Vec::new();
        assert!(move_item(&mut entries, 0, 0).is_err());
    }

    #[test]
    fn test_drag_tracks_identity_across_hovers() {
        let mut entries = menu();
        let mut session = DragSession::start(&entries, "dashboard").unwrap();

        assert_eq!(session.hover(&mut entries, "jobApplications").unwrap(), Some((0, 1)));
        assert_eq!(session.hover(&mut entries, "qualifications").unwrap(), Some((1, 2)));
        assert_eq!(session.hover(&mut entries, "contact").unwrap(), Some((2, 4)));
        // back over an entry it already passed
        assert_eq!(session.hover(&mut entries, "contact").unwrap(), Some((4, 3)));

        let outcome = session.finish(&entries);
        assert_eq!(outcome.end_index, 3);
        assert_eq!(outcome.start_index, 0);
        assert_eq!(outcome.moves, 4);
        assert_eq!(
            ids(&entries),
            vec!["jobApplications", "qualifications", "about", "dashboard", "contact"]
        );
    }

    #[test]
    fn test_hover_over_self_is_noop() {
        let mut entries = menu();
        let mut session = DragSession::start(&entries, "about").unwrap();
        assert_eq!(session.hover(&mut entries, "about").unwrap(), None);
        assert_eq!(session.moves(), 0);
        assert_eq!(entries, menu());
    }

    #[test]
    fn test_hover_unknown_target_leaves_list() {
        let mut entries = menu();
        let mut session = DragSession::start(&entries, "about").unwrap();
        assert!(session.hover(&mut entries, "ghost").is_err());
        assert_eq!(entries, menu());
    }

    #[test]
    fn test_start_unknown_entry() {
        assert!(matches!(
            DragSession::start(&menu(), "ghost"),
            Err(NavError::UnknownEntry(_))
        ));
    }
}
