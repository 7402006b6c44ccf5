// Navigation services (state transitions over domain models)

pub mod reorder;
pub mod nav_menu;

pub use reorder::{DragOutcome, DragSession, DragSource, HoverTarget, move_item};
pub use nav_menu::NavMenuState;
