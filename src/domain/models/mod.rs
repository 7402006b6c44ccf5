// Domain models (navigation entities)
// Pure Rust, no framework dependencies

pub mod menu;
pub mod expansion;
pub mod navbar;

pub use menu::{MenuEntry, MenuIcon, contains_id, position_of, validate_menu};
pub use expansion::{Expansion, ExpansionState};
pub use navbar::{NavAction, ProfileAction, UserProfile};
