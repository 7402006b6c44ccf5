// Custom Dioxus hooks
pub mod use_nav_menu;
pub mod use_toggle;

pub use use_nav_menu::{use_nav_menu, NavMenu};
pub use use_toggle::{use_toggle, Toggle};
