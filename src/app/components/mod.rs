pub mod button;
pub mod drawer;
pub mod nav_action;
pub mod nav_list;
pub mod profile_menu;
pub mod search_box;

pub use button::{ButtonVariant, IconButton};
pub use drawer::Drawer;
pub use nav_action::NavActionButton;
pub use nav_list::NavList;
pub use profile_menu::{Avatar, ProfileMenu};
pub use search_box::SearchBox;
