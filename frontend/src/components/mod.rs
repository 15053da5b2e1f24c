pub mod cards;
pub mod common;
pub mod empty_state;
pub mod layout;
pub mod profile_menu;
pub mod theme;
