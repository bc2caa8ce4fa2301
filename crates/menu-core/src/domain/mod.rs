//! # Menu Core - Domain Module
//! 
//! Domain entities for the navigation menu.

pub mod menu_item;

pub use menu_item::{MenuItem, MenuItemInput};
