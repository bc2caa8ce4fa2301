//! Domain services (business logic)

pub mod menu_service;
pub mod menu_item_service;

pub use menu_service::MenuService;
pub use menu_item_service::MenuItemService;
