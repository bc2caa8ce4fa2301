//! Application-wide constants

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;
/// URL rendered for items with neither a named route nor an explicit URL.
pub const PLACEHOLDER_URL: &str = "#";
pub const DEFAULT_MENU_NAME: &str = "main_menu";
