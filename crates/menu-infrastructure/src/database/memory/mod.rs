//! In-process repository implementations

pub mod menu_item_repo_impl;

pub use menu_item_repo_impl::MemoryMenuItemRepository;
