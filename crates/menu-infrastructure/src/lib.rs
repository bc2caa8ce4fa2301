//! # Menu Infrastructure
//! 
//! Storage adapters for the menu item repository.

pub mod database;

pub use database::{create_pool, run_migrations, MemoryMenuItemRepository, PgMenuItemRepository};
