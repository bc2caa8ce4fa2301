//! # Menu Core
//! 
//! Menu item entity, route resolution, tree building, repository port,
//! and the render / administration services.

pub mod domain;
pub mod routing;
pub mod tree;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use routing::{ResolvedUrl, RouteError, RouteTable, UrlResolver};
pub use tree::{build_menu_tree, MenuNode, RenderedMenu};
