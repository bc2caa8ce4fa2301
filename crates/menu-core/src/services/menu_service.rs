// ============================================================================
// Menu Core - Menu Render Service
// File: crates/menu-core/src/services/menu_service.rs
// ============================================================================
//! Loads one menu and turns it into an annotated tree for a request path.

use std::sync::Arc;
use tracing::{debug, error};

use crate::error::DomainError;
use crate::repositories::MenuItemRepository;
use crate::routing::UrlResolver;
use crate::tree::{build_menu_tree, RenderedMenu};

pub struct MenuService<R: MenuItemRepository + ?Sized, U: UrlResolver + ?Sized> {
    menu_repo: Arc<R>,
    resolver: Arc<U>,
}

impl<R: MenuItemRepository + ?Sized, U: UrlResolver + ?Sized> MenuService<R, U> {
    pub fn new(menu_repo: Arc<R>, resolver: Arc<U>) -> Self {
        Self { menu_repo, resolver }
    }

    /// Renders `menu_name` for `current_path`.
    ///
    /// A path that matches no route only disables route-name matching.
    /// Storage failures are returned as-is.
    pub async fn render(&self, menu_name: &str, current_path: &str) -> Result<RenderedMenu, DomainError> {
        let current_route_name = self.resolver.resolve(current_path).ok();

        let items = self.menu_repo.find_by_menu_name(menu_name).await.map_err(|e| {
            error!("Failed to load menu '{}': {}", menu_name, e);
            e
        })?;

        let menu_tree = build_menu_tree(
            &items,
            current_path,
            current_route_name.as_deref(),
            self.resolver.as_ref(),
        );

        debug!(
            "Rendered menu '{}' for {} ({} items, {} roots, route: {:?})",
            menu_name,
            current_path,
            items.len(),
            menu_tree.len(),
            current_route_name
        );

        Ok(RenderedMenu {
            menu_tree,
            menu_name: menu_name.to_string(),
            current_url: current_path.to_string(),
            current_route_name,
        })
    }
}
