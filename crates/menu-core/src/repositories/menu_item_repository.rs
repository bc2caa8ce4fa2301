//! Menu item repository trait (port)

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use menu_shared::types::Pagination;

use crate::domain::MenuItem;
use crate::error::DomainError;

/// Admin list filter. `search` matches `name` or `menu_name`, case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MenuItemFilter {
    pub menu_name: Option<String>,
    pub parent_id: Option<Uuid>,
    pub search: Option<String>,
}

impl MenuItemFilter {
    pub fn matches(&self, item: &MenuItem) -> bool {
        if let Some(menu_name) = &self.menu_name {
            if &item.menu_name != menu_name {
                return false;
            }
        }
        if let Some(parent_id) = self.parent_id {
            if item.parent_id != Some(parent_id) {
                return false;
            }
        }
        if let Some(search) = self.search.as_deref().map(str::to_lowercase) {
            return item.name.to_lowercase().contains(&search)
                || item.menu_name.to_lowercase().contains(&search);
        }
        true
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// All items of one menu, sorted by `order` ascending. One round trip.
    async fn find_by_menu_name(&self, menu_name: &str) -> Result<Vec<MenuItem>, DomainError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuItem>, DomainError>;
    async fn list(
        &self,
        filter: &MenuItemFilter,
        pagination: Pagination,
    ) -> Result<Vec<MenuItem>, DomainError>;
    async fn create(&self, item: &MenuItem) -> Result<MenuItem, DomainError>;
    async fn update(&self, item: &MenuItem) -> Result<MenuItem, DomainError>;
    /// Deletes the item and every descendant. Returns the number of rows removed.
    async fn delete(&self, id: &Uuid) -> Result<u64, DomainError>;
}
