// ============================================================================
// Menu Infrastructure - In-Memory Menu Item Repository
// File: crates/menu-infrastructure/src/database/memory/menu_item_repo_impl.rs
// ============================================================================

use std::collections::{HashSet, VecDeque};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use menu_core::domain::MenuItem;
use menu_core::error::DomainError;
use menu_core::repositories::{MenuItemFilter, MenuItemRepository};
use menu_shared::types::Pagination;

/// Volatile store for development and tests. Mirrors the PostgreSQL adapter,
/// including cascading deletes.
#[derive(Default)]
pub struct MemoryMenuItemRepository {
    items: RwLock<Vec<MenuItem>>,
}

impl MemoryMenuItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<MenuItem>) -> Self {
        Self { items: RwLock::new(items) }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

fn sorted(mut items: Vec<MenuItem>) -> Vec<MenuItem> {
    items.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));
    items
}

#[async_trait]
impl MenuItemRepository for MemoryMenuItemRepository {
    async fn find_by_menu_name(&self, menu_name: &str) -> Result<Vec<MenuItem>, DomainError> {
        let items = self.items.read().await;
        Ok(sorted(
            items
                .iter()
                .filter(|item| item.menu_name == menu_name)
                .cloned()
                .collect(),
        ))
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuItem>, DomainError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id == *id).cloned())
    }

    async fn list(
        &self,
        filter: &MenuItemFilter,
        pagination: Pagination,
    ) -> Result<Vec<MenuItem>, DomainError> {
        let items = self.items.read().await;
        let matching = sorted(items.iter().filter(|item| filter.matches(item)).cloned().collect());
        Ok(matching
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .collect())
    }

    async fn create(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        let mut items = self.items.write().await;
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(DomainError::DatabaseError(format!("duplicate key: {}", item.id)));
        }
        info!("Creating menu item: {}", item.name);
        items.push(item.clone());
        Ok(item.clone())
    }

    async fn update(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        let mut items = self.items.write().await;
        let slot = items
            .iter_mut()
            .find(|existing| existing.id == item.id)
            .ok_or(DomainError::MenuItemNotFound(item.id))?;
        *slot = item.clone();
        Ok(item.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<u64, DomainError> {
        let mut items = self.items.write().await;
        if !items.iter().any(|item| item.id == *id) {
            return Ok(0);
        }

        // Walk the subtree breadth-first; the visited set guards against cycles.
        let mut doomed: HashSet<Uuid> = HashSet::from([*id]);
        let mut queue: VecDeque<Uuid> = VecDeque::from([*id]);
        while let Some(current) = queue.pop_front() {
            for child in items.iter().filter(|item| item.parent_id == Some(current)) {
                if doomed.insert(child.id) {
                    queue.push_back(child.id);
                }
            }
        }

        let before = items.len();
        items.retain(|item| !doomed.contains(&item.id));
        Ok((before - items.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, menu_name: &str, parent: Option<&MenuItem>, order: i32) -> MenuItem {
        MenuItem::new(name.into(), menu_name.into(), parent.map(|p| p.id), order, None, None).unwrap()
    }

    #[tokio::test]
    async fn test_find_by_menu_name_filters_and_sorts() {
        let b = item("B", "main", None, 2);
        let a = item("A", "main", None, 1);
        let f = item("F", "footer", None, 0);
        let repo = MemoryMenuItemRepository::with_items(vec![b, a, f]);

        let main = repo.find_by_menu_name("main").await.unwrap();
        let names: Vec<_> = main.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_delete_cascades_to_descendants() {
        let root = item("Root", "main", None, 0);
        let child = item("Child", "main", Some(&root), 0);
        let grandchild = item("Grandchild", "main", Some(&child), 0);
        let other = item("Other", "main", None, 1);
        let repo = MemoryMenuItemRepository::with_items(vec![
            root.clone(),
            child,
            grandchild,
            other.clone(),
        ]);

        assert_eq!(repo.delete(&root.id).await.unwrap(), 3);
        assert_eq!(repo.len().await, 1);
        assert!(repo.find_by_id(&other.id).await.unwrap().is_some());
        assert_eq!(repo.delete(&root.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_survives_cycle() {
        let mut x = item("X", "main", None, 0);
        let y = item("Y", "main", Some(&x), 0);
        x.parent_id = Some(y.id);
        let repo = MemoryMenuItemRepository::with_items(vec![x.clone(), y]);

        assert_eq!(repo.delete(&x.id).await.unwrap(), 2);
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_list_paginates() {
        let repo = MemoryMenuItemRepository::with_items(
            (0..5).map(|i| item(&format!("Item {i}"), "main", None, i)).collect(),
        );

        let page = repo
            .list(&MenuItemFilter::default(), Pagination { page: 2, per_page: 2 })
            .await
            .unwrap();
        let names: Vec<_> = page.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Item 2", "Item 3"]);
    }

    #[tokio::test]
    async fn test_update_missing_item() {
        let repo = MemoryMenuItemRepository::new();
        let ghost = item("Ghost", "main", None, 0);
        assert!(matches!(
            repo.update(&ghost).await,
            Err(DomainError::MenuItemNotFound(_))
        ));
    }
}
