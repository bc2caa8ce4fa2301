// ============================================================================
// Menu Core - Menu Item Service
// File: crates/menu-core/src/services/menu_item_service.rs
// ============================================================================
//! Record administration for menu items: list, fetch, create, update, delete.

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use menu_shared::types::Pagination;

use crate::domain::{MenuItem, MenuItemInput};
use crate::error::DomainError;
use crate::repositories::{MenuItemFilter, MenuItemRepository};

pub struct MenuItemService<R: MenuItemRepository + ?Sized> {
    menu_repo: Arc<R>,
}

impl<R: MenuItemRepository + ?Sized> MenuItemService<R> {
    pub fn new(menu_repo: Arc<R>) -> Self {
        Self { menu_repo }
    }

    pub async fn list(
        &self,
        filter: &MenuItemFilter,
        pagination: Pagination,
    ) -> Result<Vec<MenuItem>, DomainError> {
        self.menu_repo.list(filter, pagination.normalized()).await
    }

    pub async fn get(&self, id: &Uuid) -> Result<MenuItem, DomainError> {
        self.menu_repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MenuItemNotFound(*id))
    }

    pub async fn create(&self, input: MenuItemInput) -> Result<MenuItem, DomainError> {
        let mut item = MenuItem::from_input(input)?;
        self.check_parent(&item).await?;
        item.prepare_for_save();

        let created = self.menu_repo.create(&item).await?;
        info!("Menu item created: {} ({}) in '{}'", created.name, created.id, created.menu_name);
        Ok(created)
    }

    pub async fn update(&self, id: &Uuid, input: MenuItemInput) -> Result<MenuItem, DomainError> {
        let mut item = self.get(id).await?;
        let previous_named_url = item.named_url.clone();

        item.apply(input)?;
        self.check_parent(&item).await?;
        if item.named_url.is_none() && item.explicit_url.is_none() {
            item.named_url = previous_named_url;
        }
        item.prepare_for_save();

        let updated = self.menu_repo.update(&item).await?;
        info!("Menu item updated: {} ({})", updated.name, updated.id);
        Ok(updated)
    }

    pub async fn delete(&self, id: &Uuid) -> Result<u64, DomainError> {
        let removed = self.menu_repo.delete(id).await?;
        if removed == 0 {
            warn!("Delete requested for missing menu item: {}", id);
            return Err(DomainError::MenuItemNotFound(*id));
        }
        info!("Menu item {} deleted ({} rows including descendants)", id, removed);
        Ok(removed)
    }

    /// Parent must exist and must not be the item itself. Cross-menu parents
    /// and longer cycles are allowed.
    async fn check_parent(&self, item: &MenuItem) -> Result<(), DomainError> {
        let Some(parent_id) = item.parent_id else {
            return Ok(());
        };
        if parent_id == item.id {
            return Err(DomainError::InvalidParent(item.id));
        }
        match self.menu_repo.find_by_id(&parent_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::ParentNotFound(parent_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockMenuItemRepository;

    fn input(name: &str) -> MenuItemInput {
        MenuItemInput {
            name: name.into(),
            menu_name: "main".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_derives_named_url() {
        let mut repo = MockMenuItemRepository::new();
        repo.expect_create()
            .withf(|item| item.named_url.as_deref() == Some("about-us"))
            .times(1)
            .returning(|item| Ok(item.clone()));

        let service = MenuItemService::new(Arc::new(repo));
        let created = service.create(input("About Us")).await.unwrap();

        assert_eq!(created.named_url.as_deref(), Some("about-us"));
    }

    #[tokio::test]
    async fn test_create_rejects_missing_parent() {
        let mut repo = MockMenuItemRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_create().never();

        let service = MenuItemService::new(Arc::new(repo));
        let parent_id = Uuid::new_v4();
        let result = service
            .create(MenuItemInput { parent_id: Some(parent_id), ..input("Child") })
            .await;

        assert!(matches!(result, Err(DomainError::ParentNotFound(id)) if id == parent_id));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input() {
        let repo = MockMenuItemRepository::new();
        let service = MenuItemService::new(Arc::new(repo));

        let result = service.create(input(&"x".repeat(60))).await;
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_update_rejects_self_parent() {
        let existing = MenuItem::new("Item".into(), "main".into(), None, 0, None, None).unwrap();
        let id = existing.id;

        let mut repo = MockMenuItemRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_update().never();

        let service = MenuItemService::new(Arc::new(repo));
        let result = service
            .update(&id, MenuItemInput { parent_id: Some(id), ..input("Item") })
            .await;

        assert!(matches!(result, Err(DomainError::InvalidParent(_))));
    }

    #[tokio::test]
    async fn test_update_keeps_existing_named_url() {
        let mut existing = MenuItem::new("About Us".into(), "main".into(), None, 0, None, None).unwrap();
        existing.prepare_for_save();
        let id = existing.id;

        let mut repo = MockMenuItemRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_update().returning(|item| Ok(item.clone()));

        let service = MenuItemService::new(Arc::new(repo));
        let updated = service.update(&id, input("About the Team")).await.unwrap();

        assert_eq!(updated.name, "About the Team");
        assert_eq!(updated.named_url.as_deref(), Some("about-us"));
    }

    #[tokio::test]
    async fn test_delete_missing_item() {
        let mut repo = MockMenuItemRepository::new();
        repo.expect_delete().returning(|_| Ok(0));

        let service = MenuItemService::new(Arc::new(repo));
        let id = Uuid::new_v4();

        assert!(matches!(service.delete(&id).await, Err(DomainError::MenuItemNotFound(_))));
    }

    #[tokio::test]
    async fn test_list_normalizes_pagination() {
        let mut repo = MockMenuItemRepository::new();
        repo.expect_list()
            .withf(|_, pagination| pagination.page == 1 && pagination.per_page == 100)
            .returning(|_, _| Ok(Vec::new()));

        let service = MenuItemService::new(Arc::new(repo));
        let items = service
            .list(&MenuItemFilter::default(), Pagination { page: 0, per_page: 500 })
            .await
            .unwrap();

        assert!(items.is_empty());
    }
}
