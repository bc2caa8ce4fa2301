// ============================================================================
// Menu Infrastructure - PostgreSQL Menu Item Repository
// File: crates/menu-infrastructure/src/database/postgres/menu_item_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use menu_core::domain::MenuItem;
use menu_core::error::DomainError;
use menu_core::repositories::{MenuItemFilter, MenuItemRepository};
use menu_shared::types::Pagination;

pub struct PgMenuItemRepository {
    pool: PgPool,
}

impl PgMenuItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuItemRow {
    pub id: Uuid,
    pub name: String,
    pub named_url: Option<String>,
    pub explicit_url: Option<String>,
    pub parent_id: Option<Uuid>,
    pub menu_name: String,
    pub sort_order: i32,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            id: row.id,
            name: row.name,
            named_url: row.named_url.filter(|u| !u.is_empty()),
            explicit_url: row.explicit_url.filter(|u| !u.is_empty()),
            parent_id: row.parent_id,
            menu_name: row.menu_name,
            order: row.sort_order,
        }
    }
}

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::DatabaseError(e.to_string())
}

/// `%term%` for ILIKE with `%`, `_` and `\` escaped.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl MenuItemRepository for PgMenuItemRepository {
    async fn find_by_menu_name(&self, menu_name: &str) -> Result<Vec<MenuItem>, DomainError> {
        let rows: Vec<MenuItemRow> = sqlx::query_as(
            r#"
            SELECT
                id, name, named_url, explicit_url,
                parent_id, menu_name, sort_order
            FROM menu_items
            WHERE menu_name = $1
            ORDER BY sort_order ASC, name ASC
            "#
        )
        .bind(menu_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("loading menu", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuItem>, DomainError> {
        let row: Option<MenuItemRow> = sqlx::query_as(
            r#"
            SELECT
                id, name, named_url, explicit_url,
                parent_id, menu_name, sort_order
            FROM menu_items
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding menu item by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn list(
        &self,
        filter: &MenuItemFilter,
        pagination: Pagination,
    ) -> Result<Vec<MenuItem>, DomainError> {
        let search = filter.search.as_deref().map(like_pattern);

        let rows: Vec<MenuItemRow> = sqlx::query_as(
            r#"
            SELECT
                id, name, named_url, explicit_url,
                parent_id, menu_name, sort_order
            FROM menu_items
            WHERE ($1::text IS NULL OR menu_name = $1)
              AND ($2::uuid IS NULL OR parent_id = $2)
              AND ($3::text IS NULL OR name ILIKE $3 OR menu_name ILIKE $3)
            ORDER BY sort_order ASC, name ASC
            LIMIT $4 OFFSET $5
            "#
        )
        .bind(&filter.menu_name)
        .bind(filter.parent_id)
        .bind(search)
        .bind(pagination.limit() as i64)
        .bind(pagination.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing menu items", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        info!("Creating menu item: {}", item.name);

        let row: MenuItemRow = sqlx::query_as(
            r#"
            INSERT INTO menu_items (
                id, name, named_url, explicit_url,
                parent_id, menu_name, sort_order
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING
                id, name, named_url, explicit_url,
                parent_id, menu_name, sort_order
            "#
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(&item.named_url)
        .bind(&item.explicit_url)
        .bind(item.parent_id)
        .bind(&item.menu_name)
        .bind(item.order)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("creating menu item", e))?;

        Ok(row.into())
    }

    async fn update(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        let row: Option<MenuItemRow> = sqlx::query_as(
            r#"
            UPDATE menu_items
            SET
                name = $2,
                named_url = $3,
                explicit_url = $4,
                parent_id = $5,
                menu_name = $6,
                sort_order = $7
            WHERE id = $1
            RETURNING
                id, name, named_url, explicit_url,
                parent_id, menu_name, sort_order
            "#
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(&item.named_url)
        .bind(&item.explicit_url)
        .bind(item.parent_id)
        .bind(&item.menu_name)
        .bind(item.order)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("updating menu item", e))?;

        row.map(Into::into)
            .ok_or(DomainError::MenuItemNotFound(item.id))
    }

    async fn delete(&self, id: &Uuid) -> Result<u64, DomainError> {
        // UNION (not UNION ALL) so a corrupt parent cycle still terminates.
        let result = sqlx::query(
            r#"
            WITH RECURSIVE subtree AS (
                SELECT id FROM menu_items WHERE id = $1
                UNION
                SELECT m.id FROM menu_items m JOIN subtree s ON m.parent_id = s.id
            )
            DELETE FROM menu_items WHERE id IN (SELECT id FROM subtree)
            "#
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("deleting menu item", e))?;

        Ok(result.rows_affected())
    }
}
