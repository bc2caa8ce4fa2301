// ============================================================================
// Menu API - Menu Item Admin Handlers
// File: crates/menu-api/src/handlers/menu_items.rs
// ============================================================================
//! Record administration for menu items (list / get / create / update / delete)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use menu_core::domain::{MenuItem, MenuItemInput};
use menu_core::repositories::MenuItemFilter;
use menu_shared::constants::DEFAULT_PAGE_SIZE;
use menu_shared::types::Pagination;

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Query string for GET /api/v1/menu-items
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub menu_name: Option<String>,
    pub parent_id: Option<Uuid>,
    /// Matches name or menu name, case-insensitive.
    pub q: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListQuery {
    fn filter(&self) -> MenuItemFilter {
        MenuItemFilter {
            menu_name: self.menu_name.clone().filter(|m| !m.is_empty()),
            parent_id: self.parent_id,
            search: self.q.as_deref().map(str::trim).filter(|q| !q.is_empty()).map(str::to_string),
        }
    }

    fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page.unwrap_or(1),
            per_page: self.per_page.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub id: Uuid,
    pub deleted: u64,
}

/// List handler - GET /api/v1/menu-items
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<MenuItem>>>, ApiError> {
    let items = state
        .menu_item_service()
        .list(&query.filter(), query.pagination())
        .await?;
    Ok(Json(ApiResponse::success(items)))
}

/// Get handler - GET /api/v1/menu-items/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MenuItem>>, ApiError> {
    let item = state.menu_item_service().get(&id).await?;
    Ok(Json(ApiResponse::success(item)))
}

/// Create handler - POST /api/v1/menu-items
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<MenuItemInput>,
) -> Result<(StatusCode, Json<ApiResponse<MenuItem>>), ApiError> {
    let item = state.menu_item_service().create(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(item))))
}

/// Update handler - PUT /api/v1/menu-items/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<MenuItemInput>,
) -> Result<Json<ApiResponse<MenuItem>>, ApiError> {
    let item = state.menu_item_service().update(&id, payload).await?;
    Ok(Json(ApiResponse::success(item)))
}

/// Delete handler - DELETE /api/v1/menu-items/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DeleteResponse>>, ApiError> {
    let deleted = state.menu_item_service().delete(&id).await?;
    Ok(Json(ApiResponse::success(DeleteResponse { id, deleted })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_blank_values_are_ignored() {
        let query = ListQuery {
            menu_name: Some(String::new()),
            q: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(query.filter(), MenuItemFilter::default());
        assert_eq!(query.pagination(), Pagination::default());
    }
}
