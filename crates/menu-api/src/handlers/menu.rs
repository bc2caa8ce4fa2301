// ============================================================================
// Menu API - Menu Render Handlers
// File: crates/menu-api/src/handlers/menu.rs
// ============================================================================
//! Draws one named menu for a given page path, as JSON or as an HTML fragment.

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;

use menu_core::RenderedMenu;

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::templates::MENU_TEMPLATE;

#[derive(Debug, Deserialize)]
pub struct RenderQuery {
    /// Page path the menu is drawn for; defaults to `/`.
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_path() -> String {
    "/".to_string()
}

async fn render(state: &AppState, menu_name: &str, path: &str) -> Result<RenderedMenu, ApiError> {
    Ok(state.menu_service().render(menu_name, path).await?)
}

/// GET /api/v1/menus/{menu_name}?path=
pub async fn render_menu_json(
    State(state): State<AppState>,
    Path(menu_name): Path<String>,
    Query(query): Query<RenderQuery>,
) -> Result<Json<ApiResponse<RenderedMenu>>, ApiError> {
    let menu = render(&state, &menu_name, &query.path).await?;
    Ok(Json(ApiResponse::success(menu)))
}

/// GET /menus/{menu_name}?path=
pub async fn render_menu_html(
    State(state): State<AppState>,
    Path(menu_name): Path<String>,
    Query(query): Query<RenderQuery>,
) -> Result<Html<String>, ApiError> {
    let menu = render(&state, &menu_name, &query.path).await?;
    let html = state.templates.render(MENU_TEMPLATE, &menu)?;
    Ok(Html(html))
}
