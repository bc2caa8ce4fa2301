//! Router assembly

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{health, menu, menu_items, pages};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Menu rendering
        .route("/api/v1/menus/{menu_name}", get(menu::render_menu_json))
        .route("/menus/{menu_name}", get(menu::render_menu_html))
        // Menu item administration
        .route(
            "/api/v1/menu-items",
            get(menu_items::list).post(menu_items::create),
        )
        .route(
            "/api/v1/menu-items/{id}",
            get(menu_items::get)
                .put(menu_items::update)
                .delete(menu_items::delete),
        )
        // Site pages
        .fallback(pages::page)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
