//! Catch-all page handler: every page carries the default menu drawn for its own path.

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::Html,
};
use serde::Serialize;
use tracing::debug;

use menu_core::RenderedMenu;

use crate::error::ApiError;
use crate::state::AppState;
use crate::templates::PAGE_TEMPLATE;

#[derive(Serialize)]
struct PageContext<'a> {
    title: &'a str,
    current_url: &'a str,
    menu: &'a RenderedMenu,
}

pub async fn page(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<(StatusCode, Html<String>), ApiError> {
    if method != Method::GET && method != Method::HEAD {
        return Err(ApiError::NotFound(format!("{} {}", method, uri.path())));
    }

    let path = uri.path();
    let menu = state
        .menu_service()
        .render(&state.config.menu.default_menu, path)
        .await?;

    let (status, title) = match menu.current_route_name.as_deref() {
        Some(name) => (StatusCode::OK, name),
        None => (StatusCode::NOT_FOUND, "Page not found"),
    };
    debug!("Page {} -> {}", path, status);

    let html = state.templates.render(
        PAGE_TEMPLATE,
        &PageContext {
            title,
            current_url: path,
            menu: &menu,
        },
    )?;
    Ok((status, Html(html)))
}
