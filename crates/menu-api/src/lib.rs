//! # Menu API
//! 
//! HTTP handlers, templates, and the router for menu rendering and
//! menu item administration.

pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
pub mod templates;

pub use routes::router;
pub use state::AppState;
