use axum::http::{header, HeaderValue, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, error};

use menu_api::{router, AppState};
use menu_core::repositories::MenuItemRepository;
use menu_infrastructure::database::{connection, MemoryMenuItemRepository, PgMenuItemRepository};
use menu_shared::config::{AppConfig, DatabaseBackend};
use menu_shared::AppError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = match AppConfig::load().map_err(AppError::from) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry
    menu_shared::telemetry::init_telemetry(&config.app.log_format);

    info!("{} starting ({})...", config.app.name, config.app.env);

    // Menu item storage
    let menu_repo: Arc<dyn MenuItemRepository> = match config.database.backend {
        DatabaseBackend::Postgres => {
            info!("Connecting to database...");
            let pool = connection::create_pool(
                &config.database.url,
                config.database.max_connections,
                config.database.min_connections,
            )
            .await
            .map_err(|e| {
                error!("Failed to connect to database: {}", e);
                e
            })?;
            info!("Database connection established.");

            if config.database.run_migrations {
                connection::run_migrations(&pool).await?;
            }
            Arc::new(PgMenuItemRepository::new(pool))
        }
        DatabaseBackend::Memory => {
            info!("Using in-memory menu storage; data is lost on restart.");
            Arc::new(MemoryMenuItemRepository::new())
        }
    };

    // Create App State
    let state = AppState::new(menu_repo, config.clone())
        .map_err(|e| AppError::TemplateError(e.to_string()))?;
    info!("Registered {} named routes", state.routes.len());

    // Build router
    let app = router(state).layer(
        CorsLayer::new()
            .allow_origin(HeaderValue::from_static("http://localhost:5173"))
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE]),
    );

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
