//! Site Content Backend
//!
//! Read-only JSON endpoints that flatten Notion databases into posts and visited countries
//! for the site front end.

mod api;
mod config;
mod content;
mod cors;
mod errors;
mod models;
mod notion;
mod richtext;

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use content::ContentRepository;
use notion::NotionClient;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<ContentRepository>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting site content backend");

    let client = NotionClient::new(&config);
    tracing::info!("Notion API: {}", client.base_url());
    tracing::info!("Posts database: {}", config.posts_database_id);
    tracing::info!("Countries database: {}", config.countries_database_id);

    let state = AppState {
        repo: Arc::new(ContentRepository::new(Arc::new(client), &config)),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/posts", get(api::list_posts))
        .route("/post", get(api::get_post))
        .route("/countries", get(api::list_countries));

    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(cors::preflight_layer))
                .layer(cors::cors_layer()),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
