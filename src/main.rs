//! LabStock Server - laboratory inventory management
//!
//! Serves the web pages and the JSON API on one port.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use labstock_server::{
    api,
    config::{AppConfig, SessionBackend},
    repository::Repository,
    services::{
        llm::{GeminiClient, LanguageModel},
        pages::PageRenderer,
        redis::RedisSessionStore,
        sessions::{MemorySessionStore, SessionStore},
        Services,
    },
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("labstock_server={},tower_http=debug", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    }

    tracing::info!("Starting LabStock Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations completed");

    // Session store
    let sessions: Arc<dyn SessionStore> = match config.sessions.backend {
        SessionBackend::Redis => {
            let store =
                RedisSessionStore::new(&config.sessions.redis_url, config.sessions.ttl_seconds())
                    .await
                    .context("Failed to connect to Redis")?;
            tracing::info!("Sessions stored in Redis");
            Arc::new(store)
        }
        SessionBackend::Memory => {
            tracing::warn!("Sessions kept in memory; they are lost on restart");
            Arc::new(MemorySessionStore::new(Duration::from_secs(
                config.sessions.ttl_seconds(),
            )))
        }
    };

    // Generative model, only when a key is configured
    let model: Option<Arc<dyn LanguageModel>> = match config.ai.api_key() {
        Some(key) => {
            tracing::info!("AI features enabled (model {})", config.ai.model);
            Some(Arc::new(GeminiClient::new(&config.ai, key)?))
        }
        None => {
            tracing::warn!("GEMINI_API_KEY not set; AI endpoints will answer 503");
            None
        }
    };

    let server_addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    // Create repository and services
    let repository = Repository::new(pool);
    let pages = PageRenderer::new(&config.pages.dir);
    let services = Services::new(repository, sessions, model, pages);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = api::create_router(state);

    tracing::info!("Server listening on http://{}", server_addr);

    let listener = tokio::net::TcpListener::bind(server_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
