mod ai;
mod config;
mod content;
mod db;
mod errors;
mod life;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::pg::PgContentStore;
use crate::content::store::{ContentStore, SeedStore};
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    let content: Arc<dyn ContentStore> = match &config.database_url {
        Some(url) => Arc::new(PgContentStore::new(create_pool(url).await?)),
        None => Arc::new(SeedStore::seeded()),
    };
    info!("Content store initialized (backend: {})", content.backend());

    let llm = LlmClient::new(config.anthropic_api_key.clone())
        .context("Failed to build LLM HTTP client")?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    info!(
        "Life timeline defaults: {} years, weeks start on {:?}",
        config.life.expected_lifespan_years, config.life.week_start
    );

    let cors = build_cors(config.cors_origin.as_deref())?;

    let state = AppState {
        content,
        llm,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Restricts CORS to the site's origin when one is configured.
fn build_cors(origin: Option<&str>) -> Result<CorsLayer> {
    let Some(origin) = origin else {
        return Ok(CorsLayer::permissive());
    };
    let origin = HeaderValue::from_str(origin)
        .with_context(|| format!("CORS_ORIGIN '{origin}' is not a valid header value"))?;
    info!("CORS restricted to {:?}", origin);

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .max_age(CORS_MAX_AGE))
}
