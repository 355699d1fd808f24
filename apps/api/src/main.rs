mod analysis;
mod config;
mod errors;
mod extract;
mod profile;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::models::Category;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting FounderScan API v{}", env!("CARGO_PKG_VERSION"));

    // Keyword catalog: KEYWORDS_PATH file or the built-in lists
    let catalog = config.load_keyword_catalog()?;
    let phrase_count: usize = Category::ALL
        .iter()
        .map(|&category| catalog.phrases(category).len())
        .sum();
    match &config.keywords_path {
        Some(path) => info!(phrase_count, "Keyword catalog loaded from {}", path.display()),
        None => info!(phrase_count, "Using built-in keyword catalog"),
    }

    if config.scoring_mode.is_deterministic() {
        info!("Scoring mode: {}", config.scoring_mode);
    } else {
        warn!("Scoring mode: random (scores vary between runs; set SCORING_NOISE=off or seed:<n> to pin them)");
    }

    let state = AppState::new(config.clone(), catalog);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict allowed origins once the web client's host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
