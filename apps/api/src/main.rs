mod config;
mod errors;
mod export;
mod generation;
mod models;
mod profile;
mod routes;
mod state;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::export::PdfExporter;
use crate::generation::clock::SystemClock;
use crate::generation::position::RegexPositionExtractor;
use crate::generation::vocabulary::Vocabulary;
use crate::profile::store::{InMemoryProfileStore, JsonFileProfileStore, ProfileStore};
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

    info!("Starting cover letter API v{}", env!("CARGO_PKG_VERSION"));

    let profile_store = build_profile_store(&config);

    let vocabulary = Vocabulary::default().with_extra_terms(&config.extra_keywords);
    info!(
        "Keyword vocabulary: {} terms ({} extra)",
        vocabulary.len(),
        config.extra_keywords.len()
    );

    info!("Default PDF font: {:?}", config.default_pdf_font);

    // Build app state
    let state = AppState {
        config: config.clone(),
        profile_store,
        exporter: Arc::new(PdfExporter::default()),
        clock: Arc::new(SystemClock),
        position_extractor: Arc::new(RegexPositionExtractor),
        vocabulary: Arc::new(vocabulary),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = bind_listener(&config).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// JSON file store when a path is configured, otherwise an in-memory store.
fn build_profile_store(config: &Config) -> Arc<dyn ProfileStore> {
    match &config.profile_store_path {
        Some(path) => {
            let store = JsonFileProfileStore::new(path);
            info!("Profile store: {}", store.path().display());
            Arc::new(store)
        }
        None => {
            warn!("PROFILE_STORE_PATH is empty; the profile will not survive a restart");
            Arc::new(InMemoryProfileStore::default())
        }
    }
}

/// Resolves `HOST` as a name or an address, so `localhost` works.
async fn bind_listener(config: &Config) -> Result<TcpListener> {
    TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))
}
