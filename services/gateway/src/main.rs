mod error;
mod handlers;
mod models;
mod router;
mod state;

use anyhow::Context;
use router::create_router;
use scoring_engine::ChurnEngine;
use state::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting churn scoring gateway");

    // Load artifacts once; a missing or corrupt artifact means we must not
    // serve at all.
    let artifact_dir = std::env::var("ARTIFACT_DIR").unwrap_or_else(|_| "artifacts".to_string());
    let engine = ChurnEngine::load(&PathBuf::from(&artifact_dir))
        .with_context(|| format!("loading scoring artifacts from {}", artifact_dir))?;

    tracing::info!(model_version = engine.model_version(), "artifacts ready");

    let state = AppState::new(engine);
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
