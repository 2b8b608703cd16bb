use commute_links::clock::{OffsetClock, SystemClock};
use commute_links::config::{CommuteConfig, ConfigError, ServerConfig};
use commute_links::links::LinkGenerator;
use commute_links::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "commute_links=info,tower_http=info";

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let server = ServerConfig::from_env()?;

    let mut commute = CommuteConfig::default();
    if let Some(revision) = server.revision {
        commute = commute.with_revision(revision);
    }
    let generator = LinkGenerator::from_config(&commute)?;
    tracing::info!(revision = %commute.revision, "loaded commute");

    // Build app state
    let state = match server.utc_offset {
        Some(offset) => {
            tracing::info!(%offset, "using fixed UTC offset");
            AppState::new(generator, OffsetClock::new(offset))
        }
        None => AppState::new(generator, SystemClock),
    };

    let app = create_router(state, &server.static_dir);

    let addr = server.bind_addr;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Commute links listening on http://{addr}");
    tracing::info!("  GET  /             - Link page");
    tracing::info!("  GET  /links        - Refresh fragment (visibility=visible|hidden)");
    tracing::info!("  GET  /api/links    - Links as JSON");
    tracing::info!("  GET  /health       - Health check");

    axum::serve(listener, app).await?;
    Ok(())
}
