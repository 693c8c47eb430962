use anyhow::Result;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use lexidef_backend::{build_app, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("lexidef_backend=debug,tower_http=debug")
        .init();

    let config = Config::from_env();
    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; POST /api/translate will answer 405");
    }

    let port = config.port;
    let state = AppState::new(config);

    let app = build_app(state).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
