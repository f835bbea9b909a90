pub mod handlers;
pub mod types;

use crate::{Result, config::Config, gemini::HttpGeminiClient};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/ask", post(handlers::ask))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let gemini = HttpGeminiClient::new(config.gemini.clone());

    let state = handlers::AppState {
        gemini: Arc::new(gemini),
        default_model: config.gemini.default_model.clone(),
    };

    let app = router(state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
