pub mod handlers;
mod pages;
mod types;

use crate::{Result, config::Config, interpret::Interpreter};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub const INTERPRET_PATH: &str = "/api/ekg/interpret";

pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(handlers::DOCS_PATH, get(handlers::docs))
        .route(INTERPRET_PATH, post(handlers::interpret))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    if config.llm.api_key.is_empty() {
        warn!("No API key configured; set OPENAI_API_KEY or llm.api_key");
    }

    let interpreter = Interpreter::from_config(&config.llm);

    let app_state = AppState {
        interpreter: Arc::new(interpreter),
        output_format: config.server.output_format,
        index_page: config.server.index_page,
    };

    let app = router(app_state, config.server.max_upload_bytes);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!(
        "Starting server on {} (output: {:?}, index: {:?}, model: {})",
        addr, config.server.output_format, config.server.index_page, config.llm.model
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
