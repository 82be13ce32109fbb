pub mod handlers;
mod page;
mod types;

pub use page::{ERROR_PREFIX, Outcome};
pub use types::{ErrorResponse, TranslateForm, TranslateRequest, TranslateResponse};

use crate::{agent::Agent, config::{Config, ModelBinding}, Result};
use axum::{routing::{get, post}, Router};
use handlers::AppState;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/api/translate", post(handlers::translate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config, binding: ModelBinding) -> Result<()> {
    let agent = Agent::translator(&binding)?;
    let app = router(AppState::new(agent));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
