//! Router construction and server startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{config::ServerConfig, error::ServerError, infrastructure::repository};

use super::{
    handler::{create_room, get_messages, health_check, join_room, post_message},
    signal::shutdown_signal,
    state::AppState,
};

/// Build the application router over the given state
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/room/create", get(create_room))
        .route("/room/join", post(join_room))
        .route(
            "/room/{room_key}/messages",
            get(get_messages).post(post_message),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Connect to room storage, bind the listener and serve until a shutdown signal arrives
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let repository = repository::connect(
        &config.database_url,
        config.max_connections,
        config.acquire_timeout(),
    )
    .await?;
    let app = create_router(Arc::new(AppState::new(repository)));

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
