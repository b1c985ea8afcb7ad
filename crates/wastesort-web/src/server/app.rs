use crate::server::{routes, static_files};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Build the Axum application
pub fn build_app(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    // API routes
    let api_routes = Router::new()
        // Health
        .route("/health", get(routes::health))
        .route("/model", get(routes::model_status))
        // Static content
        .route("/content/dashboard", get(routes::dashboard))
        .route("/dataset", get(routes::dataset))
        // Classification
        .route(
            "/classify",
            post(routes::classify).layer(DefaultBodyLimit::max(upload_limit)),
        );

    Router::new()
        .nest("/api", api_routes)
        .route("/metrics", get(routes::metrics))
        .fallback(static_files::serve_static)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server until Ctrl+C or SIGTERM
pub async fn run_server(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let app = build_app(state);

    tracing::info!("Starting WasteSort server on {}", addr);
    tracing::info!("Open http://{} in your browser", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Listen for shutdown signals (SIGTERM, SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::warn!("Shutdown signal received, stopping server...");
}
