//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration with the API endpoints and static asset fallback
//! - Middleware stack (request tracking, timeout, compression, CORS)
//! - Graceful shutdown handling

use crate::config::ServerConfig;
use crate::middleware::trace_context;
use crate::routes::{health, solve};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use std::net::SocketAddr;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware
///
/// `/api/ping` and `/api/solve` are the service surface; every other path
/// falls through to the static client directory.
pub fn build_router(config: &ServerConfig) -> Router {
    let cors = if config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/api/ping", get(health::ping))
        .route("/api/solve", post(solve::solve))
        .layer(DefaultBodyLimit::max(config.max_body_size()))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TimeoutLayer::new(config.timeout()))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(from_fn(trace_context))
        .layer(TraceLayer::new_for_http())
}

/// Start the rexsolve HTTP server
///
/// Initializes structured logging, binds to the configured TCP address, and
/// serves until SIGTERM or Ctrl+C. The engine itself is stateless, so no
/// shared application state is threaded through the router; horizontal
/// concurrency is just independent handler invocations.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.as_str())
        .with_target(false)
        .json()
        .init();

    // Build router
    let app = build_router(&config);

    // Parse bind address
    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!(
        "Starting rexsolve server on {} (static assets from {:?})",
        addr,
        config.static_dir
    );
    tracing::info!(
        "Timeout: {}s, Max body: {}MB, CORS: {}",
        config.timeout_secs,
        config.max_body_size_mb,
        config.enable_cors
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
