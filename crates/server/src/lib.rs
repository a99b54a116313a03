//! rexsolve Server - HTTP transport for the match extraction engine
//!
//! This crate exposes the `rexsolve` engine over a small JSON API and serves
//! the static client UI alongside it. The engine is a pure function, so the
//! transport carries no shared state: it decodes the four request fields,
//! invokes the engine, and maps its report or validation error onto the wire.
//!
//! # API Endpoints
//!
//! - `POST /api/solve` - run an extraction; `400 {"ok":false,"error":...}`
//!   on any validation failure, `200 {"ok":true,"matches":...,"count":...,
//!   "truncated":...}` on success
//! - `GET /api/ping` - liveness probe
//! - anything else - static client assets from the configured directory
//!
//! # Features
//!
//! - **Middleware**: compression, CORS, request-id tracking, structured
//!   request logging, per-request timeout, body size limit
//! - **Configuration**: environment variable and file-based configuration
//! - **Graceful Shutdown**: SIGTERM / Ctrl+C handling
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
