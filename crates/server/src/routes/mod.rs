//! API route handlers
//!
//! - `health`: liveness probe (`GET /api/ping`)
//! - `solve`: match extraction (`POST /api/solve`)
//!
//! Static client assets for everything outside `/api` are wired up as a
//! fallback service in the router, not here.

pub mod health;
pub mod solve;
