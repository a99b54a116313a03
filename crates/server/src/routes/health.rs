use axum::Json;
use axum::response::IntoResponse;
use serde_json::json;

/// Liveness probe. Clients poll this before enabling the UI; it carries the
/// current server time so they can detect clock skew.
pub async fn ping() -> impl IntoResponse {
    Json(json!({
        "ok": true,
        "time": chrono::Utc::now().to_rfc3339(),
    }))
}
