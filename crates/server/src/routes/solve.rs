use axum::Json;
use axum::response::IntoResponse;
use rexsolve::{ExtractRequest, MatchRecord, extract};
use serde::Serialize;

use crate::error::ServerResult;

/// Success envelope for an extraction.
///
/// `matches`, `count`, and `truncated` come straight from the engine's
/// report; `ok` is the transport's success discriminator.
#[derive(Debug, Serialize)]
pub struct SolveResponse {
    pub ok: bool,
    pub matches: Vec<MatchRecord>,
    pub count: usize,
    pub truncated: bool,
}

/// Run the match extraction engine over the request body.
///
/// The body carries the four engine inputs (`pattern`, `flags`, `text`,
/// `maxResults`) already parsed; the engine owns all validation, so every
/// rejection here is a `ValidationError` mapped uniformly to 400 with
/// `{"ok":false,"error":"<reason>"}`.
pub async fn solve(Json(request): Json<ExtractRequest>) -> ServerResult<impl IntoResponse> {
    let report = extract(&request)?;

    Ok(Json(SolveResponse {
        ok: true,
        matches: report.matches,
        count: report.count,
        truncated: report.truncated,
    }))
}
