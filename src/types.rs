use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::collections::BTreeMap;

/// Flag characters accepted in a request's modifier string.
///
/// These mirror the host primitive's flag set: global, case-insensitive,
/// multiline, dot-all, unicode, sticky.
pub const ALLOWED_MODIFIERS: &str = "gimsuy";

/// Modifier string applied when a request omits one.
pub const DEFAULT_MODIFIERS: &str = "g";

/// Upper bound on pattern length, in Unicode scalar values.
pub const MAX_PATTERN_LEN: usize = 2000;

/// Hard ceiling on returned match records, independent of caller intent.
pub const RESULT_CEILING: usize = 100;

/// A single match extraction request.
///
/// Fields are optional because the request arrives as untrusted, already
/// parsed JSON; presence and content are checked by the engine's validator,
/// not by the transport. Wire names (`flags`, `maxResults`) follow the
/// public API contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractRequest {
    /// Regular-expression source string. Required, 1–2000 scalar values.
    pub pattern: Option<String>,
    /// Modifier string, characters drawn from [`ALLOWED_MODIFIERS`].
    /// Defaults to [`DEFAULT_MODIFIERS`] when absent.
    #[serde(rename = "flags", skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<String>,
    /// Subject text to scan. Required; the empty string is allowed.
    pub text: Option<String>,
    /// Requested result cap. Floor-truncated and clamped into
    /// `[1, RESULT_CEILING]`; non-finite values fall back to the default.
    #[serde(rename = "maxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<f64>,
}

impl ExtractRequest {
    /// Convenience constructor with default modifiers and result cap.
    pub fn new(pattern: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            modifiers: None,
            text: Some(text.into()),
            max_results: None,
        }
    }

    /// Replace the modifier string.
    pub fn with_modifiers(mut self, modifiers: impl Into<String>) -> Self {
        self.modifiers = Some(modifiers.into());
        self
    }

    /// Replace the requested result cap.
    pub fn with_max_results(mut self, max_results: f64) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

/// One occurrence of the pattern in the subject text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchRecord {
    /// Full matched text.
    #[serde(rename = "match")]
    pub matched: String,
    /// Positional captures in declaration order. `None` marks an optional
    /// group that did not participate in this match, distinct from an
    /// empty-string capture.
    pub groups: Vec<Option<String>>,
    /// Name → capture map, or `None` when the pattern declares no named
    /// groups. Every declared name is present; non-participating names map
    /// to `None`.
    pub named: Option<BTreeMap<String, Option<String>>>,
    /// Zero-based match start offset into the subject text, measured in
    /// Unicode scalar values.
    #[serde(rename = "index")]
    pub offset: usize,
}

/// Ordered result of one bounded scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchReport {
    /// Match records in ascending `offset` order.
    pub matches: Vec<MatchRecord>,
    /// Always `matches.len()`, kept explicit for the wire contract.
    pub count: usize,
    /// True iff the unbounded scan holds more occurrences than `count`.
    pub truncated: bool,
}

/// Validation-class failures produced by the engine.
///
/// All variants are deterministic, caller-correctable rejections; none
/// degrade the engine for subsequent invocations. The boundary maps them
/// uniformly to a rejected-request outcome and only the carried reason
/// distinguishes them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// A required field is absent or empty.
    #[error("request must include `{0}`")]
    MissingField(&'static str),
    /// The modifier string contains a character outside [`ALLOWED_MODIFIERS`].
    #[error("invalid regex flags `{0}`: allowed characters are \"gimsuy\"")]
    InvalidModifiers(String),
    /// The pattern exceeds [`MAX_PATTERN_LEN`] scalar values.
    #[error("pattern too long: {length} characters exceeds the {limit} limit")]
    PatternTooLong { length: usize, limit: usize },
    /// The pattern is not syntactically valid for the host primitive.
    #[error("pattern failed to compile: {0}")]
    PatternCompile(String),
    /// The host primitive gave up mid-scan, e.g. its backtracking budget
    /// was exhausted by a pathological pattern/text combination.
    #[error("matching aborted: {0}")]
    ScanBudget(String),
}
