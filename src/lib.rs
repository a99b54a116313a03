//! # rexsolve
//!
//! Match extraction over untrusted regular-expression patterns: translate a
//! user-supplied pattern and modifier set into a safe, bounded enumeration
//! of match records, each carrying the full matched text, positional and
//! named captures, and the match offset, plus an accurate truncation signal
//! when the result was capped.
//!
//! The engine is a stateless, pure transformation — no I/O, no shared
//! buffers, no cross-invocation state — so transports can run invocations
//! concurrently without any locking discipline. HTTP routing, JSON framing,
//! and process bootstrap live in the companion `rexsolve-server` crate.
//!
//! ## Core Types
//!
//! - [`ExtractRequest`]: pattern + modifier string + subject text + optional
//!   result cap, as parsed from the wire.
//! - [`MatchRecord`]: one occurrence with captures and its offset in Unicode
//!   scalar values.
//! - [`MatchReport`]: ordered records, count, and the truncation flag.
//! - [`ExtractError`]: the validation-class failure taxonomy (missing field,
//!   invalid modifiers, oversized pattern, compile failure, exhausted scan
//!   budget).
//!
//! ## Example
//!
//! ```
//! use rexsolve::{extract, ExtractRequest};
//!
//! let req = ExtractRequest::new("(?<word>\\w+)", "alpha beta").with_modifiers("g");
//! let report = extract(&req).expect("valid request");
//!
//! assert_eq!(report.count, 2);
//! assert!(!report.truncated);
//! assert_eq!(report.matches[0].matched, "alpha");
//! assert_eq!(report.matches[1].offset, 6);
//! ```
//!
//! ## Modifier semantics
//!
//! The modifier set is `{g, i, m, s, u, y}`. Enumeration is always global:
//! `g` is accepted for wire compatibility but the engine scans for every
//! occurrence either way. `i`/`m`/`s` translate to the host primitive's
//! inline flags, `u` is a no-op (matching is Unicode-aware by default), and
//! `y` anchors each successive match at the scan cursor.

pub mod engine;
pub mod types;

pub use crate::engine::{extract, resolve_limit, validate_modifiers};
pub use crate::types::{
    ALLOWED_MODIFIERS, DEFAULT_MODIFIERS, ExtractError, ExtractRequest, MAX_PATTERN_LEN,
    MatchRecord, MatchReport, RESULT_CEILING,
};
