//! Match extraction: validation, limit resolution, pattern compilation, and
//! bounded left-to-right enumeration with truncation detection.
//!
//! The engine is a pure transformation: it holds no state between calls, so
//! concurrent invocations are independent by construction. Each call owns
//! its compiled matcher and result buffer exclusively for its duration.

use std::collections::BTreeMap;

use fancy_regex::Regex;

use crate::types::{
    ALLOWED_MODIFIERS, DEFAULT_MODIFIERS, ExtractError, ExtractRequest, MAX_PATTERN_LEN,
    MatchRecord, MatchReport, RESULT_CEILING,
};


/// Run one extraction request end to end.
///
/// Validation is all-or-nothing and happens before compilation: required
/// fields, then modifiers, then pattern length. The scan itself always
/// enumerates every occurrence regardless of the `g` modifier; `y` anchors
/// each successive match at the cursor.
pub fn extract(req: &ExtractRequest) -> Result<MatchReport, ExtractError> {
    let pattern = match req.pattern.as_deref() {
        Some(p) if !p.is_empty() => p,
        _ => return Err(ExtractError::MissingField("pattern")),
    };
    let text = req
        .text
        .as_deref()
        .ok_or(ExtractError::MissingField("text"))?;
    let modifiers = req.modifiers.as_deref().unwrap_or(DEFAULT_MODIFIERS);
    validate_modifiers(modifiers)?;

    let length = pattern.chars().count();
    if length > MAX_PATTERN_LEN {
        return Err(ExtractError::PatternTooLong {
            length,
            limit: MAX_PATTERN_LEN,
        });
    }

    let limit = resolve_limit(req.max_results);
    let matcher = compile(pattern, modifiers)?;
    tracing::debug!(limit, sticky = modifiers.contains('y'), "scanning text");
    enumerate(&matcher, text, limit, modifiers.contains('y'))
}

/// Reject any modifier character outside the allowed set. Duplicates are a
/// caller quirk, not an error; the empty string is permitted.
pub fn validate_modifiers(modifiers: &str) -> Result<(), ExtractError> {
    if modifiers.chars().all(|c| ALLOWED_MODIFIERS.contains(c)) {
        Ok(())
    } else {
        Err(ExtractError::InvalidModifiers(modifiers.to_string()))
    }
}

/// Derive the effective result cap from the caller-supplied value.
///
/// Finite numbers are floor-truncated and clamped into `[1, RESULT_CEILING]`;
/// anything else (absent, NaN, infinite) falls back to the ceiling.
pub fn resolve_limit(requested: Option<f64>) -> usize {
    match requested {
        Some(n) if n.is_finite() => (n.floor() as i64).clamp(1, RESULT_CEILING as i64) as usize,
        _ => RESULT_CEILING,
    }
}

/// Translate the modifier set into inline flag groups and compile.
///
/// `i`, `m`, and `s` map onto the engine's inline flags. `u` needs no
/// translation because the engine is Unicode-aware by default, and `g`/`y`
/// shape the scan loop rather than the compiled program.
fn compile(pattern: &str, modifiers: &str) -> Result<Regex, ExtractError> {
    let mut translated = String::with_capacity(pattern.len() + 12);
    for (flag, inline) in [('i', "(?i)"), ('m', "(?m)"), ('s', "(?s)")] {
        if modifiers.contains(flag) {
            translated.push_str(inline);
        }
    }
    translated.push_str(pattern);
    Regex::new(&translated).map_err(|e| ExtractError::PatternCompile(e.to_string()))
}

/// Scan `text` left to right, materializing up to `limit` records.
///
/// Truncation is detected by continuing the same scan for one further
/// occurrence instead of re-running it unbounded, so the worst case stays a
/// single pass. After an empty match the cursor advances by one scalar
/// value to keep the scan finite.
fn enumerate(
    matcher: &Regex,
    text: &str,
    limit: usize,
    sticky: bool,
) -> Result<MatchReport, ExtractError> {
    let names: Vec<Option<&str>> = matcher.capture_names().collect();
    let has_named = names.iter().any(Option::is_some);

    let mut matches: Vec<MatchRecord> = Vec::new();
    let mut truncated = false;

    // Byte cursor plus a running scalar-value tally so reported offsets stay
    // O(text) over the whole scan.
    let mut pos = 0usize;
    let mut counted_to = 0usize;
    let mut offset = 0usize;

    while pos <= text.len() {
        let caps = matcher
            .captures_from_pos(text, pos)
            .map_err(|e| ExtractError::ScanBudget(e.to_string()))?;
        let Some(caps) = caps else { break };
        let Some(whole) = caps.get(0) else { break };

        // Sticky scanning ends at the first gap between cursor and hit.
        if sticky && whole.start() != pos {
            break;
        }
        if matches.len() == limit {
            truncated = true;
            break;
        }

        offset += text[counted_to..whole.start()].chars().count();
        counted_to = whole.start();

        let groups = (1..names.len())
            .map(|i| caps.get(i).map(|g| g.as_str().to_string()))
            .collect();
        let named = has_named.then(|| {
            names
                .iter()
                .enumerate()
                .filter_map(|(i, name)| {
                    name.map(|n| (n.to_string(), caps.get(i).map(|g| g.as_str().to_string())))
                })
                .collect::<BTreeMap<_, _>>()
        });

        matches.push(MatchRecord {
            matched: whole.as_str().to_string(),
            groups,
            named,
            offset,
        });

        pos = if whole.end() > whole.start() {
            whole.end()
        } else {
            next_scalar_boundary(text, whole.end())
        };
    }

    let count = matches.len();
    Ok(MatchReport {
        matches,
        count,
        truncated,
    })
}

/// Byte index one Unicode scalar value past `pos`, or past the end of
/// `text` when `pos` already sits there (which terminates the scan loop).
fn next_scalar_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| pos + c.len_utf8())
}
