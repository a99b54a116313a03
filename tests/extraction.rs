//! Integration tests exercising the public extraction API the way a
//! transport would: requests arrive as parsed JSON, reports leave as JSON.

use rexsolve::{ExtractRequest, RESULT_CEILING, extract, resolve_limit};
use serde_json::json;

#[test]
fn report_count_never_exceeds_effective_limit() {
    let text = "x".repeat(500);
    for requested in [None, Some(-5.0), Some(0.0), Some(3.9), Some(1000.0)] {
        let mut req = ExtractRequest::new("x", text.clone());
        req.max_results = requested;

        let report = extract(&req).expect("valid request");
        let effective = resolve_limit(requested);

        assert_eq!(report.count, report.matches.len());
        assert!(report.count <= effective);
        assert!(report.count <= RESULT_CEILING);
        assert_eq!(report.truncated, report.count < 500);
    }
}

#[test]
fn offsets_are_non_decreasing() {
    let req = ExtractRequest::new("\\w+", "one two three four five");
    let report = extract(&req).expect("valid request");
    let offsets: Vec<usize> = report.matches.iter().map(|m| m.offset).collect();
    let mut sorted = offsets.clone();
    sorted.sort_unstable();
    assert_eq!(offsets, sorted);
}

#[test]
fn wire_round_trip_matches_engine_output() {
    let req: ExtractRequest = serde_json::from_value(json!({
        "pattern": "(?<first>t)(?<rest>est)",
        "flags": "g",
        "text": "test",
    }))
    .expect("parse request");

    let report = extract(&req).expect("valid request");
    let wire = serde_json::to_value(&report).expect("serialize report");

    assert_eq!(
        wire,
        json!({
            "matches": [{
                "match": "test",
                "groups": ["t", "est"],
                "named": { "first": "t", "rest": "est" },
                "index": 0,
            }],
            "count": 1,
            "truncated": false,
        })
    );
}

#[test]
fn repeated_invocations_are_bit_identical() {
    let req = ExtractRequest::new("(a+)(b?)", "aab aa ab").with_modifiers("giy");
    let first = serde_json::to_string(&extract(&req).expect("first run")).expect("serialize");
    let second = serde_json::to_string(&extract(&req).expect("second run")).expect("serialize");
    assert_eq!(first, second);
}
