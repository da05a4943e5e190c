//! End-to-end tests for the wire → model → report → render pipeline
//!
//! Fixtures mirror real analyzer responses (stringified numeric keys,
//! optional maps) so these tests exercise the same path the analyze command
//! takes after the network hop.

use dcviz::{
    compose_report, filter_history, render_report, AnalysisResult, DcvizError, HistoryEntry,
    Severity, WireAnalysis,
};

fn decode(body: &str, source: &str) -> AnalysisResult {
    let wire: WireAnalysis = serde_json::from_str(body).expect("fixture must deserialize");
    AnalysisResult::from_wire(wire, source.to_string()).expect("fixture must convert")
}

#[test]
fn full_response_composes_and_renders() {
    let source = "def f(x):\n    if x > 0:\n        return 1\n    return 0\n";
    let body = r#"{
        "dc": 12.0,
        "cc": 4.0,
        "line_dc_map": {"2": 6.5, "3": 11.0},
        "methods": {"f": {"dc": 12.0, "cc": 4.0}},
        "classes": {},
        "structures": {
            "if": {
                "count": 3,
                "level_counts": {"1": 2, "2": 1},
                "nested_conditions": {"1": {"x > 0": 2}}
            }
        }
    }"#;
    let result = decode(body, source);
    let report = compose_report(&result).unwrap();

    // Totals pass through untouched
    assert_eq!(report.dc, 12.0);
    assert_eq!(report.cc, 4.0);
    assert_eq!(report.chart[0].label, "DC");
    assert_eq!(report.chart[1].label, "CC");

    // Heatmap covers every line, missing scores bucket low
    assert_eq!(report.heatmap.len(), 4);
    assert_eq!(report.heatmap[0].severity, Severity::Low);
    assert_eq!(report.heatmap[1].severity, Severity::Medium);
    assert_eq!(report.heatmap[2].severity, Severity::High);
    assert_eq!(report.heatmap[3].severity, Severity::Low);

    let text = render_report(&report);
    assert!(text.contains("DC: 12"));
    assert!(text.contains("if (total 3)"));
    assert!(text.contains("level 1: 2 occurrence(s)"));
    assert!(text.contains("x > 0: 2"));
    // Level 2 has occurrences but no recorded conditions
    assert!(text.contains("level 2: 1 occurrence(s)"));
    assert!(text.contains("no nested conditions"));
    assert!(text.contains("[high"));
}

#[test]
fn empty_optional_sections_render_empty_not_error() {
    // Scenario: valid result with no methods, classes, or structures
    let result = decode(r#"{"dc": 1.0, "cc": 1.0}"#, "print('hi')\n");
    let report = compose_report(&result).unwrap();
    assert!(report.methods.is_empty());
    assert!(report.classes.is_empty());
    assert!(report.structures.is_none());

    let text = render_report(&report);
    assert!(text.contains("(none)"));
    assert!(!text.contains("Control structures"));
}

#[test]
fn method_order_survives_to_rendered_rows() {
    // "b" inserted before "a" must stay first; the analyzer's order is the
    // display order
    let body = r#"{
        "dc": 3.0, "cc": 3.0,
        "methods": {"b": {"dc": 1.0, "cc": 1.0}, "a": {"dc": 2.0, "cc": 2.0}}
    }"#;
    let result = decode(body, "x\n");
    let report = compose_report(&result).unwrap();
    assert_eq!(report.methods[0].name, "b");
    assert_eq!(report.methods[1].name, "a");
}

#[test]
fn out_of_range_line_key_rejects_whole_report() {
    let body = r#"{"dc": 1.0, "cc": 1.0, "line_dc_map": {"10": 3.0}}"#;
    let result = decode(body, "only\ntwo\n");
    let err = compose_report(&result).unwrap_err();
    assert!(matches!(err, DcvizError::ContractViolation { .. }));
}

#[test]
fn level_count_mismatch_rejects_whole_report() {
    let body = r#"{
        "dc": 1.0, "cc": 1.0,
        "structures": {"loop": {"count": 5, "level_counts": {"1": 1, "2": 1}}}
    }"#;
    let result = decode(body, "a\n");
    assert!(matches!(
        compose_report(&result),
        Err(DcvizError::ContractViolation { .. })
    ));
}

#[test]
fn zero_length_source_is_valid_when_unscored() {
    let result = decode(r#"{"dc": 0.0, "cc": 0.0}"#, "");
    let report = compose_report(&result).unwrap();
    assert!(report.heatmap.is_empty());
}

#[test]
fn displayed_totals_match_analyzer_totals() {
    // The analyzer may or may not guarantee that table rows sum to the
    // totals; the client only displays both. What must hold is that neither
    // side is altered in transit.
    let body = r#"{
        "dc": 9.0, "cc": 5.0,
        "methods": {"f": {"dc": 4.0, "cc": 2.0}, "g": {"dc": 5.0, "cc": 3.0}}
    }"#;
    let result = decode(body, "x\n");
    let report = compose_report(&result).unwrap();
    assert_eq!(report.dc, result.dc);
    assert_eq!(report.cc, result.cc);
    let table_dc: f64 = report.methods.iter().map(|r| r.dc).sum();
    assert_eq!(table_dc, 9.0);
}

#[test]
fn history_wire_decodes_and_filters() {
    let body = r#"[
        {"id": 1, "filename": "a.py", "language": "python", "dc": 3.0, "cc": 2.0,
         "timestamp": "Wed, 05 Aug 2026 10:00:00 GMT", "code": "x = 1"},
        {"id": 2, "filename": "b.java", "language": "java", "dc": 7.0, "cc": 4.0,
         "timestamp": "Thu, 06 Aug 2026 09:30:00 GMT", "code": "class B {}"}
    ]"#;
    let entries: Vec<HistoryEntry> = serde_json::from_str(body).unwrap();
    assert_eq!(entries.len(), 2);

    let hits = filter_history(&entries, "py");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);

    // Language matches too, case-insensitively
    let hits = filter_history(&entries, "JAV");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].filename, "b.java");
}
