//! Data model for one analysis result
//!
//! The analyzer service reports per-line scores and per-level structure
//! breakdowns as JSON objects with stringified numeric keys. The wire structs
//! here mirror that shape exactly; [`AnalysisResult::from_wire`] converts the
//! keys to typed integers at the boundary so the rest of the crate never
//! sees string/number key confusion. A key that fails to parse is a contract
//! violation, same as a line key outside the source range.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{DcvizError, Result};

/// Severity bucket for a single source line, derived from its DC score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// DC score below 5 (including unscored lines)
    #[default]
    Low,
    /// DC score in [5, 10)
    Medium,
    /// DC score of 10 or more
    High,
}

impl Severity {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Bucket a per-line DC score. Ties resolve toward the higher bucket.
    pub fn from_score(score: f64) -> Self {
        if score >= 10.0 {
            Self::High
        } else if score >= 5.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// DC/CC score pair for one method or class
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricPair {
    pub dc: f64,
    pub cc: f64,
}

/// Occurrence statistics for one control-structure type
///
/// Level keys are nesting depths counted from 1. `nested_conditions` records,
/// per level, how often each condition expression appeared; a level with
/// occurrences but no recorded conditions is simply absent from the map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructureStat {
    /// Total occurrences of this structure type across the unit
    pub count: u64,
    /// Occurrences per nesting level, ascending by level
    pub level_counts: BTreeMap<u32, u64>,
    /// Condition expression counts per nesting level (insertion order kept)
    pub nested_conditions: BTreeMap<u32, IndexMap<String, u64>>,
}

/// One analysis result plus the source text it was computed from
///
/// Immutable once built; held for the duration of the current view and
/// replaced wholesale by the next analysis. Method/class insertion order is
/// the analyzer's own ordering and is treated as the intended display order.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Total decisional complexity of the unit
    pub dc: f64,
    /// Total cyclomatic complexity of the unit
    pub cc: f64,
    /// Sparse 1-based line number to DC score; absent line means score 0
    pub line_scores: BTreeMap<usize, f64>,
    /// Per-method scores, analyzer order
    pub methods: IndexMap<String, MetricPair>,
    /// Per-class scores, analyzer order
    pub classes: IndexMap<String, MetricPair>,
    /// Per-structure-type breakdown, analyzer order
    pub structures: IndexMap<String, StructureStat>,
    /// The submitted source text, lines aligned 1-based with `line_scores`
    pub source: String,
}

// ============================================
// Wire shapes (analyzer response, verbatim)
// ============================================

/// Successful `/analyze` response as it appears on the wire
///
/// All optional maps default to empty: absence means "no data", never an
/// error. Numeric keys arrive stringified and are parsed in `from_wire`.
#[derive(Debug, Deserialize)]
pub struct WireAnalysis {
    pub dc: f64,
    pub cc: f64,
    #[serde(default)]
    pub line_dc_map: IndexMap<String, f64>,
    #[serde(default)]
    pub methods: IndexMap<String, MetricPair>,
    #[serde(default)]
    pub classes: IndexMap<String, MetricPair>,
    #[serde(default)]
    pub structures: IndexMap<String, WireStructureStat>,
}

/// Wire shape of one structure-type entry
#[derive(Debug, Deserialize)]
pub struct WireStructureStat {
    pub count: u64,
    #[serde(default)]
    pub level_counts: IndexMap<String, u64>,
    #[serde(default)]
    pub nested_conditions: IndexMap<String, IndexMap<String, u64>>,
}

fn parse_key<T: std::str::FromStr>(key: &str, what: &str) -> Result<T> {
    key.parse().map_err(|_| DcvizError::ContractViolation {
        message: format!("non-numeric {} key: {:?}", what, key),
    })
}

impl AnalysisResult {
    /// Build the canonical model from a wire response and the submitted code
    ///
    /// Converts stringified line and level keys to integers. Does not check
    /// range or count invariants; that is [`validate`](Self::validate), run
    /// by the report composer.
    pub fn from_wire(wire: WireAnalysis, source: String) -> Result<Self> {
        let mut line_scores = BTreeMap::new();
        for (key, score) in wire.line_dc_map {
            line_scores.insert(parse_key::<usize>(&key, "line")?, score);
        }

        let mut structures = IndexMap::new();
        for (label, stat) in wire.structures {
            let mut level_counts = BTreeMap::new();
            for (level, count) in stat.level_counts {
                level_counts.insert(parse_key::<u32>(&level, "nesting level")?, count);
            }
            let mut nested_conditions = BTreeMap::new();
            for (level, conditions) in stat.nested_conditions {
                nested_conditions.insert(parse_key::<u32>(&level, "nesting level")?, conditions);
            }
            structures.insert(
                label,
                StructureStat {
                    count: stat.count,
                    level_counts,
                    nested_conditions,
                },
            );
        }

        Ok(Self {
            dc: wire.dc,
            cc: wire.cc,
            line_scores,
            methods: wire.methods,
            classes: wire.classes,
            structures,
            source,
        })
    }

    /// Number of source lines (heatmap length)
    pub fn line_count(&self) -> usize {
        self.source.lines().count()
    }

    /// Check the cross-field invariants the analyzer is supposed to uphold
    ///
    /// - every `line_scores` key lies within `1..=line_count()`
    /// - for each structure type with recorded levels, the level counts sum
    ///   to the type's total `count`
    /// - every level carrying nested conditions also has a recorded
    ///   occurrence count
    ///
    /// A violation means a stale or mismatched result and is rejected rather
    /// than repaired.
    pub fn validate(&self) -> Result<()> {
        let lines = self.line_count();
        for &line in self.line_scores.keys() {
            if line == 0 || line > lines {
                return Err(DcvizError::ContractViolation {
                    message: format!(
                        "line score key {} outside source range 1..={}",
                        line, lines
                    ),
                });
            }
        }

        for (label, stat) in &self.structures {
            if !stat.level_counts.is_empty() {
                let sum: u64 = stat.level_counts.values().sum();
                if sum != stat.count {
                    return Err(DcvizError::ContractViolation {
                        message: format!(
                            "structure {:?}: level counts sum to {} but total is {}",
                            label, sum, stat.count
                        ),
                    });
                }
            }
            for level in stat.nested_conditions.keys() {
                if !stat.level_counts.contains_key(level) {
                    return Err(DcvizError::ContractViolation {
                        message: format!(
                            "structure {:?}: conditions recorded at level {} with no occurrences",
                            label, level
                        ),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_boundaries() {
        assert_eq!(Severity::from_score(0.0), Severity::Low);
        assert_eq!(Severity::from_score(4.999), Severity::Low);
        assert_eq!(Severity::from_score(5.0), Severity::Medium);
        assert_eq!(Severity::from_score(9.999), Severity::Medium);
        assert_eq!(Severity::from_score(10.0), Severity::High);
        assert_eq!(Severity::from_score(42.0), Severity::High);
    }

    #[test]
    fn test_wire_absent_maps_default_empty() {
        let wire: WireAnalysis = serde_json::from_str(r#"{"dc": 3.0, "cc": 2.0}"#).unwrap();
        let result = AnalysisResult::from_wire(wire, "x = 1\n".to_string()).unwrap();
        assert!(result.line_scores.is_empty());
        assert!(result.methods.is_empty());
        assert!(result.classes.is_empty());
        assert!(result.structures.is_empty());
    }

    #[test]
    fn test_wire_stringified_keys_parsed() {
        let wire: WireAnalysis = serde_json::from_str(
            r#"{"dc": 1, "cc": 1, "line_dc_map": {"2": 7.5},
                "structures": {"if": {"count": 1, "level_counts": {"3": 1}}}}"#,
        )
        .unwrap();
        let result = AnalysisResult::from_wire(wire, "a\nb\nc\n".to_string()).unwrap();
        assert_eq!(result.line_scores.get(&2), Some(&7.5));
        assert_eq!(result.structures["if"].level_counts.get(&3), Some(&1));
    }

    #[test]
    fn test_wire_non_numeric_line_key_rejected() {
        let wire: WireAnalysis =
            serde_json::from_str(r#"{"dc": 1, "cc": 1, "line_dc_map": {"abc": 2.0}}"#).unwrap();
        let err = AnalysisResult::from_wire(wire, String::new()).unwrap_err();
        assert!(matches!(err, DcvizError::ContractViolation { .. }));
    }

    #[test]
    fn test_validate_rejects_out_of_range_line() {
        let wire: WireAnalysis =
            serde_json::from_str(r#"{"dc": 1, "cc": 1, "line_dc_map": {"5": 2.0}}"#).unwrap();
        let result = AnalysisResult::from_wire(wire, "one\ntwo\n".to_string()).unwrap();
        assert!(matches!(
            result.validate(),
            Err(DcvizError::ContractViolation { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_level_sum_mismatch() {
        let wire: WireAnalysis = serde_json::from_str(
            r#"{"dc": 1, "cc": 1,
                "structures": {"loop": {"count": 3, "level_counts": {"1": 1}}}}"#,
        )
        .unwrap();
        let result = AnalysisResult::from_wire(wire, String::new()).unwrap();
        assert!(matches!(
            result.validate(),
            Err(DcvizError::ContractViolation { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_conditions_without_occurrences() {
        let wire: WireAnalysis = serde_json::from_str(
            r#"{"dc": 1, "cc": 1,
                "structures": {"if": {"count": 1, "level_counts": {"1": 1},
                                      "nested_conditions": {"2": {"x>0": 1}}}}}"#,
        )
        .unwrap();
        let result = AnalysisResult::from_wire(wire, String::new()).unwrap();
        assert!(matches!(
            result.validate(),
            Err(DcvizError::ContractViolation { .. })
        ));
    }

    #[test]
    fn test_validate_accepts_count_with_no_levels() {
        // Levels not recorded at all implies no per-level data, not a mismatch
        let wire: WireAnalysis = serde_json::from_str(
            r#"{"dc": 1, "cc": 1, "structures": {"switch": {"count": 2}}}"#,
        )
        .unwrap();
        let result = AnalysisResult::from_wire(wire, String::new()).unwrap();
        assert!(result.validate().is_ok());
    }
}
