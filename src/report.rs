//! Report composition: analysis result to presentation view model
//!
//! Every builder here is a pure function over an [`AnalysisResult`]; the
//! composer validates first and then assembles the full [`Report`] in one
//! pass. A result that fails validation produces no view model at all, so a
//! rendered report is always internally consistent.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Result;
use crate::schema::{AnalysisResult, MetricPair, Severity, StructureStat};

/// One point of the DC-vs-CC comparison series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: f64,
}

/// One row of a method or class complexity table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub name: String,
    pub dc: f64,
    pub cc: f64,
}

/// One source line with its severity bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapRow {
    pub line: usize,
    pub text: String,
    pub severity: Severity,
}

/// Condition expression and how often it appeared at a given level
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionCount {
    pub condition: String,
    pub count: u64,
}

/// Occurrences at one nesting level, with any recorded conditions
///
/// `conditions` is empty when no nested conditions were recorded at this
/// level; the renderer shows an explicit marker rather than omitting the
/// level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelSummary {
    pub level: u32,
    pub count: u64,
    pub conditions: Vec<ConditionCount>,
}

/// Full breakdown for one structure type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureSummary {
    pub label: String,
    pub count: u64,
    pub levels: Vec<LevelSummary>,
}

/// Complete view model for one analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub dc: f64,
    pub cc: f64,
    pub chart: Vec<ChartPoint>,
    pub methods: Vec<TableRow>,
    pub classes: Vec<TableRow>,
    /// Absent when the analyzer reported no structure types at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structures: Option<Vec<StructureSummary>>,
    pub heatmap: Vec<HeatmapRow>,
}

/// Fixed two-point comparison series, DC first
pub fn build_chart_series(dc: f64, cc: f64) -> Vec<ChartPoint> {
    vec![
        ChartPoint { label: "DC", value: dc },
        ChartPoint { label: "CC", value: cc },
    ]
}

/// Table rows in the mapping's own insertion order
///
/// Agnostic over methods vs classes; the analyzer's ordering is the display
/// order, never re-sorted here.
pub fn build_table(scores: &IndexMap<String, MetricPair>) -> Vec<TableRow> {
    scores
        .iter()
        .map(|(name, pair)| TableRow {
            name: name.clone(),
            dc: pair.dc,
            cc: pair.cc,
        })
        .collect()
}

/// One heatmap row per source line, in order, every line exactly once
///
/// Lines with no recorded score bucket as [`Severity::Low`].
pub fn build_heatmap(result: &AnalysisResult) -> Vec<HeatmapRow> {
    result
        .source
        .lines()
        .enumerate()
        .map(|(idx, text)| {
            let line = idx + 1;
            let score = result.line_scores.get(&line).copied().unwrap_or(0.0);
            HeatmapRow {
                line,
                text: text.to_string(),
                severity: Severity::from_score(score),
            }
        })
        .collect()
}

/// Per-type structure summaries with levels ascending numerically
///
/// Types with a zero count stay in the output: the analyzer checked for them
/// and found none, which is different from not knowing the type.
pub fn build_structures(structures: &IndexMap<String, StructureStat>) -> Vec<StructureSummary> {
    structures
        .iter()
        .map(|(label, stat)| {
            // level_counts is a BTreeMap keyed by integer, so iteration is
            // already numeric ascending (level 10 after level 9)
            let levels = stat
                .level_counts
                .iter()
                .map(|(&level, &count)| {
                    let conditions = stat
                        .nested_conditions
                        .get(&level)
                        .map(|conds| {
                            conds
                                .iter()
                                .map(|(condition, &count)| ConditionCount {
                                    condition: condition.clone(),
                                    count,
                                })
                                .collect()
                        })
                        .unwrap_or_default();
                    LevelSummary {
                        level,
                        count,
                        conditions,
                    }
                })
                .collect();
            StructureSummary {
                label: label.clone(),
                count: stat.count,
                levels,
            }
        })
        .collect()
}

/// Validate the result and assemble the full view model
///
/// Fails fast on any contract violation; never returns a partial report.
/// Does not mutate or consume the input.
pub fn compose_report(result: &AnalysisResult) -> Result<Report> {
    result.validate()?;

    let structures = if result.structures.is_empty() {
        None
    } else {
        Some(build_structures(&result.structures))
    };

    Ok(Report {
        dc: result.dc,
        cc: result.cc,
        chart: build_chart_series(result.dc, result.cc),
        methods: build_table(&result.methods),
        classes: build_table(&result.classes),
        structures,
        heatmap: build_heatmap(result),
    })
}
