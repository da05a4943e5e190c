//! dcviz: client for a remote decisional-complexity analyzer
//!
//! Submits source code to an analyzer service and turns the returned metrics
//! (decisional complexity "DC" and cyclomatic complexity "CC") into terminal
//! reports: a DC-vs-CC comparison series, method/class tables in the
//! analyzer's own order, a per-line severity heatmap, and a nested
//! control-structure breakdown. Past submissions can be listed, filtered
//! locally, and deleted.
//!
//! The transformation pipeline (`schema` → `report` → `render`) is pure and
//! synchronous; only the `client` module talks to the network.
//!
//! # Example
//!
//! ```ignore
//! use dcviz::{compose_report, render_report, AnalysisResult, WireAnalysis};
//!
//! let wire: WireAnalysis = serde_json::from_str(response_body)?;
//! let result = AnalysisResult::from_wire(wire, submitted_code)?;
//! let report = compose_report(&result)?;
//! println!("{}", render_report(&report));
//! ```

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod render;
pub mod report;
pub mod schema;

// Re-export commonly used types
pub use cli::{Cli, Commands, OutputFormat};
pub use client::{AnalyzeRequest, ApiClient, ExportKind, Language};
pub use config::Config;
pub use error::{DcvizError, Result};
pub use history::{filter_history, HistoryEntry};
pub use render::render_report;
pub use report::{
    build_chart_series, build_heatmap, build_structures, build_table, compose_report, ChartPoint,
    ConditionCount, HeatmapRow, LevelSummary, Report, StructureSummary, TableRow,
};
pub use schema::{AnalysisResult, MetricPair, Severity, StructureStat, WireAnalysis};
