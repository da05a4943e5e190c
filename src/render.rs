//! Plain-text rendering of a composed report
//!
//! Pure formatting over an already-validated [`Report`]; JSON output goes
//! through serde at the command layer instead.

use std::fmt::Write as _;

use crate::report::{Report, StructureSummary, TableRow};

const BAR_WIDTH: usize = 40;

/// Render a full report for the terminal
pub fn render_report(report: &Report) -> String {
    let mut text = String::new();

    text.push_str("═══════════════════════════════════════════\n");
    text.push_str("  COMPLEXITY ANALYSIS\n");
    text.push_str("═══════════════════════════════════════════\n\n");

    let _ = writeln!(text, "DC: {}", report.dc);
    let _ = writeln!(text, "CC: {}\n", report.cc);

    render_chart(&mut text, report);
    render_table(&mut text, "Method-wise complexity", &report.methods);
    render_table(&mut text, "Class-wise complexity", &report.classes);
    if let Some(ref structures) = report.structures {
        render_structures(&mut text, structures);
    }
    render_heatmap(&mut text, report);

    text
}

fn render_chart(text: &mut String, report: &Report) {
    let max = report
        .chart
        .iter()
        .map(|p| p.value)
        .fold(0.0_f64, f64::max);
    text.push_str("DC vs CC:\n");
    for point in &report.chart {
        let width = if max > 0.0 {
            ((point.value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = "█".repeat(width);
        let _ = writeln!(
            text,
            "  {:<3} {:<pad$} {}",
            point.label,
            bar,
            point.value,
            pad = BAR_WIDTH
        );
    }
    text.push('\n');
}

fn render_table(text: &mut String, title: &str, rows: &[TableRow]) {
    let _ = writeln!(text, "{}:", title);
    if rows.is_empty() {
        text.push_str("  (none)\n\n");
        return;
    }
    let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0).max(4);
    let _ = writeln!(text, "  {:<name_width$}  {:>8}  {:>8}", "name", "DC", "CC");
    for row in rows {
        let _ = writeln!(text, "  {:<name_width$}  {:>8}  {:>8}", row.name, row.dc, row.cc);
    }
    text.push('\n');
}

fn render_structures(text: &mut String, structures: &[StructureSummary]) {
    text.push_str("Control structures:\n");
    for summary in structures {
        let _ = writeln!(text, "  {} (total {})", summary.label, summary.count);
        for level in &summary.levels {
            let _ = writeln!(
                text,
                "    level {}: {} occurrence(s)",
                level.level, level.count
            );
            if level.conditions.is_empty() {
                text.push_str("      no nested conditions\n");
            } else {
                for condition in &level.conditions {
                    let _ = writeln!(text, "      {}: {}", condition.condition, condition.count);
                }
            }
        }
    }
    text.push('\n');
}

fn render_heatmap(text: &mut String, report: &Report) {
    text.push_str("Heatmap (line DC score: <5 low, 5-9 medium, >=10 high):\n");
    let num_width = report
        .heatmap
        .last()
        .map(|row| row.line.to_string().len())
        .unwrap_or(1);
    for row in &report.heatmap {
        let _ = writeln!(
            text,
            "  {:>num_width$} [{:<6}] {}",
            row.line,
            row.severity.as_str(),
            row.text
        );
    }
}
