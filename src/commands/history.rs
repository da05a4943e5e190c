//! History command handler - list, filter, and delete past submissions

use std::fmt::Write as _;

use crate::cli::{HistoryArgs, OutputFormat};
use crate::client::ApiClient;
use crate::commands::{runtime, CommandContext};
use crate::error::Result;
use crate::history::{filter_history, HistoryEntry};

/// Run the history command
pub fn run_history(args: &HistoryArgs, client: &ApiClient, ctx: &CommandContext) -> Result<String> {
    let rt = runtime()?;

    if let Some(id) = args.delete {
        rt.block_on(client.delete_history(id))?;
        return Ok(format!("Deleted history entry {}\n", id));
    }

    let entries = rt.block_on(client.history())?;
    let term = args.search.as_deref().unwrap_or("");
    let filtered = filter_history(&entries, term);

    match ctx.format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&filtered)?)),
        OutputFormat::Text => Ok(format_entries(&filtered, args.show_code)),
    }
}

fn format_entries(entries: &[&HistoryEntry], show_code: bool) -> String {
    if entries.is_empty() {
        return "No matching submissions found.\n".to_string();
    }

    let mut text = String::new();
    let name_width = entries
        .iter()
        .map(|e| e.filename.len())
        .max()
        .unwrap_or(0)
        .max(8);
    let _ = writeln!(
        text,
        "{:>5}  {:<name_width$}  {:<8}  {:>8}  {:>8}  timestamp",
        "id", "filename", "language", "DC", "CC"
    );
    for entry in entries {
        let _ = writeln!(
            text,
            "{:>5}  {:<name_width$}  {:<8}  {:>8}  {:>8}  {}",
            entry.id, entry.filename, entry.language, entry.dc, entry.cc, entry.timestamp
        );
        if show_code {
            for line in entry.code.lines() {
                let _ = writeln!(text, "       | {}", line);
            }
        }
    }
    text
}
