//! Export command handler - download PDF/CSV exports of the latest analysis
//!
//! The export bytes are opaque to the client; they are written to disk
//! verbatim, never parsed.

use std::fs;
use std::path::PathBuf;

use crate::cli::ExportArgs;
use crate::client::{ApiClient, ExportKind};
use crate::commands::{runtime, CommandContext};
use crate::error::Result;

/// Run the export command
pub fn run_export(args: &ExportArgs, client: &ApiClient, _ctx: &CommandContext) -> Result<String> {
    let bytes = runtime()?.block_on(client.download(args.kind))?;
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(args.kind));
    fs::write(&path, &bytes)?;
    Ok(format!(
        "Wrote {} bytes to {}\n",
        bytes.len(),
        path.display()
    ))
}

fn default_output_path(kind: ExportKind) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    PathBuf::from(format!("dc-report-{}.{}", stamp, kind.extension()))
}
