//! Command handlers for the dcviz CLI
//!
//! Each module implements one subcommand. Handlers take their `Args` struct
//! from `cli.rs`, the shared [`ApiClient`](crate::client::ApiClient), and a
//! [`CommandContext`] for output format and verbosity, and return the text to
//! print. Network calls run on a per-command tokio runtime.

pub mod analyze;
pub mod auth;
pub mod export;
pub mod history;

pub use analyze::run_analyze;
pub use auth::{run_login, run_logout, run_reset_password, run_signup};
pub use export::run_export;
pub use history::run_history;

use crate::cli::OutputFormat;
use crate::error::{DcvizError, Result};

/// Shared context passed to all command handlers
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Output format (text or json)
    pub format: OutputFormat,
    /// Show verbose output
    pub verbose: bool,
}

impl Default for CommandContext {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            verbose: false,
        }
    }
}

impl CommandContext {
    /// Create a new CommandContext from CLI args
    pub fn from_cli(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }
}

/// Build the runtime used to drive one command's client calls
pub(crate) fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new().map_err(|e| DcvizError::ConfigError {
        message: format!("Failed to create async runtime: {}", e),
    })
}
