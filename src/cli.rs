//! CLI argument definitions using clap with subcommand architecture

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::client::{ExportKind, Language};

/// Client for a remote decisional-complexity analyzer
#[derive(Parser, Debug)]
#[command(name = "dcviz")]
#[command(about = "Submit code to a complexity analyzer and view DC/CC reports")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (applies to all commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of the analyzer service
    #[arg(long, global = true, env = "DCVIZ_URL", value_name = "URL")]
    pub base_url: Option<String>,
}

/// Available subcommands for dcviz
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a source file (or stdin) and render the complexity report
    #[command(visible_alias = "a")]
    Analyze(AnalyzeArgs),

    /// Browse, filter, or delete past submissions
    #[command(visible_alias = "h")]
    History(HistoryArgs),

    /// Log in and establish a session
    Login(CredentialArgs),

    /// Create an account
    Signup(CredentialArgs),

    /// Tear down the current session
    Logout,

    /// Reset an account password
    ResetPassword(ResetPasswordArgs),

    /// Download the latest analysis as PDF or CSV
    Export(ExportArgs),
}

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Source file to analyze; reads stdin when omitted
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Source language (inferred from the file extension when omitted)
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// Filename reported to the analyzer (defaults to the file's own name)
    #[arg(long, value_name = "NAME")]
    pub filename: Option<String>,
}

/// Arguments for the history command
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Filter entries by filename or language substring (local, case-insensitive)
    #[arg(short, long, value_name = "TERM")]
    pub search: Option<String>,

    /// Delete the entry with this id instead of listing
    #[arg(long, value_name = "ID")]
    pub delete: Option<u64>,

    /// Show the stored source code of each listed entry
    #[arg(long)]
    pub show_code: bool,
}

/// Email/password pair for login and signup
#[derive(Args, Debug)]
pub struct CredentialArgs {
    /// Account email
    pub email: String,

    /// Account password
    pub password: String,
}

/// Arguments for the reset-password command
#[derive(Args, Debug)]
pub struct ResetPasswordArgs {
    /// Account email
    pub email: String,

    /// Replacement password
    pub new_password: String,
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub kind: ExportKind,

    /// Output file (defaults to a timestamped name in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}
