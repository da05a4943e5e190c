//! Error types and exit codes for dcviz

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for dcviz operations
#[derive(Error, Debug)]
pub enum DcvizError {
    /// The analyzer response broke the wire contract (bad keys, inconsistent
    /// counts). Surfaced distinctly from ordinary upstream failures because
    /// it indicates a defect in the analyzer/client contract, not a
    /// transient error.
    #[error("Analyzer contract violation: {message}")]
    ContractViolation { message: String },

    /// Failure reported by the analyzer/history/auth service. The message is
    /// the service's own `error` field when present.
    #[error("{message}")]
    Upstream { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DcvizError {
    /// Convert error to appropriate exit code:
    /// - 0: Success
    /// - 1: IO error
    /// - 2: Configuration / usage error
    /// - 3: Upstream service failure (network or structured error response)
    /// - 4: Analyzer contract violation
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Io(_) => ExitCode::from(1),
            Self::ConfigError { .. } => ExitCode::from(2),
            Self::Upstream { .. } => ExitCode::from(3),
            Self::Http(_) => ExitCode::from(3),
            Self::Json(_) => ExitCode::from(4),
            Self::ContractViolation { .. } => ExitCode::from(4),
        }
    }
}

/// Result type alias for dcviz operations
pub type Result<T> = std::result::Result<T, DcvizError>;
