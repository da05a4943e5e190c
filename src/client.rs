//! HTTP client for the analyzer, history, and auth services
//!
//! One-shot request/response exchanges with no retry policy: a failed call
//! surfaces immediately as an error. Non-success responses carry a structured
//! `{"error": ...}` body which is shown to the user verbatim; anything else
//! falls back to a generic status message. The session cookie issued at login
//! lives in the client's cookie store, so a client value is the explicit
//! session context for every authenticated call.

use std::path::Path;
use std::time::Duration;

use clap::ValueEnum;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DcvizError, Result};
use crate::history::HistoryEntry;
use crate::schema::{AnalysisResult, WireAnalysis};

/// Languages the analyzer accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Java,
    /// "c++" on the wire
    #[serde(rename = "c++")]
    Cpp,
}

impl Language {
    /// Name used in the analyzer request body
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Java => "java",
            Self::Cpp => "c++",
        }
    }

    /// Infer the language from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "py" => Some(Self::Python),
            "java" => Some(Self::Java),
            "cpp" | "cc" | "cxx" | "hpp" => Some(Self::Cpp),
            _ => None,
        }
    }

    /// Infer the language from a file path
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Placeholder filename when analyzing stdin without an explicit name
    pub fn default_filename(&self) -> &'static str {
        match self {
            Self::Python => "untitled.py",
            Self::Java => "untitled.java",
            Self::Cpp => "untitled.cpp",
        }
    }
}

/// Opaque export formats served by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportKind {
    Pdf,
    Csv,
}

impl ExportKind {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Pdf => "/download/pdf",
            Self::Csv => "/download/csv",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Csv => "csv",
        }
    }
}

/// Body of an `/analyze` request
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    pub code: String,
    pub language: Language,
    pub filename: String,
}

/// Structured error body returned by every service endpoint
#[derive(Debug, Deserialize)]
struct WireError {
    error: String,
}

/// Build the user-facing error for a non-success response
fn upstream_error(status: StatusCode, body: &str) -> DcvizError {
    match serde_json::from_str::<WireError>(body) {
        Ok(wire) => DcvizError::Upstream {
            message: wire.error,
        },
        Err(_) => DcvizError::Upstream {
            message: format!("request failed with status {}", status),
        },
    }
}

/// Client for the analyzer/history/auth services
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .cookie_store(true)
            .build()
            .map_err(DcvizError::Http)?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { http, base_url })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Consume a response: extract the structured error on failure, decode
    /// the JSON body on success
    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(upstream_error(status, &body));
        }
        Ok(response.json().await?)
    }

    /// Submit code for analysis and decode the result
    ///
    /// The submitted code is attached to the returned [`AnalysisResult`] so
    /// heatmap lines align with the analyzer's line scores.
    pub async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult> {
        debug!(
            filename = %request.filename,
            language = request.language.wire_name(),
            bytes = request.code.len(),
            "submitting code for analysis"
        );
        let response = self
            .http
            .post(self.url("/analyze"))
            .json(request)
            .send()
            .await?;
        let wire: WireAnalysis = Self::decode(response).await?;
        AnalysisResult::from_wire(wire, request.code.clone())
    }

    /// Fetch the submission history, newest-first per the server's ordering
    pub async fn history(&self) -> Result<Vec<HistoryEntry>> {
        debug!("fetching submission history");
        let response = self.http.get(self.url("/history")).send().await?;
        Self::decode(response).await
    }

    /// Delete one history entry by its server-assigned id
    pub async fn delete_history(&self, id: u64) -> Result<()> {
        debug!(id, "deleting history entry");
        let response = self
            .http
            .delete(self.url(&format!("/history/{}", id)))
            .send()
            .await?;
        Self::check(response).await
    }

    /// Establish a session; the cookie is kept in the client's store
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let response = self
            .http
            .post(self.url("/login"))
            .form(&[("email", email), ("password", password)])
            .send()
            .await?;
        Self::check(response).await
    }

    /// Create an account
    pub async fn signup(&self, email: &str, password: &str) -> Result<()> {
        let response = self
            .http
            .post(self.url("/signup"))
            .form(&[("email", email), ("password", password)])
            .send()
            .await?;
        Self::check(response).await
    }

    /// Tear down the current session
    pub async fn logout(&self) -> Result<()> {
        let response = self.http.post(self.url("/logout")).send().await?;
        Self::check(response).await
    }

    /// Two-field password reset exchange
    pub async fn reset_password(&self, email: &str, new_password: &str) -> Result<()> {
        let response = self
            .http
            .post(self.url("/reset-password"))
            .form(&[("email", email), ("new_password", new_password)])
            .send()
            .await?;
        Self::check(response).await
    }

    /// Download an export of the latest analysis as opaque bytes
    pub async fn download(&self, kind: ExportKind) -> Result<Vec<u8>> {
        debug!(endpoint = kind.endpoint(), "downloading export");
        let response = self.http.get(self.url(kind.endpoint())).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(upstream_error(status, &body));
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// Surface the structured error on failure, discard the body on success
    async fn check(response: reqwest::Response) -> Result<()> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(upstream_error(status, &body));
        }
        Ok(())
    }
}
