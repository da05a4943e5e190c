//! Analyze command handler - submit code and render the complexity report

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::cli::{AnalyzeArgs, OutputFormat};
use crate::client::{AnalyzeRequest, ApiClient, Language};
use crate::commands::{runtime, CommandContext};
use crate::error::{DcvizError, Result};
use crate::render::render_report;
use crate::report::compose_report;

/// Run the analyze command: read the code, call the analyzer, compose and
/// render the report
pub fn run_analyze(args: &AnalyzeArgs, client: &ApiClient, ctx: &CommandContext) -> Result<String> {
    let code = read_code(args.path.as_deref())?;
    let language = resolve_language(args)?;
    let filename = resolve_filename(args, language);

    if ctx.verbose {
        eprintln!(
            "Submitting {} ({} bytes, {})",
            filename,
            code.len(),
            language.wire_name()
        );
    }

    let request = AnalyzeRequest {
        code,
        language,
        filename,
    };
    let result = runtime()?.block_on(client.analyze(&request))?;
    let report = compose_report(&result)?;

    match ctx.format {
        OutputFormat::Text => Ok(render_report(&report)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&report)?)),
    }
}

fn read_code(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(DcvizError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("file not found: {}", path.display()),
                )));
            }
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut code = String::new();
            std::io::stdin().read_to_string(&mut code)?;
            Ok(code)
        }
    }
}

/// Pick the language: explicit flag, then the reported filename's extension,
/// then the input path's extension
fn resolve_language(args: &AnalyzeArgs) -> Result<Language> {
    if let Some(language) = args.language {
        return Ok(language);
    }
    if let Some(ref filename) = args.filename {
        if let Some(language) = Language::from_path(Path::new(filename)) {
            return Ok(language);
        }
    }
    if let Some(ref path) = args.path {
        if let Some(language) = Language::from_path(path) {
            return Ok(language);
        }
    }
    Err(DcvizError::ConfigError {
        message: "Cannot infer the source language; pass --language".to_string(),
    })
}

/// Pick the filename reported to the analyzer: explicit flag, then the input
/// file's own name, then a language-appropriate placeholder
fn resolve_filename(args: &AnalyzeArgs, language: Language) -> String {
    if let Some(ref filename) = args.filename {
        return filename.clone();
    }
    if let Some(name) = args
        .path
        .as_deref()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
    {
        return name.to_string();
    }
    language.default_filename().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(path: Option<&str>, language: Option<Language>, filename: Option<&str>) -> AnalyzeArgs {
        AnalyzeArgs {
            path: path.map(PathBuf::from),
            language,
            filename: filename.map(String::from),
        }
    }

    #[test]
    fn test_language_flag_wins() {
        let args = args(Some("main.py"), Some(Language::Java), None);
        assert_eq!(resolve_language(&args).unwrap(), Language::Java);
    }

    #[test]
    fn test_language_inferred_from_path() {
        let args = args(Some("src/main.cpp"), None, None);
        assert_eq!(resolve_language(&args).unwrap(), Language::Cpp);
    }

    #[test]
    fn test_language_inferred_from_filename_flag() {
        let args = args(None, None, Some("job.java"));
        assert_eq!(resolve_language(&args).unwrap(), Language::Java);
    }

    #[test]
    fn test_unknown_language_is_config_error() {
        let args = args(None, None, None);
        assert!(matches!(
            resolve_language(&args),
            Err(DcvizError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_filename_defaults_from_path_then_language() {
        let from_path = args(Some("src/lib.py"), None, None);
        assert_eq!(resolve_filename(&from_path, Language::Python), "lib.py");

        let stdin_only = args(None, Some(Language::Cpp), None);
        assert_eq!(resolve_filename(&stdin_only, Language::Cpp), "untitled.cpp");
    }
}
