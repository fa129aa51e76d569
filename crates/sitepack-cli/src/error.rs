//! Error handling for the sitepack CLI.
//!
//! `CliError` is the top-level error returned by every command. Library
//! errors from the bundler and the lint runner convert into it via `#[from]`
//! and keep their miette diagnostics for the final report.
//!
//! # Example
//!
//! ```rust,no_run
//! use sitepack_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_source(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

mod miette;

use std::path::PathBuf;
use thiserror::Error;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid syntax, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Bundling or minification failed
    #[error(transparent)]
    Bundle(#[from] sitepack_bundler::Error),

    /// A lint tool is missing or could not be started
    #[error(transparent)]
    Lint(#[from] sitepack_lint::Error),

    /// Lint tools ran and at least one reported problems
    #[error("{failed} lint step(s) failed")]
    LintFailed {
        /// Number of failed steps
        failed: usize,
    },

    /// `minify --check` found artifacts that differ from a fresh build
    #[error("Artifacts are out of date: {}\n\nHint: Run 'sitepack minify' and commit the result", format_paths(.paths))]
    StaleArtifacts {
        /// Artifacts that would change
        paths: Vec<PathBuf>,
    },

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file doesn't exist at the expected location
    #[error("Config file not found: {}\n\nHint: Create a sitepack.toml in the site root or pass --config <path>", .0.display())]
    NotFound(PathBuf),

    /// Config file could not be parsed or has wrong field types
    #[error("Invalid config file {}: {message}\n\nHint: Check sitepack.toml syntax and field names", .path.display())]
    Parse {
        /// Config file that failed
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// Mutually exclusive options were specified
    #[error("Conflicting options: {0}\n\nHint: These options cannot be used together")]
    ConflictingOptions(String),

    /// Missing required configuration field
    #[error("Missing required field: {field}\n\nHint: {hint}")]
    MissingField {
        /// Name of the missing field
        field: String,
        /// Helpful hint for providing the field
        hint: String,
    },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a `NotFound` I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound(PathBuf::from("htdocs/sitepack.toml"));
        let msg = err.to_string();
        assert!(msg.contains("Config file not found"));
        assert!(msg.contains("htdocs/sitepack.toml"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_config_error_missing_field() {
        let err = ConfigError::MissingField {
            field: "bundle.css".to_string(),
            hint: "List the CSS sources in cascade order".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Missing required field: bundle.css"));
        assert!(msg.contains("Hint: List the CSS sources"));
    }

    #[test]
    fn test_cli_error_from_config_error() {
        let cli_err: CliError = ConfigError::NotFound(PathBuf::from("sitepack.toml")).into();
        assert!(matches!(cli_err, CliError::Config(_)));
    }

    #[test]
    fn test_cli_error_from_lint_error_is_transparent() {
        let lint_err = sitepack_lint::Error::ToolNotFound {
            kind: sitepack_lint::LintKind::Css,
            path: PathBuf::from("node_modules/.bin/csslint"),
        };
        let expected = lint_err.to_string();
        let cli_err: CliError = lint_err.into();
        assert_eq!(cli_err.to_string(), expected);
    }

    #[test]
    fn test_stale_artifacts_lists_paths() {
        let err = CliError::StaleArtifacts {
            paths: vec![PathBuf::from("pack.css"), PathBuf::from("pack.js")],
        };
        let msg = err.to_string();
        assert!(msg.contains("pack.css, pack.js"));
        assert!(msg.contains("sitepack minify"));
    }

    #[test]
    fn test_lint_failed_message() {
        assert_eq!(
            CliError::LintFailed { failed: 2 }.to_string(),
            "2 lint step(s) failed"
        );
    }

    #[test]
    fn test_result_ext_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let err = result.with_path("/site/css").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_result_ext_with_hint() {
        let result: std::result::Result<(), ConfigError> =
            Err(ConfigError::NotFound(PathBuf::from("sitepack.toml")));

        let err = result.with_hint("Try creating the file").unwrap_err();
        assert!(err.to_string().contains("Hint: Try creating the file"));
    }

    #[test]
    fn test_result_ext_context() {
        let result: std::result::Result<(), ConfigError> =
            Err(ConfigError::NotFound(PathBuf::from("sitepack.toml")));

        let err = result.context("Failed to initialize").unwrap_err();
        assert!(err.to_string().starts_with("Failed to initialize: "));
    }
}
