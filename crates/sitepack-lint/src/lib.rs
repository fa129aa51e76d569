//! # sitepack-lint
//!
//! Runs the site's external linters (a JS linter, then a CSS linter) one
//! after the other and collects their results.
//!
//! ## Failure policy
//!
//! - A lint tool that is missing from disk is fatal: [`run_all`] returns
//!   [`Error::ToolNotFound`] at once and later steps never run.
//! - A lint tool that runs and exits non-zero is a failed [`LintResult`],
//!   not an error. The next step still runs, and the caller decides what the
//!   overall exit status is from [`LintReport::all_passed`].
//!
//! ## Example
//!
//! ```no_run
//! use sitepack_lint::{LintKind, LintStep, ProcessRunner};
//! use std::path::Path;
//!
//! # fn main() -> sitepack_lint::Result<()> {
//! let steps = vec![
//!     LintStep::new(LintKind::Js, "node_modules/.bin/jshint", ["js/site.js"]),
//!     LintStep::new(LintKind::Css, "node_modules/.bin/csslint", ["css/site.css"]),
//! ];
//!
//! let report = sitepack_lint::run_all(&ProcessRunner, Path::new("htdocs"), &steps, &mut ())?;
//! if !report.all_passed() {
//!     eprintln!("{} lint step(s) failed", report.failed_count());
//! }
//! # Ok(()) }
//! ```

use std::path::PathBuf;

pub mod runner;
pub mod step;

pub use runner::{Invocation, ProcessRunner, ToolOutput, ToolRunner};
pub use step::{
    LintKind, LintObserver, LintReport, LintResult, LintStep, resolve_tool, run_all,
    run_css_lint, run_js_lint, run_step,
};

/// Hint shown when a lint tool is missing.
pub const INSTALL_HINT: &str = "Run `npm install` in the site root first";

/// Error types for sitepack-lint operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The lint tool binary does not exist at its expected path.
    #[error("{kind} tool not found: {}", .path.display())]
    ToolNotFound { kind: LintKind, path: PathBuf },

    /// The lint tool exists but could not be started.
    #[error("Failed to run {}: {source}", .tool.display())]
    Spawn {
        tool: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for sitepack-lint operations.
pub type Result<T> = std::result::Result<T, Error>;

impl miette::Diagnostic for Error {
    fn code(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        Some(Box::new(match self {
            Error::ToolNotFound { .. } => "TOOL_NOT_FOUND",
            Error::Spawn { .. } => "TOOL_SPAWN_FAILED",
        }))
    }

    fn help(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        match self {
            Error::ToolNotFound { .. } => Some(Box::new(INSTALL_HINT)),
            Error::Spawn { .. } => Some(Box::new("Check that the tool is executable")),
        }
    }
}
