//! # sitepack-bundler
//!
//! Ordered concatenation and minification of a website's CSS and JS sources.
//!
//! A build reads every file of a [`SourceList`] in the order it was declared,
//! joins them into a [`Bundle`], minifies the bundle in memory, and only then
//! replaces the artifact on disk. A missing source or a minification failure
//! therefore never leaves a partial `pack.css` / `pack.js` behind.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sitepack_bundler::{AssetSpec, BundlePlan, SourceList};
//!
//! # fn main() -> sitepack_bundler::Result<()> {
//! let plan = BundlePlan {
//!     root: "htdocs/site".into(),
//!     css: AssetSpec::new(SourceList::new(["css/normalize.css", "css/site.css"]), "pack.css"),
//!     js: AssetSpec::new(SourceList::new(["js/jquery.js", "js/site.js"]), "pack.js"),
//! };
//!
//! for report in sitepack_bundler::run_all(&plan, &mut ())? {
//!     println!("{} -> {} bytes", report.output.display(), report.output_bytes);
//! }
//! # Ok(()) }
//! ```

use std::path::PathBuf;

pub mod build;
pub mod minify;
pub mod output;
pub mod source;

pub use build::{
    ArtifactReport, AssetSpec, BuildObserver, BundlePlan, build_css_bundle, build_js_bundle,
    check_all, run_all,
};
pub use source::{AssetKind, Bundle, SourceList};

/// Error types for sitepack-bundler operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A listed source file does not exist or cannot be read.
    #[error("{kind} source not found or unreadable: {}", .path.display())]
    MissingSource {
        kind: AssetKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The concatenated bundle could not be parsed or minified.
    #[error("Failed to minify {kind} bundle: {message}")]
    Minify { kind: AssetKind, message: String },

    /// Invalid output path (e.g., directory traversal attempt).
    #[error("Invalid output path: {0}")]
    InvalidOutputPath(String),

    /// File write operation failed.
    #[error("Write failure: {0}")]
    WriteFailure(String),
}

/// Result type alias for sitepack-bundler operations.
pub type Result<T> = std::result::Result<T, Error>;

impl miette::Diagnostic for Error {
    fn code(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        Some(Box::new(match self {
            Error::MissingSource { .. } => "MISSING_SOURCE",
            Error::Minify { .. } => "MINIFY_ERROR",
            Error::InvalidOutputPath(_) => "INVALID_OUTPUT_PATH",
            Error::WriteFailure(_) => "WRITE_FAILURE",
        }))
    }

    fn help(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        let help = match self {
            Error::MissingSource { .. } => {
                "Check the source lists in sitepack.toml; paths are relative to the site root"
            }
            Error::Minify { .. } => "Fix the syntax error reported above; no artifact was written",
            Error::InvalidOutputPath(_) => "Output paths must stay inside the site root",
            Error::WriteFailure(_) => "Check permissions of the site root",
        };
        Some(Box::new(help))
    }
}
