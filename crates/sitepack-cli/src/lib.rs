//! Sitepack CLI - bundle, minify and lint a website's static assets.
//!
//! This crate provides the `sitepack` command. It reads a site's
//! `sitepack.toml`, then either builds `pack.css` / `pack.js` through
//! `sitepack-bundler` or runs the site's linters through `sitepack-lint`.
//!
//! # Architecture
//!
//! - [`cli`] - Argument parsing with clap
//! - [`commands`] - `minify`, `lint` and `help`
//! - [`config`] - `sitepack.toml` loading and validation
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status banners, spinner and build summary
//!
//! # Example
//!
//! ```rust,no_run
//! use sitepack_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     // CLI command implementations...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, ConfigError, Result, ResultExt};
