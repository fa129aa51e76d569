//! Status message functions for terminal output.
//!
//! `success`, `info` and `failure` are progress banners and go to stdout.
//! Warnings go to stderr.

use owo_colors::OwoColorize;

use super::colors_enabled;

/// Print a success banner to stdout.
///
/// # Examples
///
/// ```no_run
/// use sitepack_cli::ui::success;
///
/// success("Minified pack.js");
/// ```
pub fn success(message: &str) {
    if colors_enabled() {
        println!("{} {}", "✓".green().bold(), message);
    } else {
        println!("✓ {}", message);
    }
}

/// Print an info banner to stdout.
///
/// # Examples
///
/// ```no_run
/// use sitepack_cli::ui::info;
///
/// info("Minifying CSS...");
/// ```
pub fn info(message: &str) {
    if colors_enabled() {
        println!("{} {}", "ℹ".blue().bold(), message);
    } else {
        println!("ℹ {}", message);
    }
}

/// Print a failure banner to stdout.
///
/// Used for steps that ran and reported problems, such as a linter
/// exiting non-zero. Fatal errors go through miette instead.
pub fn failure(message: &str) {
    if colors_enabled() {
        println!("{} {}", "✗".red().bold(), message.red());
    } else {
        println!("✗ {}", message);
    }
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    } else {
        eprintln!("⚠ {}", message);
    }
}
