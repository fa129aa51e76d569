//! Terminal UI utilities for status banners, spinners and summaries.
//!
//! Banners describing what the tool is doing go to stdout. Warnings, errors
//! and debug chatter go to stderr. Everything degrades to plain text when
//! colors are off (`--no-color`, `NO_COLOR`, or no terminal attached).
//!
//! # Examples
//!
//! ```no_run
//! use sitepack_cli::ui;
//!
//! ui::init_colors(false);
//!
//! let spinner = ui::Spinner::new("Running JS lint...");
//! spinner.finish("JS lint passed");
//!
//! ui::success("Minified pack.css");
//! ui::warning("css/site.css is listed twice");
//! ```

mod format;
mod messages;
mod spinner;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{format_duration, format_size, print_build_summary};
pub use messages::{failure, info, success, warning};
pub use spinner::Spinner;

static COLORS: AtomicBool = AtomicBool::new(false);

/// Check if running in a CI environment.
///
/// Detects common CI environment variables from GitHub Actions, GitLab CI,
/// CircleCI, and Travis CI.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
}

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    // NO_COLOR wins over FORCE_COLOR
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Decide once whether banners are colored.
///
/// Call early in `main`, after parsing `--no-color`.
pub fn init_colors(no_color: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
}

/// Whether [`init_colors`] enabled colors.
pub fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}
