//! Logging infrastructure for the sitepack CLI.
//!
//! Structured logging through the `tracing` ecosystem. Log lines go to
//! stderr so they never mix with the status banners printed on stdout.
//!
//! # Example
//!
//! ```rust,no_run
//! use sitepack_cli::logger::init_logger;
//! use tracing::{info, debug};
//!
//! init_logger(false, false, false);
//!
//! info!("Starting build");
//! debug!("Reading source: {}", "css/site.css");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used with `--verbose`.
pub const VERBOSE_FILTER: &str = "sitepack_cli=debug,sitepack_bundler=debug,sitepack_lint=debug";

/// Filter used with `--quiet`.
pub const QUIET_FILTER: &str = "sitepack_cli=error,sitepack_bundler=error,sitepack_lint=error";

/// Filter used when neither flag nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "sitepack_cli=info,sitepack_bundler=info,sitepack_lint=info";

/// Pick the filter for the given flags.
///
/// Priority: `--verbose`, then `--quiet`, then `RUST_LOG`, then info.
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at the start of the program, before any logging occurs.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging (overrides `quiet`)
/// * `quiet` - Only show error-level logs
/// * `no_color` - Disable colored output
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(build_filter(verbose, quiet), no_color);
}

/// Initialize logger with custom environment filter.
///
/// # Example
///
/// ```rust,no_run
/// use sitepack_cli::logger::init_logger_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// let filter = EnvFilter::new("sitepack_lint=trace");
/// init_logger_with_filter(filter, false);
/// ```
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && crate::ui::should_use_color())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
