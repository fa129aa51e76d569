//! Command implementations for the sitepack CLI.
//!
//! - [`minify`] - Build (or check) `pack.css` and `pack.js`
//! - [`lint`] - Run the site's JS and CSS linters
//! - [`help`] - List the named operations
//!
//! Each command lives in its own module and provides an `execute` function.

pub mod help;
pub mod lint;
pub mod minify;
pub(crate) mod utils;

pub use help::execute as help_execute;
pub use lint::execute as lint_execute;
pub use minify::execute as minify_execute;
