//! Command-line interface definition for sitepack.
//!
//! # Command Structure
//!
//! - `sitepack minify` - Build `pack.css` and `pack.js` (the default)
//! - `sitepack lint` - Run the JS and CSS linters
//! - `sitepack help` - List the operations

mod commands;
mod validation;

use clap::Parser;

pub use commands::{Command, MinifyArgs, SiteArgs};
pub use validation::parse_site_dir;

/// Sitepack - bundle, minify and lint a website's CSS and JS
#[derive(Parser, Debug)]
#[command(
    name = "sitepack",
    version,
    about = "Bundle, minify and lint a website's CSS and JS",
    long_about = "Sitepack concatenates a site's stylesheets and scripts in a fixed order,\n\
                  minifies them into pack.css and pack.js, and runs the site's JS and CSS\n\
                  linters. Running it without a command minifies.",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all log output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub site: SiteArgs,

    /// Operation to run (defaults to `minify`)
    #[command(subcommand)]
    pub command: Option<Command>,
}
