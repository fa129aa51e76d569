//! Sitepack CLI - bundle, minify and lint a website's static assets.
//!
//! This is the main entry point. It handles command-line argument parsing,
//! logging initialization, and command dispatch.

use clap::Parser;
use miette::Result;
use sitepack_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    // No subcommand means `minify`
    let result = match args.command.unwrap_or_default() {
        cli::Command::Minify(minify_args) => commands::minify_execute(&args.site, minify_args),
        cli::Command::Lint => commands::lint_execute(&args.site),
        cli::Command::Help => commands::help_execute(),
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
