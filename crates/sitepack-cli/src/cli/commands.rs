use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::validation::parse_site_dir;

/// Where the site lives and which config file describes it.
#[derive(Args, Debug, Clone, Default)]
pub struct SiteArgs {
    /// Path to the config file
    ///
    /// Defaults to sitepack.toml in the site root. `.toml` and `.json`
    /// files are accepted.
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Site root directory
    ///
    /// Source lists, outputs and lint tools are resolved against it.
    /// Defaults to the current directory.
    #[arg(short = 'C', long, global = true, value_name = "DIR", value_parser = parse_site_dir)]
    pub cwd: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Concatenate and minify CSS and JS into pack.css and pack.js
    Minify(MinifyArgs),

    /// Run the JS and CSS linters
    Lint,

    /// Print the list of operations
    Help,
}

impl Default for Command {
    fn default() -> Self {
        Command::Minify(MinifyArgs::default())
    }
}

/// Arguments for the `minify` command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct MinifyArgs {
    /// Verify that pack.css and pack.js are up to date without writing them
    ///
    /// Exits with status 1 if either artifact would change.
    #[arg(long)]
    pub check: bool,
}
