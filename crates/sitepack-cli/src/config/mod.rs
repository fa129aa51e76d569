//! Site configuration loaded from `sitepack.toml`.
//!
//! Layering: built-in defaults, then the config file. Source lists only
//! ever come from the file, in the order they are written there.

mod conversions;
mod defaults;
mod loading;
mod validation;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use defaults::*;

/// Default config file name, looked up in the site root.
pub const CONFIG_FILE: &str = "sitepack.toml";

/// Everything `sitepack` knows about a site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    #[serde(default)]
    pub bundle: BundleConfig,

    #[serde(default)]
    pub lint: LintConfig,
}

/// `[bundle]`: ordered source lists and artifact names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BundleConfig {
    /// Stylesheets in cascade order
    #[serde(default)]
    pub css: Vec<PathBuf>,

    /// Scripts in execution order
    #[serde(default)]
    pub js: Vec<PathBuf>,

    #[serde(default = "default_css_out")]
    pub css_out: PathBuf,

    #[serde(default = "default_js_out")]
    pub js_out: PathBuf,
}

/// `[lint]`: one tool section per linter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    #[serde(default = "default_js_lint")]
    pub js: ToolConfig,

    #[serde(default = "default_css_lint")]
    pub css: ToolConfig,
}

/// `[lint.js]` / `[lint.css]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Tool binary, relative to the site root
    pub tool: PathBuf,

    /// Extra arguments passed before the file list
    #[serde(default)]
    pub args: Vec<String>,

    /// Files to lint, relative to the site root
    #[serde(default)]
    pub files: Vec<PathBuf>,
}
