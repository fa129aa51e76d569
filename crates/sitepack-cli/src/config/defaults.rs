use std::path::PathBuf;

use crate::config::{BundleConfig, LintConfig, SiteConfig, ToolConfig};

pub const DEFAULT_JS_LINT_TOOL: &str = "node_modules/.bin/jshint";
pub const DEFAULT_CSS_LINT_TOOL: &str = "node_modules/.bin/csslint";

pub fn default_css_out() -> PathBuf {
    PathBuf::from("pack.css")
}

pub fn default_js_out() -> PathBuf {
    PathBuf::from("pack.js")
}

pub fn default_js_lint() -> ToolConfig {
    ToolConfig {
        tool: PathBuf::from(DEFAULT_JS_LINT_TOOL),
        args: Vec::new(),
        files: Vec::new(),
    }
}

pub fn default_css_lint() -> ToolConfig {
    ToolConfig {
        tool: PathBuf::from(DEFAULT_CSS_LINT_TOOL),
        args: Vec::new(),
        files: Vec::new(),
    }
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            css: Vec::new(),
            js: Vec::new(),
            css_out: default_css_out(),
            js_out: default_js_out(),
        }
    }
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            js: default_js_lint(),
            css: default_css_lint(),
        }
    }
}

impl SiteConfig {
    /// Built-in defaults. Source and file lists are empty.
    pub(crate) fn default_config() -> Self {
        Self {
            bundle: BundleConfig::default(),
            lint: LintConfig::default(),
        }
    }
}
