use crate::config::{SiteConfig, ToolConfig};
use crate::error::{ConfigError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

impl SiteConfig {
    /// Validate the `[bundle]` section before a minify run.
    pub fn validate_bundle(&self) -> Result<()> {
        let bundle = &self.bundle;

        if bundle.css.is_empty() {
            return Err(ConfigError::MissingField {
                field: "bundle.css".to_string(),
                hint: "List the stylesheets in cascade order, e.g. css = [\"css/site.css\"]"
                    .to_string(),
            }
            .into());
        }

        if bundle.js.is_empty() {
            return Err(ConfigError::MissingField {
                field: "bundle.js".to_string(),
                hint: "List the scripts in execution order, e.g. js = [\"js/site.js\"]"
                    .to_string(),
            }
            .into());
        }

        validate_output("bundle.css_out", &bundle.css_out)?;
        validate_output("bundle.js_out", &bundle.js_out)?;

        if bundle.css_out == bundle.js_out {
            return Err(ConfigError::ConflictingOptions(format!(
                "bundle.css_out and bundle.js_out both point to {}",
                bundle.css_out.display()
            ))
            .into());
        }

        Ok(())
    }

    /// Sources listed more than once in `bundle.css` or `bundle.js`.
    ///
    /// Duplicates are legal and are concatenated as listed, but usually a
    /// mistake.
    pub fn duplicate_sources(&self) -> Vec<&PathBuf> {
        let mut dups = Vec::new();
        for list in [&self.bundle.css, &self.bundle.js] {
            let mut seen = HashSet::new();
            dups.extend(list.iter().filter(|p| !seen.insert(*p)));
        }
        dups
    }

    /// Validate the `[lint]` section before a lint run.
    pub fn validate_lint(&self) -> Result<()> {
        validate_tool("lint.js", &self.lint.js)?;
        validate_tool("lint.css", &self.lint.css)
    }
}

fn validate_output(field: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::MissingField {
            field: field.to_string(),
            hint: "Name the artifact, e.g. \"pack.css\"".to_string(),
        }
        .into());
    }

    if path.is_absolute() {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: path.display().to_string(),
            hint: "Artifact paths are relative to the site root".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_tool(section: &str, tool: &ToolConfig) -> Result<()> {
    if tool.tool.as_os_str().is_empty() {
        return Err(ConfigError::MissingField {
            field: format!("{section}.tool"),
            hint: "Point at the linter binary, e.g. \"node_modules/.bin/jshint\"".to_string(),
        }
        .into());
    }

    if tool.files.is_empty() {
        return Err(ConfigError::MissingField {
            field: format!("{section}.files"),
            hint: "List the files the linter should check".to_string(),
        }
        .into());
    }

    Ok(())
}
