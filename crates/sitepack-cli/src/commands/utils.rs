//! Shared utilities for command implementations.

use crate::cli::SiteArgs;
use crate::config::SiteConfig;
use crate::error::{CliError, Result, ResultExt};
use std::path::{Path, PathBuf};

/// Resolve the site root from `--cwd`, or the current directory.
///
/// The result is absolute so that tool invocations and output paths do not
/// depend on the process working directory.
pub fn resolve_site_root(cwd: Option<&Path>) -> Result<PathBuf> {
    match cwd {
        Some(dir) => {
            let root = std::fs::canonicalize(dir)
                .with_path(dir)
                .with_hint("--cwd must name an existing site directory")?;
            if !root.is_dir() {
                return Err(CliError::InvalidArgument(format!(
                    "Site root is not a directory: {}",
                    dir.display()
                )));
            }
            Ok(root)
        }
        None => std::env::current_dir().context("Failed to get current directory"),
    }
}

/// Resolve the site root and load its configuration.
pub fn load_site(site: &SiteArgs) -> Result<(PathBuf, SiteConfig)> {
    let root = resolve_site_root(site.cwd.as_deref())?;
    let config = SiteConfig::load(site.config.as_deref(), &root)?;
    Ok((root, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_site_root_is_absolute() {
        let temp = TempDir::new().unwrap();
        let root = resolve_site_root(Some(temp.path())).unwrap();
        assert!(root.is_absolute());
        assert_eq!(root, std::fs::canonicalize(temp.path()).unwrap());
    }

    #[test]
    fn test_resolve_site_root_missing_dir() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        let err = resolve_site_root(Some(&missing)).unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("File not found: "));
        assert!(msg.contains(&missing.display().to_string()));
        assert!(msg.contains("Hint: --cwd must name an existing site directory"));
    }

    #[test]
    fn test_resolve_site_root_rejects_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("sitepack.toml");
        std::fs::write(&file, "").unwrap();
        let err = resolve_site_root(Some(&file)).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn test_resolve_site_root_defaults_to_current_dir() {
        let root = resolve_site_root(None).unwrap();
        assert_eq!(root, std::env::current_dir().unwrap());
    }
}
