//! Atomic artifact writing.
//!
//! Artifacts are written to a sibling `<name>.tmp` file and renamed over the
//! target, so a reader sees either the previous artifact or the complete new
//! one. Output paths are resolved against the site root and must stay inside
//! it.

use std::fs;
use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::{Error, Result};

/// Resolve an artifact path against the site root.
///
/// # Security
///
/// Rejects:
/// - paths containing a NUL byte
/// - `../` sequences that leave the site root
/// - absolute paths outside the site root
pub fn resolve_output_path(root: &Path, output: &Path) -> Result<PathBuf> {
    if output.as_os_str().to_string_lossy().contains('\0') {
        return Err(Error::InvalidOutputPath(
            "Filename contains null byte".to_string(),
        ));
    }

    let root = normalize_root(root)?;
    let full_path = root.join(output).clean();

    if !full_path.starts_with(&root) || full_path == root {
        return Err(Error::InvalidOutputPath(format!(
            "Path '{}' escapes site root '{}' (resolved to '{}')",
            output.display(),
            root.display(),
            full_path.display()
        )));
    }

    Ok(full_path)
}

/// Clean the site root and make it absolute.
fn normalize_root(root: &Path) -> Result<PathBuf> {
    let cleaned = root.clean();

    if cleaned.is_absolute() {
        return Ok(cleaned);
    }

    let cwd = std::env::current_dir().map_err(|e| {
        Error::InvalidOutputPath(format!("Failed to get current directory: {}", e))
    })?;
    Ok(cwd.join(&cleaned).clean())
}

/// Write `content` to `target`, replacing any previous file atomically.
///
/// Parent directories are created as needed. On failure the temporary file
/// is removed and `target` is left as it was.
pub fn write_artifact(target: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            Error::WriteFailure(format!(
                "Failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(target);
    fs::write(&temp_path, content).map_err(|e| {
        cleanup_temp_file(&temp_path);
        Error::WriteFailure(format!(
            "Failed to write temporary file '{}': {}",
            temp_path.display(),
            e
        ))
    })?;

    fs::rename(&temp_path, target).map_err(|e| {
        cleanup_temp_file(&temp_path);
        Error::WriteFailure(format!(
            "Failed to rename '{}' to '{}': {}",
            temp_path.display(),
            target.display(),
            e
        ))
    })?;

    Ok(())
}

/// `pack.css` -> `pack.css.tmp`, so two artifacts never share a temp file.
fn temp_path_for(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    target.with_file_name(name)
}

/// Best-effort cleanup; we are already on an error path.
fn cleanup_temp_file(temp_path: &Path) {
    if temp_path.exists() {
        if let Err(e) = fs::remove_file(temp_path) {
            tracing::warn!(
                "Failed to clean up temporary file '{}': {}",
                temp_path.display(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_output_path_normal() {
        let result = resolve_output_path(Path::new("/tmp/site"), Path::new("pack.css"));
        assert_eq!(result.unwrap(), Path::new("/tmp/site/pack.css"));
    }

    #[test]
    fn test_resolve_output_path_nested() {
        let result = resolve_output_path(Path::new("/tmp/site"), Path::new("./assets/pack.js"));
        assert_eq!(result.unwrap(), Path::new("/tmp/site/assets/pack.js"));
    }

    #[test]
    fn test_resolve_output_path_traversal() {
        let result = resolve_output_path(Path::new("/tmp/site"), Path::new("../etc/passwd"));
        assert!(matches!(result.unwrap_err(), Error::InvalidOutputPath(_)));

        let result = resolve_output_path(
            Path::new("/tmp/site"),
            Path::new("safe/../../../../etc/passwd"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_output_path_absolute_outside_root() {
        let result = resolve_output_path(Path::new("/tmp/site"), Path::new("/etc/pack.css"));
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_output_path_root_itself() {
        let result = resolve_output_path(Path::new("/tmp/site"), Path::new("."));
        assert!(result.is_err());
    }

    #[test]
    fn test_temp_path_keeps_extension() {
        assert_eq!(
            temp_path_for(Path::new("/tmp/site/pack.css")),
            Path::new("/tmp/site/pack.css.tmp")
        );
        assert_ne!(
            temp_path_for(Path::new("pack.css")),
            temp_path_for(Path::new("pack.js"))
        );
    }

    #[test]
    fn test_write_artifact_replaces_content() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out/pack.css");

        write_artifact(&target, b"first").unwrap();
        write_artifact(&target, b"second").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "second");
        assert!(!temp.path().join("out/pack.css.tmp").exists());
    }
}
