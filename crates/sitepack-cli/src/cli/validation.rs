use std::path::PathBuf;

/// Value parser for `--cwd`.
///
/// Rejects empty values and paths that exist but are not directories. A
/// missing directory is reported later, when the site root is resolved.
pub fn parse_site_dir(s: &str) -> Result<PathBuf, String> {
    if s.trim().is_empty() {
        return Err("Site directory cannot be empty".to_string());
    }

    let path = PathBuf::from(s);
    if path.exists() && !path.is_dir() {
        return Err(format!("'{}' is not a directory", s));
    }

    Ok(path)
}
