//! Source lists and bundle concatenation.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result};

/// Kind of asset a bundle holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Css,
    Js,
}

impl AssetKind {
    /// Text placed between two concatenated files.
    ///
    /// JS parts get a statement terminator so a file ending without `;` or a
    /// newline cannot fuse with the first expression of the next file.
    pub fn separator(&self) -> &'static str {
        match self {
            AssetKind::Css => "\n",
            AssetKind::Js => ";\n",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Css => write!(f, "CSS"),
            AssetKind::Js => write!(f, "JS"),
        }
    }
}

/// Ordered list of source paths, relative to the site root.
///
/// The order is the concatenation order and therefore the cascade order for
/// CSS and the execution order for JS.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceList(Vec<PathBuf>);

impl SourceList {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self(paths.into_iter().map(Into::into).collect())
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Read every source under `root` in listed order and join them.
    ///
    /// All files are read before anything else happens; the first missing or
    /// unreadable file aborts the whole bundle.
    pub fn concat(&self, kind: AssetKind, root: &Path) -> Result<Bundle> {
        let mut parts = Vec::with_capacity(self.0.len());
        for path in &self.0 {
            let full = root.join(path);
            let text = fs::read_to_string(&full).map_err(|source| Error::MissingSource {
                kind,
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), bytes = text.len(), "read {} source", kind);
            // A BOM in the middle of the bundle is not whitespace to either parser
            let text = text.strip_prefix('\u{feff}').map(str::to_owned).unwrap_or(text);
            parts.push(text);
        }

        Ok(Bundle {
            kind,
            text: parts.join(kind.separator()),
        })
    }
}

impl<'a> IntoIterator for &'a SourceList {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Concatenated, not yet minified, content of one source list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    kind: AssetKind,
    text: String,
}

impl Bundle {
    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (name, content) in files {
            let path = temp.path().join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        temp
    }

    #[test]
    fn test_concat_keeps_listed_order() {
        let temp = site(&[("b.css", ".b{}"), ("a.css", ".a{}")]);
        let list = SourceList::new(["b.css", "a.css"]);

        let bundle = list.concat(AssetKind::Css, temp.path()).unwrap();
        assert_eq!(bundle.text(), ".b{}\n.a{}");
        assert_eq!(bundle.kind(), AssetKind::Css);
    }

    #[test]
    fn test_concat_js_separates_statements() {
        let temp = site(&[("one.js", "var a = 1"), ("two.js", "(function(){})()")]);
        let list = SourceList::new(["one.js", "two.js"]);

        let bundle = list.concat(AssetKind::Js, temp.path()).unwrap();
        assert_eq!(bundle.text(), "var a = 1;\n(function(){})()");
    }

    #[test]
    fn test_concat_missing_file_names_path() {
        let temp = site(&[("a.css", ".a{}")]);
        let list = SourceList::new(["a.css", "css/missing.css"]);

        let err = list.concat(AssetKind::Css, temp.path()).unwrap_err();
        match err {
            Error::MissingSource { kind, path, .. } => {
                assert_eq!(kind, AssetKind::Css);
                assert_eq!(path, PathBuf::from("css/missing.css"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_concat_strips_byte_order_mark() {
        let temp = site(&[("a.css", "\u{feff}.a{}"), ("b.css", "\u{feff}.b{}")]);
        let list = SourceList::new(["a.css", "b.css"]);

        let bundle = list.concat(AssetKind::Css, temp.path()).unwrap();
        assert_eq!(bundle.text(), ".a{}\n.b{}");
    }

    #[test]
    fn test_asset_kind_display() {
        assert_eq!(AssetKind::Css.to_string(), "CSS");
        assert_eq!(AssetKind::Js.to_string(), "JS");
    }
}
