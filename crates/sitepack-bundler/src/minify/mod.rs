//! Minification transforms for concatenated bundles.
//!
//! Both transforms work on the whole bundle in memory and either return the
//! complete minified text or an [`Error::Minify`](crate::Error::Minify).
//!
//! - [`css`] parses with lightningcss, merges rules and shorthands where
//!   safe, and prints without whitespace or comments.
//! - [`js`] parses with oxc as a classic script, compresses, mangles
//!   local names, and prints with minified codegen.

pub mod css;
pub mod js;

use crate::Result;
use crate::source::{AssetKind, Bundle};

/// Minify a bundle with the transform matching its kind.
///
/// `filename` only appears in diagnostics.
pub fn minify_bundle(bundle: &Bundle, filename: &str) -> Result<String> {
    match bundle.kind() {
        AssetKind::Css => css::minify(bundle.text(), filename),
        AssetKind::Js => js::minify(bundle.text()),
    }
}
