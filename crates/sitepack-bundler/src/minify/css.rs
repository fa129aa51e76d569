//! CSS minification through lightningcss.
//!
//! The bundle is parsed with error recovery on, the way a browser reads a
//! stylesheet: a rule or declaration it cannot understand is dropped with a
//! warning instead of failing the build. That covers legacy hacks such as
//! `*zoom: 1` and an `@import` that ends up after other rules once files
//! are concatenated.

use std::sync::{Arc, RwLock};

use lightningcss::{
    printer::PrinterOptions,
    stylesheet::{MinifyOptions, ParserOptions, StyleSheet},
};
use tracing::warn;

use crate::source::AssetKind;
use crate::{Error, Result};

/// Minify a CSS bundle.
///
/// # Arguments
///
/// * `source` - Concatenated CSS
/// * `filename` - Name reported in parse errors
///
/// # Returns
///
/// Minified CSS with rule order preserved
pub fn minify(source: &str, filename: &str) -> Result<String> {
    let warnings = Arc::new(RwLock::new(Vec::new()));
    let mut stylesheet = StyleSheet::parse(
        source,
        ParserOptions {
            filename: filename.to_string(),
            error_recovery: true,
            warnings: Some(Arc::clone(&warnings)),
            ..Default::default()
        },
    )
    .map_err(|e| minify_error(format!("failed to parse {}: {}", filename, e)))?;

    if let Ok(skipped) = warnings.read() {
        for warning in skipped.iter() {
            warn!(file = filename, "skipped invalid CSS: {}", warning);
        }
    }

    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| minify_error(format!("failed to minify {}: {}", filename, e)))?;

    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| minify_error(format!("failed to print {}: {}", filename, e)))?;

    Ok(result.code)
}

fn minify_error(message: String) -> Error {
    Error::Minify {
        kind: AssetKind::Css,
        message,
    }
}
