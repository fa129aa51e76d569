//! JavaScript minification through oxc.
//!
//! The bundle is parsed as a classic script, the same way a browser loads a
//! `<script src="pack.js">` tag. Top-level bindings stay unmangled because
//! page markup and inline handlers reach them by name; everything inside
//! functions is compressed and renamed.

use oxc_allocator::Allocator;
use oxc_codegen::{Codegen, CodegenOptions};
use oxc_minifier::{CompressOptions, MangleOptions, Minifier, MinifierOptions};
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::source::AssetKind;
use crate::{Error, Result};

/// Minifier settings used for site scripts.
fn minifier_options() -> MinifierOptions {
    MinifierOptions {
        mangle: Some(MangleOptions {
            top_level: false,
            ..MangleOptions::default()
        }),
        compress: Some(CompressOptions::default()),
    }
}

/// Minify a JS bundle.
///
/// Any parser diagnostic aborts the transform; a bundle with a syntax error
/// is never printed.
pub fn minify(source: &str) -> Result<String> {
    let allocator = Allocator::default();
    let parsed = Parser::new(&allocator, source, SourceType::cjs()).parse();

    if parsed.panicked || !parsed.errors.is_empty() {
        let messages: Vec<String> = parsed.errors.iter().map(|e| e.to_string()).collect();
        let message = if messages.is_empty() {
            "parser aborted".to_string()
        } else {
            messages.join("; ")
        };
        return Err(Error::Minify {
            kind: AssetKind::Js,
            message,
        });
    }

    let mut program = parsed.program;
    let minified = Minifier::new(minifier_options()).minify(&allocator, &mut program);

    let code = Codegen::new()
        .with_options(CodegenOptions::minify())
        .with_scoping(minified.scoping)
        .build(&program)
        .code;

    Ok(code)
}
