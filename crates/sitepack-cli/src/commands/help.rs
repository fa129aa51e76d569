//! Help command implementation.
//!
//! Prints one line per named operation. `--help` still shows clap's full
//! usage text.

use crate::error::Result;

/// Named operations and their one-line descriptions.
pub const OPERATIONS: &[(&str, &str)] = &[
    (
        "minify",
        "Concatenate and minify CSS and JS into pack.css and pack.js (default)",
    ),
    ("lint", "Run the JS and CSS linters"),
    ("help", "Print this list of operations"),
];

/// Render the operation list, one line each.
pub fn render() -> String {
    let width = OPERATIONS
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    OPERATIONS
        .iter()
        .map(|(name, about)| format!("{name:<width$}  {about}\n"))
        .collect()
}

/// Execute the help command.
pub fn execute() -> Result<()> {
    print!("{}", render());
    Ok(())
}
