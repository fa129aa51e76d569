//! Lint command implementation.
//!
//! Runs the JS linter, then the CSS linter, from the site root. A linter
//! that reports problems does not stop the other one; the command fails
//! at the end if either did.

use crate::cli::SiteArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;
use sitepack_lint::{LintObserver, LintResult, LintStep, ProcessRunner};

/// Banner and spinner around each tool run.
#[derive(Default)]
struct Progress {
    spinner: Option<ui::Spinner>,
}

impl LintObserver for Progress {
    fn step_started(&mut self, step: &LintStep) {
        ui::info(&format!("Running {}...", step.kind));
        self.spinner = Some(ui::Spinner::new(&format!(
            "{} ({} file(s))",
            step.tool.display(),
            step.files.len()
        )));
    }

    fn step_finished(&mut self, result: &LintResult) {
        let spinner = self.spinner.take();
        if result.passed() {
            let message = format!("{} passed", result.kind);
            match spinner {
                Some(s) => s.finish(&message),
                None => ui::success(&message),
            }
        } else {
            let message = match result.code {
                Some(code) => format!("{} failed (exit code {code})", result.kind),
                None => format!("{} was terminated by a signal", result.kind),
            };
            match spinner {
                Some(s) => s.fail(&message),
                None => ui::failure(&message),
            }
        }

        // The tool's own report, passed through unchanged
        if !result.stdout.trim().is_empty() {
            print!("{}", with_newline(&result.stdout));
        }
        if !result.stderr.trim().is_empty() {
            eprint!("{}", with_newline(&result.stderr));
        }
    }
}

fn with_newline(text: &str) -> String {
    if text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{text}\n")
    }
}

/// Execute the lint command.
///
/// # Errors
///
/// Configuration errors, a missing lint tool (before anything else runs),
/// or [`CliError::LintFailed`] when any tool reported problems.
pub fn execute(site: &SiteArgs) -> Result<()> {
    let (root, config) = utils::load_site(site)?;
    config.validate_lint()?;

    let steps = config.lint_steps();
    let mut progress = Progress::default();
    let report = sitepack_lint::run_all(&ProcessRunner, &root, &steps, &mut progress)?;

    if !report.all_passed() {
        return Err(CliError::LintFailed {
            failed: report.failed_count(),
        });
    }

    ui::success("Lint complete");
    Ok(())
}
