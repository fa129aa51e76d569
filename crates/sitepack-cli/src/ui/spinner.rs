//! Spinner shown while an external lint tool runs.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Simple spinner for tasks without known duration.
///
/// Hidden in CI and when stderr is not a terminal. Finishing clears the
/// spinner line and prints a banner through [`super::success`] or
/// [`super::failure`], so the result lands on stdout either way.
///
/// # Examples
///
/// ```no_run
/// use sitepack_cli::ui::Spinner;
///
/// let spinner = Spinner::new("Running CSS lint...");
/// // Do work...
/// spinner.finish("CSS lint passed");
/// ```
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    /// Create and start a new spinner.
    pub fn new(message: &str) -> Self {
        let pb = if super::is_ci() || !console::user_attended_stderr() {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
                pb.set_style(style.tick_strings(&["◐", "◓", "◑", "◒", "●"]));
            }
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        };
        pb.set_message(message.to_string());

        Self { pb }
    }

    /// Clear the spinner and print a success banner.
    pub fn finish(&self, message: &str) {
        self.pb.finish_and_clear();
        super::success(message);
    }

    /// Clear the spinner and print a failure banner.
    pub fn fail(&self, message: &str) {
        self.pb.finish_and_clear();
        super::failure(message);
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.pb.is_finished() {
            self.pb.finish_and_clear();
        }
    }
}
