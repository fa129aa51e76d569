//! Minify command implementation.
//!
//! Builds `pack.css` then `pack.js` from the ordered source lists in
//! `sitepack.toml`. With `--check`, builds both in memory and fails if
//! either artifact on disk differs.

use crate::cli::{MinifyArgs, SiteArgs};
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;
use sitepack_bundler::{ArtifactReport, AssetKind, AssetSpec, BuildObserver};
use tracing::debug;

/// Prints a banner before and after each bundling step.
struct Banners {
    check: bool,
    current: Option<AssetKind>,
}

impl Banners {
    fn new(check: bool) -> Self {
        Self {
            check,
            current: None,
        }
    }

    /// Report the step that was running when the build stopped.
    fn step_failed(&self) {
        if let Some(kind) = self.current {
            ui::failure(&format!("{kind} bundle failed"));
        }
    }
}

impl BuildObserver for Banners {
    fn step_started(&mut self, kind: AssetKind, spec: &AssetSpec) {
        self.current = Some(kind);
        let verb = if self.check { "Checking" } else { "Minifying" };
        ui::info(&format!(
            "{verb} {kind} ({} file(s)) -> {}",
            spec.sources.len(),
            spec.output.display()
        ));
    }

    fn step_finished(&mut self, report: &ArtifactReport) {
        self.current = None;
        let name = report.output.display();
        if !self.check {
            ui::success(&format!(
                "Wrote {name} ({})",
                ui::format_size(report.output_bytes)
            ));
        } else if report.changed {
            ui::failure(&format!("{name} is out of date"));
        } else {
            ui::success(&format!("{name} is up to date"));
        }
    }
}

/// Execute the minify command.
///
/// # Errors
///
/// Configuration errors, missing sources, minification failures, and
/// under `--check` any stale artifact.
pub fn execute(site: &SiteArgs, args: MinifyArgs) -> Result<()> {
    let (root, config) = utils::load_site(site)?;
    config.validate_bundle()?;
    for path in config.duplicate_sources() {
        ui::warning(&format!("{} is listed more than once", path.display()));
    }

    let plan = config.bundle_plan(&root);
    debug!("site root: {}", root.display());

    let mut banners = Banners::new(args.check);
    let result = if args.check {
        sitepack_bundler::check_all(&plan, &mut banners)
    } else {
        sitepack_bundler::run_all(&plan, &mut banners)
    };

    let reports = match result {
        Ok(reports) => reports,
        Err(e) => {
            banners.step_failed();
            return Err(e.into());
        }
    };

    if args.check {
        let stale: Vec<_> = reports
            .iter()
            .filter(|r| r.changed)
            .map(|r| r.output.clone())
            .collect();
        if !stale.is_empty() {
            return Err(CliError::StaleArtifacts { paths: stale });
        }
        ui::success("Artifacts are up to date");
    } else {
        ui::print_build_summary(&reports);
        ui::success("Minify complete");
    }

    Ok(())
}
