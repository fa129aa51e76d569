//! Build orchestration: source list -> bundle -> minified artifact.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::Result;
use crate::minify::minify_bundle;
use crate::output::{resolve_output_path, write_artifact};
use crate::source::{AssetKind, SourceList};

/// Sources and destination of one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSpec {
    pub sources: SourceList,
    /// Artifact path relative to the site root.
    pub output: PathBuf,
}

impl AssetSpec {
    pub fn new(sources: SourceList, output: impl Into<PathBuf>) -> Self {
        Self {
            sources,
            output: output.into(),
        }
    }
}

/// Everything a bundler run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundlePlan {
    /// Site root every source and output path is relative to.
    pub root: PathBuf,
    pub css: AssetSpec,
    pub js: AssetSpec,
}

impl BundlePlan {
    /// Steps in execution order.
    pub fn steps(&self) -> [(AssetKind, &AssetSpec); 2] {
        [(AssetKind::Css, &self.css), (AssetKind::Js, &self.js)]
    }
}

/// Outcome of building one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactReport {
    pub kind: AssetKind,
    /// Resolved artifact path.
    pub output: PathBuf,
    pub sources: usize,
    /// Size of the concatenated bundle before minification.
    pub input_bytes: u64,
    pub output_bytes: u64,
    /// BLAKE3 hex digest of the artifact content.
    pub digest: String,
    pub elapsed: Duration,
    /// Whether the artifact on disk differed from the new content before this run.
    pub changed: bool,
}

impl ArtifactReport {
    /// First 12 hex characters of the digest.
    pub fn short_digest(&self) -> &str {
        &self.digest[..self.digest.len().min(12)]
    }
}

/// Receives progress callbacks from [`run_all`] and [`check_all`].
pub trait BuildObserver {
    fn step_started(&mut self, _kind: AssetKind, _spec: &AssetSpec) {}
    fn step_finished(&mut self, _report: &ArtifactReport) {}
}

impl BuildObserver for () {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Write,
    Check,
}

/// Build `pack.css` (or whatever `output` names) from an ordered CSS list.
pub fn build_css_bundle(root: &Path, sources: &SourceList, output: &Path) -> Result<ArtifactReport> {
    build_artifact(root, AssetKind::Css, sources, output, Mode::Write)
}

/// Build `pack.js` (or whatever `output` names) from an ordered JS list.
pub fn build_js_bundle(root: &Path, sources: &SourceList, output: &Path) -> Result<ArtifactReport> {
    build_artifact(root, AssetKind::Js, sources, output, Mode::Write)
}

/// Build the CSS artifact, then the JS artifact.
///
/// Stops at the first failure. An artifact that already completed stays
/// written; the failing one is left untouched.
pub fn run_all(plan: &BundlePlan, observer: &mut dyn BuildObserver) -> Result<Vec<ArtifactReport>> {
    run_steps(plan, Mode::Write, observer)
}

/// Build both artifacts in memory and compare them with what is on disk.
///
/// Nothing is written. Stale artifacts are reported with `changed == true`.
pub fn check_all(plan: &BundlePlan, observer: &mut dyn BuildObserver) -> Result<Vec<ArtifactReport>> {
    run_steps(plan, Mode::Check, observer)
}

fn run_steps(
    plan: &BundlePlan,
    mode: Mode,
    observer: &mut dyn BuildObserver,
) -> Result<Vec<ArtifactReport>> {
    let mut reports = Vec::with_capacity(2);
    for (kind, spec) in plan.steps() {
        observer.step_started(kind, spec);
        let report = build_artifact(&plan.root, kind, &spec.sources, &spec.output, mode)?;
        observer.step_finished(&report);
        reports.push(report);
    }
    Ok(reports)
}

fn build_artifact(
    root: &Path,
    kind: AssetKind,
    sources: &SourceList,
    output: &Path,
    mode: Mode,
) -> Result<ArtifactReport> {
    let started = Instant::now();
    // Resolve first so a bad output path fails before any work
    let target = resolve_output_path(root, output)?;

    let bundle = sources.concat(kind, root)?;
    debug!(
        "{} bundle: {} files, {} bytes",
        kind,
        sources.len(),
        bundle.len()
    );

    let filename = output.to_string_lossy();
    let minified = minify_bundle(&bundle, &filename)?;

    let changed = match fs::read(&target) {
        Ok(previous) => previous != minified.as_bytes(),
        Err(_) => true,
    };

    if mode == Mode::Write {
        write_artifact(&target, minified.as_bytes())?;
        info!(
            "wrote {} ({} -> {} bytes)",
            target.display(),
            bundle.len(),
            minified.len()
        );
    }

    Ok(ArtifactReport {
        kind,
        output: target,
        sources: sources.len(),
        input_bytes: bundle.len() as u64,
        output_bytes: minified.len() as u64,
        digest: blake3::hash(minified.as_bytes()).to_hex().to_string(),
        elapsed: started.elapsed(),
        changed,
    })
}
