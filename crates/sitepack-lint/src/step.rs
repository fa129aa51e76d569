//! Lint steps and their sequential execution.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::runner::{Invocation, ToolRunner};
use crate::{Error, Result};

/// Which linter a step runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LintKind {
    Js,
    Css,
}

impl fmt::Display for LintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintKind::Js => write!(f, "JS lint"),
            LintKind::Css => write!(f, "CSS lint"),
        }
    }
}

/// A lint tool and the files it checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintStep {
    pub kind: LintKind,
    /// Tool binary, relative to the site root unless absolute.
    pub tool: PathBuf,
    /// Extra arguments placed before the file list.
    pub args: Vec<String>,
    pub files: Vec<PathBuf>,
}

impl LintStep {
    pub fn new<I, P>(kind: LintKind, tool: impl Into<PathBuf>, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            kind,
            tool: tool.into(),
            args: Vec::new(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    fn arguments(&self) -> Vec<OsString> {
        self.args
            .iter()
            .map(OsString::from)
            .chain(self.files.iter().map(|f| f.as_os_str().to_os_string()))
            .collect()
    }
}

/// Result of one lint step that ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintResult {
    pub kind: LintKind,
    pub tool: PathBuf,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl LintResult {
    pub fn passed(&self) -> bool {
        self.code == Some(0)
    }
}

/// Results of a lint run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    pub results: Vec<LintResult>,
}

impl LintReport {
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(LintResult::passed)
    }

    pub fn failed(&self) -> impl Iterator<Item = &LintResult> {
        self.results.iter().filter(|r| !r.passed())
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }
}

/// Receives progress callbacks from [`run_all`].
pub trait LintObserver {
    fn step_started(&mut self, _step: &LintStep) {}
    fn step_finished(&mut self, _result: &LintResult) {}
}

impl LintObserver for () {}

/// Locate the tool binary for `step` under `root`.
///
/// Returns [`Error::ToolNotFound`] if nothing exists there.
pub fn resolve_tool(root: &Path, step: &LintStep) -> Result<PathBuf> {
    // Relative program paths combined with `current_dir` are platform specific
    let candidate = std::path::absolute(root.join(&step.tool)).map_err(|_| Error::ToolNotFound {
        kind: step.kind,
        path: step.tool.clone(),
    })?;
    if candidate.is_file() {
        return Ok(candidate);
    }

    // npm installs `.cmd` shims next to the extensionless scripts on Windows
    #[cfg(windows)]
    {
        let shim = candidate.with_extension("cmd");
        if shim.is_file() {
            return Ok(shim);
        }
    }

    Err(Error::ToolNotFound {
        kind: step.kind,
        path: step.tool.clone(),
    })
}

/// Run one lint step.
///
/// The tool's exit status is recorded in the result; only a missing or
/// unstartable tool is an error.
pub fn run_step(runner: &dyn ToolRunner, root: &Path, step: &LintStep) -> Result<LintResult> {
    let program = resolve_tool(root, step)?;
    let invocation = Invocation {
        program: &program,
        args: step.arguments(),
        cwd: root,
    };
    debug!(
        "running {} with {} file(s)",
        program.display(),
        step.files.len()
    );

    let output = runner.run(&invocation).map_err(|source| Error::Spawn {
        tool: step.tool.clone(),
        source,
    })?;

    let result = LintResult {
        kind: step.kind,
        tool: step.tool.clone(),
        code: output.code,
        stdout: output.stdout,
        stderr: output.stderr,
    };

    if !result.passed() {
        warn!("{} failed with exit code {:?}", step.kind, result.code);
    }

    Ok(result)
}

/// Run the JS linter at `tool` over `files`.
pub fn run_js_lint(
    runner: &dyn ToolRunner,
    root: &Path,
    tool: &Path,
    files: &[PathBuf],
) -> Result<LintResult> {
    run_step(runner, root, &LintStep::new(LintKind::Js, tool, files.iter().cloned()))
}

/// Run the CSS linter at `tool` over `files`.
pub fn run_css_lint(
    runner: &dyn ToolRunner,
    root: &Path,
    tool: &Path,
    files: &[PathBuf],
) -> Result<LintResult> {
    run_step(runner, root, &LintStep::new(LintKind::Css, tool, files.iter().cloned()))
}

/// Run every step in order.
///
/// A failing step does not stop the run. A missing tool does, before
/// anything of that step or later steps is spawned.
pub fn run_all(
    runner: &dyn ToolRunner,
    root: &Path,
    steps: &[LintStep],
    observer: &mut dyn LintObserver,
) -> Result<LintReport> {
    let mut report = LintReport::default();
    for step in steps {
        observer.step_started(step);
        let result = run_step(runner, root, step)?;
        observer.step_finished(&result);
        report.results.push(result);
    }
    Ok(report)
}
