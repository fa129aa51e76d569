//! Subprocess seam for lint tools.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

/// One tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    /// Resolved tool binary.
    pub program: &'a Path,
    pub args: Vec<OsString>,
    /// Working directory (the site root).
    pub cwd: &'a Path,
}

/// What a finished tool reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, `None` if the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Runs a tool to completion.
pub trait ToolRunner {
    fn run(&self, invocation: &Invocation<'_>) -> std::io::Result<ToolOutput>;
}

/// [`ToolRunner`] backed by `std::process::Command`.
///
/// Blocks until the tool exits. There is no timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ToolRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation<'_>) -> std::io::Result<ToolOutput> {
        let output = Command::new(invocation.program)
            .args(&invocation.args)
            .current_dir(invocation.cwd)
            .stdin(Stdio::null())
            .output()?;

        Ok(ToolOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
