//! Blocking, timeout-bounded process execution
//!
//! Each call builds a single-threaded tokio runtime and blocks on it, so the
//! caller sees an ordinary synchronous function. The child is spawned with
//! `kill_on_drop`, which means abandoning it at the timeout kills it.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::error::{Error, Result};

/// Default wall-clock limit for one external process.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Upper bound on the stderr kept in error messages.
const STDERR_LIMIT: usize = 4096;

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Program name for messages.
    pub fn program_name(&self) -> String {
        self.program.display().to_string()
    }
}

impl std::fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Captured output of a successful process.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs external processes to completion under a timeout.
#[derive(Debug, Clone, Copy)]
pub struct ProcessRunner {
    timeout: Duration,
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl ProcessRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run `spec` in `cwd`, blocking until it exits.
    ///
    /// Non-zero exit is [`Error::Failed`]; exceeding the timeout kills the
    /// child and returns [`Error::TimedOut`].
    pub fn run(&self, spec: &CommandSpec, cwd: &Path) -> Result<ProcessOutput> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(Error::Runtime)?;

        tracing::info!(command = %spec, cwd = %cwd.display(), "Running");
        let output = runtime.block_on(self.run_async(spec, cwd))?;

        for line in output.stdout.lines() {
            tracing::debug!(program = %spec.program_name(), "{}", line);
        }
        Ok(output)
    }

    async fn run_async(&self, spec: &CommandSpec, cwd: &Path) -> Result<ProcessOutput> {
        let program = spec.program_name();

        let child = Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| Error::Spawn {
                program: program.clone(),
                source,
            })?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|source| Error::Wait {
                program: program.clone(),
                source,
            })?,
            Err(_) => {
                tracing::warn!(program = %program, timeout = ?self.timeout, "Process timed out, killed");
                return Err(Error::TimedOut {
                    program,
                    timeout: self.timeout,
                });
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let mut stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if output.status.success() {
            Ok(ProcessOutput { stdout, stderr })
        } else {
            truncate(&mut stderr, STDERR_LIMIT);
            Err(Error::Failed {
                program,
                code: output.status.code(),
                stderr: stderr.trim_end().to_string(),
            })
        }
    }
}

/// Truncate on a char boundary.
fn truncate(text: &mut String, limit: usize) {
    if text.len() <= limit {
        return;
    }
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}
