use crate::describe::DescribeProvider;
use crate::error::{DevscriptsError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Arguments passed to the git binary
pub const DESCRIBE_ARGS: [&str; 2] = ["describe", "--tags"];

/// Runs `git describe --tags` as a blocking subprocess
///
/// The command runs once with no timeout. Any failure to start it, a non-zero
/// exit status, or stdout that is not UTF-8 is reported as an invocation
/// error.
#[derive(Debug, Clone)]
pub struct GitCommand {
    program: PathBuf,
    workdir: Option<PathBuf>,
}

impl GitCommand {
    /// Use the `git` found on `PATH` in the current directory
    pub fn new() -> Self {
        GitCommand {
            program: PathBuf::from("git"),
            workdir: None,
        }
    }

    /// Use a specific git executable
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Run the command inside `dir` instead of the current directory
    pub fn in_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.workdir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// The executable that will be run
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for GitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl DescribeProvider for GitCommand {
    fn describe(&self) -> Result<String> {
        let mut cmd = Command::new(&self.program);
        cmd.args(DESCRIBE_ARGS);
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        tracing::debug!(program = %self.program.display(), workdir = ?self.workdir, "running git describe");

        let output = cmd.output().map_err(|e| {
            DevscriptsError::invocation(format!(
                "Failed to execute {}: {}",
                self.program.display(),
                e
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DevscriptsError::invocation(format!(
                "{} {} failed with exit code {}: {}",
                self.program.display(),
                DESCRIBE_ARGS.join(" "),
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout).map_err(|e| {
            DevscriptsError::invocation(format!("describe output is not valid UTF-8: {}", e))
        })
    }
}
