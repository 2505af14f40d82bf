//! External collaborators consulted while converting: the scanner's version
//! query and the local git checkout. Both sit behind traits so conversions can
//! run against fixed values.

pub mod git_meta;
pub mod scanner;

use crate::error::{QaError, Result};
use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

pub trait VersionProvider {
    /// Version token reported by the scanner, e.g. `v0.15.2`.
    fn scanner_version(&self) -> Result<String>;
}

pub trait GitInfo {
    fn commit_sha(&self) -> Result<String>;
    fn branch(&self) -> Result<String>;
}

/// Runs `program` and returns its stdout. A non-zero exit status is logged
/// and the output is still returned; only a failure to spawn is an error.
pub(crate) fn run_command(program: &str, args: &[String], cwd: Option<&Path>) -> Result<String> {
    let command_line = std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ");

    let mut command = Command::new(program);
    command.args(args);
    if let Some(cwd) = cwd {
        command.current_dir(cwd);
    }
    let output = command.output().map_err(|source| QaError::CommandSpawn {
        command: command_line.clone(),
        source,
    })?;

    if !output.status.success() {
        warn!(
            command = %command_line,
            status = %output.status,
            stderr = %String::from_utf8_lossy(&output.stderr).trim(),
            "external command exited unsuccessfully"
        );
    }

    let stdout = String::from_utf8(output.stdout)
        .map_err(|_| QaError::CommandOutput(command_line.clone()))?;
    debug!(command = %command_line, stdout = %stdout.trim(), "external command finished");
    Ok(stdout)
}
