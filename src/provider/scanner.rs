use super::{run_command, VersionProvider};
use crate::error::{QaError, Result};

/// Asks the scanner for its version by running a command and keeping the
/// last line of its output.
#[derive(Debug, Clone)]
pub struct CommandVersionProvider {
    command: Vec<String>,
}

impl CommandVersionProvider {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

impl VersionProvider for CommandVersionProvider {
    fn scanner_version(&self) -> Result<String> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| QaError::ConfigParse("scanner.version_command is empty".to_string()))?;
        let stdout = run_command(program, args, None)?;
        Ok(last_line(&stdout).to_string())
    }
}

/// Build tools such as `dub` print their own progress before the scanner's
/// version, so only the last line of the trimmed output counts.
pub fn last_line(output: &str) -> &str {
    output.trim().lines().last().unwrap_or("").trim()
}

/// `v0.15.2` becomes `0.15.2`: the version token minus its first character.
pub fn semantic_version(version: &str) -> &str {
    let mut chars = version.chars();
    chars.next();
    chars.as_str()
}
