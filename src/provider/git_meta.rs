use super::{run_command, GitInfo};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Reads revision details from the git checkout at `root`.
#[derive(Debug, Clone)]
pub struct GitCli {
    root: PathBuf,
}

impl GitCli {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    fn rev_parse(&self, args: &[&str]) -> Result<String> {
        let args = std::iter::once("rev-parse")
            .chain(args.iter().copied())
            .map(String::from)
            .collect::<Vec<_>>();
        let stdout = run_command("git", &args, Some(self.root.as_path()))?;
        Ok(stdout.trim().to_string())
    }
}

impl GitInfo for GitCli {
    fn commit_sha(&self) -> Result<String> {
        self.rev_parse(&["HEAD"])
    }

    fn branch(&self) -> Result<String> {
        self.rev_parse(&["--abbrev-ref", "HEAD"])
    }
}
