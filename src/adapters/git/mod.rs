//! Git integration adapter
//!
//! Implements `BranchProvider` using the `git` command line.

use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use thiserror::Error;

use crate::core::ports::BranchProvider;

/// Errors that can occur while asking git for the branch
#[derive(Debug, Error)]
pub enum BranchError {
    /// The `git` executable could not be started
    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    /// git ran but reported an error (e.g. not a repository)
    #[error("git rev-parse failed ({status}): {stderr}")]
    GitFailed {
        /// Exit status of git
        status: ExitStatus,
        /// What git printed on stderr
        stderr: String,
    },

    /// git printed a branch name that is not valid UTF-8
    #[error("branch name is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Git-based branch provider
#[derive(Debug, Clone)]
pub struct GitBranchProvider {
    /// Working directory
    workdir: PathBuf,
}

impl GitBranchProvider {
    /// Create a new git branch provider
    #[must_use]
    pub const fn new(workdir: PathBuf) -> Self {
        Self { workdir }
    }

    /// Create a git branch provider for the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn current_dir() -> anyhow::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Resolve the abbreviated name of `HEAD`
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be run or the working directory is
    /// not inside a repository.
    pub fn resolve(&self) -> Result<String, BranchError> {
        let output = Command::new("git")
            .current_dir(&self.workdir)
            .args(["rev-parse", "--abbrev-ref", "HEAD"])
            .output()?;

        if !output.status.success() {
            return Err(BranchError::GitFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let branch = String::from_utf8(output.stdout)?;
        Ok(branch.trim().to_string())
    }
}

impl BranchProvider for GitBranchProvider {
    fn current_branch(&self) -> anyhow::Result<String> {
        let branch = self.resolve()?;
        log::debug!("current branch: {branch}");
        Ok(branch)
    }
}
