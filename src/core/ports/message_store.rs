//! Commit message store port
//!
//! Defines the interface for reading and replacing the first line of a
//! commit message file.

use std::path::Path;

/// Storage for a pending commit message
#[cfg_attr(test, mockall::automock)]
pub trait MessageStore {
    /// Read the first line, without its trailing CR/LF
    fn read_first_line(&self, path: &Path) -> anyhow::Result<String>;

    /// Replace the first line, keeping every following line unchanged
    fn write_first_line(&self, path: &Path, line: &str) -> anyhow::Result<()>;
}
