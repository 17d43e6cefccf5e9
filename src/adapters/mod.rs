//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `git/` - Branch lookup through the `git` command line
//! - `file/` - The commit message file handed to the hook

pub mod file;
pub mod git;

pub use file::FileMessageStore;
pub use git::{BranchError, GitBranchProvider};
