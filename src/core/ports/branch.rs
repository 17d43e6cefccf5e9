//! Branch name port
//!
//! Defines the interface for resolving the checked-out branch.

/// Source of the current branch name
#[cfg_attr(test, mockall::automock)]
pub trait BranchProvider {
    /// Get the abbreviated name of the checked-out branch
    ///
    /// A detached HEAD resolves to `HEAD`. Failing to query the version
    /// control system at all is an error.
    fn current_branch(&self) -> anyhow::Result<String>;
}
