//! Shared test fixtures and helpers
//!
//! In-memory implementations of the port traits, so the rewrite logic can
//! be driven with canned branch names and messages.

use std::cell::RefCell;
use std::path::Path;

use giticket::config::Config;
use giticket::core::ports::{BranchProvider, MessageStore};
use giticket::core::services::{RewriteRules, Rewriter};

/// Branch provider returning a fixed branch, or failing like git outside a repo
pub struct FixedBranch {
    branch: Option<String>,
}

impl FixedBranch {
    pub fn new(branch: &str) -> Self {
        Self {
            branch: Some(branch.to_string()),
        }
    }

    pub fn not_a_repository() -> Self {
        Self { branch: None }
    }
}

impl BranchProvider for FixedBranch {
    fn current_branch(&self) -> anyhow::Result<String> {
        self.branch
            .clone()
            .ok_or_else(|| anyhow::anyhow!("fatal: not a git repository"))
    }
}

/// Message store holding one message in memory
pub struct MemoryMessage {
    contents: RefCell<String>,
    writes: RefCell<usize>,
}

impl MemoryMessage {
    pub fn new(contents: &str) -> Self {
        Self {
            contents: RefCell::new(contents.to_string()),
            writes: RefCell::new(0),
        }
    }

    pub fn contents(&self) -> String {
        self.contents.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl MessageStore for MemoryMessage {
    fn read_first_line(&self, _path: &Path) -> anyhow::Result<String> {
        let contents = self.contents.borrow();
        let first = contents.lines().next().unwrap_or("");
        Ok(first.trim_end_matches('\r').to_string())
    }

    fn write_first_line(&self, _path: &Path, line: &str) -> anyhow::Result<()> {
        let rest = {
            let contents = self.contents.borrow();
            contents.split_once('\n').map(|(_, rest)| rest.to_string()).unwrap_or_default()
        };
        *self.contents.borrow_mut() = format!("{line}\n{rest}");
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

/// Default rules
pub fn default_rules() -> RewriteRules {
    Config::default().into_rules().unwrap()
}

/// Rewriter built from a config layer
pub fn rewriter(config: Config) -> Rewriter {
    Rewriter::new(config.into_rules().unwrap())
}
