//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::core::services::Rewrite;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of one hook run
#[derive(Debug, Serialize)]
pub struct RewriteReport {
    /// Outcome name (`rewritten`, `already_present`, ...)
    pub status: String,
    /// Whether the commit may proceed
    pub success: bool,
    /// Branch the tickets came from
    pub branch: String,
    /// Tickets used for composition
    pub tickets: Vec<String>,
    /// Rewritten first line, when one was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Human-readable explanation
    pub detail: String,
}

impl From<&Rewrite> for RewriteReport {
    fn from(rewrite: &Rewrite) -> Self {
        Self {
            status: rewrite.outcome.status().to_string(),
            success: rewrite.outcome.is_success(),
            branch: rewrite.branch.clone(),
            tickets: rewrite.tickets.as_slice().to_vec(),
            message: rewrite.outcome.new_line().map(String::from),
            detail: rewrite.outcome.describe(),
        }
    }
}

impl RewriteReport {
    /// Text printed in human mode, if any
    ///
    /// A successful rewrite is silent; every other outcome explains itself
    /// in one line.
    #[must_use]
    pub fn human_line(&self) -> Option<&str> {
        if self.message.is_some() { None } else { Some(self.detail.as_str()) }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if let Some(line) = self.human_line() {
            println!("{line}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
