//! Rewriter - runs extraction, the already-present check, and composition
//!
//! [`Rewriter::rewrite`] is pure. [`Rewriter::apply`] wires it to a
//! [`BranchProvider`] and a [`MessageStore`] for the hook itself.

use std::path::Path;

use regex::Regex;

use crate::core::models::{FormatTemplate, IdempotenceBasis, Mode, Outcome, TicketList};
use crate::core::ports::{BranchProvider, MessageStore};
use crate::core::services::composer::compose;
use crate::core::services::extractor::{find_all, reduce};
use crate::core::services::idempotence::Window;

/// Everything that decides how a commit line is rewritten
#[derive(Debug, Clone)]
pub struct RewriteRules {
    /// Pattern that finds tickets in the branch name
    pub ticket_pattern: Regex,
    /// How the branch name is split into tickets
    pub mode: Mode,
    /// Optional pattern carving a number out of the primary ticket
    pub ticket_number: Option<Regex>,
    /// Template for the new first line
    pub template: FormatTemplate,
    /// Which tokens the already-present check looks for
    pub idempotence: IdempotenceBasis,
    /// Leading window searched by the already-present check
    pub window: Window,
}

impl RewriteRules {
    /// Rules with the given ticket pattern and defaults for everything else
    #[must_use]
    pub fn new(ticket_pattern: Regex) -> Self {
        Self {
            ticket_pattern,
            mode: Mode::default(),
            ticket_number: None,
            template: FormatTemplate::default(),
            idempotence: IdempotenceBasis::default(),
            window: Window::default(),
        }
    }
}

/// Full record of one rewrite decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// Branch name the tickets came from
    pub branch: String,
    /// Raw pattern matches, before mode reduction
    pub matches: Vec<String>,
    /// Tickets used for composition
    pub tickets: TicketList,
    /// What happened
    pub outcome: Outcome,
}

/// Applies [`RewriteRules`] to commit lines
#[derive(Debug, Clone)]
pub struct Rewriter {
    rules: RewriteRules,
}

impl Rewriter {
    /// Create a rewriter
    #[must_use]
    pub const fn new(rules: RewriteRules) -> Self {
        Self { rules }
    }

    /// The rules in effect
    #[must_use]
    pub const fn rules(&self) -> &RewriteRules {
        &self.rules
    }

    /// Decide what the first line of a commit on `branch` should become
    #[must_use]
    pub fn rewrite(&self, branch: &str, commit_line: &str) -> Rewrite {
        let rules = &self.rules;
        let matches = find_all(&rules.ticket_pattern, branch);
        let tickets = reduce(branch, &matches, rules.mode);
        log::debug!("branch {branch:?}: matches {matches:?}, tickets {:?}", tickets.as_slice());

        let outcome = if tickets.is_empty() {
            Outcome::NoTicketsFound
        } else {
            let probe: &[String] = match rules.idempotence {
                IdempotenceBasis::Matches => &matches,
                IdempotenceBasis::Composed => tickets.as_slice(),
            };
            let window = rules.window.len(probe);
            log::debug!("checking {} {probe:?} in first {window} characters", rules.idempotence);

            if rules.window.contains_all(probe, commit_line) {
                Outcome::AlreadyPresent { window }
            } else {
                compose(&tickets, commit_line, rules.ticket_number.as_ref(), &rules.template)
            }
        };

        Rewrite {
            branch: branch.to_string(),
            matches,
            tickets,
            outcome,
        }
    }

    /// Rewrite the commit message file at `path` in place
    ///
    /// The branch is resolved first, then the first line is read. The file
    /// is written only when the outcome is [`Outcome::Rewritten`].
    ///
    /// # Errors
    ///
    /// Returns an error if the branch cannot be resolved or the file cannot
    /// be read or written.
    pub fn apply(
        &self,
        branches: &dyn BranchProvider,
        store: &dyn MessageStore,
        path: &Path,
    ) -> anyhow::Result<Rewrite> {
        let branch = branches.current_branch()?;
        let commit_line = store.read_first_line(path)?;
        let rewrite = self.rewrite(&branch, &commit_line);

        if let Some(line) = rewrite.outcome.new_line() {
            store.write_first_line(path, line)?;
            log::info!("rewrote first line of {}", path.display());
        }

        Ok(rewrite)
    }
}
