//! Rewrite the commit message with tickets from the branch name
//!
//! This command is called by the commit-msg hook with the path of the
//! pending commit message.

use std::path::PathBuf;

use giticket::adapters::{FileMessageStore, GitBranchProvider};
use giticket::config::Config;
use giticket::core::services::Rewriter;
use giticket::output::{OutputMode, RewriteReport};

/// Rewrite the first line of the commit message file (commit-msg hook)
///
/// Exits with status 1 when no tickets are found or the ticket-number
/// pattern misses; configuration and git failures are returned as errors.
pub fn rewrite(files: &[PathBuf], config: Config, mode: OutputMode) -> anyhow::Result<()> {
    let Some(path) = files.first() else {
        anyhow::bail!("No commit message file given");
    };
    if files.len() > 1 {
        log::warn!("{} extra file argument(s) ignored; using {}", files.len() - 1, path.display());
    }

    // Validate everything before touching git or the message file
    let rewriter = Rewriter::new(config.into_rules()?);
    let rules = rewriter.rules();
    log::debug!(
        "mode {}, pattern {}, template {:?}",
        rules.mode,
        rules.ticket_pattern,
        rules.template.as_str()
    );

    let branches = GitBranchProvider::current_dir()?;
    let rewrite = rewriter.apply(&branches, &FileMessageStore::new(), path)?;

    RewriteReport::from(&rewrite).render(mode);

    if !rewrite.outcome.is_success() {
        std::process::exit(rewrite.outcome.exit_code());
    }

    Ok(())
}
