//! Ticket extractor - finds ticket tokens in a branch name
//!
//! Pure matching logic with no I/O dependencies.

use regex::Regex;

use crate::core::models::{Mode, TicketList};

/// Default ticket pattern: an upper-case project key, a dash, and digits
pub const DEFAULT_TICKET_PATTERN: &str = r"[A-Z]+-\d+";

/// Separator between the ticket and the rest of an underscore-split branch
const UNDERSCORE: char = '_';

/// Find every non-empty match of `pattern` in `text`, in match order
///
/// When the pattern has capture groups, the text of the first group is
/// used instead of the whole match. Matches (or groups) that are empty or
/// did not participate are dropped.
#[must_use]
pub fn find_all(pattern: &Regex, text: &str) -> Vec<String> {
    if pattern.captures_len() > 1 {
        pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    } else {
        pattern
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Reduce raw matches to the ticket list for `mode`
///
/// In [`Mode::UnderscoreSplit`] the matches only gate the result: when
/// any exist, the single ticket is the branch text before the first `_`.
#[must_use]
pub fn reduce(branch: &str, matches: &[String], mode: Mode) -> TicketList {
    if matches.is_empty() {
        return TicketList::default();
    }

    match mode {
        Mode::RegexMatch => TicketList::new(matches),
        Mode::UnderscoreSplit => {
            let head = branch.split(UNDERSCORE).next().unwrap_or(branch);
            TicketList::new([head])
        },
    }
}

/// Extract the ticket list from a branch name
///
/// Never fails: a branch with nothing ticket-shaped yields an empty list.
#[must_use]
pub fn extract(branch: &str, pattern: &Regex, mode: Mode) -> TicketList {
    let matches = find_all(pattern, branch);
    reduce(branch, &matches, mode)
}
