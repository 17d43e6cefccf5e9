//! Message composer - renders the new first line from extracted tickets

use regex::Regex;

use crate::core::models::{FormatTemplate, Outcome, Slots, TicketList};

/// First match of `pattern` in `text`, or `None` when it does not match
///
/// A match may be empty. With capture groups, the first group's text is
/// returned (empty when the group did not participate).
fn first_match(pattern: &Regex, text: &str) -> Option<String> {
    if pattern.captures_len() > 1 {
        pattern
            .captures(text)
            .map(|caps| caps.get(1).map_or("", |m| m.as_str()).to_string())
    } else {
        pattern.find(text).map(|m| m.as_str().to_string())
    }
}

/// Split the ticket number out of the primary ticket
///
/// Returns the number and the primary ticket with every match of the
/// pattern removed, or `None` when the pattern does not match.
#[must_use]
pub fn split_ticket_number(pattern: &Regex, primary: &str) -> Option<(String, String)> {
    let number = first_match(pattern, primary)?;
    let stripped = pattern.replace_all(primary, "").into_owned();
    Some((number, stripped))
}

/// Compose the new first line
///
/// `tickets` is rendered as-is into `{tickets}`; only `{ticket}` sees the
/// primary ticket with its number removed.
#[must_use]
pub fn compose(
    tickets: &TicketList,
    commit_line: &str,
    ticket_number: Option<&Regex>,
    template: &FormatTemplate,
) -> Outcome {
    let Some(primary) = tickets.primary() else {
        return Outcome::NoTicketsFound;
    };

    let (number, ticket) = match ticket_number {
        Some(pattern) => match split_ticket_number(pattern, primary) {
            Some(split) => split,
            None => return Outcome::NumberExtractionFailed,
        },
        None => (String::new(), primary.to_string()),
    };

    let joined = tickets.joined();
    let line = template.render(&Slots {
        ticket: &ticket,
        tickets: &joined,
        commit_msg: commit_line,
        ticket_number: &number,
    });

    Outcome::Rewritten(line)
}
