//! Format templates for the rewritten commit line
//!
//! A template is plain text with named slots in braces:
//!
//! ```
//! use giticket::core::models::{FormatTemplate, Slots};
//!
//! let template = FormatTemplate::parse("[{ticket}] {commit_msg}").unwrap();
//! let line = template.render(&Slots {
//!     ticket: "JIRA-123",
//!     tickets: "JIRA-123",
//!     commit_msg: "Fix the crash",
//!     ticket_number: "",
//! });
//! assert_eq!(line, "[JIRA-123] Fix the crash");
//! ```
//!
//! `{{` and `}}` produce literal braces. Anything else inside braces is
//! rejected when the template is parsed, so a bad template never reaches
//! a commit.

use thiserror::Error;

/// Default template: primary ticket, a space, then the original line
pub const DEFAULT_FORMAT: &str = "{ticket} {commit_msg}";

/// Errors that can occur when parsing a template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Placeholder name is not one of the known slots
    #[error("unknown template slot {{{0}}} (known: ticket, tickets, commit_msg, ticket_number)")]
    UnknownSlot(String),

    /// A `{` without a closing `}`, or a lone `}`
    #[error("unmatched brace at offset {0}")]
    UnmatchedBrace(usize),

    /// Positional `{}` placeholder
    #[error("empty placeholder at offset {0}; slots must be named")]
    EmptySlot(usize),
}

/// Named substitution slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Primary ticket after number stripping
    Ticket,
    /// All tickets joined with `", "`
    Tickets,
    /// Original first line of the commit message
    CommitMsg,
    /// Extracted ticket number, empty when none
    TicketNumber,
}

impl Slot {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "ticket" => Some(Self::Ticket),
            "tickets" => Some(Self::Tickets),
            "commit_msg" => Some(Self::CommitMsg),
            "ticket_number" => Some(Self::TicketNumber),
            _ => None,
        }
    }
}

/// Values substituted into a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slots<'a> {
    /// Value for `{ticket}`
    pub ticket: &'a str,
    /// Value for `{tickets}`
    pub tickets: &'a str,
    /// Value for `{commit_msg}`
    pub commit_msg: &'a str,
    /// Value for `{ticket_number}`
    pub ticket_number: &'a str,
}

impl<'a> Slots<'a> {
    const fn get(&self, slot: Slot) -> &'a str {
        match slot {
            Slot::Ticket => self.ticket,
            Slot::Tickets => self.tickets,
            Slot::CommitMsg => self.commit_msg,
            Slot::TicketNumber => self.ticket_number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(Slot),
}

/// A parsed, validated template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl FormatTemplate {
    /// Parse a template, rejecting unknown slots and stray braces
    pub fn parse(input: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = input.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' if chars.peek().is_some_and(|&(_, n)| n == '{') => {
                    chars.next();
                    literal.push('{');
                },
                '}' if chars.peek().is_some_and(|&(_, n)| n == '}') => {
                    chars.next();
                    literal.push('}');
                },
                '}' => return Err(TemplateError::UnmatchedBrace(pos)),
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, n) in chars.by_ref() {
                        if n == '}' {
                            closed = true;
                            break;
                        }
                        if n == '{' {
                            return Err(TemplateError::UnmatchedBrace(pos));
                        }
                        name.push(n);
                    }
                    if !closed {
                        return Err(TemplateError::UnmatchedBrace(pos));
                    }
                    if name.is_empty() {
                        return Err(TemplateError::EmptySlot(pos));
                    }
                    let slot = Slot::from_name(&name).ok_or(TemplateError::UnknownSlot(name))?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Slot(slot));
                },
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            raw: input.to_string(),
            segments,
        })
    }

    /// The template text as given
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Substitute slot values
    #[must_use]
    pub fn render(&self, slots: &Slots<'_>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(slot) => out.push_str(slots.get(*slot)),
            }
        }
        out
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self {
            raw: DEFAULT_FORMAT.to_string(),
            segments: vec![
                Segment::Slot(Slot::Ticket),
                Segment::Literal(" ".to_string()),
                Segment::Slot(Slot::CommitMsg),
            ],
        }
    }
}

impl std::str::FromStr for FormatTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for FormatTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
