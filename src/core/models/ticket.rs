//! Ticket lists
//!
//! An ordered, possibly repeating sequence of ticket tokens found in a
//! branch name.

/// Separator used when all tickets are rendered into one slot
pub const TICKET_SEPARATOR: &str = ", ";

/// Tickets in discovery order, each trimmed of surrounding whitespace
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketList(Vec<String>);

impl TicketList {
    /// Build a list, trimming every token
    pub fn new<I, S>(tickets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(tickets.into_iter().map(|t| t.as_ref().trim().to_string()).collect())
    }

    /// The first ticket, if any
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// All tickets joined with `", "`
    #[must_use]
    pub fn joined(&self) -> String {
        self.0.join(TICKET_SEPARATOR)
    }

    /// Whether no tickets were found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tickets as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
