//! Result of a rewrite attempt

/// What happened to the commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every ticket already appears near the start of the line; nothing written
    AlreadyPresent {
        /// Number of leading characters that were inspected
        window: usize,
    },
    /// The branch name holds nothing ticket-shaped
    NoTicketsFound,
    /// A ticket-number pattern was given but did not match the primary ticket
    NumberExtractionFailed,
    /// The new first line to write back
    Rewritten(String),
}

impl Outcome {
    /// Whether the hook should let the commit proceed
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::AlreadyPresent { .. } | Self::Rewritten(_))
    }

    /// Process exit status for this outcome
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }

    /// Machine-readable status name
    #[must_use]
    pub const fn status(&self) -> &'static str {
        match self {
            Self::AlreadyPresent { .. } => "already_present",
            Self::NoTicketsFound => "no_tickets_found",
            Self::NumberExtractionFailed => "number_extraction_failed",
            Self::Rewritten(_) => "rewritten",
        }
    }

    /// One-line human explanation
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::AlreadyPresent { window } => {
                format!("Commit message already contains tickets in the first {window} characters.")
            },
            Self::NoTicketsFound => "Found no tickets in the branch name.".to_string(),
            Self::NumberExtractionFailed => {
                "Could not find ticket number in branch name.".to_string()
            },
            Self::Rewritten(line) => format!("Rewrote commit message: {line}"),
        }
    }

    /// The new first line, if the message is to be rewritten
    #[must_use]
    pub fn new_line(&self) -> Option<&str> {
        match self {
            Self::Rewritten(line) => Some(line),
            _ => None,
        }
    }
}
