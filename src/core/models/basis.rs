//! Idempotence basis
//!
//! The "already annotated" check can look for either the raw pattern
//! matches or the tickets that would actually be written.

use serde::{Deserialize, Serialize};

/// Which token set the already-present check looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdempotenceBasis {
    /// Every non-empty match of the ticket pattern in the branch name
    #[default]
    Matches,
    /// The mode-reduced, trimmed ticket list used for composition
    Composed,
}

impl IdempotenceBasis {
    /// The identifier used on the command line and in config files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Matches => "matches",
            Self::Composed => "composed",
        }
    }
}

impl std::fmt::Display for IdempotenceBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for IdempotenceBasis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "matches" => Ok(Self::Matches),
            "composed" => Ok(Self::Composed),
            _ => Err(format!("Invalid idempotence basis: {s}. Use: matches, composed")),
        }
    }
}
