//! Branch decomposition modes
//!
//! Selects how a branch name is turned into ticket tokens.

use serde::{Deserialize, Serialize};

/// Strategy used to decompose a branch name into tickets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// The segment before the first `_` is the single ticket, provided the
    /// ticket pattern matches somewhere in the branch name
    #[default]
    UnderscoreSplit,
    /// Every match of the ticket pattern is a ticket, in match order
    RegexMatch,
}

impl Mode {
    /// All modes, in declaration order
    pub const ALL: [Self; 2] = [Self::UnderscoreSplit, Self::RegexMatch];

    /// The identifier used on the command line and in config files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnderscoreSplit => "underscore_split",
            Self::RegexMatch => "regex_match",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "underscore_split" => Ok(Self::UnderscoreSplit),
            "regex_match" => Ok(Self::RegexMatch),
            _ => Err(format!("Invalid mode: {s}. Use: underscore_split, regex_match")),
        }
    }
}
