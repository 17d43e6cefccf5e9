//! Configuration loading
//!
//! Settings are layered, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. `~/.config/giticket/config.toml`
//! 3. `.giticket.toml` in the working directory
//! 4. Command-line flags
//!
//! Every key is optional at every layer. The merged result is validated
//! into [`RewriteRules`] before the branch or the message file is touched.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{FormatTemplate, IdempotenceBasis, Mode, TemplateError};
use crate::core::services::{DEFAULT_TICKET_PATTERN, RewriteRules, Window};
use crate::paths;

/// Errors that can occur while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Config file is not valid TOML or has unknown keys
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying parse error
        source: toml::de::Error,
    },

    /// A pattern does not compile
    #[error("invalid {field} pattern: {source}")]
    InvalidRegex {
        /// Which setting held the pattern
        field: &'static str,
        /// Underlying regex error
        source: regex::Error,
    },

    /// The format template is malformed
    #[error("invalid format template: {0}")]
    Template(#[from] TemplateError),
}

/// One layer of settings; unset keys fall through to lower layers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Pattern that finds tickets in the branch name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    /// Template for the rewritten first line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// How the branch name is split into tickets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    /// Pattern carving a number out of the primary ticket
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_number: Option<String>,
    /// Which tokens the already-present check looks for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idempotence: Option<IdempotenceBasis>,
    /// Extra characters allowed per ticket by the already-present check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_padding: Option<usize>,
}

/// Where file-based layers come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Global then project file; missing files are skipped
    Layered {
        /// User-level config file
        global: PathBuf,
        /// Project config file
        project: PathBuf,
    },
    /// A single file that must exist
    Explicit(PathBuf),
    /// Built-in defaults and flags only
    Disabled,
}

impl ConfigSource {
    /// The standard global and project locations for `dir`
    #[must_use]
    pub fn discover(dir: &Path) -> Self {
        Self::Layered {
            global: paths::global_config(),
            project: paths::project_config(dir),
        }
    }
}

impl Config {
    /// Parse a config layer from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or has unknown keys.
    pub fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a config file, or `None` if it does not exist
    pub fn load_optional(path: &Path) -> Result<Option<Self>, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(path, &content).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load a config file that must exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &content)
    }

    /// Load every file layer named by `source`, merged in precedence order
    pub fn from_source(source: &ConfigSource) -> Result<Self, ConfigError> {
        match source {
            ConfigSource::Layered { global, project } => {
                let mut merged = Self::default();
                for path in [global, project] {
                    if let Some(layer) = Self::load_optional(path)? {
                        log::debug!("loaded config layer {}", path.display());
                        merged = merged.merge(layer);
                    }
                }
                Ok(merged)
            },
            ConfigSource::Explicit(path) => {
                log::debug!("loading config {}", path.display());
                Self::load(path)
            },
            ConfigSource::Disabled => Ok(Self::default()),
        }
    }

    /// Overlay `over` on top of `self`; keys set in `over` win
    #[must_use]
    pub fn merge(self, over: Self) -> Self {
        Self {
            regex: over.regex.or(self.regex),
            format: over.format.or(self.format),
            mode: over.mode.or(self.mode),
            ticket_number: over.ticket_number.or(self.ticket_number),
            idempotence: over.idempotence.or(self.idempotence),
            window_padding: over.window_padding.or(self.window_padding),
        }
    }

    /// Validate into rules, filling unset keys with built-in defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern does not compile or the template is
    /// malformed.
    pub fn into_rules(self) -> Result<RewriteRules, ConfigError> {
        let regex = self.regex.as_deref().unwrap_or(DEFAULT_TICKET_PATTERN);
        let ticket_pattern = Regex::new(regex).map_err(|source| ConfigError::InvalidRegex {
            field: "regex",
            source,
        })?;

        let ticket_number = self
            .ticket_number
            .as_deref()
            .map(Regex::new)
            .transpose()
            .map_err(|source| ConfigError::InvalidRegex {
                field: "ticket_number",
                source,
            })?;

        let template = match self.format.as_deref() {
            Some(format) => FormatTemplate::parse(format)?,
            None => FormatTemplate::default(),
        };

        let mut rules = RewriteRules::new(ticket_pattern);
        rules.mode = self.mode.unwrap_or_default();
        rules.ticket_number = ticket_number;
        rules.template = template;
        rules.idempotence = self.idempotence.unwrap_or_default();
        if let Some(padding) = self.window_padding {
            rules.window = Window::new(padding);
        }
        Ok(rules)
    }
}
