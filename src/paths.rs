//! Centralized path definitions for giticket
//!
//! ## Layout
//!
//! ```text
//! repo/
//! └── .giticket.toml            # Project config, usually committed
//!
//! ~/.config/giticket/
//! └── config.toml               # User-level defaults
//! ```

use std::path::{Path, PathBuf};

/// Project configuration filename
pub const PROJECT_CONFIG: &str = ".giticket.toml";

/// Global config directory, relative to the home directory
const GLOBAL_DIR: &str = ".config/giticket";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to the project config file inside `dir`.
#[must_use]
pub fn project_config(dir: &Path) -> PathBuf {
    dir.join(PROJECT_CONFIG)
}

/// `~/.config/giticket/`
fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.config/giticket/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
