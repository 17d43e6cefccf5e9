//! Commit message file adapter
//!
//! Implements `MessageStore` on the commit message file git hands to the
//! hook. Only the first line is ever replaced.
//!
//! A rewrite reads the file twice: once in `read_first_line`, and again in
//! `write_first_line`, which does its read-modify-write on a single
//! read+write handle. The body written back is the one on disk at write time.

use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use anyhow::Context;

use crate::core::ports::MessageStore;

/// Message store backed by a file on disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FileMessageStore;

impl FileMessageStore {
    /// Create a new file message store
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Split a message into its first line (without CR/LF) and the text after
/// the first newline
fn split_first_line(contents: &str) -> (&str, &str) {
    let (first, rest) = contents.split_once('\n').unwrap_or((contents, ""));
    (first.trim_end_matches(['\r', '\n']), rest)
}

impl MessageStore for FileMessageStore {
    fn read_first_line(&self, path: &Path) -> anyhow::Result<String> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read commit message file: {}", path.display()))?;
        Ok(split_first_line(&contents).0.to_string())
    }

    fn write_first_line(&self, path: &Path, line: &str) -> anyhow::Result<()> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .with_context(|| format!("Failed to open commit message file: {}", path.display()))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        let (_, rest) = split_first_line(&contents);
        let updated = format!("{line}\n{rest}");

        file.seek(SeekFrom::Start(0))?;
        file.write_all(updated.as_bytes())?;
        file.set_len(updated.len() as u64)?;
        file.flush()?;
        Ok(())
    }
}
