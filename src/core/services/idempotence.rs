//! Already-present check
//!
//! A heuristic, not a guarantee: each ticket only has to appear somewhere
//! inside a leading window of the commit line. The window is as long as all
//! tickets laid end to end plus a fixed allowance per ticket for separators.

/// Per-ticket allowance used when none is configured
pub const DEFAULT_WINDOW_PADDING: usize = 2;

/// Leading window of a commit line searched for tickets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    padding: usize,
}

impl Window {
    /// Window with `padding` extra characters per ticket
    #[must_use]
    pub const fn new(padding: usize) -> Self {
        Self { padding }
    }

    /// Window length in characters for these tickets
    #[must_use]
    pub fn len<S: AsRef<str>>(&self, tickets: &[S]) -> usize {
        tickets.iter().map(|t| t.as_ref().chars().count() + self.padding).sum()
    }

    /// Whether every ticket occurs inside the window of `line`
    ///
    /// An empty ticket set is never considered present.
    #[must_use]
    pub fn contains_all<S: AsRef<str>>(&self, tickets: &[S], line: &str) -> bool {
        if tickets.is_empty() {
            return false;
        }
        let head = leading_chars(line, self.len(tickets));
        tickets.iter().all(|t| head.contains(t.as_ref()))
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_PADDING)
    }
}

/// The first `n` characters of `line`, on a char boundary
fn leading_chars(line: &str, n: usize) -> &str {
    line.char_indices().nth(n).map_or(line, |(idx, _)| &line[..idx])
}
