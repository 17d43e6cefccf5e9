//! Business logic services
//!
//! Pure logic that operates on domain models. Only [`rewriter`] touches
//! the outside world, and only through port traits.
//!
//! - [`extractor`] - Find ticket tokens in a branch name
//! - [`idempotence`] - Detect tickets already present in a commit line
//! - [`composer`] - Render the new commit line
//! - [`rewriter`] - Run the three in order

pub mod composer;
pub mod extractor;
pub mod idempotence;
pub mod rewriter;

pub use composer::{compose, split_ticket_number};
pub use extractor::{DEFAULT_TICKET_PATTERN, extract, find_all, reduce};
pub use idempotence::{DEFAULT_WINDOW_PADDING, Window};
pub use rewriter::{Rewrite, RewriteRules, Rewriter};
