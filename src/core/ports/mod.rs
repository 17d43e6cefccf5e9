//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the rewrite logic and the
//! outside world: the version control system that knows the branch, and the
//! file holding the pending commit message.
//!
//! Implementations live in the `adapters` module. Tests supply canned
//! branch names and in-memory messages instead.

mod branch;
mod message_store;

pub use branch::BranchProvider;
#[cfg(test)]
pub use branch::MockBranchProvider;
pub use message_store::MessageStore;
#[cfg(test)]
pub use message_store::MockMessageStore;
