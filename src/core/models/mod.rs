//! Domain models for giticket
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Mode`] - How a branch name is split into tickets
//! - [`IdempotenceBasis`] - Which tokens the already-present check looks for
//! - [`TicketList`] - Tickets in discovery order
//! - [`FormatTemplate`] - Template for the rewritten line
//! - [`Outcome`] - Result of a rewrite attempt

mod basis;
mod mode;
mod outcome;
mod ticket;
mod template;

pub use basis::IdempotenceBasis;
pub use mode::Mode;
pub use outcome::Outcome;
pub use template::{DEFAULT_FORMAT, FormatTemplate, Slot, Slots, TemplateError};
pub use ticket::{TICKET_SEPARATOR, TicketList};
