//! Core domain logic for giticket
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Mode, TicketList, FormatTemplate, Outcome)
//! - `services/` - Extraction, already-present check, composition
//! - `ports/` - Trait definitions for the branch source and message file

pub mod models;
pub mod ports;
pub mod services;
