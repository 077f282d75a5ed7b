//! Community proposal log.
//!
//! # Responsibility
//! - Record proposals submitted during one screen session.
//! - Apply bounds-checked like increments.
//!
//! # Invariants
//! - The log is append-only; proposals are never removed or reordered.
//! - A like touches exactly one proposal and never lowers its count.

pub mod proposal_log;
