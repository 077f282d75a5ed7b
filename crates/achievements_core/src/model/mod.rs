//! Achievements domain model.
//!
//! # Responsibility
//! - Define the title/achievement/proposal records shared by all screens.
//! - Keep derived state (title acquisition) computed, never stored.
//!
//! # Invariants
//! - Every achievement is owned by exactly one title.
//! - Proposal likes never decrease.

pub mod achievement;
pub mod draft;
pub mod proposal;
pub mod visibility;
