//! Title registry contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Own the title collection for one screen session.
//! - Resolve titles by exact name and append submitted achievements.
//!
//! # Invariants
//! - Title names are unique; construction rejects duplicates.
//! - A failed append leaves every title unchanged.

pub mod title_registry;
