//! Title ranking, category filtering and achievement partitioning.
//!
//! # Responsibility
//! - Produce the deterministic title order every screen renders.
//! - Split titles by category and achievements by state without copying.
//!
//! # Invariants
//! - All functions are pure; inputs are never reordered or mutated.
//! - Output sequences borrow from the input registry.

pub mod category;
pub mod order;

pub use category::{filter_by_category, partition_achievements, AchievementPartition, Category};
pub use order::{compare_names, compare_titles, rank_titles};
