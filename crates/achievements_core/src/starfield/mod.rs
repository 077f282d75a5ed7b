//! Procedural starfield shown behind fully acquired titles.
//!
//! # Responsibility
//! - Keep a fixed-size set of 3D stars and move them toward the viewer.
//! - Project stars to 2D sprites, culling the ones outside the viewport.
//! - Drive the per-frame update from host display-refresh callbacks.
//!
//! # Invariants
//! - Star depth stays in `(1, 1001]` after every tick.
//! - Culled stars stay alive for later frames.
//! - A stopped animator never mutates state again.

pub mod animator;
pub mod field;

pub use animator::{AnimatorState, FrameOutcome, StarfieldAnimator};
pub use field::{Star, StarSprite, Starfield, StarfieldConfig, Viewport};
