//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate registry, proposal log and ranking into screen-level APIs.
//! - Keep UI/FFI layers decoupled from model details.

pub mod achievements_service;
pub mod overview;
