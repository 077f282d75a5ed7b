//! FFI crate for the Flutter achievements screen.
//!
//! Generated bridge glue is produced by `flutter_rust_bridge_codegen` from
//! `api.rs`; only hand-written use-case functions live in this crate.

pub mod api;
