//! Command-line interface library for fpskit
//!
//! The binary in `src/bin/main.rs` is a thin wrapper around [`run_cli`];
//! the command implementations live here so integration tests can drive
//! them directly.

pub mod app;

pub use app::run_cli;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
