//! fpskit-model - Problem record definitions
//!
//! This crate provides the data types produced by the FPS parser and
//! consumed by the export side: one [`Problem`] per `<item>` element of a
//! Free Problem Set document.

pub mod problem;

pub use problem::{
    ImageRef, MemoryLimit, MemoryUnit, Problem, Snippet, TestPair, TimeLimit, TimeUnit,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
