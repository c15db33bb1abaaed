//! # fpskit-core
//!
//! Free Problem Set (FPS) document parsing.
//!
//! This crate provides functionality to:
//! - Load an FPS XML document and validate its format version
//! - Parse every problem item into a structured [`Problem`] record
//!
//! ## Example: Reading a Document
//!
//! ```no_run
//! use fpskit_core::FpsDocument;
//!
//! let doc = FpsDocument::open("problems.xml")?;
//! for problem in doc.problems()? {
//!     println!("{}", problem.title);
//! }
//! # Ok::<(), fpskit_core::Error>(())
//! ```

pub mod error;
pub mod parser;
pub mod reader;

pub use error::{Error, Result};
pub use parser::ProblemParser;
pub use reader::{FpsDocument, Version};

pub use fpskit_model::Problem;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
