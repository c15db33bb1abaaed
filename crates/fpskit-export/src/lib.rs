//! # fpskit-export
//!
//! The file-emitting side of fpskit: everything that consumes a parsed
//! [`Problem`](fpskit_model::Problem) record.
//!
//! - [`testcases`] writes the hidden grading data as `.in`/`.out` pairs
//! - [`images`] decodes embedded images and rewrites statement references
//! - [`html`] builds the statement, special-judge and solution pages
//! - [`inline`] is the standalone HTML image inliner

pub mod error;
pub mod html;
pub mod images;
pub mod inline;
pub mod testcases;

pub use error::{ExportError, Result};
pub use html::{save_solution_page, save_spj_page, save_statement_page};
pub use images::save_images;
pub use inline::pack_images;
pub use testcases::{ascii_name, save_test_cases, Preprocess};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
