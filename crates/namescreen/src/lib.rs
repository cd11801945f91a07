//! # namescreen
//!
//! File-facing layer over [`namescreen_core`]:
//! - **source**: line-oriented blacklist and noise files
//! - **screener**: file-backed search, `None` when there is nothing to search
//! - **error**: common error type
//! - **tracing**: logging setup for binaries
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use namescreen::Screener;
//!
//! let screener = Screener::new();
//! let matches = screener.search_files(
//!     Some("Bin Laden, Osama"),
//!     Some(Path::new("blacklist.txt")),
//!     Some(Path::new("noise.txt")),
//! );
//! ```

pub mod error;
pub mod screener;
pub mod source;
pub mod tracing;

// Re-export commonly used items at crate root
pub use error::{Error, Result};
pub use screener::{load_noise, Screener};
pub use source::read_lines;
