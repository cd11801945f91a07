//! Text preparation
//!
//! Both sides of a comparison go through the same two steps before scoring:
//!
//! 1. [`normalize`] - lowercase, keep `a-z` and whitespace, collapse, trim
//! 2. [`NoiseFilter::strip`] - drop configured noise words as whole tokens
//!
//! # Example
//!
//! ```rust
//! use namescreen_core::text::{normalize, NoiseFilter};
//!
//! let noise = NoiseFilter::new(["the", "dr"]);
//! assert_eq!(noise.strip(&normalize("Dr. Osama Bin-Laden")), "osama binladen");
//! ```

mod noise;
mod normalize;

pub use noise::NoiseFilter;
pub use normalize::normalize;
