//! namescreen core
//!
//! Screens a name against a blacklist, tolerating spelling variation, word
//! reordering, diacritics and noise words such as titles and connectors.
//!
//! # Pipeline
//!
//! For each blacklist entry, in order:
//!
//! 1. [`LocaleComparator`] - raw strings equal at primary collation strength
//! 2. [`text::normalize`] + [`NoiseFilter`] on both sides, then exact equality
//! 3. [`score::token_sort_partial_ratio`] strictly above the [`Threshold`]
//!
//! # Features
//!
//! - `parallel` - Parallel blacklist scan via rayon for large lists
//!
//! # Example
//!
//! ```rust
//! use namescreen_core::{MatchEngine, NoiseFilter};
//!
//! let engine = MatchEngine::new(NoiseFilter::new(["to", "the", "dr"]));
//! let blacklist = ["Osama Bin Laden", "Elvis Presley"];
//!
//! assert_eq!(engine.search("Dr. Bin Laden, Osama", &blacklist), vec!["Osama Bin Laden"]);
//! assert!(engine.search("Osama Jackson", &blacklist).is_empty());
//! ```

pub mod engine;
pub mod error;
pub mod locale;
pub mod score;
pub mod text;

// Re-export main types at crate root
pub use engine::{
    search, EngineConfig, EntryVerdict, MatchEngine, MatchStage, Threshold, Verdict,
};
pub use error::{ConfigError, ConfigResult};
pub use locale::LocaleComparator;
pub use text::NoiseFilter;
