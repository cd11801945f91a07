//! File-backed screening
//!
//! Reads the blacklist and noise sources and runs the core engine over them.
//! A blacklist that cannot be read means no search happens at all; a noise
//! source that cannot be read only means no noise words.

use std::path::Path;

use namescreen_core::{EngineConfig, EntryVerdict, MatchEngine, NoiseFilter};
use tracing::{info, warn};

use crate::error::Result;
use crate::source::read_lines;

/// Screens names against blacklist files
#[derive(Debug, Clone, Default)]
pub struct Screener {
    config: EngineConfig,
}

impl Screener {
    /// Create a screener with the default threshold
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Create with a threshold, rejected when outside `0..=100`
    pub fn with_threshold(threshold: i64) -> Result<Self> {
        Ok(Self::with_config(EngineConfig::with_threshold(threshold)?))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Matching blacklist entries, verbatim and in file order.
    ///
    /// `None` when the name or blacklist path is absent, or the blacklist
    /// cannot be read; `Some(vec![])` when the search ran and nothing matched.
    pub fn search_files(
        &self,
        name: Option<&str>,
        blacklist: Option<&Path>,
        noise: Option<&Path>,
    ) -> Option<Vec<String>> {
        let (name, entries, engine) = self.load(name, blacklist, noise)?;
        let matches = engine.search(name, &entries);
        info!(
            entries = entries.len(),
            matched = matches.len(),
            threshold = self.config.threshold.get(),
            "screening complete"
        );
        Some(matches)
    }

    /// Per-entry verdicts, with the same absence rules as [`Screener::search_files`]
    pub fn explain_files(
        &self,
        name: Option<&str>,
        blacklist: Option<&Path>,
        noise: Option<&Path>,
    ) -> Option<Vec<EntryVerdict>> {
        let (name, entries, engine) = self.load(name, blacklist, noise)?;
        Some(engine.explain(name, &entries))
    }

    fn load<'a>(
        &self,
        name: Option<&'a str>,
        blacklist: Option<&Path>,
        noise: Option<&Path>,
    ) -> Option<(&'a str, Vec<String>, MatchEngine)> {
        let (Some(name), Some(blacklist)) = (name, blacklist) else {
            warn!("name or blacklist missing, nothing to screen");
            return None;
        };

        let entries = match read_lines(blacklist) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "blacklist unavailable");
                return None;
            }
        };

        let engine = MatchEngine::with_config(load_noise(noise), self.config.clone());
        Some((name, entries, engine))
    }
}

/// Noise words from an optional source; absent or unreadable means none
pub fn load_noise(path: Option<&Path>) -> NoiseFilter {
    let Some(path) = path else {
        return NoiseFilter::empty();
    };

    match read_lines(path) {
        Ok(words) => NoiseFilter::new(words),
        Err(e) => {
            warn!(error = %e, "noise words unavailable, screening without them");
            NoiseFilter::empty()
        }
    }
}
