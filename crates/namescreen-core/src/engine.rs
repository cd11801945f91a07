//! MatchEngine - per-entry screening decision and blacklist scan
//!
//! Each entry is tested against the candidate in order of specificity, and
//! the first stage that accepts it wins:
//! 1. Locale equivalence of the raw strings (accent and case blind)
//! 2. Exact equality after normalization and noise removal
//! 3. Token-sort partial ratio strictly above the threshold

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::locale::LocaleComparator;
use crate::score::token_sort_partial_ratio;
use crate::text::{normalize, NoiseFilter};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Minimum fuzzy score, as a percentage, for a non-exact match
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Threshold(u8);

impl Threshold {
    pub const DEFAULT: Threshold = Threshold(70);

    /// Validate a percentage in `0..=100`
    pub fn new(value: i64) -> ConfigResult<Self> {
        match u8::try_from(value) {
            Ok(v) if v <= 100 => Ok(Self(v)),
            _ => Err(ConfigError::ThresholdOutOfRange(value)),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Scores must be strictly greater than the threshold
    pub fn accepts(self, score: u8) -> bool {
        score > self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for Threshold {
    type Error = ConfigError;

    fn try_from(value: i64) -> ConfigResult<Self> {
        Self::new(value)
    }
}

impl From<Threshold> for u8 {
    fn from(t: Threshold) -> u8 {
        t.0
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub threshold: Threshold,
    /// Blacklist size from which the `parallel` feature fans out
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threshold: Threshold::DEFAULT,
            parallel_threshold: 1000,
        }
    }
}

impl EngineConfig {
    /// Default configuration with a validated threshold
    pub fn with_threshold(threshold: i64) -> ConfigResult<Self> {
        Ok(Self {
            threshold: Threshold::new(threshold)?,
            ..Default::default()
        })
    }
}

/// Pipeline stage that accepted an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStage {
    Locale,
    Exact,
    Fuzzy,
}

impl MatchStage {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStage::Locale => "locale",
            MatchStage::Exact => "exact",
            MatchStage::Fuzzy => "fuzzy",
        }
    }
}

/// Outcome of comparing the candidate with one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Accepting stage, `None` when the entry was rejected
    pub stage: Option<MatchStage>,
    /// Fuzzy score, present when the comparison reached the scoring stage
    pub score: Option<u8>,
}

impl Verdict {
    fn matched(stage: MatchStage, score: Option<u8>) -> Self {
        Self {
            stage: Some(stage),
            score,
        }
    }

    fn rejected(score: u8) -> Self {
        Self {
            stage: None,
            score: Some(score),
        }
    }

    pub fn is_match(&self) -> bool {
        self.stage.is_some()
    }
}

/// Verdict for one blacklist entry, in blacklist position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryVerdict {
    pub index: usize,
    /// Entry exactly as it appears in the blacklist
    pub entry: String,
    #[serde(flatten)]
    pub verdict: Verdict,
}

/// Screens a candidate name against blacklist entries.
///
/// Holds only read-only configuration, so one engine can be shared across
/// threads and reused for any number of searches.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    noise: NoiseFilter,
    collator: LocaleComparator,
    config: EngineConfig,
}

impl MatchEngine {
    /// Create an engine with the default configuration
    pub fn new(noise: NoiseFilter) -> Self {
        Self::with_config(noise, EngineConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(noise: NoiseFilter, config: EngineConfig) -> Self {
        Self {
            noise,
            collator: LocaleComparator::new(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn noise(&self) -> &NoiseFilter {
        &self.noise
    }

    /// Normalized, noise-filtered form used by the exact and fuzzy stages
    pub fn prepare(&self, raw: &str) -> String {
        self.noise.strip(&normalize(raw))
    }

    /// Compare the candidate with a single entry
    pub fn compare(&self, name: &str, item: &str) -> Verdict {
        self.decide(name, &self.prepare(name), item)
    }

    pub fn is_match(&self, name: &str, item: &str) -> bool {
        self.compare(name, item).is_match()
    }

    /// Matching entries, verbatim and in blacklist order.
    ///
    /// Duplicate entries that match are reported once per occurrence.
    pub fn search<S>(&self, name: &str, entries: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        let matches: Vec<String> = self
            .evaluate(name, entries)
            .into_iter()
            .zip(entries)
            .filter(|(verdict, _)| verdict.is_match())
            .map(|(_, entry)| entry.as_ref().to_string())
            .collect();

        debug!(
            entries = entries.len(),
            matched = matches.len(),
            threshold = self.config.threshold.get(),
            "blacklist search complete"
        );
        matches
    }

    /// Verdict for every entry, in blacklist order
    pub fn explain<S>(&self, name: &str, entries: &[S]) -> Vec<EntryVerdict>
    where
        S: AsRef<str> + Sync,
    {
        self.evaluate(name, entries)
            .into_iter()
            .zip(entries)
            .enumerate()
            .map(|(index, (verdict, entry))| EntryVerdict {
                index,
                entry: entry.as_ref().to_string(),
                verdict,
            })
            .collect()
    }

    /// Evaluate all entries - parallel for large blacklists with the `parallel` feature.
    ///
    /// Both paths return verdicts indexed like `entries`.
    #[cfg(feature = "parallel")]
    fn evaluate<S>(&self, name: &str, entries: &[S]) -> Vec<Verdict>
    where
        S: AsRef<str> + Sync,
    {
        let prepared = self.prepare(name);
        if entries.len() >= self.config.parallel_threshold {
            // Indexed collect keeps blacklist order
            entries
                .par_iter()
                .map(|entry| self.decide(name, &prepared, entry.as_ref()))
                .collect()
        } else {
            self.evaluate_sequential(name, &prepared, entries)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate<S>(&self, name: &str, entries: &[S]) -> Vec<Verdict>
    where
        S: AsRef<str> + Sync,
    {
        let prepared = self.prepare(name);
        self.evaluate_sequential(name, &prepared, entries)
    }

    fn evaluate_sequential<S>(&self, name: &str, prepared: &str, entries: &[S]) -> Vec<Verdict>
    where
        S: AsRef<str>,
    {
        entries
            .iter()
            .map(|entry| self.decide(name, prepared, entry.as_ref()))
            .collect()
    }

    /// Decision procedure for one entry, given the candidate's prepared form
    fn decide(&self, name: &str, prepared_name: &str, item: &str) -> Verdict {
        if self.collator.equivalent(name, item) {
            debug!(entry = item, stage = MatchStage::Locale.as_str(), "entry matched");
            return Verdict::matched(MatchStage::Locale, None);
        }

        let prepared_item = self.prepare(item);
        if prepared_name == prepared_item {
            debug!(entry = item, stage = MatchStage::Exact.as_str(), "entry matched");
            return Verdict::matched(MatchStage::Exact, None);
        }

        let score = token_sort_partial_ratio(prepared_name, &prepared_item);
        if self.config.threshold.accepts(score) {
            debug!(entry = item, stage = MatchStage::Fuzzy.as_str(), score, "entry matched");
            Verdict::matched(MatchStage::Fuzzy, Some(score))
        } else {
            Verdict::rejected(score)
        }
    }
}

/// Screen `candidate` against `entries` with the given noise words and threshold.
///
/// Returns `Ok(None)` when the candidate or the blacklist is absent, which is
/// distinct from `Ok(Some(vec![]))` (searched, nothing matched). A missing
/// noise list is an empty one. An out-of-range threshold is rejected before
/// anything is compared.
pub fn search<S, N>(
    candidate: Option<&str>,
    entries: Option<&[S]>,
    noise: Option<&[N]>,
    threshold: i64,
) -> ConfigResult<Option<Vec<String>>>
where
    S: AsRef<str> + Sync,
    N: AsRef<str>,
{
    let config = EngineConfig::with_threshold(threshold)?;

    let (Some(candidate), Some(entries)) = (candidate, entries) else {
        debug!("candidate or blacklist absent, no search performed");
        return Ok(None);
    };

    let noise = noise.map(NoiseFilter::new).unwrap_or_default();
    let engine = MatchEngine::with_config(noise, config);
    Ok(Some(engine.search(candidate, entries)))
}
