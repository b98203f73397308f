//! Trigram word similarity
//!
//! Scores how well the first string occurs somewhere inside the second one:
//! the greatest similarity between the trigram set of the first string and
//! the trigrams of any contiguous span of the second string. Useful for
//! matching a short query against a longer text.
//!
//! The score is directional. `word_similarity("hello", "hello world")` is
//! 1.0 while the reverse is 0.5.

use super::identity::merge_identities;
use super::scan::{scan_word_similarity, ScanMode, DEFAULT_THRESHOLD};
use super::trigram::{extract_trigrams_with, TrigramConfig, MAX_RIGHT_PADDING};
use super::Similarity;
use crate::error::{Result, WordSimilarityError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for word similarity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WordSimilarityConfig {
    /// Score a pair must reach to count as a match (typically 0.6)
    pub threshold: f64,
    /// Scan mode used when scoring
    pub mode: ScanMode,
    /// Trigram extraction settings
    pub trigram: TrigramConfig,
}

impl Default for WordSimilarityConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            mode: ScanMode::Exact,
            trigram: TrigramConfig::default(),
        }
    }
}

impl WordSimilarityConfig {
    /// Check that the threshold and padding are usable.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            debug!(threshold = self.threshold, "rejecting word similarity threshold");
            return Err(WordSimilarityError::InvalidThreshold(self.threshold));
        }
        if !(1..=MAX_RIGHT_PADDING).contains(&self.trigram.right_padding) {
            debug!(
                right_padding = self.trigram.right_padding,
                "rejecting trigram padding"
            );
            return Err(WordSimilarityError::InvalidPadding(self.trigram.right_padding));
        }
        Ok(())
    }
}

/// Word similarity calculator
///
/// # Parameters
/// - `threshold`: score at which [`WordSimilarity::is_match`] succeeds
/// - `mode`: [`ScanMode::Exact`] for the true maximum, [`ScanMode::CheckOnly`]
///   to stop as soon as the threshold is passed
///
/// # Complexity
/// - Time: O((m+n) log(m+n)) for identity assignment plus the window scan
/// - Space: O(m+n)
#[derive(Debug, Clone, PartialEq)]
pub struct WordSimilarity {
    /// Match threshold (typically 0.6)
    pub threshold: f64,
    /// Scan mode used by `similarity`
    pub mode: ScanMode,
    /// Trigram extraction settings
    pub trigram: TrigramConfig,
}

impl Default for WordSimilarity {
    fn default() -> Self {
        Self::from_config(WordSimilarityConfig::default())
    }
}

impl WordSimilarity {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from configuration, clamping out-of-range values.
    ///
    /// A NaN threshold falls back to the default.
    #[must_use]
    pub fn from_config(config: WordSimilarityConfig) -> Self {
        let threshold = if config.threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            config.threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            mode: config.mode,
            trigram: config.trigram.with_right_padding(config.trigram.right_padding),
        }
    }

    /// Create from configuration, rejecting out-of-range values.
    pub fn try_from_config(config: WordSimilarityConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            threshold: config.threshold,
            mode: config.mode,
            trigram: config.trigram,
        })
    }

    /// Get current configuration
    #[must_use]
    pub fn config(&self) -> WordSimilarityConfig {
        WordSimilarityConfig {
            threshold: self.threshold,
            mode: self.mode,
            trigram: self.trigram,
        }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        if threshold.is_finite() {
            self.threshold = threshold.clamp(0.0, 1.0);
        }
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ScanMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_right_padding(mut self, right_padding: usize) -> Self {
        self.trigram = self.trigram.with_right_padding(right_padding);
        self
    }

    /// Whether `a` occurs in `b` with at least the configured threshold.
    ///
    /// Always scans in check-only mode; the verdict is the same as comparing
    /// the exact score against the threshold.
    #[must_use]
    pub fn is_match(&self, a: &str, b: &str) -> bool {
        compute(a, b, self.threshold, ScanMode::CheckOnly, &self.trigram) >= self.threshold
    }
}

impl Similarity for WordSimilarity {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        compute(a, b, self.threshold, self.mode, &self.trigram)
    }

    fn name(&self) -> &'static str {
        "word_similarity"
    }
}

fn compute(a: &str, b: &str, threshold: f64, mode: ScanMode, trigram: &TrigramConfig) -> f64 {
    let trg1 = extract_trigrams_with(a, trigram);
    let trg2 = extract_trigrams_with(b, trigram);

    // No trigrams on one side leaves no window to score
    if trg1.is_empty() || trg2.is_empty() {
        return 0.0;
    }

    let identities = merge_identities(&trg1, &trg2);
    scan_word_similarity(&identities, threshold, mode)
}

/// Word similarity of `a` within `b`, between 0.0 and 1.0.
#[must_use]
pub fn word_similarity(a: &str, b: &str) -> f64 {
    word_similarity_with(a, b, &WordSimilarityConfig::default())
}

/// Word similarity with explicit settings.
#[must_use]
pub fn word_similarity_with(a: &str, b: &str, config: &WordSimilarityConfig) -> f64 {
    compute(a, b, config.threshold, config.mode, &config.trigram)
}

/// Whether `a` occurs in `b` with a word similarity of at least 0.6.
#[must_use]
pub fn word_similarity_match(a: &str, b: &str) -> bool {
    WordSimilarity::default().is_match(a, b)
}

/// Word similarity distance: `1.0 - word_similarity(a, b)`.
#[inline]
#[must_use]
pub fn word_similarity_distance(a: &str, b: &str) -> f64 {
    1.0 - word_similarity(a, b)
}
