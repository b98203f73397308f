//! Trigram word similarity algorithm
//!
//! The pipeline is split into its stages so each can be used and tested on
//! its own: trigram extraction, identity assignment, window scan. The
//! `word_similarity` module ties them together behind the `Similarity` trait.

pub mod identity;
pub mod scan;
pub mod trigram;
pub mod word_similarity;

#[cfg(test)]
mod property_tests;

pub use identity::{merge_identities, IdentityMap, Origin};
pub use scan::{calc_similarity, scan_word_similarity, ScanMode, DEFAULT_THRESHOLD};
pub use trigram::{
    extract_trigram_set, extract_trigrams, extract_trigrams_with, Trigram, TrigramConfig,
};
pub use word_similarity::*;

/// Trait for all similarity metrics.
/// Returns a value between 0.0 (completely different) and 1.0 (identical).
pub trait Similarity: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Convenience method for distance (1.0 - similarity)
    fn distance(&self, a: &str, b: &str) -> f64 {
        1.0 - self.similarity(a, b)
    }

    /// Name of the algorithm for debugging/logging
    fn name(&self) -> &'static str;
}
