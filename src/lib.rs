//! fuzzytrgm - Trigram word similarity
//!
//! A Rust library (with optional Python bindings) scoring how well a short
//! string occurs inside a longer one, the way PostgreSQL's `pg_trgm`
//! extension computes `word_similarity`.
//!
//! # Example
//!
//! ```
//! use fuzzytrgm::{word_similarity, word_similarity_match};
//!
//! assert_eq!(word_similarity("hello", "hello world"), 1.0);
//! assert!((word_similarity("banana", "bananas") - 0.833_333).abs() < 1e-6);
//! assert!(word_similarity_match("banana", "bananas"));
//! ```

pub mod algorithms;
pub mod error;

// Python bindings (enabled with python feature)
#[cfg(feature = "python")]
mod python;

pub use algorithms::{
    extract_trigrams, word_similarity, word_similarity_distance, word_similarity_match,
    word_similarity_with, ScanMode, Similarity, Trigram, TrigramConfig, WordSimilarity,
    WordSimilarityConfig, DEFAULT_THRESHOLD,
};
pub use error::WordSimilarityError;
