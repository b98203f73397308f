//! Padded word trigram extraction
//!
//! Splits a string into words on single blanks, pads every word with blanks
//! and emits each 3-character window in order. The order of the output is
//! significant: the word similarity scan walks the second string's trigrams
//! left to right.
//!
//! # Padding
//!
//! Each word receives two blanks on the left and, by default, one blank on
//! the right (`"ab"` becomes `"  ab "`), so a word's first characters yield
//! trigrams distinct from its interior ones. The right padding can be set to
//! two blanks through [`TrigramConfig`].
//!
//! [`extract_trigrams_with`] keeps order and duplicates, which the scan
//! needs. [`extract_trigram_set`] is the public set view of the same
//! trigrams, exposed to Python as `extract_trigram_set`.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Blanks added before every word.
pub const LEFT_PADDING: usize = 2;

/// Blanks added after every word unless configured otherwise.
pub const DEFAULT_RIGHT_PADDING: usize = 1;

/// Largest accepted right padding.
pub const MAX_RIGHT_PADDING: usize = 2;

/// Word boundary character.
pub const PAD_CHAR: char = ' ';

/// Three consecutive characters of a padded, lowercased word.
///
/// Ordering compares characters position by position by scalar value, which
/// agrees with the byte order of the UTF-8 encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Trigram([char; 3]);

impl Trigram {
    #[must_use]
    pub const fn new(a: char, b: char, c: char) -> Self {
        Self([a, b, c])
    }

    #[must_use]
    pub const fn chars(&self) -> [char; 3] {
        self.0
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a}{b}{c}")
    }
}

impl From<Trigram> for String {
    fn from(trigram: Trigram) -> Self {
        trigram.to_string()
    }
}

/// Configuration for trigram extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrigramConfig {
    /// Blanks appended after each word (1 or 2)
    pub right_padding: usize,
}

impl Default for TrigramConfig {
    fn default() -> Self {
        Self {
            right_padding: DEFAULT_RIGHT_PADDING,
        }
    }
}

impl TrigramConfig {
    #[must_use]
    pub fn with_right_padding(mut self, right_padding: usize) -> Self {
        self.right_padding = right_padding.clamp(1, MAX_RIGHT_PADDING);
        self
    }
}

/// Extract the ordered trigram sequence of `s` with default padding.
#[must_use]
pub fn extract_trigrams(s: &str) -> Vec<Trigram> {
    extract_trigrams_with(s, &TrigramConfig::default())
}

/// Extract the ordered trigram sequence of `s`.
///
/// The string is lowercased and split on `' '`. Empty words, produced by
/// leading, trailing or repeated blanks, contribute nothing. A right
/// padding outside 1..=2 is clamped.
#[must_use]
pub fn extract_trigrams_with(s: &str, config: &TrigramConfig) -> Vec<Trigram> {
    if s.is_empty() {
        return Vec::new();
    }
    let right_padding = config.right_padding.clamp(1, MAX_RIGHT_PADDING);

    let lowered = s.to_lowercase();
    let mut trigrams = Vec::with_capacity(lowered.len() + LEFT_PADDING);
    let mut padded: SmallVec<[char; 32]> = SmallVec::new();

    for word in lowered.split(' ').filter(|w| !w.is_empty()) {
        padded.clear();
        padded.extend(std::iter::repeat(PAD_CHAR).take(LEFT_PADDING));
        padded.extend(word.chars());
        padded.extend(std::iter::repeat(PAD_CHAR).take(right_padding));

        // windows() yields nothing for padded words shorter than 3
        trigrams.extend(padded.windows(3).map(|w| Trigram::new(w[0], w[1], w[2])));
    }

    trigrams
}

/// Extract the distinct trigrams of `s`.
#[must_use]
pub fn extract_trigram_set(s: &str, config: &TrigramConfig) -> AHashSet<Trigram> {
    extract_trigrams_with(s, config).into_iter().collect()
}
