//! Property-based tests for word similarity.
//!
//! 1. **Bounded** — every score lies in [0.0, 1.0]
//! 2. **Self-similarity** — a string with trigrams scores 1.0 against itself
//! 3. **Unrelated suffix** — appending words with no shared trigrams keeps the score
//! 4. **Check-only agrees with exact** — identical below the threshold, same verdict above,
//!    for any threshold
//! 5. **Extraction is deterministic**
//! 6. **Identity map invariants** — dense ids, `found` count equals `ulen1`

use proptest::prelude::*;

use super::identity::merge_identities;
use super::scan::{ScanMode, DEFAULT_THRESHOLD};
use super::trigram::extract_trigrams;
use super::word_similarity::{
    word_similarity, word_similarity_with, WordSimilarity, WordSimilarityConfig,
};

// ============================================================================
// Generators
// ============================================================================

/// Mixed-case words separated by one or more blanks.
fn text() -> impl Strategy<Value = String> {
    "[a-fA-F ]{0,24}"
}

/// Text with at least one non-blank character.
fn non_blank_text() -> impl Strategy<Value = String> {
    "[a-f]{1,8}( [a-f ]{0,16})?"
}

/// Words drawn from letters that never occur in `text()`.
fn noise() -> impl Strategy<Value = String> {
    "[u-z]{1,6}( [u-z]{1,6}){0,2}"
}

fn score(a: &str, b: &str, mode: ScanMode) -> f64 {
    let config = WordSimilarityConfig {
        mode,
        ..Default::default()
    };
    word_similarity_with(a, b, &config)
}

proptest! {
    #[test]
    fn score_is_bounded(a in text(), b in text()) {
        let s = word_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s), "score {} for {:?} / {:?}", s, a, b);
    }

    #[test]
    fn self_similarity_is_one(s in non_blank_text()) {
        prop_assert_eq!(word_similarity(&s, &s), 1.0);
    }

    #[test]
    fn unrelated_suffix_keeps_score(a in non_blank_text(), b in text(), n in noise()) {
        let base = word_similarity(&a, &b);
        let noisy = word_similarity(&a, &format!("{b} {n}"));
        prop_assert_eq!(base, noisy);
    }

    #[test]
    fn check_only_agrees_with_exact(a in text(), b in text()) {
        let exact = score(&a, &b, ScanMode::Exact);
        let check = score(&a, &b, ScanMode::CheckOnly);
        if exact < DEFAULT_THRESHOLD {
            prop_assert_eq!(exact, check);
        } else {
            prop_assert!(check >= DEFAULT_THRESHOLD);
        }
    }

    #[test]
    fn is_match_agrees_with_exact_score(a in text(), b in text(), threshold in 0.0f64..=1.0) {
        let exact = score(&a, &b, ScanMode::Exact);
        let matcher = WordSimilarity::new().with_threshold(threshold);
        prop_assert_eq!(
            matcher.is_match(&a, &b),
            exact >= threshold,
            "threshold {} exact {} for {:?} / {:?}", threshold, exact, a, b
        );
    }

    #[test]
    fn extraction_is_deterministic(s in text()) {
        prop_assert_eq!(extract_trigrams(&s), extract_trigrams(&s));
    }

    #[test]
    fn identity_map_invariants(a in text(), b in text()) {
        let trg2 = extract_trigrams(&b);
        let map = merge_identities(&extract_trigrams(&a), &trg2);
        prop_assert_eq!(map.found.iter().filter(|&&f| f).count(), map.ulen1);
        prop_assert_eq!(map.position_identity.len(), trg2.len());
        prop_assert!(map.position_identity.iter().all(|&id| id < map.total_identities()));
        // equal trigrams share an identity, different ones do not
        for (i, x) in trg2.iter().enumerate() {
            for (j, y) in trg2.iter().enumerate() {
                prop_assert_eq!(x == y, map.position_identity[i] == map.position_identity[j]);
            }
        }
    }
}
