//! Sliding-window word similarity scan
//!
//! Walks the second string's identity sequence once, keeping the window
//! `[lower, upper]` whose end is the latest matched trigram. `last_pos`
//! remembers, per identity, the last position at which it is inside the
//! window, so the distinct counts of the window are maintained incrementally
//! instead of being recomputed for every span.
//!
//! # Complexity
//! - Time: O(n * w) where w is the number of left-shrink steps per matched
//!   position (bounded by the threshold short-circuit in check-only mode)
//! - Space: O(number of identities)

use super::identity::IdentityMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Default similarity threshold (pg_trgm's `word_similarity_threshold`).
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// How far the scan goes once the threshold has been reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanMode {
    /// Stop shrinking a window once it reaches the threshold and stop the
    /// whole scan once the best score exceeds it. Only answers "is the
    /// threshold met"; the returned value may be below the true maximum.
    CheckOnly,
    /// Visit every window end and return the true maximum.
    Exact,
}

/// Similarity ratio of a span with `count` matched distinct trigrams, `len1`
/// distinct trigrams in the first string and `len2` in the span.
///
/// Callers guarantee `len1 + len2 > count`.
#[inline]
#[must_use]
pub fn calc_similarity(count: usize, len1: usize, len2: usize) -> f64 {
    count as f64 / (len1 + len2 - count) as f64
}

/// Find the best similarity between the first string and any span of the
/// second string ending at a matched trigram.
///
/// Returns 0.0 when the second string has no trigrams or none of them
/// occurs in the first string.
#[must_use]
pub fn scan_word_similarity(identities: &IdentityMap, threshold: f64, mode: ScanMode) -> f64 {
    let trg2indexes = &identities.position_identity;
    let found = &identities.found;
    let ulen1 = identities.ulen1;
    let check_only = mode == ScanMode::CheckOnly;

    let mut last_pos: Vec<Option<usize>> = vec![None; identities.total_identities()];
    let mut lower: Option<usize> = None;
    let mut count = 0usize;
    let mut ulen2 = 0usize;
    let mut smlr_max = 0.0f64;

    for (upper, &trg_index) in trg2indexes.iter().enumerate() {
        let matched = found[trg_index];

        // Before the first match there is no window to extend
        if lower.is_some() || matched {
            if last_pos[trg_index].is_none() {
                ulen2 += 1;
                if matched {
                    count += 1;
                }
            }
            last_pos[trg_index] = Some(upper);
        }

        if !matched {
            continue;
        }

        let prev_lower = match lower {
            Some(l) => l,
            None => {
                ulen2 = 1;
                upper
            }
        };

        let mut new_lower = prev_lower;
        let mut smlr_cur = calc_similarity(count, ulen1, ulen2);

        // Try dropping trigrams from the left of the window
        let mut tmp_count = count;
        let mut tmp_ulen2 = ulen2;
        for tmp_lower in prev_lower..upper {
            let smlr_tmp = calc_similarity(tmp_count, ulen1, tmp_ulen2);
            if smlr_tmp > smlr_cur {
                smlr_cur = smlr_tmp;
                ulen2 = tmp_ulen2;
                new_lower = tmp_lower;
                count = tmp_count;
            }
            if check_only && smlr_cur >= threshold {
                break;
            }

            let tmp_index = trg2indexes[tmp_lower];
            if last_pos[tmp_index] == Some(tmp_lower) {
                tmp_ulen2 -= 1;
                if found[tmp_index] {
                    tmp_count -= 1;
                }
            }
        }
        lower = Some(new_lower);

        smlr_max = smlr_max.max(smlr_cur);

        if check_only && smlr_max > threshold {
            trace!(position = upper, similarity = smlr_max, "threshold exceeded, stopping scan");
            break;
        }

        // Positions left of the new lower bound never re-enter a window
        for tmp_lower in prev_lower..new_lower {
            let tmp_index = trg2indexes[tmp_lower];
            if last_pos[tmp_index] == Some(tmp_lower) {
                last_pos[tmp_index] = None;
            }
        }
    }

    smlr_max
}
