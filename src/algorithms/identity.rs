//! Canonical trigram identities shared by two trigram sequences
//!
//! Both sequences are merged into one list of positional trigrams, sorted
//! with an explicit total order, and every run of equal trigram values gets
//! one dense id. The scan then works on small integers instead of trigrams.
//!
//! # Complexity
//! - Time: O((m+n) log(m+n)) for the sort
//! - Space: O(m+n)

use super::trigram::Trigram;
use std::cmp::Ordering;

/// Where a positional trigram came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Any occurrence in the first string; its position is irrelevant.
    First,
    /// Occurrence at this index of the second string's trigram sequence.
    Second(usize),
}

#[derive(Debug, Clone, Copy)]
struct PositionalTrigram {
    trigram: Trigram,
    origin: Origin,
}

/// First-string entries sort before every second-string entry, second-string
/// entries by ascending index.
fn compare_origin(a: Origin, b: Origin) -> Ordering {
    match (a, b) {
        (Origin::First, Origin::First) => Ordering::Equal,
        (Origin::First, Origin::Second(_)) => Ordering::Less,
        (Origin::Second(_), Origin::First) => Ordering::Greater,
        (Origin::Second(i), Origin::Second(j)) => i.cmp(&j),
    }
}

fn compare_positional(a: &PositionalTrigram, b: &PositionalTrigram) -> Ordering {
    a.trigram
        .cmp(&b.trigram)
        .then_with(|| compare_origin(a.origin, b.origin))
}

/// Result of merging the trigram sequences of two strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityMap {
    /// Identity of each trigram of the second string, by position
    pub position_identity: Vec<usize>,
    /// Per identity: does it occur in the first string
    pub found: Vec<bool>,
    /// Number of distinct trigrams of the first string
    pub ulen1: usize,
}

impl IdentityMap {
    /// Number of distinct trigram values across both strings.
    #[must_use]
    pub fn total_identities(&self) -> usize {
        self.found.len()
    }

    /// Whether `identity` also occurs in the first string.
    #[inline]
    #[must_use]
    pub fn is_matched(&self, identity: usize) -> bool {
        self.found[identity]
    }
}

/// Assign canonical identities to the trigrams of both sequences.
#[must_use]
pub fn merge_identities(trg1: &[Trigram], trg2: &[Trigram]) -> IdentityMap {
    let mut ptrg = Vec::with_capacity(trg1.len() + trg2.len());
    ptrg.extend(trg1.iter().map(|&trigram| PositionalTrigram {
        trigram,
        origin: Origin::First,
    }));
    ptrg.extend(trg2.iter().enumerate().map(|(i, &trigram)| PositionalTrigram {
        trigram,
        origin: Origin::Second(i),
    }));

    // Vec::sort_by is stable
    ptrg.sort_by(compare_positional);

    let mut position_identity = vec![0; trg2.len()];
    let mut found: Vec<bool> = Vec::new();
    let mut previous: Option<Trigram> = None;

    for entry in &ptrg {
        if previous != Some(entry.trigram) {
            found.push(false);
            previous = Some(entry.trigram);
        }
        let identity = found.len() - 1;

        match entry.origin {
            Origin::First => found[identity] = true,
            Origin::Second(i) => position_identity[i] = identity,
        }
    }

    let ulen1 = found.iter().filter(|&&f| f).count();

    IdentityMap {
        position_identity,
        found,
        ulen1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::trigram::extract_trigrams;

    #[test]
    fn test_merge_disjoint() {
        // sorted: "  a"(1) "  b"(2) " ab"(1) " ba"(2) "ab "(1) "ba "(2)
        let map = merge_identities(&extract_trigrams("ab"), &extract_trigrams("ba"));
        assert_eq!(map.total_identities(), 6);
        assert_eq!(map.found, vec![true, false, true, false, true, false]);
        assert_eq!(map.ulen1, 3);
        assert_eq!(map.position_identity, vec![1, 3, 5]);
    }

    #[test]
    fn test_merge_shared_and_duplicated() {
        // "aaaa": "  a", " aa", "aaa", "aaa", "aa "
        // "aaa":  "  a", " aa", "aaa", "aa "
        let map = merge_identities(&extract_trigrams("aaaa"), &extract_trigrams("aaa"));
        assert_eq!(map.total_identities(), 4);
        assert_eq!(map.found, vec![true; 4]);
        assert_eq!(map.ulen1, 4);
        // "aa " sorts before "aaa"
        assert_eq!(map.position_identity, vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_merge_repeated_second_positions_share_identity() {
        let map = merge_identities(&extract_trigrams("ana"), &extract_trigrams("banana"));
        let ids = &map.position_identity;
        // "ana" occurs at positions 3 and 5 of "  banana "
        assert_eq!(ids[3], ids[5]);
        assert!(map.is_matched(ids[3]));
        assert!(!map.is_matched(ids[0]));
    }

    #[test]
    fn test_merge_empty_first() {
        let map = merge_identities(&[], &extract_trigrams("ab"));
        assert_eq!(map.ulen1, 0);
        assert!(map.found.iter().all(|&f| !f));
        assert_eq!(map.position_identity, vec![0, 1, 2]);
    }

    #[test]
    fn test_merge_empty_second() {
        let map = merge_identities(&extract_trigrams("ab"), &[]);
        assert_eq!(map.ulen1, 3);
        assert!(map.position_identity.is_empty());
    }

    #[test]
    fn test_merge_both_empty() {
        assert_eq!(merge_identities(&[], &[]), IdentityMap::default());
    }

    #[test]
    fn test_found_count_matches_ulen1() {
        let map = merge_identities(
            &extract_trigrams("hello world"),
            &extract_trigrams("yellow words"),
        );
        assert_eq!(map.found.iter().filter(|&&f| f).count(), map.ulen1);
        assert!(map
            .position_identity
            .iter()
            .all(|&id| id < map.total_identities()));
    }

    #[test]
    fn test_compare_origin() {
        assert_eq!(compare_origin(Origin::First, Origin::Second(0)), Ordering::Less);
        assert_eq!(compare_origin(Origin::Second(3), Origin::Second(1)), Ordering::Greater);
        assert_eq!(compare_origin(Origin::First, Origin::First), Ordering::Equal);
    }
}
