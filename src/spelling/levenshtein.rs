//! Levenshtein distance calculation for spelling suggestions.

use std::cmp::min;

/// Largest length gap for which [`bounded_distance`] runs the full computation.
pub const LENGTH_GAP_LIMIT: usize = 2;

/// Value reported by [`bounded_distance`] when the length gap alone rules a pair out.
pub const SHORT_CIRCUIT_DISTANCE: usize = LENGTH_GAP_LIMIT + 1;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                0
            } else {
                1
            };

            matrix[i][j] = min(
                min(
                    matrix[i - 1][j] + 1, // deletion
                    matrix[i][j - 1] + 1, // insertion
                ),
                matrix[i - 1][j - 1] + cost, // substitution
            );
        }
    }

    matrix[len1][len2]
}

/// Levenshtein distance with a length-gap short circuit.
///
/// When the character counts differ by more than [`LENGTH_GAP_LIMIT`] the pair
/// is reported as [`SHORT_CIRCUIT_DISTANCE`] without running the dynamic
/// program. Otherwise the result equals [`levenshtein_distance`]. Uses two
/// rolling rows sized by the shorter string.
pub fn bounded_distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    bounded_distance_chars(&a, &b)
}

/// [`bounded_distance`] over pre-split character slices.
pub fn bounded_distance_chars(a: &[char], b: &[char]) -> usize {
    if a.len().abs_diff(b.len()) > LENGTH_GAP_LIMIT {
        return SHORT_CIRCUIT_DISTANCE;
    }

    // Rows run over the shorter string.
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if inner.is_empty() {
        return outer.len();
    }

    let mut prev_row: Vec<usize> = (0..=inner.len()).collect();
    let mut curr_row = vec![0; inner.len() + 1];

    for (i, &oc) in outer.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, &ic) in inner.iter().enumerate() {
            curr_row[j + 1] = if oc == ic {
                prev_row[j]
            } else {
                1 + min(min(prev_row[j + 1], curr_row[j]), prev_row[j])
            };
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[inner.len()]
}

/// Whether `candidate` lies within `max_distance` edits of `target`.
pub fn within_distance(target: &str, candidate: &str, max_distance: usize) -> bool {
    bounded_distance(target, candidate) <= max_distance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("a", "a"), 0);
        assert_eq!(levenshtein_distance("ab", "ac"), 1);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("search", "serach"), 2);
    }

    #[test]
    fn test_bounded_distance_matches_reference() {
        let pairs = [
            ("", ""),
            ("", "ab"),
            ("cat", "cot"),
            ("cat", "dog"),
            ("hello", "helllo"),
            ("kitten", "sitting"),
            ("flaw", "lawn"),
            ("abcdef", "azced"),
        ];
        for (a, b) in pairs {
            assert_eq!(
                bounded_distance(a, b),
                levenshtein_distance(a, b),
                "mismatch for {a:?} / {b:?}"
            );
            assert_eq!(bounded_distance(b, a), levenshtein_distance(a, b));
        }
    }

    #[test]
    fn test_bounded_distance_short_circuit() {
        assert_eq!(bounded_distance("a", "abcd"), SHORT_CIRCUIT_DISTANCE);
        assert_eq!(bounded_distance("", "abc"), SHORT_CIRCUIT_DISTANCE);
        // Real distance is 6, but the gap check answers first.
        assert_eq!(bounded_distance("abcdefgh", "xy"), SHORT_CIRCUIT_DISTANCE);
        // Gap of exactly two still computes.
        assert_eq!(bounded_distance("ab", "abcd"), 2);
    }

    #[test]
    fn test_within_distance() {
        assert!(within_distance("cot", "cat", 1));
        assert!(!within_distance("cot", "dog", 1));
        assert!(within_distance("helllo", "hello", 1));
        assert!(!within_distance("a", "abcdef", 2));
    }
}
