//! Fuzzy similarity scoring
//!
//! Scores are integer percentages in `0..=100`. The building block is the
//! indel ratio `2 * LCS / (len_a + len_b)`, where LCS is the longest common
//! subsequence of the two strings.
//!
//! - [`ratio`] - indel ratio of the whole strings
//! - [`partial_ratio`] - best ratio of the shorter string against any
//!   alignment inside the longer one
//! - [`token_sort_partial_ratio`] - [`partial_ratio`] after sorting the
//!   whitespace tokens of both sides, so word order does not matter
//!
//! # Example
//!
//! ```rust
//! use namescreen_core::score::token_sort_partial_ratio;
//!
//! assert_eq!(token_sort_partial_ratio("bin laden osama", "osama bin laden"), 100);
//! assert_eq!(token_sort_partial_ratio("bn laen osama", "osama bin laden"), 92);
//! ```

use std::collections::HashMap;

/// Indel similarity of two whole strings
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    percent(lcs_len(&a, &b), a.len() + b.len())
}

/// Best indel similarity of the shorter string against the longer one.
///
/// The shorter string is slid across the longer one, including the partial
/// overlaps at both ends, so truncated and prefix/suffix-corrupted inputs
/// still find their best alignment. The shorter string always drives the
/// alignment, so argument order only matters for equal-length inputs.
///
/// Inputs are expected to be names. Each of the `n + m` windows costs an
/// `O(m²)` LCS, so very long inputs get slow; windows whose shared character
/// count cannot beat the best score so far skip the LCS.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return if long.is_empty() { 100 } else { 0 };
    }

    let long = long.as_slice();
    let m = short.len();
    let n = long.len();

    // Leading partial overlaps, full-length windows, trailing partial overlaps
    let heads = (1..m).map(move |end| &long[..end]);
    let fulls = (0..=n - m).map(move |start| &long[start..start + m]);
    let tails = (n - m + 1..n).map(move |start| &long[start..]);

    let mut counts: HashMap<char, usize> = HashMap::new();
    for &c in &short {
        *counts.entry(c).or_default() += 1;
    }

    let mut best = 0;
    for window in heads.chain(fulls).chain(tails) {
        let total = m + window.len();
        // LCS never exceeds the shared character count
        if percent(common_chars(&counts, window), total) <= best {
            continue;
        }
        let score = percent(lcs_len(&short, window), total);
        if score == 100 {
            return 100;
        }
        best = best.max(score);
    }
    best
}

/// [`partial_ratio`] of both strings with their whitespace tokens sorted.
///
/// "bin laden osama" and "osama bin laden" both become "bin laden osama"
/// before scoring.
pub fn token_sort_partial_ratio(a: &str, b: &str) -> u8 {
    partial_ratio(&sort_tokens(a), &sort_tokens(b))
}

/// Split on whitespace runs, sort alphabetically, join with single spaces
pub fn sort_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// `round_half_up(100 * 2 * lcs / total)` in integer arithmetic
fn percent(lcs: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let scaled = (400 * lcs + total) / (2 * total);
    // lcs <= total / 2, so scaled <= 100
    scaled.min(100) as u8
}

/// Size of the multiset intersection of `counts` and the chars of `window`
fn common_chars(counts: &HashMap<char, usize>, window: &[char]) -> usize {
    let mut remaining = counts.clone();
    window
        .iter()
        .filter(|&&c| match remaining.get_mut(&c) {
            Some(n) if *n > 0 => {
                *n -= 1;
                true
            }
            _ => false,
        })
        .count()
}

/// Length of the longest common subsequence, single-row DP
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut diagonal = 0;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcs_len() {
        let chars = |s: &str| s.chars().collect::<Vec<_>>();
        assert_eq!(lcs_len(&chars("abcde"), &chars("ace")), 3);
        assert_eq!(lcs_len(&chars("abc"), &chars("xyz")), 0);
        assert_eq!(lcs_len(&chars(""), &chars("abc")), 0);
        assert_eq!(lcs_len(&chars("laden"), &chars("laen")), 4);
    }

    #[test]
    fn test_percent_rounds_half_up() {
        assert_eq!(percent(7, 20), 70);
        assert_eq!(percent(1, 8), 25);
        // 2 * 1 / 3 = 66.67
        assert_eq!(percent(1, 3), 67);
        // 2 * 3 / 8 = 75 exactly; 2 * 5 / 16 = 62.5 rounds up
        assert_eq!(percent(3, 8), 75);
        assert_eq!(percent(5, 16), 63);
        assert_eq!(percent(0, 0), 100);
    }

    #[test]
    fn test_ratio() {
        assert_eq!(ratio("osama", "osama"), 100);
        assert_eq!(ratio("abc", "xyz"), 0);
        // lcs("laden", "laen") = 4, 8 / 9
        assert_eq!(ratio("laden", "laen"), 89);
        assert_eq!(ratio("", ""), 100);
        assert_eq!(ratio("", "abc"), 0);
    }

    #[test]
    fn test_partial_ratio_substring_is_perfect() {
        assert_eq!(partial_ratio("laden", "osama bin laden"), 100);
        assert_eq!(partial_ratio("osama bin laden", "bin"), 100);
    }

    #[test]
    fn test_partial_ratio_disjoint() {
        assert_eq!(partial_ratio("abc", "xyz"), 0);
        assert_eq!(partial_ratio("qqq", "osama bin laden"), 0);
    }

    #[test]
    fn test_partial_ratio_empty() {
        assert_eq!(partial_ratio("", ""), 100);
        assert_eq!(partial_ratio("", "osama"), 0);
        assert_eq!(partial_ratio("osama", ""), 0);
    }

    #[test]
    fn test_partial_ratio_uses_edge_overlaps() {
        // Best alignment hangs off the end of the longer string
        assert_eq!(partial_ratio("jackson osama", "bin laden osama"), 70);
    }

    #[test]
    fn test_partial_ratio_is_symmetric() {
        let pairs = [
            ("bn laen osama", "bin laden osama"),
            ("elvis laden", "bin laden osama"),
            ("osam lade", "bin laden osama"),
            ("abcd", "dcba"),
        ];
        for (a, b) in pairs {
            assert_eq!(partial_ratio(a, b), partial_ratio(b, a), "{:?} vs {:?}", a, b);
        }
    }

    /// Every alignment scored with a full LCS, no skipping
    fn exhaustive_partial_ratio(a: &str, b: &str) -> u8 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
        if short.is_empty() {
            return if long.is_empty() { 100 } else { 0 };
        }
        let long = long.as_slice();
        let (m, n) = (short.len(), long.len());
        let mut windows: Vec<&[char]> = (1..m).map(move |end| &long[..end]).collect();
        windows.extend((0..=n - m).map(move |start| &long[start..start + m]));
        windows.extend((n - m + 1..n).map(move |start| &long[start..]));
        windows
            .into_iter()
            .map(|w| percent(lcs_len(&short, w), m + w.len()))
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn test_window_skipping_keeps_best_score() {
        let pairs = [
            ("bn laen osama", "bin laden osama"),
            ("jackson osama", "bin laden osama"),
            ("elvis laden", "bin laden osama"),
            ("escobar pablo", "bin laden osama"),
            ("hussein saddam", "guzman joaquin"),
            ("abcd", "dcba"),
            ("zzzz", "osama bin laden"),
        ];
        for (a, b) in pairs {
            assert_eq!(partial_ratio(a, b), exhaustive_partial_ratio(a, b), "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn test_long_dissimilar_inputs() {
        let long = "abcdefghij".repeat(84);
        let other = "klmnopqrst".repeat(80);
        assert_eq!(partial_ratio(&other, &long), 0);
        assert_eq!(partial_ratio(&"cdefghijab".repeat(3), &long), 100);
    }

    #[test]
    fn test_sort_tokens() {
        assert_eq!(sort_tokens("osama bin laden"), "bin laden osama");
        assert_eq!(sort_tokens("  osama  bin\tladen "), "bin laden osama");
        assert_eq!(sort_tokens(""), "");
    }

    #[test]
    fn test_token_sort_partial_ratio_ignores_word_order() {
        assert_eq!(token_sort_partial_ratio("laden osama bin", "osama bin laden"), 100);
        assert_eq!(token_sort_partial_ratio("osama  bin laden", "osama bin laden"), 100);
    }

    #[test]
    fn test_token_sort_partial_ratio_known_scores() {
        let target = "osama bin laden";
        assert_eq!(token_sort_partial_ratio("bn laen osama", target), 92);
        assert_eq!(token_sort_partial_ratio("osam lade", target), 89);
        assert_eq!(token_sort_partial_ratio("ladenr osamar binr", target), 87);
        assert_eq!(token_sort_partial_ratio("osama jackson", target), 70);
        assert_eq!(token_sort_partial_ratio("elvis laden", target), 70);
        assert_eq!(token_sort_partial_ratio("jackson bin", target), 60);
    }

    #[test]
    fn test_identical_scores_100() {
        for s in ["osama bin laden", "a", "x y z"] {
            assert_eq!(token_sort_partial_ratio(s, s), 100);
        }
    }
}
