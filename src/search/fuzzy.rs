//! Weighted-ratio fuzzy string similarity
//!
//! Composite similarity scores on a 0-100 scale, built from four
//! sub-metrics: full-string ratio (indel distance over the whole strings),
//! best-substring partial ratio, and token-sort / token-set variants that
//! tolerate word reordering and repetition. The composite takes the maximum
//! of the sub-metrics after length-based discounting of the partial-match
//! variants, so a short query fully contained in a longer text outranks a
//! pair that is merely close in edit distance.

use std::collections::BTreeSet;
use unicode_segmentation::UnicodeSegmentation;

/// Scale applied to every sub-metric when query and text are of similar length
const BALANCED_SCALE: f64 = 0.9;
/// Scale applied to the token-based partial variants
const TOKEN_SCALE: f64 = 0.95;
/// Scale for a confident best-window match at moderate length imbalance
const PARTIAL_SCALE: f64 = 0.9;
/// Scale for a confident best-window match at extreme length imbalance
const PARTIAL_SCALE_EXTREME: f64 = 0.6;
/// Scale for best-window matches below the confidence threshold
const PARTIAL_WEAK_SCALE: f64 = 0.5;
/// Best-window score at which a partial match counts as real containment
const PARTIAL_CONFIDENCE: f64 = 75.0;
/// Length ratio below which the strings are compared as near-equals
const LENGTH_BALANCED_CUTOFF: f64 = 1.5;
/// Length ratio beyond which partial matches are discounted hardest
const LENGTH_EXTREME_CUTOFF: f64 = 8.0;

/// Length of the longest common subsequence, rolling-row DP
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; b.len() + 1];
    let mut cur = vec![0usize; b.len() + 1];

    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            cur[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(cur[j])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
        cur[0] = 0;
    }

    prev[b.len()]
}

/// Indel similarity of two char sequences in [0, 100]
fn similarity(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 100.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    200.0 * lcs_len(a, b) as f64 / (a.len() + b.len()) as f64
}

/// Full-string similarity ratio in [0, 100]
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    similarity(&a, &b)
}

/// Best alignment of the shorter string against any equal-length window of
/// the longer one, in [0, 100]
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let mut a: Vec<char> = a.chars().collect();
    let mut b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a.len() > b.len() {
        std::mem::swap(&mut a, &mut b);
    }

    let window = a.len();
    let mut best = 0.0f64;
    for start in 0..=(b.len() - window) {
        let score = similarity(&a, &b[start..start + window]);
        if score > best {
            best = score;
        }
        if best >= 100.0 {
            break;
        }
    }
    best
}

fn sorted_token_string(s: &str) -> String {
    let mut tokens: Vec<&str> = s.unicode_words().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn token_set(s: &str) -> BTreeSet<&str> {
    s.unicode_words().collect()
}

/// Similarity after sorting each string's tokens alphabetically
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_token_string(a), &sorted_token_string(b))
}

/// Similarity over deduplicated token sets: the shared tokens are compared
/// against each side's full token list, which rewards overlap regardless of
/// repetition
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let ta = token_set(a);
    let tb = token_set(b);
    if ta.is_empty() || tb.is_empty() {
        return 0.0;
    }

    let sect: Vec<&str> = ta.intersection(&tb).copied().collect();
    let diff_a: Vec<&str> = ta.difference(&tb).copied().collect();
    let diff_b: Vec<&str> = tb.difference(&ta).copied().collect();

    // one side fully contained in the other's token set
    if !sect.is_empty() && (diff_a.is_empty() || diff_b.is_empty()) {
        return 100.0;
    }

    let sect_s = sect.join(" ");
    let s1 = join_nonempty(&sect_s, &diff_a.join(" "));
    let s2 = join_nonempty(&sect_s, &diff_b.join(" "));

    ratio(&sect_s, &s1).max(ratio(&sect_s, &s2)).max(ratio(&s1, &s2))
}

fn join_nonempty(a: &str, b: &str) -> String {
    match (a.is_empty(), b.is_empty()) {
        (true, _) => b.to_string(),
        (_, true) => a.to_string(),
        _ => format!("{} {}", a, b),
    }
}

fn partial_token_sort_ratio(a: &str, b: &str) -> f64 {
    partial_ratio(&sorted_token_string(a), &sorted_token_string(b))
}

fn partial_token_set_ratio(a: &str, b: &str) -> f64 {
    let ta = token_set(a);
    let tb = token_set(b);
    if ta.intersection(&tb).next().is_some() {
        return 100.0;
    }
    let ja: Vec<&str> = ta.into_iter().collect();
    let jb: Vec<&str> = tb.into_iter().collect();
    partial_ratio(&ja.join(" "), &jb.join(" "))
}

/// Discount a best-window score by length imbalance. Windows below the
/// confidence threshold carry little containment signal and are held under
/// the search confidence floor.
fn scale_partial(score: f64, extreme: bool) -> f64 {
    if score >= PARTIAL_CONFIDENCE {
        score * if extreme { PARTIAL_SCALE_EXTREME } else { PARTIAL_SCALE }
    } else {
        score * PARTIAL_WEAK_SCALE
    }
}

/// Composite weighted-ratio score in [0, 100].
///
/// Near-equal lengths compare the whole strings with token-order tolerance;
/// imbalanced lengths bring in the partial (best-substring) variants with
/// length-based discounting.
pub fn wratio(query: &str, text: &str) -> f64 {
    if query.is_empty() || text.is_empty() {
        return 0.0;
    }

    let base = ratio(query, text);
    let qlen = query.chars().count() as f64;
    let tlen = text.chars().count() as f64;
    let len_ratio = qlen.max(tlen) / qlen.min(tlen);

    if len_ratio < LENGTH_BALANCED_CUTOFF {
        return BALANCED_SCALE
            * base
                .max(token_sort_ratio(query, text))
                .max(token_set_ratio(query, text));
    }

    let extreme = len_ratio >= LENGTH_EXTREME_CUTOFF;

    (base * BALANCED_SCALE)
        .max(scale_partial(partial_ratio(query, text), extreme))
        .max(scale_partial(partial_token_sort_ratio(query, text), extreme) * TOKEN_SCALE)
        .max(scale_partial(partial_token_set_ratio(query, text), extreme) * TOKEN_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_identical() {
        assert_eq!(ratio("hero", "hero"), 100.0);
        assert_eq!(ratio("", ""), 100.0);
    }

    #[test]
    fn test_ratio_disjoint() {
        assert_eq!(ratio("abc", "xyz"), 0.0);
        assert_eq!(ratio("abc", ""), 0.0);
    }

    #[test]
    fn test_partial_ratio_containment() {
        assert_eq!(partial_ratio("hero", "a landing hero section"), 100.0);
        assert_eq!(partial_ratio("a landing hero section", "hero"), 100.0);
    }

    #[test]
    fn test_token_sort_reordering() {
        assert_eq!(token_sort_ratio("section hero", "hero section"), 100.0);
        assert!(token_sort_ratio("section hero", "pricing table") < 50.0);
    }

    #[test]
    fn test_token_set_repetition() {
        assert_eq!(token_set_ratio("hero hero hero", "hero"), 100.0);
        assert_eq!(token_set_ratio("hero section", "hero"), 100.0);
    }

    #[test]
    fn test_wratio_containment_beats_edit_distance() {
        let text = "landing hero a bold hero section responsive dark-mode";
        let contained = wratio("hero section", text);
        let similar = wratio("hero section", "hero sektion!");
        assert!(contained > 80.0);
        assert!(contained >= similar);
    }

    #[test]
    fn test_wratio_unrelated_stays_low() {
        assert!(wratio("hero section", "pricing table   ") <= 30.0);
        assert!(wratio("pricing", "landing hero a bold hero section responsive dark-mode") <= 30.0);
    }

    #[test]
    fn test_wratio_gibberish_is_zero() {
        assert_eq!(wratio("xyzzy999", "landing hero a bold hero section"), 0.0);
        assert_eq!(wratio("", "anything"), 0.0);
        assert_eq!(wratio("anything", ""), 0.0);
    }

    #[test]
    fn test_wratio_word_order_tolerance() {
        let score = wratio("table pricing", "pricing table");
        assert!(score > 80.0, "reordered tokens should score high, got {}", score);
    }

    #[test]
    fn test_wratio_range() {
        for (a, b) in [
            ("hero", "hero"),
            ("hero section", "pricing table"),
            ("a", "a very long text about many different things entirely"),
            ("short", "sh"),
        ] {
            let s = wratio(a, b);
            assert!((0.0..=100.0).contains(&s), "wratio({:?}, {:?}) = {}", a, b, s);
        }
    }

    #[test]
    fn test_lcs_len() {
        let a: Vec<char> = "hero section".chars().collect();
        let b: Vec<char> = "pricing table".chars().collect();
        assert_eq!(lcs_len(&a, &b), 4);

        let a: Vec<char> = "abc".chars().collect();
        assert_eq!(lcs_len(&a, &a), 3);
        assert_eq!(lcs_len(&a, &[]), 0);
    }
}
