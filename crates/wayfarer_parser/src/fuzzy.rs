//! Fuzzy similarity scoring.
//!
//! Every measure compares Unicode scalar values and reports a similarity on a
//! 0–100 scale, where 100 means identical. The blended [`score`] combines
//! three of them so that one outlier cannot carry a weak match over the
//! threshold on its own.
//!
//! All measures are built on the Indel distance (insertions and deletions
//! only) from `rapidfuzz`; the windowed, token-sorted and token-set
//! variants are composed here.

use std::collections::BTreeSet;

use rapidfuzz::distance::indel;
use rapidfuzz::fuzz;

/// The components of a blended score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreBreakdown {
    /// Whole-string [`ratio`].
    pub ratio: f64,
    /// [`partial_token_sort_ratio`].
    pub partial_token_sort: f64,
    /// [`token_set_ratio`].
    pub token_set: f64,
    /// Final blended score.
    pub score: i64,
}

/// Blended similarity of `query` against `text`, 0–100.
///
/// The lowest of [`ratio`], [`partial_token_sort_ratio`] and
/// [`token_set_ratio`] is dropped; the result is the root-mean-square of the
/// other two, rounded up.
#[must_use]
pub fn score(query: &str, text: &str) -> i64 {
    score_breakdown(query, text).score
}

/// Like [`score`], but also returns the three components.
#[must_use]
pub fn score_breakdown(query: &str, text: &str) -> ScoreBreakdown {
    let ratio = ratio(query, text);
    let partial_token_sort = partial_token_sort_ratio(query, text);
    let token_set = token_set_ratio(query, text);

    let score = rms_of_best_two(ratio, partial_token_sort, token_set);
    tracing::trace!(
        query,
        text,
        ratio,
        partial_token_sort,
        token_set,
        score,
        "scored candidate"
    );

    ScoreBreakdown {
        ratio,
        partial_token_sort,
        token_set,
        score,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn rms_of_best_two(a: f64, b: f64, c: f64) -> i64 {
    let lowest = a.min(b).min(c);
    let sum_of_squares = a * a + b * b + c * c - lowest * lowest;
    let rms = (sum_of_squares / 2.0).sqrt();
    // Float noise must not push an exact 100 over the scale.
    (rms.ceil() as i64).clamp(0, 100)
}

/// Normalized Indel similarity: `200 · LCS / (|a| + |b|)`.
///
/// Two empty strings are identical (100).
#[must_use]
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    char_ratio(&a, &b)
}

/// Best [`ratio`] of the shorter string against any same-length window of
/// the longer.
///
/// Windows hanging over either edge of the longer string are tried as
/// shorter prefixes and suffixes. Strings of equal length are aligned both
/// ways. An empty string against a non-empty one scores 0.
#[must_use]
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() || b.is_empty() {
        return if a.is_empty() && b.is_empty() { 100.0 } else { 0.0 };
    }

    if a.len() == b.len() {
        return best_window(&a, &b).max(best_window(&b, &a));
    }
    if a.len() < b.len() {
        best_window(&a, &b)
    } else {
        best_window(&b, &a)
    }
}

/// Tokens sorted and rejoined before a whole-string [`ratio`].
#[must_use]
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Tokens sorted and rejoined before a [`partial_ratio`].
#[must_use]
pub fn partial_token_sort_ratio(a: &str, b: &str) -> f64 {
    partial_ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Similarity of the two token sets.
///
/// Either side without tokens scores 0. When the sets share tokens and one
/// is a subset of the other, the score is 100. Otherwise the best of three
/// comparisons: shared tokens plus each side's extras against each other,
/// and the shared tokens alone against each side.
#[must_use]
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let intersection: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let diff_ab: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let diff_ba: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    if !intersection.is_empty() && (diff_ab.is_empty() || diff_ba.is_empty()) {
        return 100.0;
    }

    let diff_ab_joined: Vec<char> = diff_ab.join(" ").chars().collect();
    let diff_ba_joined: Vec<char> = diff_ba.join(" ").chars().collect();
    let ab_len = diff_ab_joined.len();
    let ba_len = diff_ba_joined.len();
    let sect_len = intersection.join(" ").chars().count();

    // Lengths of "sect diff_ab" and "sect diff_ba" with the joining space.
    let separator = usize::from(sect_len != 0);
    let sect_ab_len = sect_len + separator + ab_len;
    let sect_ba_len = sect_len + separator + ba_len;

    // The shared prefix contributes equally to both sides, so the extras
    // alone give the distance of the full strings.
    let distance = indel_distance(&diff_ab_joined, &diff_ba_joined);
    let combined = normalized_similarity(distance, sect_ab_len + sect_ba_len);
    if sect_len == 0 {
        return combined;
    }

    let sect_ab = normalized_similarity(separator + ab_len, sect_len + sect_ab_len);
    let sect_ba = normalized_similarity(separator + ba_len, sect_len + sect_ba_len);

    combined.max(sect_ab).max(sect_ba)
}

fn sorted_tokens(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn best_window(shorter: &[char], longer: &[char]) -> f64 {
    let len = shorter.len();
    let mut best = 0.0_f64;

    let prefixes = (1..len).map(|end| &longer[..end]);
    let inner = (0..=longer.len() - len).map(|start| &longer[start..start + len]);
    let suffixes = (longer.len() - len + 1..longer.len()).map(|start| &longer[start..]);

    for window in prefixes.chain(inner).chain(suffixes) {
        best = best.max(char_ratio(shorter, window));
        if best >= 100.0 {
            break;
        }
    }
    best
}

#[allow(clippy::cast_precision_loss)]
fn normalized_similarity(distance: usize, total_len: usize) -> f64 {
    if total_len == 0 {
        return 100.0;
    }
    100.0 - 100.0 * distance as f64 / total_len as f64
}

fn char_ratio(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 100.0;
    }
    fuzz::ratio(a.iter().copied(), b.iter().copied()) * 100.0
}

fn indel_distance(a: &[char], b: &[char]) -> usize {
    indel::distance(a.iter().copied(), b.iter().copied())
}
