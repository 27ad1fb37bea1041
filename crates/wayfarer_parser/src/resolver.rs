//! Turning scores into a selection.
//!
//! The resolver filters candidate texts by score and, when the query opens
//! with an ordinal ("second sword"), picks that hit out of the survivors.

use wayfarer_foundation::{join_tokens, tokenize};

use crate::fuzzy::score;
use crate::ordinal::parse_ordinal;

/// Indices of `texts` that `query` matches, in their original order.
///
/// With `use_ordinal`, a leading ordinal is stripped from the query and used
/// to select one hit. If fewer hits survive than the ordinal asks for, the
/// whole query (ordinal word included) is resolved once more without
/// ordinal handling.
#[must_use]
pub fn resolve<S: AsRef<str>>(
    query: &str,
    texts: &[S],
    threshold: i64,
    use_ordinal: bool,
) -> Vec<usize> {
    if texts.is_empty() {
        return Vec::new();
    }

    let (effective, ordinal) = if use_ordinal {
        strip_ordinal(query)
    } else {
        (query.to_owned(), None)
    };

    let hits: Vec<usize> = texts
        .iter()
        .enumerate()
        .filter(|(_, text)| score(&effective, text.as_ref()) >= threshold)
        .map(|(index, _)| index)
        .collect();

    let Some(ordinal) = ordinal else {
        return hits;
    };

    match ordinal.checked_sub(1).and_then(|i| hits.get(i)) {
        Some(&index) => vec![index],
        None => {
            tracing::debug!(
                query,
                ordinal,
                hits = hits.len(),
                "ordinal exceeds hits, retrying without ordinal"
            );
            resolve(query, texts, threshold, false)
        }
    }
}

/// Resolves with ordinal handling and the threshold clamped to 0–100.
#[must_use]
pub fn complex_match<S: AsRef<str>>(query: &str, texts: &[S], threshold: i64) -> Vec<usize> {
    resolve(query, texts, threshold.clamp(0, 100), true)
}

/// Splits a leading ordinal off the query.
///
/// The first token is replaced by whatever follows the ordinal in it, or
/// dropped when nothing does.
fn strip_ordinal(query: &str) -> (String, Option<usize>) {
    let mut tokens = tokenize(query);
    let Some(first) = tokens.first() else {
        return (String::new(), None);
    };

    let parsed = parse_ordinal(first);
    if parsed.remainder.is_empty() {
        tokens.remove(0);
    } else {
        tokens[0] = parsed.remainder;
    }
    (join_tokens(&tokens), parsed.ordinal)
}
