//! Token and list helpers shared by the name indexer and the resolver.

use std::collections::HashSet;
use std::hash::Hash;

/// Splits text on whitespace, dropping empty tokens.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

/// Lowercases text, then splits it on whitespace.
#[must_use]
pub fn lowercase_tokens(text: &str) -> Vec<String> {
    tokenize(&text.to_lowercase())
}

/// Joins tokens with single spaces.
#[must_use]
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(token.as_ref());
    }
    out
}

/// Concatenates two lists, keeping each element only the first time it is seen.
///
/// Order is first-seen order: all of `first` (minus its own repeats), then
/// whatever `second` adds.
#[must_use]
pub fn merge_unique<T>(first: Vec<T>, second: Vec<T>) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen = HashSet::with_capacity(first.len() + second.len());
    first
        .into_iter()
        .chain(second)
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
