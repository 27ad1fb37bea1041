//! Ordinal prefixes.
//!
//! Recognizes the forms a user types to pick one of several similar objects:
//! English ordinal words ("third", "twenty-first"), a number followed by a
//! dot ("2.sword"), and a number with an ordinal suffix ("3rd").

use std::collections::HashMap;
use std::sync::LazyLock;

const UNITS: [&str; 9] = [
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
];

const TEENS: [&str; 10] = [
    "tenth",
    "eleventh",
    "twelfth",
    "thirteenth",
    "fourteenth",
    "fifteenth",
    "sixteenth",
    "seventeenth",
    "eighteenth",
    "nineteenth",
];

/// Tens as (cardinal prefix for compounds, ordinal word), from twenty up.
const TENS: [(&str, &str); 8] = [
    ("twenty", "twentieth"),
    ("thirty", "thirtieth"),
    ("forty", "fortieth"),
    ("fifty", "fiftieth"),
    ("sixty", "sixtieth"),
    ("seventy", "seventieth"),
    ("eighty", "eightieth"),
    ("ninety", "ninetieth"),
];

static ORDINAL_WORDS: LazyLock<HashMap<String, usize>> = LazyLock::new(|| {
    let mut words = HashMap::new();
    for (value, word) in (1..).zip(UNITS) {
        words.insert(word.to_owned(), value);
    }
    for (value, word) in (10..).zip(TEENS) {
        words.insert(word.to_owned(), value);
    }
    for (tens, (prefix, word)) in (2..).map(|t| t * 10).zip(TENS) {
        words.insert(word.to_owned(), tens);
        for (unit, suffix) in (1..).zip(UNITS) {
            words.insert(format!("{prefix}-{suffix}"), tens + unit);
        }
    }
    words.insert("hundredth".to_owned(), 100);
    words
});

/// Result of reading an ordinal off a word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrdinalParse {
    /// The 1-based position selected, if the word carried one.
    pub ordinal: Option<usize>,
    /// What is left of the word once the ordinal is removed.
    pub remainder: String,
}

impl OrdinalParse {
    fn found(ordinal: usize, remainder: &str) -> Self {
        Self {
            ordinal: Some(ordinal),
            remainder: remainder.to_owned(),
        }
    }

    fn none(word: &str) -> Self {
        Self {
            ordinal: None,
            remainder: word.to_owned(),
        }
    }
}

/// Reads an ordinal from a single word.
///
/// Tried in order:
/// 1. an ordinal word, case-insensitive: `"third"` → `(3, "")`
/// 2. digits then a dot: `"2.sword"` → `(2, "sword")`
/// 3. digits then `st`/`nd`/`rd`/`th` as the whole word: `"21st"` → `(21, "")`
///
/// Anything else, including a zero or an out-of-range number, is no ordinal
/// and leaves the word unchanged. The suffix is not checked against the
/// number, so `"2th"` reads as 2.
#[must_use]
pub fn parse_ordinal(word: &str) -> OrdinalParse {
    if let Some(&value) = ORDINAL_WORDS.get(&word.to_lowercase()) {
        return OrdinalParse::found(value, "");
    }

    let digits_end = word
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(word.len(), |(i, _)| i);
    if digits_end == 0 {
        return OrdinalParse::none(word);
    }
    let (digits, rest) = word.split_at(digits_end);

    let remainder = if let Some(after_dot) = rest.strip_prefix('.') {
        after_dot
    } else if is_ordinal_suffix(rest) {
        ""
    } else {
        return OrdinalParse::none(word);
    };

    match digits.parse::<usize>() {
        Ok(value) if value > 0 => OrdinalParse::found(value, remainder),
        _ => OrdinalParse::none(word),
    }
}

fn is_ordinal_suffix(rest: &str) -> bool {
    ["st", "nd", "rd", "th"]
        .iter()
        .any(|suffix| rest.eq_ignore_ascii_case(suffix))
}
