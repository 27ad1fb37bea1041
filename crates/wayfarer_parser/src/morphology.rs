//! English inflection.
//!
//! [`pluralize`] and [`singularize`] check, in order:
//!
//! 1. the irregular table (exact spelling first, then case-insensitive with
//!    the input's case restored); a word already in the target form is
//!    returned unchanged
//! 2. the uncountable set, which is returned unchanged
//! 3. the ordered rule table, where the first matching rule wins
//!
//! The tables are built on first use and shared by every caller.

mod tables;

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use self::tables::{
    IRREGULARS, PLURAL_ONLY_IRREGULARS, PLURAL_RULES, SINGULAR_RULES, UNCOUNTABLE_ENDINGS,
    UNCOUNTABLE_WORDS,
};

static INFLECTOR: LazyLock<Inflector> = LazyLock::new(Inflector::new);

/// Returns the plural form of `word`.
#[must_use]
pub fn pluralize(word: &str) -> String {
    INFLECTOR.convert(word, Number::Plural)
}

/// Returns the singular form of `word`.
#[must_use]
pub fn singularize(word: &str) -> String {
    INFLECTOR.convert(word, Number::Singular)
}

/// Returns true if `word` is already plural.
#[must_use]
pub fn is_plural(word: &str) -> bool {
    let lower = word.to_lowercase();
    pluralize(&lower) == lower
}

/// Returns true if `word` is already singular.
#[must_use]
pub fn is_singular(word: &str) -> bool {
    let lower = word.to_lowercase();
    singularize(&lower) == lower
}

/// Inflects `word` to agree with `count`, optionally prefixed by the count.
///
/// ```
/// use wayfarer_parser::inflect;
///
/// assert_eq!(inflect("sword", 3, true), "3 swords");
/// assert_eq!(inflect("swords", 1, true), "1 sword");
/// assert_eq!(inflect("goose", 2, false), "geese");
/// ```
#[must_use]
pub fn inflect(word: &str, count: i64, inclusive: bool) -> String {
    let inflected = if count == 1 {
        singularize(word)
    } else {
        pluralize(word)
    };
    if inclusive {
        format!("{count} {inflected}")
    } else {
        inflected
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Number {
    Singular,
    Plural,
}

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

/// An irregular target: the table spelling of the source and its counterpart.
#[derive(Clone, Copy)]
struct Irregular {
    source: &'static str,
    target: &'static str,
}

struct Inflector {
    /// Lowercased singular to its plural.
    to_plural: HashMap<String, Irregular>,
    /// Lowercased plural to its singular.
    to_singular: HashMap<String, Irregular>,
    uncountable_words: HashSet<&'static str>,
    uncountable_endings: Option<Regex>,
    plural_rules: Vec<Rule>,
    singular_rules: Vec<Rule>,
}

impl Inflector {
    fn new() -> Self {
        let mut to_plural = HashMap::new();
        let mut to_singular = HashMap::new();
        for &(singular, plural) in IRREGULARS {
            to_plural.insert(
                singular.to_lowercase(),
                Irregular {
                    source: singular,
                    target: plural,
                },
            );
            to_singular.insert(
                plural.to_lowercase(),
                Irregular {
                    source: plural,
                    target: singular,
                },
            );
        }
        for &(singular, plural) in PLURAL_ONLY_IRREGULARS {
            to_plural.insert(
                singular.to_lowercase(),
                Irregular {
                    source: singular,
                    target: plural,
                },
            );
        }

        let endings = format!("(?:{})$", UNCOUNTABLE_ENDINGS.join("|"));

        Self {
            to_plural,
            to_singular,
            uncountable_words: UNCOUNTABLE_WORDS.iter().copied().collect(),
            uncountable_endings: compile(&endings),
            plural_rules: compile_rules(PLURAL_RULES),
            singular_rules: compile_rules(SINGULAR_RULES),
        }
    }

    fn convert(&self, word: &str, number: Number) -> String {
        if word.is_empty() {
            return String::new();
        }

        let (replace, keep, rules) = match number {
            Number::Plural => (&self.to_plural, &self.to_singular, &self.plural_rules),
            Number::Singular => (&self.to_singular, &self.to_plural, &self.singular_rules),
        };

        let lower = word.to_lowercase();
        if let Some(irregular) = replace.get(&lower) {
            return if word == irregular.source {
                irregular.target.to_owned()
            } else {
                restore_case(word, irregular.target)
            };
        }
        if keep.contains_key(&lower) || self.is_uncountable(word, &lower) {
            return word.to_owned();
        }

        rules
            .iter()
            .find(|rule| rule.pattern.is_match(word))
            .map_or_else(
                || word.to_owned(),
                |rule| restore_case(word, &rule.pattern.replace(word, rule.replacement)),
            )
    }

    fn is_uncountable(&self, word: &str, lower: &str) -> bool {
        self.uncountable_words.contains(lower)
            || self
                .uncountable_endings
                .as_ref()
                .is_some_and(|endings| endings.is_match(word))
    }
}

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(&format!("(?i){pattern}")) {
        Ok(regex) => Some(regex),
        Err(err) => {
            tracing::error!(pattern, %err, "skipping invalid inflection pattern");
            None
        }
    }
}

fn compile_rules(table: &[(&'static str, &'static str)]) -> Vec<Rule> {
    table
        .iter()
        .filter_map(|&(pattern, replacement)| {
            compile(pattern).map(|pattern| Rule {
                pattern,
                replacement,
            })
        })
        .collect()
}

/// Gives `result` the letter case of `original`.
///
/// Lowercase, uppercase and capitalized inputs carry over; any other mix
/// keeps `result` as it is.
fn restore_case(original: &str, result: &str) -> String {
    if original == result {
        return result.to_owned();
    }
    if original == original.to_lowercase() {
        return result.to_lowercase();
    }
    if original == original.to_uppercase() {
        return result.to_uppercase();
    }

    let mut chars = original.chars();
    let capitalized = chars.next().is_some_and(char::is_uppercase)
        && chars.as_str() == chars.as_str().to_lowercase();
    if capitalized {
        let mut out = result.chars();
        return match out.next() {
            Some(first) => first
                .to_uppercase()
                .chain(out.as_str().to_lowercase().chars())
                .collect(),
            None => String::new(),
        };
    }
    result.to_owned()
}
