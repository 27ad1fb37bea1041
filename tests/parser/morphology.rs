//! Inflection tests.

use wayfarer_parser::{inflect, is_plural, is_singular, pluralize, singularize};

#[test]
fn everyday_nouns() {
    let cases = [
        ("torch", "torches"),
        ("potion", "potions"),
        ("key", "keys"),
        ("ruby", "rubies"),
        ("elf", "elves"),
        ("thief", "thieves"),
        ("wolf", "wolves"),
        ("tooth", "teeth"),
        ("goose", "geese"),
        ("ox", "oxen"),
    ];
    for (singular, plural) in cases {
        assert_eq!(pluralize(singular), plural, "pluralize({singular})");
        assert_eq!(singularize(plural), singular, "singularize({plural})");
    }
}

#[test]
fn uncountable_nouns_do_not_change() {
    for word in ["moose", "fish", "deer", "rice", "information"] {
        assert_eq!(pluralize(word), word);
        assert_eq!(singularize(word), word);
        assert!(is_plural(word));
        assert!(is_singular(word));
    }
}

#[test]
fn case_follows_input() {
    assert_eq!(pluralize("Torch"), "Torches");
    assert_eq!(pluralize("TORCH"), "TORCHES");
    assert_eq!(singularize("Geese"), "Goose");
}

#[test]
fn inflect_counts() {
    assert_eq!(inflect("coin", 0, true), "0 coins");
    assert_eq!(inflect("coins", 1, true), "1 coin");
    assert_eq!(inflect("mouse", 5, false), "mice");
    assert_eq!(inflect("child", -2, true), "-2 children");
}
