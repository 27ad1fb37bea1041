//! Inflection data.
//!
//! Rule order is load-bearing: the first pattern that matches wins, and the
//! `s?$` catch-all stops the plural table. Patterns are case-insensitive and
//! replacements use `${n}` group references.

/// Singular/plural pairs that no rule produces. Each word appears once, so
/// these convert in both directions.
pub(super) const IRREGULARS: &[(&str, &str)] = &[
    ("I", "we"),
    ("me", "us"),
    ("she", "they"),
    ("its", "their"),
    ("my", "our"),
    ("myself", "ourselves"),
    ("yourself", "yourselves"),
    ("themself", "themselves"),
    ("this", "these"),
    ("that", "those"),
    ("them", "them"),
    ("is", "are"),
    ("was", "were"),
    ("has", "have"),
    ("echo", "echoes"),
    ("dingo", "dingoes"),
    ("volcano", "volcanoes"),
    ("tornado", "tornadoes"),
    ("torpedo", "torpedoes"),
    ("genus", "genera"),
    ("viscus", "viscera"),
    ("stigma", "stigmata"),
    ("stoma", "stomata"),
    ("dogma", "dogmata"),
    ("lemma", "lemmata"),
    ("schema", "schemata"),
    ("anathema", "anathemata"),
    ("ox", "oxen"),
    ("axe", "axes"),
    ("die", "dice"),
    ("yes", "yeses"),
    ("foot", "feet"),
    ("eave", "eaves"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("quiz", "quizzes"),
    ("human", "humans"),
    ("proof", "proofs"),
    ("carve", "carves"),
    ("valve", "valves"),
    ("looey", "looies"),
    ("thief", "thieves"),
    ("groove", "grooves"),
    ("pickaxe", "pickaxes"),
    ("passerby", "passersby"),
    ("canvas", "canvases"),
    ("go", "goes"),
];

/// Singulars that share a plural with another entry. Only `pluralize` uses
/// these; the plural maps back through [`IRREGULARS`].
pub(super) const PLURAL_ONLY_IRREGULARS: &[(&str, &str)] = &[
    ("he", "they"),
    ("her", "their"),
    ("his", "their"),
    ("herself", "themselves"),
    ("himself", "themselves"),
    ("itself", "themselves"),
];

/// Words whose singular and plural coincide, matched as whole words.
pub(super) const UNCOUNTABLE_WORDS: &[&str] = &[
    "adulthood",
    "advice",
    "agenda",
    "aid",
    "aircraft",
    "alcohol",
    "ammo",
    "analytics",
    "anime",
    "athletics",
    "audio",
    "bison",
    "blood",
    "bream",
    "buffalo",
    "butter",
    "carp",
    "cash",
    "chassis",
    "chess",
    "clothing",
    "cod",
    "commerce",
    "cooperation",
    "corps",
    "debris",
    "diabetes",
    "digestion",
    "elk",
    "energy",
    "equipment",
    "excretion",
    "expertise",
    "firmware",
    "flounder",
    "fun",
    "gallows",
    "garbage",
    "graffiti",
    "hardware",
    "headquarters",
    "health",
    "herpes",
    "highjinks",
    "homework",
    "housework",
    "information",
    "jeans",
    "justice",
    "kudos",
    "labour",
    "literature",
    "machinery",
    "mackerel",
    "mail",
    "manga",
    "media",
    "mews",
    "moose",
    "mud",
    "music",
    "news",
    "only",
    "personnel",
    "pike",
    "plankton",
    "pliers",
    "police",
    "pollution",
    "premises",
    "rain",
    "research",
    "rice",
    "salmon",
    "scissors",
    "series",
    "sewage",
    "shambles",
    "shrimp",
    "software",
    "staff",
    "swine",
    "tennis",
    "traffic",
    "transportation",
    "trout",
    "tuna",
    "wealth",
    "welfare",
    "whiting",
    "wildebeest",
    "wildlife",
    "you",
];

/// Word endings that mark a word as uncountable.
pub(super) const UNCOUNTABLE_ENDINGS: &[&str] = &[
    "pok[eé]mon",
    "[^aeiou]ese",
    "deer",
    "fish",
    "measles",
    "o[iu]s",
];

pub(super) const PLURAL_RULES: &[(&str, &str)] = &[
    (r"(?:(kni|wi|li)fe|(ar|l|ea|eo|oa|hoo)f)$", "${1}${2}ves"),
    (r"([^aeiou]ese)$", "${1}"),
    (r"([^aeiouy]|qu)y$", "${1}ies"),
    (r"([^ch][ieo][ln])ey$", "${1}ies"),
    (r"([^l]ias|[aeiou]las|[ejzr]as|[iu]am)$", "${1}"),
    (
        r"(agend|addend|millenni|dat|extrem|bacteri|desiderat|strat|candelabr|errat|ov|symposi|curricul|automat|quor)(?:a|um)$",
        "${1}a",
    ),
    (r"(alias|[^aou]us|t[lm]as|gas|ris)$", "${1}es"),
    (r"(alumn|alg|vertebr)(?:a|ae)$", "${1}ae"),
    (
        r"(alumn|syllab|vir|radi|nucle|fung|cact|stimul|termin|bacill|foc|uter|loc|strat)(?:us|i)$",
        "${1}i",
    ),
    (
        r"(apheli|hyperbat|periheli|asyndet|noumen|phenomen|criteri|organ|prolegomen|hedr|automat)(?:a|on)$",
        "${1}a",
    ),
    (r"(ax|test)is$", "${1}es"),
    (r"(child)(?:ren)?$", "${1}ren"),
    (r"(e[mn]u)s?$", "${1}s"),
    (r"(her|at|gr)o$", "${1}oes"),
    (r"(matr|cod|mur|sil|vert|ind|append)(?:ix|ex)$", "${1}ices"),
    (r"(pe)(?:rson|ople)$", "${1}ople"),
    (r"(seraph|cherub)(?:im)?$", "${1}im"),
    (r"(x|ch|ss|sh|zz)$", "${1}es"),
    (r"[^\x00-\x7F]$", "${0}"),
    (r"\b((?:tit)?m|l)(?:ice|ouse)$", "${1}ice"),
    (r"eaux$", "${0}"),
    (r"m[ae]n$", "men"),
    // Nothing after the catch-all is reachable, so these sit just before it.
    (r"sis$", "ses"),
    (r"^thou$", "you"),
    (r"s?$", "s"),
];

pub(super) const SINGULAR_RULES: &[(&str, &str)] = &[
    (
        r"(agend|addend|millenni|dat|extrem|bacteri|desiderat|strat|candelabr|errat|ov|symposi|curricul|quor)a$",
        "${1}um",
    ),
    (r"(alumn|alg|vertebr)ae$", "${1}a"),
    (
        r"(alumn|syllab|vir|radi|nucle|fung|cact|stimul|termin|bacill|foc|uter|loc|strat)(?:us|i)$",
        "${1}us",
    ),
    (
        r"(analy|diagno|parenthe|progno|synop|the|empha|cri|ne)(?:sis|ses)$",
        "${1}sis",
    ),
    (
        r"(apheli|hyperbat|periheli|asyndet|noumen|phenomen|criteri|organ|prolegomen|hedr|automat)a$",
        "${1}on",
    ),
    (r"(ar|(?:wo|[ae])l|[eo][ao])ves$", "${1}f"),
    (r"(child)ren$", "${1}"),
    (r"(cod|mur|sil|vert|ind)ices$", "${1}ex"),
    (
        r"(dg|ss|ois|lk|ok|wn|mb|th|ch|ec|oal|is|ck|ix|sser|ts|wb)ies$",
        "${1}ie",
    ),
    (r"(eau)x?$", "${1}"),
    (r"(matr|append)ices$", "${1}ix"),
    (r"(movie|twelve|abuse|e[mn]u)s$", "${1}"),
    (r"(pe)(rson|ople)$", "${1}rson"),
    (r"(seraph|cherub)im$", "${1}"),
    (r"(ss)$", "${1}"),
    (r"(test)(?:is|es)$", "${1}is"),
    (
        r"(wi|kni|(?:after|half|high|low|mid|non|night|[^\w]|^)li)ves$",
        "${1}fe",
    ),
    (
        r"(x|ch|ss|sh|zz|tto|go|cho|alias|[^aou]us|t[lm]as|gas|(?:her|at|gr)o|[aeiou]ris)(?:es)?$",
        "${1}",
    ),
    (r"\b((?:tit)?m|l)ice$", "${1}ouse"),
    (
        r"\b(l|(?:neck|cross|hog|aun)?t|coll|faer|food|gen|goon|group|hipp|junk|vegg|(?:pork)?p|charl|calor|cut)ies$",
        "${1}ie",
    ),
    (r"\b(mon|smil)ies$", "${1}ey"),
    (r"ies$", "y"),
    (r"men$", "man"),
    (r"s$", ""),
];
