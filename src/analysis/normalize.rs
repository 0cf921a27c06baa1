use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Case-fold and strip combining diacritical marks (macrons, breves, any
/// precomposed accent) without touching word boundaries.
pub fn fold(s: &str) -> String {
    s.nfd()
        .filter(|&c| !is_combining_mark(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Canonical form used for every comparison: headword keys at build time,
/// body tokens, and incoming queries. Removes hyphens, strips diacritics,
/// lowercases, and trims non-alphanumeric boundary characters.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(s: &str) -> String {
    let unhyphenated: String = s.chars().filter(|&c| c != '-').collect();
    let folded = fold(&unhyphenated);
    folded
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_string()
}
