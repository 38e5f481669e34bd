//! Present-tense correction of flagged descriptions.

use super::config::WordingConfig;
use std::borrow::Cow;

/// Leading word that turns into an explicit `not`.
const NEGATED: &str = "shouldn't";

const NOT: &str = "not";

/// Suffixes that take `es` instead of `s`.
const ES_SUFFIXES: [&str; 6] = ["o", "s", "x", "ch", "sh", "ss"];

const VOWELS: [char; 5] = ['a', 'u', 'i', 'o', 'e'];

/// Rewrites a description that starts with "should" into present tense.
///
/// The leading word is dropped (`shouldn't` leaves a `not` behind), and
/// the first word that is not in the ignore set is put into third-person
/// singular form. Everything else is kept as is.
///
/// The `not` left by `shouldn't` only changes through an explicit
/// `CustomTransform` entry; otherwise the following word is corrected.
///
/// ```
/// use wording_lint_rules::{rewrite, WordingConfig};
///
/// let config = WordingConfig::new();
/// assert_eq!(rewrite("should find nothing", &config), "finds nothing");
/// assert_eq!(rewrite("shouldn't find nothing", &config), "not finds nothing");
/// ```
#[must_use]
pub fn rewrite(text: &str, config: &WordingConfig) -> String {
    let mut words = text.split_ascii_whitespace();
    let Some(first) = words.next() else {
        return String::new();
    };
    let mut words: Vec<Cow<'_, str>> = words.map(Cow::Borrowed).collect();

    let mut skip = 0;
    if first == NEGATED {
        match config.custom_transform().get(NOT) {
            Some(replacement) if !config.is_ignored(NOT) => {
                words.insert(0, Cow::Owned(replacement.clone()));
                return words.join(" ");
            }
            _ => {
                words.insert(0, Cow::Borrowed(NOT));
                skip = 1;
            }
        }
    }

    if let Some(word) = words
        .iter_mut()
        .skip(skip)
        .find(|word| !config.is_ignored(word))
    {
        *word = Cow::Owned(simple_present(word, config));
    }

    words.join(" ")
}

/// Third-person singular present form of `word`.
#[must_use]
pub fn simple_present(word: &str, config: &WordingConfig) -> String {
    if let Some(replacement) = config.custom_transform().get(word) {
        return replacement.clone();
    }

    if ES_SUFFIXES.iter().any(|suffix| word.ends_with(suffix)) {
        return format!("{word}es");
    }

    if let Some(stem) = word.strip_suffix('y') {
        let after_vowel = stem.chars().next_back().is_some_and(|c| VOWELS.contains(&c));
        if !after_vowel {
            return format!("{stem}ies");
        }
    }

    format!("{word}s")
}
