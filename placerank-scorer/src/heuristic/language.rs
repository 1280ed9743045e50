//! Script-based language detection.

use serde::{Deserialize, Serialize};

/// Language of a review as far as sentiment lexicons are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Predominantly Arabic script.
    Arabic,
    /// Predominantly Latin letters.
    English,
    /// No dominant script, or no letters at all.
    Unknown,
}

/// Classify `text` by counting Arabic-block characters against ASCII letters.
///
/// Characters in `U+0600..=U+06FF` count as Arabic; `a-z` and `A-Z` count as
/// English. A tie, including text with neither, is [`Language::Unknown`].
///
/// # Examples
/// ```
/// use placerank_scorer::{Language, detect_language};
///
/// assert_eq!(detect_language("Lovely terrace"), Language::English);
/// assert_eq!(detect_language("مكان جميل"), Language::Arabic);
/// assert_eq!(detect_language("42 !"), Language::Unknown);
/// ```
#[must_use]
pub fn detect_language(text: &str) -> Language {
    let (arabic, english) = text.chars().fold((0_usize, 0_usize), |(ar, en), c| {
        if ('\u{0600}'..='\u{06FF}').contains(&c) {
            (ar + 1, en)
        } else if c.is_ascii_alphabetic() {
            (ar, en + 1)
        } else {
            (ar, en)
        }
    });
    match arabic.cmp(&english) {
        std::cmp::Ordering::Greater => Language::Arabic,
        std::cmp::Ordering::Less => Language::English,
        std::cmp::Ordering::Equal => Language::Unknown,
    }
}
