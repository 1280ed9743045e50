//! Word-list sentiment scoring for English and Arabic reviews.

use std::collections::{BTreeMap, BTreeSet};

use placerank_core::{AnnotatedReview, CollaboratorError, Review, SentimentScorer};

use super::{Language, detect_language};
use crate::NEUTRAL_SENTIMENT;

const ENGLISH_POSITIVE: &[&str] = &[
    "amazing",
    "awesome",
    "beautiful",
    "best",
    "clean",
    "comfortable",
    "delicious",
    "excellent",
    "fantastic",
    "friendly",
    "good",
    "great",
    "love",
    "loved",
    "lovely",
    "nice",
    "perfect",
    "recommend",
    "tasty",
    "wonderful",
];

const ENGLISH_NEGATIVE: &[&str] = &[
    "awful",
    "bad",
    "boring",
    "cold",
    "crowded",
    "dirty",
    "disappointing",
    "expensive",
    "hate",
    "hated",
    "horrible",
    "noisy",
    "overpriced",
    "poor",
    "rude",
    "slow",
    "terrible",
    "worst",
];

const ARABIC_POSITIVE: &[&str] = &[
    "ممتاز",
    "ممتازة",
    "رائع",
    "رائعة",
    "جميل",
    "جميلة",
    "لذيذ",
    "لذيذة",
    "نظيف",
    "مريح",
    "هادئ",
    "جيد",
    "حلو",
    "أحب",
    "أنصح",
];

const ARABIC_NEGATIVE: &[&str] = &[
    "سيء",
    "سيئ",
    "سيئة",
    "وحش",
    "زحمة",
    "غالي",
    "وسخ",
    "بطيء",
    "مزعج",
    "ممل",
    "رديء",
    "بارد",
];

/// Positive and negative cue words for one language.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lexicon {
    positive: BTreeSet<String>,
    negative: BTreeSet<String>,
}

impl Lexicon {
    /// Build a lexicon from cue words. Words are matched case-insensitively.
    #[must_use]
    pub fn new<P, N, S>(positive: P, negative: N) -> Self
    where
        P: IntoIterator<Item = S>,
        N: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalise = |word: S| word.as_ref().to_lowercase();
        Self {
            positive: positive.into_iter().map(normalise).collect(),
            negative: negative.into_iter().map(normalise).collect(),
        }
    }

    /// Built-in English cue words.
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH_POSITIVE.iter(), ENGLISH_NEGATIVE.iter())
    }

    /// Built-in Arabic cue words.
    #[must_use]
    pub fn arabic() -> Self {
        Self::new(ARABIC_POSITIVE.iter(), ARABIC_NEGATIVE.iter())
    }

    fn polarity(&self, text: &str) -> f64 {
        let (positive, negative) = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .map(str::to_lowercase)
            .fold((0_usize, 0_usize), |(pos, neg), token| {
                (
                    pos + usize::from(self.positive.contains(&token)),
                    neg + usize::from(self.negative.contains(&token)),
                )
            });
        match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => 1.0,
            std::cmp::Ordering::Less => 0.0,
            std::cmp::Ordering::Equal => NEUTRAL_SENTIMENT,
        }
    }
}

/// [`SentimentScorer`] that labels each review positive (`1.0`) or negative
/// (`0.0`) by counting cue words in the lexicon of its detected language.
///
/// Reviews with balanced cues, no lexicon for their language, or blank text
/// score `0.5`.
///
/// # Examples
/// ```
/// use placerank_core::{Review, SentimentScorer};
/// use placerank_scorer::LexiconSentimentScorer;
///
/// let reviews = [
///     Review::new("Lovely view and excellent coffee"),
///     Review::new("الخدمة بطيئة والمكان زحمة"),
///     Review::without_text(),
/// ];
/// let annotated = LexiconSentimentScorer::default()
///     .annotate(&reviews)
///     .expect("lexicon scoring never fails");
/// let scores: Vec<_> = annotated.iter().map(|r| r.sentiment_score).collect();
/// assert_eq!(scores, [Some(1.0), Some(0.0), Some(0.5)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconSentimentScorer {
    lexicons: BTreeMap<Language, Lexicon>,
}

impl LexiconSentimentScorer {
    /// Scorer with no lexicons; every review scores neutral until one is
    /// added.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            lexicons: BTreeMap::new(),
        }
    }

    /// Use `lexicon` for reviews detected as `language`.
    #[must_use]
    pub fn with_lexicon(mut self, language: Language, lexicon: Lexicon) -> Self {
        self.lexicons.insert(language, lexicon);
        self
    }

    fn score_text(&self, text: Option<&str>) -> f64 {
        text.and_then(|content| {
            self.lexicons
                .get(&detect_language(content))
                .map(|lexicon| lexicon.polarity(content))
        })
        .unwrap_or(NEUTRAL_SENTIMENT)
    }
}

impl Default for LexiconSentimentScorer {
    fn default() -> Self {
        Self::empty()
            .with_lexicon(Language::English, Lexicon::english())
            .with_lexicon(Language::Arabic, Lexicon::arabic())
    }
}

impl SentimentScorer for LexiconSentimentScorer {
    fn annotate(&self, reviews: &[Review]) -> Result<Vec<AnnotatedReview>, CollaboratorError> {
        Ok(reviews
            .iter()
            .map(|review| {
                AnnotatedReview::new(review.clone(), self.score_text(review.content()))
            })
            .collect())
    }
}

/// [`SentimentScorer`] used when no sentiment model is available: every
/// review scores `0.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeutralSentimentScorer;

impl SentimentScorer for NeutralSentimentScorer {
    fn annotate(&self, reviews: &[Review]) -> Result<Vec<AnnotatedReview>, CollaboratorError> {
        Ok(reviews
            .iter()
            .map(|review| AnnotatedReview::new(review.clone(), NEUTRAL_SENTIMENT))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn scorer() -> LexiconSentimentScorer {
        LexiconSentimentScorer::default()
    }

    fn polarity(scorer: &LexiconSentimentScorer, text: &str) -> Option<f64> {
        scorer
            .annotate(&[Review::new(text)])
            .expect("lexicon scoring never fails")
            .first()
            .and_then(|review| review.sentiment_score)
    }

    #[rstest]
    #[case("Great food, friendly staff", 1.0)]
    #[case("Terrible service and DIRTY tables", 0.0)]
    #[case("Good coffee but slow", 0.5)]
    #[case("We sat by the window", 0.5)]
    #[case("الأكل لذيذ والمكان جميل", 1.0)]
    #[case("المكان وسخ و مزعج", 0.0)]
    #[case("   ", 0.5)]
    #[case("12345", 0.5)]
    fn labels_by_cue_words(
        scorer: LexiconSentimentScorer,
        #[case] text: &str,
        #[case] expected: f64,
    ) {
        assert_eq!(polarity(&scorer, text), Some(expected));
    }

    #[rstest]
    fn missing_lexicon_is_neutral() {
        let english_only =
            LexiconSentimentScorer::empty().with_lexicon(Language::English, Lexicon::english());
        assert_eq!(polarity(&english_only, "الأكل لذيذ"), Some(0.5));
        assert_eq!(polarity(&english_only, "delicious"), Some(1.0));
    }

    #[rstest]
    fn preserves_length_and_order(scorer: LexiconSentimentScorer) {
        let reviews = [
            Review::new("awful"),
            Review::without_text(),
            Review::new("wonderful"),
        ];
        let annotated = scorer.annotate(&reviews).expect("lexicon scoring never fails");
        let scores: Vec<Option<f64>> = annotated.iter().map(|r| r.sentiment_score).collect();
        assert_eq!(scores, [Some(0.0), Some(0.5), Some(1.0)]);
        assert_eq!(
            annotated.iter().map(|r| &r.review).collect::<Vec<_>>(),
            reviews.iter().collect::<Vec<_>>()
        );
    }

    #[rstest]
    fn neutral_scorer_scores_everything_half() {
        let annotated = NeutralSentimentScorer
            .annotate(&[Review::new("superb"), Review::without_text()])
            .expect("neutral scoring never fails");
        assert!(
            annotated
                .iter()
                .all(|review| review.sentiment_score == Some(0.5))
        );
    }
}
