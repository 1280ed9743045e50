//! Deterministic review collaborators that need no model hosting.
//!
//! These stand in for the embedding and sentiment models so the engine can be
//! driven end to end from the command line and from tests. They trade
//! accuracy for predictability: the same text always yields the same scores.

mod keyword;
mod language;
mod lexicon;

pub use keyword::KeywordAttributeScorer;
pub use language::{Language, detect_language};
pub use lexicon::{Lexicon, LexiconSentimentScorer, NeutralSentimentScorer};
