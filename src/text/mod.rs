//! Text pipeline: normalization and starting-verb feature extraction.

/// Noun lemmatization.
pub mod lemma;
/// Token normalization (URL masking, lemmatization, stopword removal).
pub mod normalize;
/// Shared immutable linguistic resources.
pub mod resources;
/// Heuristic sentence splitting.
pub mod sentence;
/// Part-of-speech tagging.
pub mod tag;
/// Word-level tokenization.
pub mod tokenize;
/// Starting-verb extraction.
pub mod verb;

pub use lemma::Lemmatizer;
pub use normalize::TokenNormalizer;
pub use resources::LinguisticResources;
pub use tag::{PennTag, PosTagger};
pub use verb::StartingVerbExtractor;
