//! Text normalization: URL masking, tokenization, lemmatization,
//! stopword removal.

use std::sync::Arc;

use crate::constants::text::URL_SENTINEL;
use crate::text::resources::LinguisticResources;
use crate::text::tokenize::word_tokenize;
use crate::types::Token;

/// Normalizes free text into a canonical token sequence.
///
/// Deterministic for a fixed resource set: the same input always yields
/// the same tokens, and nothing is cached between calls.
#[derive(Clone, Debug)]
pub struct TokenNormalizer {
    resources: Arc<LinguisticResources>,
}

impl TokenNormalizer {
    /// Build a normalizer over shared linguistic resources.
    pub fn new(resources: Arc<LinguisticResources>) -> Self {
        Self { resources }
    }

    /// Replace every detected URL with the `urlplaceholder` sentinel.
    ///
    /// Detection collects the literal matched substrings first and then
    /// replaces each one everywhere it occurs, so a URL repeated verbatim
    /// is masked at every occurrence.
    pub fn mask_urls(&self, text: &str) -> String {
        let detected: Vec<String> = self
            .resources
            .url_pattern()
            .find_iter(text)
            .map(|found| found.as_str().to_string())
            .collect();
        let mut masked = text.to_string();
        for url in &detected {
            masked = masked.replace(url.as_str(), URL_SENTINEL);
        }
        masked
    }

    /// Normalize text into tokens: mask URLs, tokenize, reduce each token
    /// to its dictionary form, lowercase and trim it, then drop stopwords.
    pub fn normalize(&self, text: &str) -> Vec<Token> {
        let masked = self.mask_urls(text);
        word_tokenize(&masked)
            .into_iter()
            .map(|token| {
                let lemma = self.resources.lemmatizer().noun_lemma(&token);
                lemma.to_lowercase().trim().to_string()
            })
            .filter(|token| !self.resources.is_stopword(token))
            .collect()
    }

    /// Normalized tokens joined into one space-separated string, the form
    /// downstream vectorizers consume.
    pub fn normalize_joined(&self, text: &str) -> String {
        self.normalize(text).join(" ")
    }
}
