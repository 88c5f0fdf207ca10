//! Starting-verb feature extraction.

use std::sync::Arc;

use crate::constants::text::RETWEET_MARKER;
use crate::text::resources::LinguisticResources;
use crate::text::sentence::sentences;
use crate::text::tokenize::word_tokenize;

/// Derives the "starts with a verb" signal from raw message text.
///
/// Stateless apart from the shared resources; every call recomputes from
/// scratch.
#[derive(Clone, Debug)]
pub struct StartingVerbExtractor {
    resources: Arc<LinguisticResources>,
}

impl StartingVerbExtractor {
    /// Build an extractor over shared linguistic resources.
    pub fn new(resources: Arc<LinguisticResources>) -> Self {
        Self { resources }
    }

    /// True when any sentence opens with a base-form or present-tense
    /// verb, or with the literal retweet marker.
    ///
    /// Sentences are inspected in order on their raw (non-lemmatized)
    /// tokens; only the first token of each sentence is considered. A
    /// sentence with no tokens is skipped, and empty text is `false`.
    pub fn starts_with_verb(&self, text: &str) -> bool {
        for sentence in sentences(text) {
            let tokens = word_tokenize(&sentence);
            let Some(first) = tokens.first() else {
                continue;
            };
            if first == RETWEET_MARKER {
                return true;
            }
            if self.resources.tagger().tag(first).is_leading_verb() {
                return true;
            }
        }
        false
    }
}
