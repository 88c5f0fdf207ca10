//! Process-wide linguistic resources shared by the pipeline components.

use std::collections::HashSet;

use regex::Regex;

use crate::constants::text::URL_PATTERN;
use crate::constants::wordlists::{NOUN_EXCEPTIONS_EN, STOPWORDS_EN, VERBS_EN};
use crate::errors::PrepError;
use crate::text::lemma::Lemmatizer;
use crate::text::tag::PosTagger;

/// Immutable linguistic context injected into the pipeline constructors.
///
/// Constructed once per process, then shared (behind an `Arc`) across
/// every normalizer and extractor; nothing here mutates after
/// construction, so concurrent use needs no locking. Construction
/// failure is fatal and must be surfaced before any pipeline call.
#[derive(Clone, Debug)]
pub struct LinguisticResources {
    url_pattern: Regex,
    stopwords: HashSet<String>,
    lemmatizer: Lemmatizer,
    tagger: PosTagger,
}

impl LinguisticResources {
    /// Build the default English resources from the embedded word lists.
    pub fn builtin() -> Result<Self, PrepError> {
        let url_pattern = Regex::new(URL_PATTERN)
            .map_err(|err| PrepError::Resource(format!("url pattern: {err}")))?;
        let stopwords = parse_stopwords(STOPWORDS_EN)?;
        let lemmatizer = Lemmatizer::from_exception_lines(NOUN_EXCEPTIONS_EN)?;
        let tagger = PosTagger::from_verb_lines(VERBS_EN)?;
        Ok(Self::assemble(url_pattern, stopwords, lemmatizer, tagger))
    }

    /// Assemble resources from explicit parts (fixed lists in tests).
    pub fn assemble(
        url_pattern: Regex,
        stopwords: HashSet<String>,
        lemmatizer: Lemmatizer,
        tagger: PosTagger,
    ) -> Self {
        Self {
            url_pattern,
            stopwords,
            lemmatizer,
            tagger,
        }
    }

    /// Compiled URL pattern used for masking.
    pub fn url_pattern(&self) -> &Regex {
        &self.url_pattern
    }

    /// Case-insensitive stopword membership for already-lowercased tokens.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Noun lemmatizer.
    pub fn lemmatizer(&self) -> &Lemmatizer {
        &self.lemmatizer
    }

    /// Part-of-speech tagger.
    pub fn tagger(&self) -> &PosTagger {
        &self.tagger
    }
}

fn parse_stopwords(lines: &str) -> Result<HashSet<String>, PrepError> {
    let stopwords: HashSet<String> = lines
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect();
    if stopwords.is_empty() {
        return Err(PrepError::Resource("stopword list is empty".to_string()));
    }
    Ok(stopwords)
}
