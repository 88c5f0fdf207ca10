//! Dictionary-form reduction for nouns.

use std::collections::HashMap;

use crate::errors::PrepError;

/// Noun lemmatizer: suffix detachment rules plus an irregular-plural
/// exception table.
///
/// Matches the default behavior of a dictionary lemmatizer asked for the
/// noun form: verbs and adjectives are left alone unless their surface
/// form looks like a plural noun. Lookup is case-insensitive and the
/// returned lemma is lowercase.
#[derive(Clone, Debug)]
pub struct Lemmatizer {
    exceptions: HashMap<String, String>,
}

impl Lemmatizer {
    /// Build a lemmatizer from `plural<TAB>singular` lines.
    ///
    /// Identity entries (`news<TAB>news`) pin lexicalized plurals that the
    /// detachment rules would otherwise mangle.
    pub fn from_exception_lines(lines: &str) -> Result<Self, PrepError> {
        let mut exceptions = HashMap::new();
        for (number, line) in lines.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (plural, singular) = line.split_once('\t').ok_or_else(|| {
                PrepError::Resource(format!(
                    "noun exception line {} is not tab-separated: '{line}'",
                    number + 1
                ))
            })?;
            exceptions.insert(plural.to_lowercase(), singular.to_lowercase());
        }
        if exceptions.is_empty() {
            return Err(PrepError::Resource(
                "noun exception list is empty".to_string(),
            ));
        }
        Ok(Self { exceptions })
    }

    /// Reduce one token to its noun dictionary form, lowercased.
    pub fn noun_lemma(&self, token: &str) -> String {
        let word = token.to_lowercase();
        if !word.chars().all(|ch| ch.is_alphabetic() || ch == '\'') {
            return word;
        }
        if let Some(singular) = self.exceptions.get(&word) {
            return singular.clone();
        }
        if word.len() > 4 {
            if let Some(stem) = word.strip_suffix("men") {
                return format!("{stem}man");
            }
        }
        if !word.ends_with('s') || word.len() <= 3 {
            return word;
        }
        if word.ends_with("ss") || word.ends_with("'s") || word.ends_with("us")
            || word.ends_with("is")
        {
            return word;
        }
        detach_plural_suffix(&word)
    }
}

/// Ordered detachment rules for regular plural forms. The caller has
/// already filtered non-plural shapes.
fn detach_plural_suffix(word: &str) -> String {
    if word.len() > 4 {
        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{stem}y");
        }
    }
    for suffix in ["sses", "ches", "shes", "xes", "zzes"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            let kept = &suffix[..suffix.len() - 2];
            return format!("{stem}{kept}");
        }
    }
    if let Some(stem) = word.strip_suffix("uses") {
        // `viruses`/`buses` detach `-es`; `houses`/`causes` only `-s`.
        if stem
            .chars()
            .last()
            .is_some_and(|ch| !matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u'))
        {
            return format!("{stem}us");
        }
    }
    if word.len() >= 6 {
        if let Some(stem) = word.strip_suffix("oes") {
            return format!("{stem}o");
        }
    }
    word[..word.len() - 1].to_string()
}
