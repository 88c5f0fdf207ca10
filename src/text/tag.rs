//! Lexicon-driven part-of-speech tagging.

use std::collections::HashSet;
use std::fmt;

use crate::errors::PrepError;

/// Penn Treebank tag subset emitted by [`PosTagger`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PennTag {
    /// Coordinating conjunction (`and`, `but`).
    Cc,
    /// Cardinal number (`7.2`, `300`).
    Cd,
    /// Determiner (`the`, `every`).
    Dt,
    /// Existential there.
    Ex,
    /// Preposition or subordinating conjunction (`in`, `because`).
    In,
    /// Adjective (`massive`, `helpful`).
    Jj,
    /// Modal (`can`, `should`).
    Md,
    /// Singular or mass noun.
    Nn,
    /// Plural noun.
    Nns,
    /// Proper noun.
    Nnp,
    /// Personal or possessive pronoun (`we`, `their`).
    Prp,
    /// Adverb (`quickly`).
    Rb,
    /// Infinitival to.
    To,
    /// Interjection (`hey`, `yes`).
    Uh,
    /// Verb, base form (`send`, `help`).
    Vb,
    /// Verb, past tense (`sent`, `was`).
    Vbd,
    /// Verb, gerund or present participle (`sending`).
    Vbg,
    /// Verb, past participle (`been`).
    Vbn,
    /// Verb, non-3rd-person singular present (`are`, `do`).
    Vbp,
    /// Verb, 3rd-person singular present (`is`, `needs`).
    Vbz,
    /// Wh-pronoun (`who`, `which`).
    Wp,
    /// Wh-adverb (`where`, `how`).
    Wrb,
    /// Punctuation or other symbol.
    Sym,
}

impl PennTag {
    /// True for the tags that open an imperative or present-tense clause.
    pub fn is_leading_verb(self) -> bool {
        matches!(self, PennTag::Vb | PennTag::Vbp)
    }
}

impl fmt::Display for PennTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            PennTag::Cc => "CC",
            PennTag::Cd => "CD",
            PennTag::Dt => "DT",
            PennTag::Ex => "EX",
            PennTag::In => "IN",
            PennTag::Jj => "JJ",
            PennTag::Md => "MD",
            PennTag::Nn => "NN",
            PennTag::Nns => "NNS",
            PennTag::Nnp => "NNP",
            PennTag::Prp => "PRP",
            PennTag::Rb => "RB",
            PennTag::To => "TO",
            PennTag::Uh => "UH",
            PennTag::Vb => "VB",
            PennTag::Vbd => "VBD",
            PennTag::Vbg => "VBG",
            PennTag::Vbn => "VBN",
            PennTag::Vbp => "VBP",
            PennTag::Vbz => "VBZ",
            PennTag::Wp => "WP",
            PennTag::Wrb => "WRB",
            PennTag::Sym => "SYM",
        };
        f.write_str(code)
    }
}

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves", "my",
    "your", "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs", "someone",
    "anyone", "everyone", "somebody", "anybody", "everybody", "nobody", "something", "anything",
    "everything", "nothing",
];

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "each", "every", "either", "neither",
    "some", "any", "no", "all", "both", "another", "such",
];

const MODALS: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would",
];

const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "from", "up", "down", "of", "off", "over",
    "under", "near", "across", "along", "around", "behind", "beyond", "inside", "outside",
    "toward", "towards", "until", "upon", "within", "without", "since", "despite", "because",
    "if", "while", "although", "though", "unless", "whether", "as",
];

const CONJUNCTIONS: &[&str] = &["and", "but", "or", "nor", "so", "yet", "plus"];

const WH_PRONOUNS: &[&str] = &["what", "which", "who", "whom", "whose"];

const WH_ADVERBS: &[&str] = &["when", "where", "why", "how"];

const INTERJECTIONS: &[&str] = &["oh", "hey", "hi", "hello", "wow", "ouch", "alas", "yes", "okay"];

/// Context-free tagger: closed-class lexicons, a base-verb lexicon with
/// inflection stripping, then suffix and capitalization heuristics.
///
/// Lexicon lookup runs on the lowercased token before any capitalization
/// heuristic, so a sentence-initial `Please` tags as a verb rather than a
/// proper noun.
#[derive(Clone, Debug)]
pub struct PosTagger {
    verbs: HashSet<String>,
    pronouns: HashSet<&'static str>,
    determiners: HashSet<&'static str>,
    modals: HashSet<&'static str>,
    prepositions: HashSet<&'static str>,
    conjunctions: HashSet<&'static str>,
    wh_pronouns: HashSet<&'static str>,
    wh_adverbs: HashSet<&'static str>,
    interjections: HashSet<&'static str>,
}

impl PosTagger {
    /// Build a tagger from a base-verb lexicon, one lowercase word per line.
    pub fn from_verb_lines(lines: &str) -> Result<Self, PrepError> {
        let verbs: HashSet<String> = lines
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        if verbs.is_empty() {
            return Err(PrepError::Resource("verb lexicon is empty".to_string()));
        }
        Ok(Self {
            verbs,
            pronouns: PRONOUNS.iter().copied().collect(),
            determiners: DETERMINERS.iter().copied().collect(),
            modals: MODALS.iter().copied().collect(),
            prepositions: PREPOSITIONS.iter().copied().collect(),
            conjunctions: CONJUNCTIONS.iter().copied().collect(),
            wh_pronouns: WH_PRONOUNS.iter().copied().collect(),
            wh_adverbs: WH_ADVERBS.iter().copied().collect(),
            interjections: INTERJECTIONS.iter().copied().collect(),
        })
    }

    /// Assign one tag per token.
    pub fn tag_tokens(&self, tokens: &[String]) -> Vec<PennTag> {
        tokens.iter().map(|token| self.tag(token)).collect()
    }

    /// Tag a single token.
    pub fn tag(&self, token: &str) -> PennTag {
        if !token.chars().any(char::is_alphanumeric) {
            return PennTag::Sym;
        }
        if is_numeric_token(token) {
            return PennTag::Cd;
        }

        let lower = token.to_lowercase();
        if let Some(tag) = self.closed_class(&lower) {
            return tag;
        }
        if let Some(tag) = self.verb_form(&lower) {
            return tag;
        }
        if let Some(tag) = suffix_heuristic(&lower) {
            return tag;
        }
        if token.chars().next().is_some_and(char::is_uppercase) {
            return PennTag::Nnp;
        }
        if lower.ends_with('s') && !lower.ends_with("ss") {
            return PennTag::Nns;
        }
        PennTag::Nn
    }

    fn closed_class(&self, lower: &str) -> Option<PennTag> {
        match lower {
            "to" => return Some(PennTag::To),
            "there" => return Some(PennTag::Ex),
            "not" | "n't" => return Some(PennTag::Rb),
            "am" | "are" | "do" | "have" => return Some(PennTag::Vbp),
            "is" | "has" | "does" => return Some(PennTag::Vbz),
            "was" | "were" | "did" | "had" => return Some(PennTag::Vbd),
            "be" => return Some(PennTag::Vb),
            "been" => return Some(PennTag::Vbn),
            "being" => return Some(PennTag::Vbg),
            _ => {}
        }
        if self.pronouns.contains(lower) {
            Some(PennTag::Prp)
        } else if self.determiners.contains(lower) {
            Some(PennTag::Dt)
        } else if self.modals.contains(lower) {
            Some(PennTag::Md)
        } else if self.conjunctions.contains(lower) {
            Some(PennTag::Cc)
        } else if self.prepositions.contains(lower) {
            Some(PennTag::In)
        } else if self.wh_pronouns.contains(lower) {
            Some(PennTag::Wp)
        } else if self.wh_adverbs.contains(lower) {
            Some(PennTag::Wrb)
        } else if self.interjections.contains(lower) {
            Some(PennTag::Uh)
        } else {
            None
        }
    }

    fn verb_form(&self, lower: &str) -> Option<PennTag> {
        if self.verbs.contains(lower) {
            return Some(PennTag::Vb);
        }
        if let Some(stem) = lower.strip_suffix("ing") {
            if self.verbs.contains(stem) || self.verbs.contains(&format!("{stem}e")) {
                return Some(PennTag::Vbg);
            }
        }
        if let Some(stem) = lower.strip_suffix("ed") {
            if self.verbs.contains(stem) || self.verbs.contains(&format!("{stem}e")) {
                return Some(PennTag::Vbd);
            }
        }
        if let Some(stem) = lower.strip_suffix("ies") {
            if self.verbs.contains(&format!("{stem}y")) {
                return Some(PennTag::Vbz);
            }
        }
        if let Some(stem) = lower.strip_suffix("es") {
            if self.verbs.contains(stem) {
                return Some(PennTag::Vbz);
            }
        }
        if let Some(stem) = lower.strip_suffix('s') {
            if self.verbs.contains(stem) {
                return Some(PennTag::Vbz);
            }
        }
        None
    }
}

fn is_numeric_token(token: &str) -> bool {
    let mut saw_digit = false;
    for ch in token.chars() {
        if ch.is_ascii_digit() {
            saw_digit = true;
        } else if !matches!(ch, '.' | ',' | '-' | '+' | '%') {
            return false;
        }
    }
    saw_digit
}

fn suffix_heuristic(lower: &str) -> Option<PennTag> {
    if lower.len() > 4 && lower.ends_with("ly") {
        return Some(PennTag::Rb);
    }
    if lower.len() > 5 && lower.ends_with("ing") {
        return Some(PennTag::Vbg);
    }
    if lower.len() > 4 && lower.ends_with("ed") {
        return Some(PennTag::Vbd);
    }
    if lower.len() > 4
        && ["ous", "ful", "ive", "able", "ible", "ical"]
            .iter()
            .any(|suffix| lower.ends_with(suffix))
    {
        return Some(PennTag::Jj);
    }
    None
}
