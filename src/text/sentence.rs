//! Sentence splitting shared by the verb extractor.

use crate::types::Sentence;

/// Collapse runs of whitespace into single spaces and trim.
pub fn normalize_inline_whitespace<T: AsRef<str>>(text: T) -> String {
    let mut normalized = String::new();
    let mut seen_space = false;
    for ch in text.as_ref().chars() {
        if ch.is_whitespace() {
            if !seen_space {
                normalized.push(' ');
                seen_space = true;
            }
        } else {
            normalized.push(ch);
            seen_space = false;
        }
    }
    normalized.trim().to_string()
}

/// Split a block of text into sentences, falling back to the whole string when needed.
/// Heuristic splitter: `.`/`!`/`?` boundaries with guards for decimals,
/// acronyms, and ellipses; blank lines always separate sentences.
pub fn sentences(text: &str) -> Vec<Sentence> {
    let mut results = Vec::new();

    for block in text.split("\n\n") {
        if block.trim().is_empty() {
            continue;
        }
        let normalized = normalize_inline_whitespace(block);
        if normalized.is_empty() {
            continue;
        }
        push_block_sentences(&normalized, &mut results);
    }

    results
}

fn push_block_sentences(block: &str, results: &mut Vec<Sentence>) {
    let chars: Vec<char> = block.chars().collect();
    let mut buffer = String::new();

    for (idx, ch) in chars.iter().enumerate() {
        buffer.push(*ch);
        if is_sentence_boundary(&chars, idx) {
            let trimmed = buffer.trim();
            if !trimmed.is_empty() {
                results.push(trimmed.to_string());
            }
            buffer.clear();
        }
    }

    let trailing = buffer.trim();
    if !trailing.is_empty() {
        results.push(trailing.to_string());
    }
}

fn is_sentence_boundary(chars: &[char], idx: usize) -> bool {
    match chars[idx] {
        '.' => is_dot_boundary(chars, idx),
        '!' | '?' => true,
        _ => false,
    }
}

fn is_dot_boundary(chars: &[char], idx: usize) -> bool {
    if is_decimal_middle(chars, idx) || is_acronym_middle(chars, idx) {
        return false;
    }
    if idx + 1 < chars.len() && chars[idx + 1] == '.' {
        return false;
    }
    true
}

fn is_decimal_middle(chars: &[char], idx: usize) -> bool {
    idx > 0
        && idx + 1 < chars.len()
        && chars[idx - 1].is_ascii_digit()
        && chars[idx + 1].is_ascii_digit()
}

fn is_acronym_middle(chars: &[char], idx: usize) -> bool {
    idx > 0
        && idx + 1 < chars.len()
        && is_acronym_char(chars[idx - 1])
        && is_acronym_char(chars[idx + 1])
}

fn is_acronym_char(ch: char) -> bool {
    ch.is_ascii_uppercase() || ch.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_inline_whitespace_collapses_runs() {
        let input = "Water\n\n  needed\there";
        assert_eq!(normalize_inline_whitespace(input), "Water needed here");
    }

    #[test]
    fn sentences_falls_back_to_full_text_when_needed() {
        let text = "   \n";
        let result = sentences(text);
        assert!(result.is_empty());

        let text2 = "Single block without punctuation";
        let result2 = sentences(text2);
        assert_eq!(
            result2,
            vec![String::from("Single block without punctuation")]
        );
    }

    #[test]
    fn sentences_split_on_terminal_punctuation() {
        let text = "Send water now. The bridge is out!";
        let result = sentences(text);
        assert_eq!(result, vec!["Send water now.", "The bridge is out!"]);
    }

    #[test]
    fn sentences_keep_decimal_values_together() {
        let text = "The quake measured 7.2 offshore. Aftershocks continue.";
        let result = sentences(text);
        assert_eq!(
            result,
            vec!["The quake measured 7.2 offshore.", "Aftershocks continue."]
        );
    }

    #[test]
    fn sentences_keep_acronyms_together() {
        let text = "Routes A.1 and B.2 are open. Use them.";
        let result = sentences(text);
        assert_eq!(result, vec!["Routes A.1 and B.2 are open.", "Use them."]);
    }

    #[test]
    fn sentences_treat_blank_line_as_boundary() {
        let text = "First report without punctuation\n\nSecond report with details.";
        let result = sentences(text);
        assert_eq!(
            result,
            vec![
                "First report without punctuation".to_string(),
                "Second report with details.".to_string()
            ]
        );
    }
}
