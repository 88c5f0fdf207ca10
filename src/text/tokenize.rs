//! Word-level tokenization: punctuation separated, contractions split.

use crate::types::Token;

/// Contraction tails split off from a word, longest first.
const CONTRACTION_SUFFIXES: [&str; 7] = ["n't", "'re", "'ve", "'ll", "'s", "'d", "'m"];

/// Split text into word-level tokens.
///
/// Whitespace separates chunks; leading and trailing punctuation become
/// their own tokens (runs of `.` stay together as an ellipsis); common
/// English contraction tails split into a second token. Punctuation and
/// dots inside a word (`7.2`, `A.1`, `first-aid`) are left alone. Any
/// chunk with at least one character yields at least one token.
pub fn word_tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for chunk in text.split_whitespace() {
        push_chunk_tokens(chunk, &mut tokens);
    }
    tokens
}

fn push_chunk_tokens(chunk: &str, tokens: &mut Vec<Token>) {
    let chars: Vec<char> = chunk.chars().collect();
    let mut start = 0;
    let mut end = chars.len();

    let mut leading: Vec<Token> = Vec::new();
    while start < end && !chars[start].is_alphanumeric() {
        let run_end = symbol_run_end(&chars, start, end);
        leading.push(chars[start..run_end].iter().collect());
        start = run_end;
    }

    let mut trailing: Vec<Token> = Vec::new();
    while end > start && !chars[end - 1].is_alphanumeric() {
        let run_start = symbol_run_start(&chars, start, end);
        trailing.push(chars[run_start..end].iter().collect());
        end = run_start;
    }
    trailing.reverse();

    tokens.extend(leading);
    if start < end {
        let core: String = chars[start..end].iter().collect();
        push_core_tokens(&core, tokens);
    }
    tokens.extend(trailing);
}

/// End of the symbol run starting at `idx`: dots group into an ellipsis,
/// every other symbol stands alone.
fn symbol_run_end(chars: &[char], idx: usize, end: usize) -> usize {
    if chars[idx] == '.' {
        let mut run_end = idx;
        while run_end < end && chars[run_end] == '.' {
            run_end += 1;
        }
        run_end
    } else {
        idx + 1
    }
}

fn symbol_run_start(chars: &[char], start: usize, end: usize) -> usize {
    if chars[end - 1] == '.' {
        let mut run_start = end;
        while run_start > start && chars[run_start - 1] == '.' {
            run_start -= 1;
        }
        run_start
    } else {
        end - 1
    }
}

fn push_core_tokens(core: &str, tokens: &mut Vec<Token>) {
    let total = core.chars().count();
    for suffix in CONTRACTION_SUFFIXES {
        let tail_len = suffix.chars().count();
        if total <= tail_len {
            continue;
        }
        let tail: String = core.chars().skip(total - tail_len).collect();
        if tail.to_lowercase() == suffix {
            let head: String = core.chars().take(total - tail_len).collect();
            tokens.push(head);
            tokens.push(tail);
            return;
        }
    }
    tokens.push(core.to_string());
}
