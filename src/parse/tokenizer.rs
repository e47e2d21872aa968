use super::{Token, REDIRECT_OPERATOR};

/// Splits one command's text into words and `>` operators.
///
/// Whitespace separates words; `>` is always a token of its own, so
/// `out>file` yields `out`, `>`, `file`. Nothing is quoted or escaped.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    for c in text.chars() {
        if c.is_whitespace() {
            flush_word(&mut word, &mut tokens);
        } else if c == REDIRECT_OPERATOR {
            flush_word(&mut word, &mut tokens);
            tokens.push(REDIRECT_OPERATOR.to_string());
        } else {
            word.push(c);
        }
    }
    flush_word(&mut word, &mut tokens);

    tokens
}

fn flush_word(word: &mut String, tokens: &mut Vec<Token>) {
    if !word.is_empty() {
        tokens.push(std::mem::take(word));
    }
}
