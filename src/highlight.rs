use inksac::prelude::*;

use crate::core::commands::Builtin;
use crate::parse::{PARALLEL_SEPARATOR, REDIRECT_OPERATOR};

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// A highlighter that never emits escape codes.
    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    fn is_plain(&self) -> bool {
        matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colors command names and operators. Every input character is kept,
    /// so cursor positions in the line stay valid.
    pub fn highlight_line(&self, line: &str) -> String {
        if self.is_plain() {
            return line.to_string();
        }

        let mut out = String::with_capacity(line.len() * 2);
        let mut word = String::new();
        let mut expect_command = true;

        for c in line.chars() {
            if c.is_whitespace() || c == REDIRECT_OPERATOR || c == PARALLEL_SEPARATOR {
                self.push_word(&mut out, &mut word, &mut expect_command);
                if c.is_whitespace() {
                    out.push(c);
                } else {
                    let operator_style = Style::builder().foreground(Color::Yellow).bold().build();
                    out.push_str(&c.to_string().style(operator_style).to_string());
                    expect_command = c == PARALLEL_SEPARATOR;
                }
            } else {
                word.push(c);
            }
        }
        self.push_word(&mut out, &mut word, &mut expect_command);

        out
    }

    fn push_word(&self, out: &mut String, word: &mut String, expect_command: &mut bool) {
        if word.is_empty() {
            return;
        }

        if *expect_command {
            let color = if Builtin::is_builtin(word) {
                Color::Green
            } else {
                Color::Cyan
            };
            let command_style = Style::builder().foreground(color).bold().build();
            out.push_str(&word.as_str().style(command_style).to_string());
            *expect_command = false;
        } else {
            out.push_str(word);
        }
        word.clear();
    }

    pub fn highlight_prompt(&self, prompt: &str) -> String {
        if self.is_plain() {
            return prompt.to_string();
        }

        let prompt_style = Style::builder().foreground(Color::Cyan).build();
        prompt.style(prompt_style).to_string()
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if self.is_plain() {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        error.style(error_style).to_string()
    }
}
