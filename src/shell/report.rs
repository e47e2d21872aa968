use std::io::{self, IsTerminal};
use std::sync::OnceLock;

use crate::core::commands::CommandError;
use crate::error::ShellError;
use crate::highlight::SyntaxHighlighter;

fn highlighter() -> &'static SyntaxHighlighter {
    static HIGHLIGHTER: OnceLock<SyntaxHighlighter> = OnceLock::new();
    HIGHLIGHTER.get_or_init(|| {
        if io::stderr().is_terminal() {
            SyntaxHighlighter::new()
        } else {
            SyntaxHighlighter::plain()
        }
    })
}

pub fn command_error(err: &CommandError) {
    eprintln!("{}", highlighter().highlight_error(&format!("sbsh: {}", err)));
}

pub fn fatal(err: &ShellError) {
    eprintln!("{}", highlighter().highlight_error(&format!("sbsh: {}", err)));
}
