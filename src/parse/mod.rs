mod splitter;
mod tokenizer;

pub use splitter::split;
pub use tokenizer::tokenize;

/// Splits one input line into commands that run together.
pub const PARALLEL_SEPARATOR: char = '&';

/// Sends a command's standard output to the file named after it.
pub const REDIRECT_OPERATOR: char = '>';

/// Words and the redirection operator are stored alike; dispatch tells
/// them apart by position.
pub type Token = String;

/// One invocation candidate. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    tokens: Vec<Token>,
}

impl Command {
    /// Returns `None` for an empty token list.
    pub fn new(tokens: Vec<Token>) -> Option<Self> {
        if tokens.is_empty() {
            None
        } else {
            Some(Self { tokens })
        }
    }

    pub fn name(&self) -> &str {
        &self.tokens[0]
    }

    pub fn args(&self) -> &[Token] {
        &self.tokens[1..]
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

/// The commands of one input line, in the order they were typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    commands: Vec<Command>,
}

impl Batch {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }
}

impl IntoIterator for Batch {
    type Item = Command;
    type IntoIter = std::vec::IntoIter<Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}
