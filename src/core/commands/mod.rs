use std::io;

use thiserror::Error;

mod cd;
mod exit;
mod path;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use path::PathCommand;

use crate::core::state::ShellState;
use crate::parse::Token;
use crate::process::ProcessError;

/// Failures confined to a single command. They are reported and the
/// shell moves on to the next command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    BadBuiltinUsage(&'static str),
    #[error("cd: {dir}: {source}")]
    DirectoryChange {
        dir: String,
        #[source]
        source: io::Error,
    },
    #[error("bad redirection: {0}")]
    Redirection(#[from] RedirectionFault),
    #[error("command not found: {0}")]
    CommandNotFound(String),
    #[error(transparent)]
    Process(#[from] ProcessError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RedirectionFault {
    #[error("more than one '>'")]
    Repeated,
    #[error("missing file after '>'")]
    MissingTarget,
    #[error("more than one file after '>'")]
    TrailingTokens,
    #[error("empty file name after '>'")]
    EmptyTarget,
    #[error("nothing to run before '>'")]
    MissingCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinOutcome {
    Continue,
    Exit,
}

pub trait BuiltinCommand {
    fn execute(&self, args: &[Token], state: &mut ShellState) -> Result<BuiltinOutcome, CommandError>;
}

/// Directives the shell runs itself. Matching is exact and happens
/// before any search path lookup, so a program named `cd` never runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Builtin {
    Exit(ExitCommand),
    Cd(CdCommand),
    Path(PathCommand),
}

impl Builtin {
    pub const NAMES: [&'static str; 3] = ["exit", "cd", "path"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "exit" => Some(Builtin::Exit(ExitCommand)),
            "cd" => Some(Builtin::Cd(CdCommand)),
            "path" => Some(Builtin::Path(PathCommand)),
            _ => None,
        }
    }

    pub fn is_builtin(name: &str) -> bool {
        Self::from_name(name).is_some()
    }
}

impl BuiltinCommand for Builtin {
    fn execute(&self, args: &[Token], state: &mut ShellState) -> Result<BuiltinOutcome, CommandError> {
        match self {
            Builtin::Exit(cmd) => cmd.execute(args, state),
            Builtin::Cd(cmd) => cmd.execute(args, state),
            Builtin::Path(cmd) => cmd.execute(args, state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_builtin_command_detection() {
        assert!(Builtin::is_builtin("cd"));
        assert!(Builtin::is_builtin("path"));
        assert!(Builtin::is_builtin("exit"));
        assert!(!Builtin::is_builtin("Exit"));
        assert!(!Builtin::is_builtin("ls"));
        assert!(!Builtin::is_builtin(""));
    }

    #[test]
    fn test_names_match_lookup() {
        for name in Builtin::NAMES {
            assert!(Builtin::from_name(name).is_some(), "{name} should resolve");
        }
    }

    #[test]
    fn test_execute_cd() -> Result<(), CommandError> {
        let original = env::current_dir().expect("current dir");
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let target = temp_dir.path().canonicalize().expect("canonical tempdir");
        let mut state = ShellState::default();

        let cd = Builtin::from_name("cd").expect("cd builtin");
        let outcome = cd.execute(&[target.to_string_lossy().into_owned()], &mut state)?;
        assert_eq!(outcome, BuiltinOutcome::Continue);
        assert_eq!(env::current_dir().expect("current dir"), target);

        env::set_current_dir(original).expect("restore cwd");
        Ok(())
    }

    #[test]
    fn test_command_error_display() {
        let errors = vec![
            CommandError::BadBuiltinUsage("exit takes no arguments"),
            CommandError::Redirection(RedirectionFault::MissingTarget),
            CommandError::CommandNotFound("nope".to_string()),
            CommandError::DirectoryChange {
                dir: "/x".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "missing"),
            },
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
        assert_eq!(
            CommandError::CommandNotFound("nope".to_string()).to_string(),
            "command not found: nope"
        );
    }
}
