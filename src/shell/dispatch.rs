use tracing::debug;

use crate::core::commands::{Builtin, BuiltinCommand, BuiltinOutcome, CommandError, RedirectionFault};
use crate::core::state::ShellState;
use crate::parse::{Command, Token, REDIRECT_OPERATOR};
use crate::path;
use crate::process::{self, ProcessHandle};

#[derive(Debug)]
pub enum DispatchResult {
    NoProcess,
    Spawned(ProcessHandle),
    RequestExit,
}

/// Runs a builtin in place, or launches an external command and hands
/// back its handle without waiting.
///
/// Builtins are matched before the search path is consulted. External
/// commands may end in `> file`, which sends their stdout to `file`.
pub fn dispatch(cmd: Command, state: &mut ShellState, is_interactive: bool) -> Result<DispatchResult, CommandError> {
    debug!(command = cmd.name(), interactive = is_interactive, "dispatching");

    if let Some(builtin) = Builtin::from_name(cmd.name()) {
        return match builtin.execute(cmd.args(), state)? {
            BuiltinOutcome::Continue => Ok(DispatchResult::NoProcess),
            BuiltinOutcome::Exit => Ok(DispatchResult::RequestExit),
        };
    }

    let (argv, target) = split_redirection(cmd.into_tokens())?;
    let name = &argv[0];
    let program = path::resolve(state.search_path(), name)
        .ok_or_else(|| CommandError::CommandNotFound(name.clone()))?;
    debug!(name = %name, program = %program.display(), "resolved");

    let handle = process::spawn(&program, &argv, target.as_deref())?;
    Ok(DispatchResult::Spawned(handle))
}

/// Separates the argument vector from an optional `> file` suffix.
fn split_redirection(mut tokens: Vec<Token>) -> Result<(Vec<Token>, Option<Token>), RedirectionFault> {
    let operator = REDIRECT_OPERATOR.to_string();
    let mut positions = tokens.iter().enumerate().filter(|(_, t)| **t == operator).map(|(i, _)| i);

    let Some(at) = positions.next() else {
        return Ok((tokens, None));
    };
    if positions.next().is_some() {
        return Err(RedirectionFault::Repeated);
    }

    match tokens.len() - at {
        1 => return Err(RedirectionFault::MissingTarget),
        2 => {}
        _ => return Err(RedirectionFault::TrailingTokens),
    }
    if at == 0 {
        return Err(RedirectionFault::MissingCommand);
    }

    let target = tokens.pop().unwrap_or_default();
    if target.is_empty() {
        return Err(RedirectionFault::EmptyTarget);
    }
    tokens.truncate(at);

    Ok((tokens, Some(target)))
}
