use tracing::debug;

use super::{BuiltinCommand, BuiltinOutcome, CommandError};
use crate::core::state::ShellState;
use crate::parse::Token;

/// Replaces the search path with its arguments. No arguments empties it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PathCommand;

impl BuiltinCommand for PathCommand {
    fn execute(&self, args: &[Token], state: &mut ShellState) -> Result<BuiltinOutcome, CommandError> {
        state.replace_search_path(args.to_vec());
        debug!(search_path = ?state.search_path(), "search path replaced");
        Ok(BuiltinOutcome::Continue)
    }
}
