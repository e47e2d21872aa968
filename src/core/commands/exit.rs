use super::{BuiltinCommand, BuiltinOutcome, CommandError};
use crate::core::state::ShellState;
use crate::parse::Token;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl BuiltinCommand for ExitCommand {
    fn execute(&self, args: &[Token], _state: &mut ShellState) -> Result<BuiltinOutcome, CommandError> {
        if !args.is_empty() {
            return Err(CommandError::BadBuiltinUsage("exit takes no arguments"));
        }
        Ok(BuiltinOutcome::Exit)
    }
}
