use std::env;

use tracing::debug;

use super::{BuiltinCommand, BuiltinOutcome, CommandError};
use crate::core::state::ShellState;
use crate::parse::Token;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CdCommand;

impl BuiltinCommand for CdCommand {
    fn execute(&self, args: &[Token], _state: &mut ShellState) -> Result<BuiltinOutcome, CommandError> {
        let [dir] = args else {
            return Err(CommandError::BadBuiltinUsage("cd takes exactly one directory"));
        };

        env::set_current_dir(dir).map_err(|source| CommandError::DirectoryChange {
            dir: dir.clone(),
            source,
        })?;
        debug!(dir = %dir, "changed working directory");

        Ok(BuiltinOutcome::Continue)
    }
}
