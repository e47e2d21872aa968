mod batch;
mod dispatch;
pub mod report;

pub use batch::{run_batch, run_batch_with, RunOutcome};
pub use dispatch::{dispatch, DispatchResult};

use tracing::{debug, trace};

use crate::{
    core::{config::Config, state::ShellState},
    error::ShellError,
    input::LineSource,
    parse::split,
};

pub struct Shell {
    state: ShellState,
    source: LineSource,
    config: Config,
}

impl Shell {
    pub fn new(config: Config, source: LineSource) -> Result<Self, ShellError> {
        if source.is_interactive() {
            // Children get the signal with default handling; the shell keeps waiting.
            ctrlc::set_handler(|| trace!("interrupt while children run"))?;
        }

        Ok(Shell {
            state: ShellState::new(config.search_path.clone()),
            source,
            config,
        })
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Runs startup commands, then reads and runs lines until end of
    /// input or `exit`.
    pub fn run(&mut self) -> Result<(), ShellError> {
        let result = self.run_lines();
        self.source.close();
        result
    }

    fn run_lines(&mut self) -> Result<(), ShellError> {
        let interactive = self.source.is_interactive();
        for line in self.config.startup_lines(interactive)? {
            if self.execute_line(&line) == RunOutcome::Exit {
                return Ok(());
            }
        }

        loop {
            self.source.refresh(self.state.search_path());
            let Some(line) = self.source.read_line()? else {
                debug!("end of input");
                return Ok(());
            };

            if self.execute_line(&line) == RunOutcome::Exit {
                debug!("exit requested");
                return Ok(());
            }
        }
    }

    /// Splits one line and runs it as a batch.
    pub fn execute_line(&mut self, line: &str) -> RunOutcome {
        let batch = split(line);
        if batch.is_empty() {
            return RunOutcome::Continue;
        }
        debug!(line, commands = batch.len(), "running batch");

        run_batch(batch, &mut self.state, self.source.is_interactive())
    }
}
