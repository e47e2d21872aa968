use std::io;
use std::process::{Child, ExitStatus};

use thiserror::Error;

pub mod executor;
mod redirect;

pub use executor::spawn;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("{program}: failed to launch: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to wait for process {pid}: {source}")]
    Wait {
        pid: u32,
        #[source]
        source: io::Error,
    },
}

/// A launched child. Owned by whoever must wait for it.
#[derive(Debug)]
pub struct ProcessHandle {
    child: Child,
    program: String,
}

impl ProcessHandle {
    pub(crate) fn new(child: Child, program: String) -> Self {
        Self { child, program }
    }

    pub fn pid(&self) -> u32 {
        self.child.id()
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Blocks until the child terminates.
    pub fn wait(mut self) -> Result<ExitStatus, ProcessError> {
        let pid = self.pid();
        self.child
            .wait()
            .map_err(|source| ProcessError::Wait { pid, source })
    }
}
