use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::config::ConfigError;

/// Failures that end the shell with status 1.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("cannot open script {}: {source}", .path.display())]
    ScriptOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("usage: sbsh [OPTIONS] [SCRIPT] (at most one script may be given)")]
    Usage,
    #[error("flag error: {0}")]
    Flag(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Ctrl-C handler error: {0}")]
    CtrlC(#[from] ctrlc::Error),
}
