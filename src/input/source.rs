use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use rustyline::{error::ReadlineError, history::FileHistory, Editor};
use tracing::{debug, warn};

use super::ShellHelper;
use crate::core::config::Config;
use crate::error::ShellError;

/// Where input lines come from.
pub enum LineSource {
    /// A terminal session with a prompt, editing and history.
    Interactive {
        editor: Box<Editor<ShellHelper, FileHistory>>,
        prompt: String,
        history_path: Option<PathBuf>,
    },
    /// A script or any other stream, read without prompting.
    Script { reader: Box<dyn BufRead> },
}

impl LineSource {
    pub fn interactive(config: &Config) -> Result<Self, ShellError> {
        let editor_config = rustyline::Config::builder()
            .max_history_size(config.history_size)?
            .auto_add_history(true)
            .build();
        let mut editor = Editor::<ShellHelper, FileHistory>::with_config(editor_config)?;
        editor.set_helper(Some(ShellHelper::new()));

        if let Some(path) = config.history_path.as_deref().filter(|path| path.exists()) {
            if let Err(e) = editor.load_history(path) {
                warn!(path = %path.display(), error = %e, "could not load history");
            }
        }

        Ok(LineSource::Interactive {
            editor: Box::new(editor),
            prompt: config.prompt.clone(),
            history_path: config.history_path.clone(),
        })
    }

    pub fn script(path: &Path) -> Result<Self, ShellError> {
        let file = File::open(path).map_err(|source| ShellError::ScriptOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(BufReader::new(file)))
    }

    pub fn from_reader(reader: impl BufRead + 'static) -> Self {
        LineSource::Script {
            reader: Box::new(reader),
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, LineSource::Interactive { .. })
    }

    /// Points command completion at the current search path.
    pub fn refresh(&mut self, search_path: &[String]) {
        if let LineSource::Interactive { editor, .. } = self {
            if let Some(helper) = editor.helper_mut() {
                helper.refresh_commands(search_path);
            }
        }
    }

    /// The next line without its line ending, or `None` at end of input.
    /// Ctrl-C at the prompt drops the partial line and prompts again.
    pub fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        match self {
            LineSource::Interactive { editor, prompt, .. } => loop {
                match editor.readline(prompt) {
                    Ok(line) => return Ok(Some(line)),
                    Err(ReadlineError::Interrupted) => continue,
                    Err(ReadlineError::Eof) => return Ok(None),
                    Err(e) => return Err(e.into()),
                }
            },
            LineSource::Script { reader } => {
                let mut line = String::new();
                if reader.read_line(&mut line)? == 0 {
                    return Ok(None);
                }
                let trimmed = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed);
                Ok(Some(line))
            }
        }
    }

    /// Persists interactive history. Failures are logged, never fatal.
    pub fn close(&mut self) {
        if let LineSource::Interactive {
            editor,
            history_path: Some(path),
            ..
        } = self
        {
            match editor.save_history(path.as_path()) {
                Ok(()) => debug!(path = %path.display(), "history saved"),
                Err(e) => warn!(path = %path.display(), error = %e, "could not save history"),
            }
        }
    }
}
