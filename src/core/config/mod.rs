use std::io;
use std::path::PathBuf;

use thiserror::Error;

mod loader;

pub use loader::ConfigLoader;

use crate::flags::Flags;

const RC_FILE: &str = ".sbshrc";
const HISTORY_FILE: &str = ".sbsh_history";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where startup commands come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RcFile {
    /// `~/.sbshrc`; skipped when absent, only read interactively.
    Default(PathBuf),
    /// Named with `--config`; must exist, read in every mode.
    Explicit(PathBuf),
    None,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub search_path: Vec<String>,
    pub rc_file: RcFile,
    pub history_path: Option<PathBuf>,
    pub history_size: usize,
    pub prompt: String,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_path: vec!["/bin".to_string()],
            rc_file: RcFile::None,
            history_path: None,
            history_size: 1000,
            prompt: "sbsh::$ ".to_string(),
            debug: false,
        }
    }
}

impl Config {
    pub fn from_flags(flags: &Flags) -> Self {
        let home = dirs::home_dir();
        let rc_file = match (flags.get_value("config"), &home) {
            (Some(path), _) => RcFile::Explicit(PathBuf::from(path)),
            (None, Some(home)) => RcFile::Default(home.join(RC_FILE)),
            (None, None) => RcFile::None,
        };

        Self {
            rc_file,
            history_path: home.map(|home| home.join(HISTORY_FILE)),
            debug: flags.is_set("debug"),
            ..Self::default()
        }
    }

    /// Lines to run before reading input.
    pub fn startup_lines(&self, interactive: bool) -> Result<Vec<String>, ConfigError> {
        let loader = ConfigLoader::new(&self.rc_file);
        loader.load(interactive)
    }
}
