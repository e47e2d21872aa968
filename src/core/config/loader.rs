use std::fs;
use std::path::Path;

use tracing::debug;

use super::{ConfigError, RcFile};

pub struct ConfigLoader<'a> {
    rc_file: &'a RcFile,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(rc_file: &'a RcFile) -> Self {
        Self { rc_file }
    }

    pub fn load(&self, interactive: bool) -> Result<Vec<String>, ConfigError> {
        match self.rc_file {
            RcFile::Explicit(path) => self.read_lines(path),
            RcFile::Default(path) if interactive && path.exists() => self.read_lines(path),
            _ => Ok(Vec::new()),
        }
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let lines: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect();
        debug!(path = %path.display(), lines = lines.len(), "loaded startup file");

        Ok(lines)
    }
}
