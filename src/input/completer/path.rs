use std::fs;
use std::path::Path;

use rustyline::completion::Pair;

/// Completes file and directory names relative to the working directory.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathCompleter;

impl PathCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (dir_part, file_prefix) = match incomplete.rfind('/') {
            Some(slash) => incomplete.split_at(slash + 1),
            None => ("", incomplete),
        };
        let dir_to_search = if dir_part.is_empty() { Path::new(".") } else { Path::new(dir_part) };

        let Ok(entries) = fs::read_dir(dir_to_search) else {
            return Vec::new();
        };

        let mut matches: Vec<Pair> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                if !name.starts_with(file_prefix) || (name.starts_with('.') && !file_prefix.starts_with('.')) {
                    return None;
                }
                let full = format!("{}{}", dir_part, name);
                Some(if entry.path().is_dir() {
                    Pair {
                        display: format!("{}/", name),
                        replacement: format!("{}/", full),
                    }
                } else {
                    Pair {
                        display: name,
                        replacement: format!("{} ", full),
                    }
                })
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}
