use std::collections::BTreeSet;
use std::fs;

use rustyline::completion::Pair;

use crate::core::commands::Builtin;
use crate::path::is_executable;

/// Builtin names plus every executable reachable through the shell's
/// current search path.
#[derive(Clone, Debug, Default)]
pub struct CommandCompleter {
    commands: BTreeSet<String>,
    indexed_path: Vec<String>,
}

impl CommandCompleter {
    pub fn new() -> Self {
        let mut completer = Self::default();
        completer.add_builtin_commands();
        completer
    }

    /// Rescans only when the search path differs from the last scan.
    pub fn refresh_commands(&mut self, search_path: &[String]) {
        if self.indexed_path == search_path && !self.commands.is_empty() {
            return;
        }

        self.commands.clear();
        self.add_builtin_commands();
        self.add_path_commands(search_path);
        self.indexed_path = search_path.to_vec();
    }

    fn add_builtin_commands(&mut self) {
        self.commands.extend(Builtin::NAMES.iter().map(|name| name.to_string()));
    }

    fn add_path_commands(&mut self, search_path: &[String]) {
        for dir in search_path {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.filter_map(Result::ok) {
                if let Some(name) = entry.file_name().to_str() {
                    if is_executable(&entry.path()) {
                        self.commands.insert(name.to_string());
                    }
                }
            }
        }
    }

    pub fn complete_command(&self, prefix: &str) -> Vec<Pair> {
        self.commands
            .range(prefix.to_string()..)
            .take_while(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect()
    }
}
