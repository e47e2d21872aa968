/// Shell-wide state that outlives a single input line.
///
/// The working directory is not stored here; it belongs to the process
/// and `cd` changes it directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellState {
    search_path: Vec<String>,
}

impl ShellState {
    pub fn new(search_path: Vec<String>) -> Self {
        Self { search_path }
    }

    /// Directories searched, in order, for external commands.
    pub fn search_path(&self) -> &[String] {
        &self.search_path
    }

    pub fn replace_search_path(&mut self, search_path: Vec<String>) {
        self.search_path = search_path;
    }
}
