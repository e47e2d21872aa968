mod completer;
mod source;

pub use completer::ShellHelper;
pub use source::LineSource;
