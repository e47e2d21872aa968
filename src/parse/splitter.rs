use super::{tokenize, Batch, Command, PARALLEL_SEPARATOR};

/// Splits an input line on `&` into the commands of one batch.
///
/// Segments that are blank after trimming are dropped, so a trailing
/// separator or `a && b` contributes no empty command.
pub fn split(line: &str) -> Batch {
    let commands = line
        .split(PARALLEL_SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| Command::new(tokenize(segment)))
        .collect();

    Batch::new(commands)
}
