use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use super::redirect::StdoutRedirect;
use super::{ProcessError, ProcessHandle};
use crate::parse::Token;

/// Starts `program` with `argv` (argv[0] included) and returns without
/// waiting. With `stdout_target`, the child's standard output goes to
/// that file instead of the shell's.
pub fn spawn(program: &Path, argv: &[Token], stdout_target: Option<&str>) -> Result<ProcessHandle, ProcessError> {
    let name = argv
        .first()
        .cloned()
        .unwrap_or_else(|| program.to_string_lossy().into_owned());
    let launch_error = |source: std::io::Error| ProcessError::Spawn {
        program: name.clone(),
        source,
    };

    let mut command = Command::new(program);
    command
        .arg0(&name)
        .args(argv.iter().skip(1))
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    if let Some(target) = stdout_target {
        StdoutRedirect::new(target).map_err(launch_error)?.install(&mut command);
    }

    let child = command.spawn().map_err(launch_error)?;
    debug!(pid = child.id(), program = %program.display(), redirect = ?stdout_target, "spawned");

    Ok(ProcessHandle::new(child, name))
}
