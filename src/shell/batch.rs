use tracing::{debug, warn};

use super::dispatch::{dispatch, DispatchResult};
use super::report;
use crate::core::commands::CommandError;
use crate::core::state::ShellState;
use crate::parse::Batch;
use crate::process::ProcessHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Continue,
    Exit,
}

/// Runs one line's commands, reporting failures to stderr.
pub fn run_batch(batch: Batch, state: &mut ShellState, is_interactive: bool) -> RunOutcome {
    run_batch_with(batch, state, is_interactive, |err| report::command_error(&err))
}

/// Dispatches every command left to right, then waits for all children
/// it launched. A failed command is handed to `on_error` and skipped.
/// `exit` stops dispatch, but children already launched are still
/// waited for.
pub fn run_batch_with<F>(batch: Batch, state: &mut ShellState, is_interactive: bool, mut on_error: F) -> RunOutcome
where
    F: FnMut(CommandError),
{
    let mut handles = Vec::with_capacity(batch.len());
    let mut outcome = RunOutcome::Continue;

    for cmd in batch {
        match dispatch(cmd, state, is_interactive) {
            Ok(DispatchResult::NoProcess) => {}
            Ok(DispatchResult::Spawned(handle)) => handles.push(handle),
            Ok(DispatchResult::RequestExit) => {
                outcome = RunOutcome::Exit;
                break;
            }
            Err(err) => on_error(err),
        }
    }

    wait_all(handles);
    outcome
}

fn wait_all(handles: Vec<ProcessHandle>) {
    for handle in handles {
        let program = handle.program().to_string();
        match handle.wait() {
            Ok(status) => debug!(program = %program, %status, "child finished"),
            Err(err) => warn!(program = %program, error = %err, "lost track of child"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::RedirectionFault;
    use crate::parse::split;
    use std::fs;
    use std::time::{Duration, Instant};

    fn system_path() -> ShellState {
        ShellState::new(vec!["/bin".to_string(), "/usr/bin".to_string()])
    }

    fn run(line: &str, state: &mut ShellState) -> (RunOutcome, Vec<CommandError>) {
        let mut errors = Vec::new();
        let outcome = run_batch_with(split(line), state, false, |err| errors.push(err));
        (outcome, errors)
    }

    #[test]
    fn test_empty_batch_continues() {
        let mut state = system_path();
        let (outcome, errors) = run("   ", &mut state);
        assert_eq!(outcome, RunOutcome::Continue);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_parallel_commands_overlap() {
        let mut state = system_path();
        let start = Instant::now();
        let (outcome, errors) = run("sleep 1 & sleep 1", &mut state);
        let elapsed = start.elapsed();

        assert_eq!(outcome, RunOutcome::Continue);
        assert!(errors.is_empty());
        assert!(elapsed >= Duration::from_millis(950), "returned before children finished");
        assert!(elapsed < Duration::from_millis(1900), "children ran one after another");
    }

    #[test]
    fn test_errors_do_not_stop_the_batch() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let out = dir.path().join("out.txt");
        let line = format!("exit now & echo ok > {} & nope-not-a-program & echo >", out.display());

        let mut state = system_path();
        let (outcome, errors) = run(&line, &mut state);

        assert_eq!(outcome, RunOutcome::Continue);
        assert_eq!(errors.len(), 3);
        assert!(matches!(errors[0], CommandError::BadBuiltinUsage(_)));
        assert!(matches!(errors[1], CommandError::CommandNotFound(_)));
        assert!(matches!(
            errors[2],
            CommandError::Redirection(RedirectionFault::MissingTarget)
        ));
        assert_eq!(fs::read_to_string(&out)?, "ok\n");
        Ok(())
    }

    #[test]
    fn test_exit_waits_for_earlier_children() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let out = dir.path().join("late.txt");
        let line = format!("sleep 0.3 & exit & echo skipped > {}", out.display());

        let mut state = system_path();
        let start = Instant::now();
        let (outcome, errors) = run(&line, &mut state);

        assert_eq!(outcome, RunOutcome::Exit);
        assert!(errors.is_empty());
        assert!(start.elapsed() >= Duration::from_millis(250));
        assert!(!out.exists(), "commands after exit must not run");
        Ok(())
    }

    #[test]
    fn test_path_change_visible_within_batch() {
        let mut state = system_path();
        let (outcome, errors) = run("path & ls", &mut state);

        assert_eq!(outcome, RunOutcome::Continue);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], CommandError::CommandNotFound(_)));
        assert!(state.search_path().is_empty());
    }
}
