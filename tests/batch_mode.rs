use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use std::time::{Duration, Instant};

const SEARCH_PATH: &str = "path /bin /usr/bin";

fn sbsh() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sbsh"));
    cmd.env_remove("SBSH_LOG").stdin(Stdio::null());
    cmd
}

fn run_script(dir: &Path, lines: &[&str]) -> Output {
    let script = dir.join("script.sbsh");
    fs::write(&script, lines.join("\n") + "\n").expect("write script");
    sbsh()
        .arg(&script)
        .env("HOME", dir)
        .current_dir(dir)
        .output()
        .expect("run sbsh")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn end_of_script_exits_cleanly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = run_script(dir.path(), &[SEARCH_PATH, "", "echo hi"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "hi\n");
    assert!(output.stderr.is_empty(), "unexpected stderr: {}", stderr(&output));
}

#[test]
fn end_of_interactive_input_exits_cleanly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = sbsh()
        .env("HOME", dir.path())
        .current_dir(dir.path())
        .output()
        .expect("run sbsh");

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty(), "unexpected stderr: {}", stderr(&output));
}

#[test]
fn too_many_arguments_fail() {
    let output = sbsh().args(["one.sbsh", "two.sbsh"]).output().expect("run sbsh");

    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
}

#[test]
fn unreadable_script_fails() {
    let output = sbsh().arg("/no/such/script.sbsh").output().expect("run sbsh");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("/no/such/script.sbsh"));
}

#[test]
fn redirection_truncates_and_captures_stdout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("out.txt");
    fs::write(&out, "an older and much longer line of text\n").expect("seed");

    let output = run_script(dir.path(), &[SEARCH_PATH, "echo arg1 > out.txt"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert_eq!(fs::read_to_string(&out).expect("read out"), "arg1\n");
}

#[test]
fn malformed_redirection_is_reported_and_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = run_script(
        dir.path(),
        &[SEARCH_PATH, "echo arg1 > out.txt extra", "echo arg1 >", "echo still running"],
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "still running\n");
    assert_eq!(stderr(&output).matches("bad redirection").count(), 2);
    assert!(!dir.path().join("out.txt").exists());
}

#[test]
fn unopenable_redirect_target_fails_only_that_child() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = run_script(
        dir.path(),
        &[SEARCH_PATH, "echo lost > missing-dir/out.txt & echo kept", "echo next line"],
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "kept\nnext line\n");
    assert!(stderr(&output).contains("missing-dir/out.txt"));
}

#[test]
fn empty_path_makes_commands_unresolvable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = run_script(dir.path(), &["path", "echo hi"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("command not found: echo"));
}

#[test]
fn exit_with_arguments_does_not_exit() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = run_script(dir.path(), &[SEARCH_PATH, "exit extra", "echo alive", "exit", "echo gone"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "alive\n");
    assert!(stderr(&output).contains("exit takes no arguments"));
}

#[test]
fn cd_changes_directory_for_later_commands() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::create_dir(dir.path().join("sub")).expect("mkdir");

    let output = run_script(dir.path(), &[SEARCH_PATH, "cd sub", "echo inside > marker", "cd", "cd nowhere"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(dir.path().join("sub").join("marker").exists());
    let err = stderr(&output);
    assert!(err.contains("cd takes exactly one directory"));
    assert!(err.contains("nowhere"));
}

#[test]
fn parallel_commands_run_concurrently() {
    let dir = tempfile::tempdir().expect("tempdir");
    let start = Instant::now();
    let output = run_script(dir.path(), &[SEARCH_PATH, "sleep 1 & sleep 1"]);
    let elapsed = start.elapsed();

    assert_eq!(output.status.code(), Some(0));
    assert!(elapsed >= Duration::from_millis(950));
    assert!(elapsed < Duration::from_millis(1900), "batch took {:?}", elapsed);
}

#[test]
fn batch_waits_for_every_child_before_next_line() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = run_script(
        dir.path(),
        &[SEARCH_PATH, "sleep 0.5 & echo first > a.txt", "cat a.txt"],
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "first\n");
}
