//! Runs the `chanviz` binary as a process: stdin input, stdout output and
//! exit status.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

use tempfile::{TempDir, tempdir};

const STYLE: &str = "fill:#ccc,stroke:#666,stroke-width:1px,color:#666,stroke-dasharray: 4";

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Builds a command with an empty explicit config so no user config is picked up.
fn chanviz(config_dir: &TempDir) -> Command {
    let config = config_dir.path().join("config.toml");
    fs::write(&config, "").expect("Failed to write config");

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chanviz"));
    cmd.arg("--config")
        .arg(config)
        .args(["--log-level", "off"])
        .current_dir(config_dir.path());
    cmd
}

fn run_with_stdin(mut cmd: Command, input: &[u8]) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn chanviz");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input)
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for chanviz")
}

#[test]
fn stdin_input_renders_to_stdout() {
    let dir = tempdir().expect("Failed to create temp directory");
    let input = fs::read(fixture("single_tombstone.yaml")).unwrap();

    let mut cmd = chanviz(&dir);
    cmd.arg("-");
    let output = run_with_stdin(cmd, &input);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!(
            "graph RL
  v0.1.0
  v0.3.0

  v0.3.0 == replaces ==> v0.1.0

  v0.3.0 -- skips --> v0.2.0

  style v0.2.0 {STYLE}
"
        )
    );
}

#[test]
fn file_input_renders_to_stdout() {
    let dir = tempdir().expect("Failed to create temp directory");

    let output = chanviz(&dir)
        .arg(fixture("single_version.yaml"))
        .output()
        .expect("Failed to run chanviz");

    assert!(output.status.success());
    assert_eq!(output.stdout, b"graph RL\n  v2.0.0\n");
}

#[test]
fn tombstoned_head_exits_with_status_one() {
    let dir = tempdir().expect("Failed to create temp directory");

    let output = chanviz(&dir)
        .arg(fixture("errors/tombstoned_head.yaml"))
        .output()
        .expect("Failed to run chanviz");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "no diagram expected on failure");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid_head"), "stderr: {stderr}");
}

#[test]
fn malformed_stdin_exits_with_status_one() {
    let dir = tempdir().expect("Failed to create temp directory");

    let mut cmd = chanviz(&dir);
    cmd.arg("-");
    let output = run_with_stdin(cmd, b"versions: [1.0, 1.1]\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_input_exits_with_status_one() {
    let dir = tempdir().expect("Failed to create temp directory");

    let output = chanviz(&dir)
        .arg(dir.path().join("absent.yaml"))
        .output()
        .expect("Failed to run chanviz");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
