//! End-to-end tests against the built `ls` binary.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn run_ls(args: &[&str], dir: &Path) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_ls"))
        .args(args)
        .arg(dir)
        .output()
        .expect("Failed to execute ls");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn sample_dir() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a"), "hello").unwrap();
    fs::write(dir.path().join("bb"), "").unwrap();
    fs::write(dir.path().join(".hidden"), "").unwrap();
    dir
}

#[test]
fn test_grid_skips_hidden_entries() {
    let dir = sample_dir();
    let (stdout, stderr, code) = run_ls(&["--color", "never", "--width", "80"], dir.path());
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert_eq!(stdout, "a   bb  \n");
}

#[test]
fn test_grid_all_shows_hidden_first() {
    let dir = sample_dir();
    let (stdout, _, code) = run_ls(&["-a", "--color", "never", "-w", "80"], dir.path());
    assert_eq!(code, 0);
    let names: Vec<&str> = stdout.split_whitespace().collect();
    assert_eq!(names, vec![".hidden", "a", "bb"]);
    assert!(stdout.ends_with('\n'));
}

#[test]
fn test_long_format_rows() {
    let dir = sample_dir();
    let (stdout, stderr, code) = run_ls(&["-l", "--color", "never"], dir.path());
    assert_eq!(code, 0, "stderr: {}", stderr);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("total "));
    assert!(lines[1].starts_with("-rw"));
    assert!(lines[1].ends_with("  a"));
    assert!(lines[1].contains("    5  "));
    assert!(lines[2].ends_with("  bb"));
}

#[test]
fn test_directory_colored_when_forced() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    let (stdout, _, code) = run_ls(&["--color", "always"], dir.path());
    assert_eq!(code, 0);
    assert!(stdout.contains("\x1B[34;49;22;23;24msub\x1B[0m"));
}

#[test]
fn test_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let (stdout, stderr, code) = run_ls(&["--color", "never"], &missing);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("ls: unable to read directory"));
}
