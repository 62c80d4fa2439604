//! Integration tests driving the fdx binary end to end.
//!
//! Each test runs the compiled binary against a small fixture tree and
//! asserts on stdout/stderr and the exit code. `--no-color` keeps the
//! output free of escape sequences.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn fdx() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fdx"))
}

fn run(args: &[&str]) -> Output {
    fdx().args(args).output().expect("failed to run fdx")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Fixture tree:
///   a/b.txt     "hello world" / "foo foo"
///   top.txt     "nothing special"
///   vacant/     (empty directory)
fn fixture_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("a")).unwrap();
    fs::write(dir.path().join("a/b.txt"), "hello world\nfoo foo\n").unwrap();
    fs::write(dir.path().join("top.txt"), "nothing special\n").unwrap();
    fs::create_dir(dir.path().join("vacant")).unwrap();
    dir
}

fn build_index_file(root: &Path, dir: &TempDir) -> PathBuf {
    let index_file = dir.path().join("tree.fdx");
    let output = run(&[
        "index",
        root.to_str().unwrap(),
        "-o",
        index_file.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "index failed: {}", stderr(&output));
    index_file
}

#[test]
fn test_index_command_creates_file() {
    let tree = fixture_tree();
    let out_dir = TempDir::new().unwrap();
    let index_file = out_dir.path().join("tree.fdx");

    let output = run(&[
        "index",
        tree.path().to_str().unwrap(),
        "-o",
        index_file.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Created index file:"));
    assert!(index_file.is_file());
}

#[test]
fn test_index_rejects_wrong_extension() {
    let tree = fixture_tree();
    let out_dir = TempDir::new().unwrap();
    let bad = out_dir.path().join("tree.json");

    let output = run(&[
        "index",
        tree.path().to_str().unwrap(),
        "-o",
        bad.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains(".fdx"));
    assert!(err.contains("Usage:"));
    assert!(!bad.exists());
}

#[test]
fn test_info_runtime_prints_matches() {
    let tree = fixture_tree();
    let output = run(&["info", "foo", tree.path().to_str().unwrap(), "--no-color"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Finding information runtime"));
    assert!(text.contains("b.txt"));
    assert!(text.contains("Line 2: foo foo"));
    assert!(!text.contains("top.txt"));
}

#[test]
fn test_info_index_backed_matches_runtime() {
    let tree = fixture_tree();
    let out_dir = TempDir::new().unwrap();
    let index_file = build_index_file(tree.path(), &out_dir);

    let runtime = run(&["info", "foo", tree.path().to_str().unwrap(), "--no-color"]);
    let indexed = run(&[
        "info",
        "foo",
        "-i",
        index_file.to_str().unwrap(),
        "--no-color",
    ]);

    assert!(indexed.status.success());
    let indexed_text = stdout(&indexed);
    assert!(indexed_text.contains("Loaded index from:"));

    // Same result block after each command's status line.
    let tail = |s: &str| {
        s.lines()
            .filter(|l| l.starts_with("Path:") || l.starts_with('\t'))
            .collect::<Vec<_>>()
            .join("\n")
    };
    assert_eq!(tail(&stdout(&runtime)), tail(&indexed_text));
}

#[test]
fn test_info_no_match_says_nothing_found() {
    let tree = fixture_tree();
    let output = run(&["info", "zzz", tree.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("nothing found"));
}

#[test]
fn test_searchfd_finds_empty_directory() {
    let tree = fixture_tree();
    let out_dir = TempDir::new().unwrap();
    let index_file = build_index_file(tree.path(), &out_dir);

    for source_args in [
        vec!["searchfd", "vacant", tree.path().to_str().unwrap()],
        vec!["searchfd", "vacant", "-i", index_file.to_str().unwrap()],
    ] {
        let mut args = source_args.clone();
        args.push("--no-color");
        let output = run(&args);
        assert!(output.status.success());
        assert!(stdout(&output).contains("vacant"), "args: {args:?}");
    }
}

#[test]
fn test_searchfdi_filters_by_name() {
    let tree = fixture_tree();
    let output = run(&[
        "searchfdi",
        "foo",
        "b.txt",
        tree.path().to_str().unwrap(),
        "--no-color",
    ]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("b.txt"));
    assert!(text.contains("foo foo"));

    // Name that matches nothing: content match alone is not enough.
    let output = run(&[
        "searchfdi",
        "foo",
        "nope",
        tree.path().to_str().unwrap(),
        "--no-color",
    ]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("nothing found"));
}

#[test]
fn test_bad_root_fails_with_usage() {
    let tree = fixture_tree();
    let missing = tree.path().join("does-not-exist");
    let output = run(&["info", "x", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("is not a directory"));
    assert!(err.contains("Usage:"));
}

#[test]
fn test_missing_index_file_fails() {
    let out_dir = TempDir::new().unwrap();
    let missing = out_dir.path().join("missing.fdx");
    let output = run(&["info", "x", "-i", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("no such file"));
}

#[test]
fn test_corrupt_index_file_fails() {
    let out_dir = TempDir::new().unwrap();
    let corrupt = out_dir.path().join("corrupt.fdx");
    fs::write(&corrupt, "definitely not an index").unwrap();

    let output = run(&["searchfd", "x", "-i", corrupt.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("may be damaged"));
}

#[test]
fn test_root_and_index_together_is_invalid() {
    let tree = fixture_tree();
    let out_dir = TempDir::new().unwrap();
    let index_file = build_index_file(tree.path(), &out_dir);

    let output = run(&[
        "info",
        "x",
        tree.path().to_str().unwrap(),
        "-i",
        index_file.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid arguments"));

    let output = run(&["info", "x"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid arguments"));
}
