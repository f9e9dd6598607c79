//! Runs the compiled binary against temporary input files.

use std::io::Write;
use std::process::{Command, Output};

use making_change::testing::mask_timings;
use tempfile::NamedTempFile;

fn input_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_making-change"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    mask_timings(&String::from_utf8(output.stdout.clone()).unwrap())
}

#[test]
fn solves_a_file_and_exits_cleanly() {
    let file = input_file("4\n1\n5\n10\n25\n1\n41\n");
    let output = run(&[file.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "--Problem Set #1--\n---\n41 cents = 25:1 10:1 5:1 1:1\nTotal Time: _ ns\n---\n"
    );
}

#[test]
fn strategy_flag_selects_the_solver() {
    let file = input_file("3\n1\n3\n4\n1\n6\n");
    for strategy in ["bottom-up", "memoized", "naive"] {
        let output = run(&[file.path().to_str().unwrap(), "--strategy", strategy]);
        assert!(output.status.success(), "{strategy}");
        assert!(stdout(&output).contains("6 cents = 3:2"), "{strategy}");
    }
}

#[test]
fn missing_file_fails_with_guidance() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("input.txt");
    let output = run(&[missing.to_str().unwrap()]);

    assert!(!output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("--Error: File Not Found--"), "{text}");
    assert!(text.contains("first argument"), "{text}");
}

#[test]
fn format_error_stops_before_the_bad_set() {
    let file = input_file("1\n1\n1\n3\n2\n1\nx\n1\n5\n");
    let output = run(&[file.path().to_str().unwrap()]);

    assert!(!output.status.success());
    let text = stdout(&output);
    assert!(text.contains("--Problem Set #1--"), "{text}");
    assert!(!text.contains("--Problem Set #2--"), "{text}");
    assert!(text.contains("--Error: Invalid Number Format--"), "{text}");
    assert!(text.contains("line 7: `x` is not an integer"), "{text}");
}

#[test]
fn naive_limit_is_configurable() {
    let file = input_file("1\n1\n1\n45\n");
    let refused = run(&[file.path().to_str().unwrap(), "-s", "naive"]);
    assert!(!refused.status.success());
    assert!(stdout(&refused).contains("---Error: Value Too Large---"));

    let allowed = run(&[file.path().to_str().unwrap(), "-s", "naive", "--naive-limit", "50"]);
    assert!(allowed.status.success());
    assert!(stdout(&allowed).contains("45 cents = 1:45"));
}

#[test]
fn naive_call_budget_refuses_slow_sets() {
    let file = input_file("3\n1\n2\n3\n1\n34\n");
    let refused = run(&[file.path().to_str().unwrap(), "-s", "naive"]);
    assert!(!refused.status.success());
    let text = stdout(&refused);
    assert!(text.contains("---Error: Value Too Large---"), "{text}");
    assert!(text.contains("after 1000000 calls"), "{text}");

    let file = input_file("3\n1\n2\n3\n1\n12\n");
    let allowed = run(&[file.path().to_str().unwrap(), "-s", "naive", "--naive-calls", "5000"]);
    assert!(allowed.status.success());
    assert!(stdout(&allowed).contains("12 cents = 3:4"));
}

#[test]
fn invalid_utf8_is_a_format_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"1\n1\n1\n\xff\n").unwrap();
    let output = run(&[file.path().to_str().unwrap()]);

    assert!(!output.status.success());
    let text = stdout(&output);
    assert!(text.contains("--Error: Invalid Number Format--"), "{text}");
    assert!(text.contains("line 4:"), "{text}");
}
