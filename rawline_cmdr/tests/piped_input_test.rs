// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Runs the `rawline` binary with piped stdin, where the terminal mode is left alone.

use pretty_assertions::assert_eq;
use std::{io::Write,
          process::{Command, Stdio}};
use test_case::test_case;

fn run_rawline(args: &[&str], input: &[u8]) -> (Option<i32>, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_rawline"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to spawn rawline");

    child
        .stdin
        .take()
        .expect("Failed to open stdin")
        .write_all(input)
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for rawline");
    (
        output.status.code(),
        String::from_utf8_lossy(&output.stdout).to_string(),
    )
}

#[test]
fn test_lines_are_echoed_until_exit() {
    let (code, stdout) = run_rawline(&["--prompt", "in"], b"one\rtwo\rexit\rthree\r");
    assert_eq!(code, Some(0));
    let lines: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("Read line: "))
        .collect();
    assert_eq!(lines, vec!["one", "two", "exit"]);
}

#[test_case(b"abc\x03", 0; "ctrl c")]
#[test_case(b"abc\x1a", 1; "ctrl z")]
#[test_case(b"abc", 0; "end of input")]
fn test_exit_codes(input: &[u8], expected: i32) {
    let (code, _) = run_rawline(&[], input);
    assert_eq!(code, Some(expected));
}

#[test]
fn test_small_capacity_discards_rest_of_line() {
    let (code, stdout) = run_rawline(&["--capacity", "4"], b"abcdefg\nxy\r");
    assert_eq!(code, Some(0));
    assert!(stdout.contains("Read line: abc\n"), "{stdout:?}");
    assert!(stdout.contains("Read line: xy\n"), "{stdout:?}");
    assert!(!stdout.contains("defg"), "{stdout:?}");
}
