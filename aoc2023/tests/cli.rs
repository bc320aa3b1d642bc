use pretty_assertions::assert_eq;
use std::fs;
use std::process::{Command, Output};

const DAY1: &str = "two1nine\neightwothree\nabcone2threexyz\nxtwone3four\n\
                    4nineeightseven2\nzoneight234\n7pqrstsixteen\n";

fn aoc2023(dir: &tempfile::TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aoc2023"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn spelled_digits_are_the_default_answer() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("1_input.txt"), DAY1).unwrap();

    let output = aoc2023(&dir, &["1", "--part", "2", "--no-verify"]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Result: 281\n");
}

#[test]
fn default_run_reports_spelled_digits_when_part_one_cannot_parse() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("1_input.txt"), "two1nine\neightwothree\n").unwrap();

    let output = aoc2023(&dir, &["1", "--no-verify"]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Result: 112\n");
}

#[test]
fn explicit_part_one_rejects_lines_without_numerals() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("1_input.txt"), DAY1).unwrap();

    let output = aoc2023(&dir, &["1", "--part", "1", "--no-verify"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 2"), "{output:?}");
}

#[test]
fn recorded_answer_is_checked() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("1_input.txt"), DAY1).unwrap();

    let output = aoc2023(&dir, &["1", "-p", "2"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("expected 56017, got 281"), "{output:?}");
}

#[test]
fn only_day_one_exists() {
    let dir = tempfile::tempdir().unwrap();

    let output = aoc2023(&dir, &["2"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "");
}

#[test]
fn days_past_the_byte_range_are_unknown() {
    let dir = tempfile::tempdir().unwrap();

    let output = aoc2023(&dir, &["300"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no puzzle for day 300"), "{output:?}");
}
