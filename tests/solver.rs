use assert_cmd::Command;
use predicates::prelude::*;
use std::env;
use std::fs;
use std::io;

// Happy paths through stdin and file flags, plus each way of not
// producing a solution.

#[test]
fn test_cli_success() {
    let expected = std::fs::read_to_string("results/example_7x5.txt").unwrap();

    let mut cmd = Command::cargo_bin("bridges-solver").unwrap();

    cmd.pipe_stdin("puzzles/example_7x5.txt")
        .unwrap()
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_cli_input_flag() {
    let expected = std::fs::read_to_string("results/example_5x5.txt").unwrap();

    let mut cmd = Command::cargo_bin("bridges-solver").unwrap();

    cmd.arg("--input-file=puzzles/example_5x5.txt")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_cli_output_flag() -> io::Result<()> {
    let expected = std::fs::read_to_string("results/example_5x5.txt").unwrap();

    let mut cmd = Command::cargo_bin("bridges-solver").unwrap();

    let mut path = env::temp_dir();
    path.push("test-bridges-solver.txt");

    cmd.pipe_stdin("puzzles/example_5x5.txt")
        .unwrap()
        .arg(format!("--output-file={}", path.to_str().unwrap()))
        .assert()
        .success()
        .stdout("");

    let actual = fs::read_to_string(path.clone())?;
    fs::remove_file(path)?;
    assert_eq!(expected, actual);

    Ok(())
}

#[test]
fn test_cli_max_bridges_flag() {
    let mut cmd = Command::cargo_bin("bridges-solver").unwrap();

    cmd.arg("--max-bridges=3")
        .write_stdin("3..3")
        .assert()
        .success()
        .stdout("3EE3\n");
}

#[test]
fn test_cli_bad_max_bridges() {
    let mut cmd = Command::cargo_bin("bridges-solver").unwrap();

    cmd.arg("--max-bridges=4")
        .write_stdin("2.2")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "--max-bridges must be between 1 and 3",
        ));
}

#[test]
fn test_cli_color_flag() {
    let mut cmd = Command::cargo_bin("bridges-solver").unwrap();

    cmd.arg("--color")
        .write_stdin("2.2")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["))
        .stdout(predicate::str::contains("="));
}

#[test]
fn test_cli_no_solutions() {
    let mut cmd = Command::cargo_bin("bridges-solver").unwrap();

    cmd.write_stdin("...1..")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No solutions"));
}

#[test]
fn test_cli_gives_up() {
    let mut cmd = Command::cargo_bin("bridges-solver").unwrap();

    cmd.arg("--max-states=1")
        .pipe_stdin("puzzles/example_5x5.txt")
        .unwrap()
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Search gave up after 1 states"));
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    let expected = std::fs::read_to_string("results/example_7x5.txt").unwrap();

    let mut cmd = Command::cargo_bin("bridges-solver").unwrap();

    cmd.arg("-vv")
        .pipe_stdin("puzzles/example_7x5.txt")
        .unwrap()
        .assert()
        .success()
        .stdout(expected)
        .stderr(predicate::str::contains("Propagation pass 1"));
}

#[test]
fn test_cli_spaced_input() {
    let mut cmd = Command::cargo_bin("bridges-solver").unwrap();

    cmd.write_stdin("2 . 2\n")
        .assert()
        .success()
        .stdout("2=2\n");
}

#[test]
fn test_cli_parse_error() {
    let mut cmd = Command::cargo_bin("bridges-solver").unwrap();

    cmd.write_stdin("This is not a valid input.")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Unexpected character in input"));
}

#[test]
fn test_cli_ragged_input() {
    let mut cmd = Command::cargo_bin("bridges-solver").unwrap();

    cmd.write_stdin("1.1\n..\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Rectangular input expected"));
}
