use std::fs;
use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{NamedTempFile, tempdir};

fn solver_command() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("aoc-2024"))
}

fn write_input_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp input file");
    file.write_all(content.as_bytes()).expect("write input");
    file
}

const DAY_ONE_EXAMPLE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";
const DAY_TWO_EXAMPLE: &str = "7 6 4 2 1\n1 2 7 8 9\n9 7 6 2 1\n1 3 2 4 5\n8 6 4 4 1\n1 3 6 7 9\n";
const DAY_THREE_EXAMPLE: &str =
    "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))\n";
const DAY_FOUR_EXAMPLE: &str = "MMMSXXMASM\nMSAMXMSMSA\nAMXSXMAAMM\nMSAMASMSMX\nXMASAMXAMM\n\
XXAMMXXAMA\nSMSMSASXSS\nSAXAMASAAA\nMAMMMXMMMM\nMXMXAXMASX\n";

#[test]
fn day_one_solves_from_input_file() {
    let input = write_input_file(DAY_ONE_EXAMPLE);

    solver_command()
        .arg("1")
        .arg("--input")
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("= Day 1: Historian Hysteria ="))
        .stdout(predicate::str::contains("-- Part 1 --\n11\n"))
        .stdout(predicate::str::contains("-- Part 2 --\n31\n"));
}

#[test]
fn day_four_solves_from_input_file() {
    let input = write_input_file(DAY_FOUR_EXAMPLE);

    solver_command()
        .arg("4")
        .arg("--input")
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("= Day 4: Ceres Search ="))
        .stdout(predicate::str::contains("-- Part 1 --\n18\n"))
        .stdout(predicate::str::contains("-- Part 2 --\n9\n"));
}

#[test]
fn unavailable_day_fails_with_message() {
    let input = write_input_file("anything\n");

    solver_command()
        .arg("26")
        .arg("--input")
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no solution available for day 26"));
}

#[test]
fn malformed_grid_reports_parse_error() {
    let input = write_input_file("ABCDEF\nSDEFT\nASDGAS\n");

    solver_command()
        .arg("4")
        .arg("--input")
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to run solution for day 4"))
        .stderr(predicate::str::contains("failure parsing line 2"))
        .stderr(predicate::str::contains("not equal length"));
}

#[test]
fn missing_default_input_fails_with_guidance() {
    let temp = tempdir().expect("temp working directory");

    solver_command()
        .arg("1")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("default input file missing"));
}

#[test]
fn runs_every_available_day_when_day_omitted() {
    let temp = tempdir().expect("temp working directory");
    let inputs_dir = temp.path().join("inputs");
    fs::create_dir(&inputs_dir).expect("create inputs directory");

    let examples: [(&str, &str); 4] = [
        ("day01.txt", DAY_ONE_EXAMPLE),
        ("day02.txt", DAY_TWO_EXAMPLE),
        ("day03.txt", DAY_THREE_EXAMPLE),
        ("day04.txt", DAY_FOUR_EXAMPLE),
    ];
    for (filename, content) in examples {
        fs::write(inputs_dir.join(filename), content).expect("write fixture file");
    }

    solver_command()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("= Day 1: Historian Hysteria ="))
        .stdout(predicate::str::contains("= Day 2: Red-Nosed Reports ="))
        .stdout(predicate::str::contains("= Day 3: Mull It Over ="))
        .stdout(predicate::str::contains("= Day 4: Ceres Search ="));
}
