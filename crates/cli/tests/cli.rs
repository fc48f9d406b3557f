//! End-to-end CLI tests.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn motus() -> Command {
    Command::cargo_bin("motus").expect("binary not found")
}

const SAMPLE_OUTPUT: &str = "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.
Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.
Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.
";

#[test]
fn sample_batch() {
    motus().assert().success().stdout(SAMPLE_OUTPUT);
}

#[test]
fn input_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"workout_type": "RUN", "data": [15000, 1, 75]}},
            {{"workout_type": "SWM", "data": [720, 1, 80, 25, 40]}}]"#
    )
    .unwrap();

    motus()
        .args(["--input", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.
Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.
",
        );
}

#[test]
fn unknown_workout_type() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"workout_type": "BIKE", "data": [1000, 1, 75]}}]"#).unwrap();

    motus()
        .args(["--input", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown workout type `BIKE`"));
}

#[test]
fn wrong_value_count() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"workout_type": "RUN", "data": [15000, 1]}}]"#).unwrap();

    motus()
        .args(["--input", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Workout type `RUN` takes 3 values (2 given)",
        ));
}

#[test]
fn missing_input_file() {
    motus()
        .args(["--input", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn malformed_input_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    motus()
        .args(["--input", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn verbose_logs_to_stderr() {
    motus()
        .arg("--verbose")
        .assert()
        .success()
        .stdout(SAMPLE_OUTPUT)
        .stderr(predicate::str::contains("processing 3 readings"));
}

#[test]
fn help_flag() {
    motus()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("workout statistics"));
}
