#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli(schedule: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("creneau-cli").unwrap();
    cmd.arg("--schedule").arg(schedule);
    cmd
}

#[test]
fn open_shifts_reports_uncovered_window_with_code_2() {
    let dir = tempdir().unwrap();
    let schedule = dir.path().join("planning.json");

    cli(&schedule)
        .args([
            "add-template",
            "--name",
            "Matin",
            "--start",
            "09:00",
            "--end",
            "13:00",
            "--days",
            "0,1,2,3,4,5,6",
        ])
        .assert()
        .success();

    cli(&schedule)
        .args(["open-shifts", "--start", "2025-12-22", "--end", "2025-12-22"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Matin").and(predicate::str::contains("240 min")));
}

#[test]
fn covered_schedule_exits_clean() {
    let dir = tempdir().unwrap();
    let schedule = dir.path().join("planning.json");

    cli(&schedule)
        .args([
            "add-template",
            "--name",
            "Matin",
            "--start",
            "09:00",
            "--end",
            "13:00",
            "--days",
            "0,1,2,3,4,5,6",
        ])
        .assert()
        .success();

    // couvre la fenêtre entière en matérialisant le gabarit
    cli(&schedule)
        .args([
            "add-shift",
            "--worker",
            "alice",
            "--date",
            "2025-12-22",
            "--template",
            "Matin",
        ])
        .assert()
        .success();

    cli(&schedule)
        .args(["open-shifts", "--start", "2025-12-22", "--end", "2025-12-22"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("aucun créneau non couvert"));
}

#[test]
fn add_shift_requires_template_or_range() {
    let dir = tempdir().unwrap();
    let schedule = dir.path().join("planning.json");

    cli(&schedule)
        .args(["add-shift", "--worker", "alice", "--date", "2025-12-22"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--template"));
}

#[test]
fn malformed_template_time_is_rejected() {
    let dir = tempdir().unwrap();
    let schedule = dir.path().join("planning.json");

    cli(&schedule)
        .args([
            "add-template",
            "--name",
            "Mauvais",
            "--start",
            "9h",
            "--end",
            "13:00",
            "--days",
            "1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid time format"));
}

#[test]
fn import_and_report_roundtrip() {
    let dir = tempdir().unwrap();
    let schedule = dir.path().join("planning.json");
    let templates_csv = dir.path().join("templates.csv");
    let shifts_csv = dir.path().join("shifts.csv");
    let report = dir.path().join("report.txt");

    std::fs::write(
        &templates_csv,
        "name,start,end,days,active\nMatin,09:00,13:00,0;1;2;3;4;5;6,oui\n",
    )
    .unwrap();
    std::fs::write(
        &shifts_csv,
        "worker,date,start,end\nalice,2025-12-22,2025-12-22T10:00:00Z,2025-12-22T12:00:00Z\n",
    )
    .unwrap();

    cli(&schedule)
        .args(["import-templates", "--csv", templates_csv.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 template(s) imported"));

    cli(&schedule)
        .args(["import-shifts", "--csv", shifts_csv.to_str().unwrap()])
        .assert()
        .success();

    cli(&schedule)
        .args([
            "report",
            "--start",
            "2025-12-22",
            "--end",
            "2025-12-22",
            "--out",
            report.to_str().unwrap(),
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(&report).unwrap();
    assert!(content.contains("2025-12-22 : 2 créneau(x) non couvert(s)"));
    assert!(content.contains("60 min"));
}
