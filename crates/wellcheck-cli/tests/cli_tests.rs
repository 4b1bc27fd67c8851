//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wellcheck() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("wellcheck").unwrap()
}

#[test]
fn validate_shipped_assessments() {
    wellcheck()
        .arg("validate")
        .arg("--catalog")
        .arg("../../catalogs/assessments.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("assessment kind"))
        .stdout(predicate::str::contains("4 entries"))
        .stdout(predicate::str::contains("All catalogs valid"));
}

#[test]
fn validate_shipped_quizzes() {
    wellcheck()
        .arg("validate")
        .arg("--catalog")
        .arg("../../catalogs/quizzes.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("quiz kind"))
        .stdout(predicate::str::contains("All catalogs valid"));
}

#[test]
fn validate_directory() {
    wellcheck()
        .arg("validate")
        .arg("--catalog")
        .arg("../../catalogs")
        .assert()
        .success()
        .stdout(predicate::str::contains("assessments.toml"))
        .stdout(predicate::str::contains("quizzes.toml"))
        .stdout(predicate::str::contains("All catalogs valid"));
}

#[test]
fn validate_nonexistent_file() {
    wellcheck()
        .arg("validate")
        .arg("--catalog")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn validate_reports_band_issues() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(
        &path,
        r#"
kind = "assessment"

[[categories]]
id = "safety"
title = "Safety"

[[categories.entries]]
id = "readiness"
title = "Readiness"

[[categories.entries.bands]]
min = 0
max = 1
level = "High"

[[categories.entries.bands]]
min = 3
max = 6
level = "Low"

[[categories.entries.questions]]
id = "q1"
prompt = "?"
options = [
    { label = "No", score = 0 },
    { label = "Yes", score = 3 },
]

[[categories.entries.questions]]
id = "q2"
prompt = "?"
options = [
    { label = "No", score = 0 },
    { label = "Yes", score = 3 },
]
"#,
    )
    .unwrap();

    wellcheck()
        .arg("validate")
        .arg("--catalog")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("gap"))
        .stderr(predicate::str::contains("issue(s) found"));
}

#[test]
fn list_shows_entries_and_badges() {
    wellcheck()
        .arg("list")
        .arg("--catalog")
        .arg("../../catalogs/assessments.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("Safety Readiness Check"))
        .stdout(predicate::str::contains("safetyPrepared"))
        .stdout(predicate::str::contains("explorer"));
}

#[test]
fn run_assessment_scripted() {
    let dir = TempDir::new().unwrap();

    // 1-based options 2,3,2,4,3 select scores 1,2,1,3,2 → 9/15 → Moderate.
    wellcheck()
        .arg("run")
        .arg("--catalog")
        .arg("../../catalogs/assessments.toml")
        .arg("--category")
        .arg("safety")
        .arg("--entry")
        .arg("readiness")
        .arg("--answers")
        .arg("2,3,2,4,3")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 9/15"))
        .stdout(predicate::str::contains("Level: Moderate"))
        .stdout(predicate::str::contains("Badge unlocked: Safety Prepared"));
}

#[test]
fn run_quiz_suggests_remediation() {
    let dir = TempDir::new().unwrap();

    // Options 1,2,1 select choices 0,1,0 against correct 0,1,2 → 2/3 < 0.70.
    wellcheck()
        .arg("run")
        .arg("--catalog")
        .arg("../../catalogs/quizzes.toml")
        .arg("--category")
        .arg("safety")
        .arg("--entry")
        .arg("basics")
        .arg("--answers")
        .arg("1,2,1")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 2/3"))
        .stdout(predicate::str::contains("Everyday Safety Basics"));
}

#[test]
fn run_unknown_entry_fails() {
    let dir = TempDir::new().unwrap();

    wellcheck()
        .arg("run")
        .arg("--catalog")
        .arg("../../catalogs/quizzes.toml")
        .arg("--category")
        .arg("safety")
        .arg("--entry")
        .arg("missing")
        .arg("--answers")
        .arg("1")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown entry"));
}

#[test]
fn run_with_wrong_answer_count_fails() {
    let dir = TempDir::new().unwrap();

    wellcheck()
        .arg("run")
        .arg("--catalog")
        .arg("../../catalogs/quizzes.toml")
        .arg("--category")
        .arg("safety")
        .arg("--entry")
        .arg("basics")
        .arg("--answers")
        .arg("1,2")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 3 answers"));
}

#[test]
fn progress_reflects_a_completed_run() {
    let dir = TempDir::new().unwrap();

    wellcheck()
        .arg("run")
        .arg("--catalog")
        .arg("../../catalogs/assessments.toml")
        .arg("--category")
        .arg("safety")
        .arg("--entry")
        .arg("readiness")
        .arg("--answers")
        .arg("4,4,4,4,4")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .success();

    wellcheck()
        .arg("progress")
        .arg("--catalog")
        .arg("../../catalogs/assessments.toml")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed 1/4 assessment entries"))
        .stdout(predicate::str::contains("[unlocked] Safety Prepared"))
        .stdout(predicate::str::contains("[locked] Explorer"));
}

#[test]
fn progress_with_no_data_shows_empty_state() {
    let dir = TempDir::new().unwrap();

    wellcheck()
        .arg("progress")
        .arg("--catalog")
        .arg("../../catalogs/quizzes.toml")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed 0/4 quiz entries"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    wellcheck()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created catalogs/assessments.toml"))
        .stdout(predicate::str::contains("Created catalogs/quizzes.toml"));

    assert!(dir.path().join("catalogs/assessments.toml").exists());
    assert!(dir.path().join("catalogs/quizzes.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    wellcheck().current_dir(dir.path()).arg("init").assert().success();

    wellcheck()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn init_catalogs_are_valid() {
    let dir = TempDir::new().unwrap();

    wellcheck().current_dir(dir.path()).arg("init").assert().success();

    wellcheck()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--catalog")
        .arg("catalogs")
        .assert()
        .success()
        .stdout(predicate::str::contains("All catalogs valid"));
}

#[test]
fn help_output() {
    wellcheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Self-assessment and knowledge-quiz engine",
        ));
}

#[test]
fn version_output() {
    wellcheck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wellcheck"));
}
