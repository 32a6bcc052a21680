use std::{fs, path::PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PHYSICS_PLAN: &str = r#"{
  "title": "Physics Midterm",
  "weeks": [
    {
      "weekNumber": 1,
      "theme": "Mechanics",
      "dailyTasks": [
        {
          "label": "Monday, October 19",
          "tasks": [
            {"title": "Kinematics", "description": "Solve ten projectile problems."},
            {"title": "Newton's laws", "description": "Draw free-body diagrams.", "completed": true}
          ]
        },
        {
          "label": "Tuesday, October 20",
          "tasks": []
        }
      ]
    }
  ]
}"#;

/// Helper function to create a Command with --no-color flag for testing
fn cram_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cram").expect("Failed to find cram binary");
    cmd.arg("--no-color");
    cmd
}

/// Writes the physics plan into a fresh temporary directory
fn create_plan_file() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("physics-midterm.json");
    fs::write(&path, PHYSICS_PLAN).expect("Failed to write plan");
    (temp_dir, path)
}

fn completed_flags(path: &PathBuf) -> Vec<bool> {
    let value: serde_json::Value =
        serde_json::from_slice(&fs::read(path).unwrap()).expect("plan is JSON");
    value["weeks"][0]["dailyTasks"][0]["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|task| task["completed"].as_bool().unwrap())
        .collect()
}

#[test]
fn test_cli_show_plan() {
    let (_temp_dir, path) = create_plan_file();

    cram_cmd()
        .args(["show", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Physics Midterm"))
        .stdout(predicate::str::contains("1/2 tasks, 50%"))
        .stdout(predicate::str::contains("## Week 1: Mechanics"))
        .stdout(predicate::str::contains("- ○ `1.1.1` **Kinematics**"))
        .stdout(predicate::str::contains("- ✓ `1.1.2` **Newton's laws**"))
        .stdout(predicate::str::contains("_Rest day_"));
}

#[test]
fn test_cli_toggle_writes_back() {
    let (_temp_dir, path) = create_plan_file();

    cram_cmd()
        .args(["toggle", path.to_str().unwrap(), "1", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Marked task 1.1.1 (Kinematics) as done",
        ))
        .stdout(predicate::str::contains("2/2 tasks, 100%"));

    assert_eq!(completed_flags(&path), vec![true, true]);

    cram_cmd()
        .args(["toggle", path.to_str().unwrap(), "1", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("as not done"));

    assert_eq!(completed_flags(&path), vec![false, true]);
}

#[test]
fn test_cli_toggle_missing_task_leaves_file_untouched() {
    let (_temp_dir, path) = create_plan_file();

    cram_cmd()
        .args(["toggle", path.to_str().unwrap(), "1", "2", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No task at 1.2.1"));

    assert_eq!(fs::read_to_string(&path).unwrap(), PHYSICS_PLAN);
}

#[test]
fn test_cli_show_invalid_plan_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, r#"{"title":"X","weeks":"not-an-array"}"#).unwrap();

    cram_cmd()
        .args(["show", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid study plan"))
        .stderr(predicate::str::contains("weeks"));
}

#[test]
fn test_cli_show_non_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notes.txt");
    fs::write(&path, "just some notes").unwrap();

    cram_cmd()
        .args(["show", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not read the plan file"));
}

#[test]
fn test_cli_show_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.json");

    cram_cmd()
        .args(["show", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_cli_schema_output() {
    let output = cram_cmd().arg("schema").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let schema: serde_json::Value = serde_json::from_str(&stdout).expect("schema is JSON");

    assert_eq!(schema["type"], "OBJECT");
    assert_eq!(schema["properties"]["weeks"]["type"], "ARRAY");
    assert_eq!(
        schema["properties"]["weeks"]["items"]["properties"]["weekNumber"]["type"],
        "INTEGER"
    );
}

#[test]
fn test_cli_generate_requires_topics() {
    cram_cmd()
        .env_remove("GEMINI_API_KEY")
        .env_remove("API_KEY")
        .args(["generate", "--test-date", "2999-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"))
        .stderr(predicate::str::contains("Please enter the test topics."));
}

#[test]
fn test_cli_generate_rejects_past_date() {
    cram_cmd()
        .args([
            "generate",
            "--topics",
            "Thermodynamics",
            "--test-date",
            "2000-01-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please select a future date for the test.",
        ));
}

#[test]
fn test_cli_generate_rejects_unparseable_date() {
    cram_cmd()
        .args(["generate", "--topics", "Optics", "--test-date", "next friday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid date"));
}

#[test]
fn test_cli_generate_blank_topics_file() {
    let temp_dir = TempDir::new().unwrap();
    let topics = temp_dir.path().join("topics.txt");
    fs::write(&topics, "   \n").unwrap();

    cram_cmd()
        .args([
            "generate",
            "--topics-file",
            topics.to_str().unwrap(),
            "--test-date",
            "2999-01-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter the test topics."));
}

#[test]
fn test_cli_generate_without_api_key() {
    let temp_dir = TempDir::new().unwrap();

    cram_cmd()
        .current_dir(temp_dir.path())
        .env_remove("GEMINI_API_KEY")
        .env_remove("API_KEY")
        .args(["generate", "--topics", "Optics", "--test-date", "2999-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "GEMINI_API_KEY environment variable not set",
        ));

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}
