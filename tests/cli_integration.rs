use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

/// A `rollbook` command isolated from the user's config and environment.
fn rollbook(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rollbook").unwrap();
    cmd.env_remove("ROLLBOOK_ID_PREFIX")
        .env_remove("ROLLBOOK_SEED_FILE")
        .env_remove("ROLLBOOK_BUILTIN_SEED")
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(dir.join("rollbook.toml"));
    cmd
}

#[test]
fn test_shell_add_then_lookup() {
    let temp_dir = tempfile::tempdir().unwrap();

    rollbook(temp_dir.path())
        .write_stdin(
            "2\nTest User\n10\n1 Test Road\n01/01/2010\n9000000001\nMath, Science\n\
             1\n24-25STU5582\n\
             1\n24-25STU9999\n\
             3\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The database currently contains 15 student records.",
        ))
        .stdout(predicate::str::contains(
            "New student record saved: 24-25STU5582",
        ))
        .stdout(predicate::str::contains("STUDENT DETAILS - ID: 24-25STU5582"))
        .stdout(predicate::str::contains("Test User"))
        .stdout(predicate::str::contains(
            "The Student ID '24-25STU9999' was not found in the database.",
        ))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_show_seeded_student() {
    let temp_dir = tempfile::tempdir().unwrap();

    rollbook(temp_dir.path())
        .args(["show", "24-25STU5581"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Arjun Nair"))
        .stdout(predicate::str::contains("[Physics, Electronics, Math]"));
}

#[test]
fn test_show_missing_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    rollbook(temp_dir.path())
        .args(["show", "24-25STU9999"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("--- ID NOT FOUND ---"))
        .stdout(predicate::str::contains("Student ID not found: 24-25STU9999"));
}

#[test]
fn test_show_partial_miss_json() {
    let temp_dir = tempfile::tempdir().unwrap();

    let output = rollbook(temp_dir.path())
        .args(["--json", "show", "24-25STU5568", "24-25STU9999"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["listed_students"][0]["name"], "Ajay");
    assert_eq!(json["missing_ids"], serde_json::json!(["24-25STU9999"]));
    assert_eq!(json["messages"][0]["level"], "error");
    assert_eq!(
        json["messages"][0]["content"],
        "Student ID not found: 24-25STU9999"
    );
}

#[test]
fn test_add_one_shot_json() {
    let temp_dir = tempfile::tempdir().unwrap();

    let output = rollbook(temp_dir.path())
        .args([
            "--json",
            "add",
            "--name",
            "Test User",
            "--class",
            "10",
            "--subjects",
            "Math, Science, Math",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["affected_students"][0]["id"], "24-25STU5582");
    assert_eq!(
        json["affected_students"][0]["subjects"],
        serde_json::json!(["Math", "Science", "Math"])
    );
    assert_eq!(json["messages"][0]["level"], "success");
}

#[test]
fn test_add_rejects_bad_class() {
    let temp_dir = tempfile::tempdir().unwrap();

    rollbook(temp_dir.path())
        .args(["add", "--name", "X", "--class", "ten"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid number for the class"));
}

#[test]
fn test_list_builtin_roster() {
    let temp_dir = tempfile::tempdir().unwrap();

    rollbook(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("24-25STU5567"))
        .stdout(predicate::str::contains("24-25STU5581"))
        .stdout(predicate::str::contains("15 student records"));
}

#[test]
fn test_config_file_prefix_and_seed() {
    let temp_dir = tempfile::tempdir().unwrap();
    let seed = temp_dir.path().join("seed.json");
    std::fs::write(
        &seed,
        r#"[
            {"id":"S-40","name":"Forty","address":"A","class_level":8,
             "subjects":["Art"],"date_of_birth":"01/01/2012","phone_number":"1"},
            {"id":"S-oops","name":"Odd","address":"B","class_level":9,
             "subjects":[],"date_of_birth":"02/02/2011","phone_number":"2"}
        ]"#,
    )
    .unwrap();
    std::fs::write(
        temp_dir.path().join("rollbook.toml"),
        format!(
            "id_prefix = \"S-\"\nbuiltin_seed = false\nseed_file = {:?}\n",
            seed.to_str().unwrap()
        ),
    )
    .unwrap();

    rollbook(temp_dir.path())
        .args(["add", "--name", "New", "--class", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("STUDENT DETAILS - ID: S-41"))
        .stderr(predicate::str::contains("S-oops"));
}

#[test]
fn test_relative_seed_file_resolves_next_to_config() {
    let config_dir = tempfile::tempdir().unwrap();
    let work_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        config_dir.path().join("seed.json"),
        r#"[{"id":"R7","name":"Seven","address":"A","class_level":8,
             "subjects":[],"date_of_birth":"01/01/2012","phone_number":"1"}]"#,
    )
    .unwrap();
    std::fs::write(
        config_dir.path().join("rollbook.toml"),
        "id_prefix = \"R\"\nbuiltin_seed = false\nseed_file = \"seed.json\"\n",
    )
    .unwrap();

    rollbook(config_dir.path())
        .current_dir(work_dir.path())
        .args(["show", "R7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Seven"));
}

#[test]
fn test_env_overrides_prefix() {
    let temp_dir = tempfile::tempdir().unwrap();

    rollbook(temp_dir.path())
        .env("ROLLBOOK_ID_PREFIX", "25-26STU")
        .env("ROLLBOOK_BUILTIN_SEED", "false")
        .args(["--json", "add", "--name", "Fresh", "--class", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"25-26STU1\""));
}

#[test]
fn test_duplicate_seed_ids_are_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    let seed = temp_dir.path().join("seed.json");
    std::fs::write(
        &seed,
        r#"[{"id":"24-25STU5567","name":"Copy","address":"A","class_level":8,
             "subjects":[],"date_of_birth":"01/01/2012","phone_number":"1"}]"#,
    )
    .unwrap();

    rollbook(temp_dir.path())
        .env("ROLLBOOK_SEED_FILE", &seed)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Duplicate student ID: 24-25STU5567",
        ));
}
