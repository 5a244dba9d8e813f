use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Run rosterly with given args.
fn rosterly() -> Command {
    cargo_bin_cmd!("rosterly")
}

fn init(dir: &assert_fs::TempDir) {
    rosterly()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
}

// ─── Init tests ──────────────────────────────────────────────────

#[test]
fn init_creates_config_and_empty_roster() {
    let dir = assert_fs::TempDir::new().unwrap();

    init(&dir);

    dir.child(".rosterly/config.toml")
        .assert(predicate::path::exists());
    dir.child(".rosterly/roster.json")
        .assert(predicate::str::contains("[]"));
}

#[test]
fn init_twice_warns_and_keeps_data() {
    let dir = assert_fs::TempDir::new().unwrap();

    init(&dir);
    rosterly()
        .current_dir(dir.path())
        .args(["add", "--first-name", "Ada", "--last-name", "Lovelace", "--joined-on", "2019-03-09"])
        .assert()
        .success();

    rosterly()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));

    rosterly()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"));
}

#[test]
fn init_sample_seeds_twenty_employees() {
    let dir = assert_fs::TempDir::new().unwrap();

    rosterly()
        .current_dir(dir.path())
        .args(["init", "--sample"])
        .assert()
        .success();

    rosterly()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Roster (20 employees)"));
}

#[test]
fn commands_without_init_fail() {
    let dir = assert_fs::TempDir::new().unwrap();

    rosterly()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

// ─── CRUD tests ──────────────────────────────────────────────────

#[test]
fn add_then_list_and_show() {
    let dir = assert_fs::TempDir::new().unwrap();
    init(&dir);

    rosterly()
        .current_dir(dir.path())
        .args(["add", "--first-name", "Ada", "--last-name", "Lovelace", "--joined-on", "2019-03-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Ada Lovelace as employee #1"));

    rosterly()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"))
        .stdout(predicate::str::contains("2019-03-09"));

    rosterly()
        .current_dir(dir.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada"))
        .stdout(predicate::str::contains("Lovelace"));
}

#[test]
fn show_missing_employee_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    init(&dir);

    rosterly()
        .current_dir(dir.path())
        .args(["show", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Employee #9 not found"));
}

#[test]
fn update_changes_selected_fields_only() {
    let dir = assert_fs::TempDir::new().unwrap();
    init(&dir);

    rosterly()
        .current_dir(dir.path())
        .args(["add", "--first-name", "Ada", "--last-name", "Lovelace", "--joined-on", "2019-03-09"])
        .assert()
        .success();

    rosterly()
        .current_dir(dir.path())
        .args(["update", "1", "--last-name", "King"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated employee #1"));

    rosterly()
        .current_dir(dir.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada"))
        .stdout(predicate::str::contains("King"))
        .stdout(predicate::str::contains("2019-03-09"));
}

#[test]
fn update_with_no_flags_is_a_noop() {
    let dir = assert_fs::TempDir::new().unwrap();
    init(&dir);

    rosterly()
        .current_dir(dir.path())
        .args(["update", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to update"));
}

#[test]
fn remove_then_list_is_empty() {
    let dir = assert_fs::TempDir::new().unwrap();
    init(&dir);

    rosterly()
        .current_dir(dir.path())
        .args(["add", "--first-name", "Ada", "--last-name", "Lovelace", "--joined-on", "2019-03-09"])
        .assert()
        .success();

    rosterly()
        .current_dir(dir.path())
        .args(["remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed employee #1"));

    rosterly()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("The roster is empty"));
}

// ─── Input validation ────────────────────────────────────────────

#[test]
fn add_rejects_malformed_dates() {
    let dir = assert_fs::TempDir::new().unwrap();
    init(&dir);

    rosterly()
        .current_dir(dir.path())
        .args(["add", "--first-name", "Ada", "--last-name", "Lovelace", "--joined-on", "last tuesday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn add_rejects_future_dates() {
    let dir = assert_fs::TempDir::new().unwrap();
    init(&dir);

    let tomorrow = chrono::Local::now().date_naive() + chrono::Days::new(1);

    rosterly()
        .current_dir(dir.path())
        .args([
            "add",
            "--first-name",
            "Ada",
            "--last-name",
            "Lovelace",
            "--joined-on",
            &tomorrow.format("%Y-%m-%d").to_string(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("future"));
}

#[test]
fn custom_data_directory_is_honored() {
    let dir = assert_fs::TempDir::new().unwrap();

    rosterly()
        .current_dir(dir.path())
        .args(["init", "--dir", "hr-data"])
        .assert()
        .success();

    dir.child("hr-data/config.toml")
        .assert(predicate::path::exists());
    dir.child(".rosterly").assert(predicate::path::missing());
}
