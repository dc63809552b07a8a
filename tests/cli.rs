use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn todo(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("todo").unwrap();
    cmd.env("TODO_HOME", home.path());
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("TODO_LOG");
    cmd
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_bare_invocation_on_empty_store() {
    let home = TempDir::new().unwrap();
    todo(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Open tasks (0 items)"));
}

#[test]
fn test_add_and_list() {
    let home = TempDir::new().unwrap();

    todo(&home)
        .args(["Call", "client", "due", "2030-01-15", "#work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created: Call client (ID: 1)"))
        .stdout(predicate::str::contains("Due: 2030-01-15"))
        .stdout(predicate::str::contains("Tags: #work"));

    todo(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Open tasks (1 items)"))
        .stdout(predicate::str::contains("Call client"))
        .stdout(predicate::str::contains("#work"));
}

#[test]
fn test_list_json_orders_dated_first() {
    let home = TempDir::new().unwrap();

    todo(&home).args(["Undated", "chore"]).assert().success();
    todo(&home).args(["Later", "by", "2030-03-01"]).assert().success();
    todo(&home).args(["Sooner", "by", "2030-02-01"]).assert().success();

    let value = json_output(todo(&home).args(["-o", "json", "list"]));
    assert_eq!(value["list"], "Open tasks");
    assert_eq!(value["count"], 3);

    let titles: Vec<&str> = value["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Sooner", "Later", "Undated chore"]);
}

#[test]
fn test_done_is_idempotent() {
    let home = TempDir::new().unwrap();
    todo(&home).args(["Pay", "rent"]).assert().success();

    todo(&home)
        .args(["done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed: Pay rent (ID: 1)"));

    todo(&home)
        .args(["done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already completed: Pay rent"));

    todo(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Open tasks (0 items)"));

    let value = json_output(todo(&home).args(["-o", "json", "list", "--completed"]));
    assert_eq!(value["count"], 1);
    assert_eq!(value["items"][0]["completed"], true);
    assert!(value["items"][0]["completed_at"].is_string());
}

#[test]
fn test_done_unknown_id_fails() {
    let home = TempDir::new().unwrap();
    todo(&home)
        .args(["done", "999"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn test_empty_title_fails_and_creates_nothing() {
    let home = TempDir::new().unwrap();
    todo(&home)
        .args(["#work", "for", "2030-01-01"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("title"));

    let value = json_output(todo(&home).args(["-o", "json", "list", "--all"]));
    assert_eq!(value["count"], 0);
}

#[test]
fn test_unresolved_phrase_stays_in_title() {
    let home = TempDir::new().unwrap();
    let value = json_output(todo(&home).args(["-o", "json", "Task", "for", "xyzzy"]));
    assert_eq!(value["task"]["title"], "Task for xyzzy");
    assert_eq!(value["task"]["due_date"], serde_json::Value::Null);
}

#[test]
fn test_add_subcommand_allows_command_words() {
    let home = TempDir::new().unwrap();
    let value = json_output(todo(&home).args([
        "-o",
        "json",
        "add",
        "-d",
        "boxes by the door",
        "list",
        "the",
        "attic",
        "#home",
    ]));
    assert_eq!(value["task"]["title"], "list the attic");
    assert_eq!(value["task"]["description"], "boxes by the door");
    assert_eq!(value["task"]["tags"], serde_json::json!(["home"]));
}

#[test]
fn test_parse_only_does_not_create() {
    let home = TempDir::new().unwrap();
    todo(&home)
        .args(["add", "--parse-only", "Review", "PR", "by", "2030-05-05", "#code"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Parsed Task (not created)"))
        .stdout(predicate::str::contains("Title: Review PR"))
        .stdout(predicate::str::contains("Due: 2030-05-05"));

    let value = json_output(todo(&home).args(["-o", "json", "list", "--all"]));
    assert_eq!(value["count"], 0);
}

#[test]
fn test_list_filters() {
    let home = TempDir::new().unwrap();
    todo(&home).args(["Old", "bill", "due", "2000-01-01", "#money"]).assert().success();
    todo(&home).args(["Future", "trip", "due", "2099-01-01", "#travel"]).assert().success();

    let overdue = json_output(todo(&home).args(["-o", "json", "list", "--overdue"]));
    assert_eq!(overdue["count"], 1);
    assert_eq!(overdue["items"][0]["title"], "Old bill");

    let tagged = json_output(todo(&home).args(["-o", "json", "list", "--tag", "TRAVEL"]));
    assert_eq!(tagged["count"], 1);
    assert_eq!(tagged["items"][0]["title"], "Future trip");

    let searched = json_output(todo(&home).args(["-o", "json", "list", "--search", "bill"]));
    assert_eq!(searched["count"], 1);

    todo(&home)
        .args(["list", "--due-before", "whenever"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_show_task() {
    let home = TempDir::new().unwrap();
    todo(&home).args(["add", "-d", "bring slides", "Team", "sync"]).assert().success();

    todo(&home)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Team sync"))
        .stdout(predicate::str::contains("Description: bring slides"));

    todo(&home).args(["show", "2"]).assert().failure().code(3);
}

#[test]
fn test_config_path_uses_home() {
    let home = TempDir::new().unwrap();
    let value = json_output(todo(&home).args(["-o", "json", "config", "path"]));
    let database = value["database"].as_str().unwrap();
    assert!(database.starts_with(home.path().to_str().unwrap()));
    assert!(database.ends_with("todo.db"));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    todo(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_todo"));
}
