//! Basic CLI E2E tests.
//!
//! Tests run the built binary against a throwaway data directory with the
//! date pinned through `HABITCYCLE_TODAY`.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli_on(dir: &Path, today: &str, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_habitcycle"))
        .args(args)
        .env("HABITCYCLE_DATA_DIR", dir)
        .env("HABITCYCLE_TODAY", today)
        .env_remove("HABITCYCLE_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli(dir: &Path, args: &[&str]) -> (String, String, i32) {
    run_cli_on(dir, "2025-06-15", args)
}

/// Invoke a CLI command and expect success.
fn run_cli_success(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(dir, args);
    assert_eq!(code, 0, "CLI command {:?} failed: {}", args, stderr);
    stdout
}

fn parse_json(json: &str) -> serde_json::Value {
    serde_json::from_str(json).expect("Failed to parse JSON output")
}

#[test]
fn test_habit_add_and_list() {
    let dir = TempDir::new().unwrap();
    assert_eq!(
        run_cli_success(dir.path(), &["habit", "add", "  Read  ", "--color", "#0ea5a4"]).trim(),
        "ok"
    );
    run_cli_success(dir.path(), &["habit", "add", "Run"]);

    let habits = parse_json(&run_cli_success(dir.path(), &["habit", "list", "--json"]));
    let habits = habits.as_array().unwrap();
    assert_eq!(habits.len(), 2);
    assert_eq!(habits[0]["name"], "Read");
    assert_eq!(habits[0]["color"], "#0ea5a4");
    assert_eq!(habits[0]["days"], 30);
    assert!(habits[1]["color"].as_str().unwrap().starts_with('#'));

    let text = run_cli_success(dir.path(), &["habit", "list"]);
    assert!(text.starts_with("June 2025"));
    assert!(text.contains(" 1. Read (#0ea5a4)  0/30 (0%)"));
}

#[test]
fn test_habit_add_rejects_bad_input() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["habit", "add", "   "]);
    assert_eq!(code, 1);
    assert!(stderr.contains("must not be empty"));

    let (_, stderr, code) = run_cli(dir.path(), &["habit", "add", "Read", "--color", "red"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Invalid color 'red'"));
}

#[test]
fn test_toggle_and_streak() {
    let dir = TempDir::new().unwrap();
    run_cli_success(dir.path(), &["habit", "add", "Read", "--color", "#000"]);
    for day in ["1", "2", "3", "5"] {
        let out = run_cli_success(dir.path(), &["day", "toggle", "1", day]);
        assert_eq!(out.trim(), format!("day {day}: done"));
    }
    let out = run_cli_success(dir.path(), &["day", "toggle", "1", "5"]);
    assert_eq!(out.trim(), "day 5: not done");

    let streak = parse_json(&run_cli_success(dir.path(), &["stats", "streak", "1"]));
    assert_eq!(streak["best"], 3);
    assert_eq!(streak["current"], 0);

    let (_, stderr, code) = run_cli(dir.path(), &["stats", "streak", "2"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("habit 2 out of range"));
}

#[test]
fn test_out_of_range_mutations_are_ignored() {
    let dir = TempDir::new().unwrap();
    run_cli_success(dir.path(), &["habit", "add", "Read", "--color", "#000"]);

    let out = run_cli_success(dir.path(), &["day", "toggle", "1", "31"]);
    assert!(out.starts_with("ignored: day index 30 out of range"));
    let out = run_cli_success(dir.path(), &["habit", "delete", "4"]);
    assert!(out.starts_with("ignored: habit index 3 out of range"));

    let (_, _, code) = run_cli(dir.path(), &["habit", "delete", "0"]);
    assert_eq!(code, 2, "position 0 is a usage error");
}

#[test]
fn test_move_and_delete() {
    let dir = TempDir::new().unwrap();
    for name in ["A", "B", "C"] {
        run_cli_success(dir.path(), &["habit", "add", name, "--color", "#000"]);
    }
    run_cli_success(dir.path(), &["habit", "move", "1", "3"]);
    run_cli_success(dir.path(), &["habit", "delete", "1"]);

    let habits = parse_json(&run_cli_success(dir.path(), &["habit", "list", "--json"]));
    let names: Vec<_> = habits
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["C", "A"]);
}

#[test]
fn test_month_rollover_and_select() {
    let dir = TempDir::new().unwrap();
    run_cli_success(dir.path(), &["habit", "add", "Read", "--color", "#000"]);
    run_cli_success(dir.path(), &["day", "toggle", "1", "1"]);

    let (out, stderr, code) = run_cli_on(dir.path(), "2025-07-01", &["month", "rollover"]);
    assert_eq!(code, 0, "{stderr}");
    let rollover = parse_json(&out);
    assert_eq!(rollover["key"], "2025-7");
    assert_eq!(rollover["created"], true);
    assert_eq!(rollover["carried_habits"], 1);

    let (out, _, _) = run_cli_on(dir.path(), "2025-07-01", &["month", "list", "--json"]);
    let months = parse_json(&out);
    let months = months.as_array().unwrap();
    assert_eq!(months.len(), 2);
    assert_eq!(months[0]["key"], "2025-6");
    assert_eq!(months[0]["archived"], true);
    assert_eq!(months[1]["label"], "July 2025");
    assert_eq!(months[1]["active"], true);

    let (out, _, code) = run_cli_on(dir.path(), "2025-07-01", &["month", "select", "1999-1"]);
    assert_eq!(code, 1);
    assert!(out.is_empty());

    let (out, _, code) = run_cli_on(dir.path(), "2025-07-01", &["stats", "summary"]);
    assert_eq!(code, 0);
    assert_eq!(parse_json(&out)["done"], 0);
}

#[test]
fn test_past_month_is_reachable_with_month_option() {
    let dir = TempDir::new().unwrap();
    let may = |args: &[&str]| run_cli_on(dir.path(), "2025-05-10", args);
    assert_eq!(may(&["habit", "add", "Read", "--color", "#000"]).2, 0);
    assert_eq!(may(&["day", "toggle", "1", "1"]).2, 0);

    let selected = parse_json(&run_cli_success(dir.path(), &["month", "select", "2025-5"]));
    assert_eq!(selected["label"], "May 2025");
    assert_eq!(selected["archived"], true);
    assert_eq!(selected["summary"]["done"], 1);

    let text = run_cli_success(dir.path(), &["--month", "2025-5", "habit", "list"]);
    assert!(text.starts_with("May 2025"));
    assert!(text.contains("1/30"));

    let summary = parse_json(&run_cli_success(dir.path(), &["stats", "summary", "--month", "2025-5"]));
    assert_eq!(summary["done"], 1);

    let out = run_cli_success(dir.path(), &["--month", "2025-5", "day", "toggle", "1", "2"]);
    assert_eq!(out.trim(), "ignored: cycle is archived");

    run_cli_success(dir.path(), &["--month", "2025-5", "habit", "add", "Late", "--color", "#fff"]);
    let may_habits = parse_json(&run_cli_success(
        dir.path(),
        &["--month", "2025-5", "habit", "list", "--json"],
    ));
    assert_eq!(may_habits.as_array().unwrap().len(), 2);

    let june = parse_json(&run_cli_success(dir.path(), &["habit", "list", "--json"]));
    assert_eq!(june.as_array().unwrap().len(), 1);
    assert_eq!(june[0]["done"], 0);

    let (_, stderr, code) = run_cli(dir.path(), &["--month", "1999-1", "habit", "list"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("1999-1"));
}

#[test]
fn test_stats_commands() {
    let dir = TempDir::new().unwrap();
    run_cli_success(dir.path(), &["habit", "add", "Read", "--color", "#000"]);
    run_cli_success(dir.path(), &["habit", "add", "Run", "--color", "#fff"]);
    run_cli_success(dir.path(), &["day", "toggle", "1", "1"]);
    run_cli_success(dir.path(), &["day", "toggle", "2", "1"]);
    run_cli_success(dir.path(), &["day", "toggle", "1", "2"]);

    let summary = parse_json(&run_cli_success(dir.path(), &["stats", "summary"]));
    assert_eq!(summary["done"], 3);
    assert_eq!(summary["total"], 60);
    assert_eq!(summary["percent"], 5);

    let weeks = parse_json(&run_cli_success(dir.path(), &["stats", "summary", "--weekly"]));
    assert_eq!(weeks.as_array().unwrap().len(), 5);
    assert_eq!(weeks[0]["done"], 3);
    assert_eq!(weeks[4]["total"], 4);

    let habits = parse_json(&run_cli_success(dir.path(), &["stats", "habits"]));
    assert_eq!(habits[0]["streak"]["best"], 2);

    let cells = parse_json(&run_cli_success(dir.path(), &["stats", "heatmap", "--json"]));
    assert_eq!(cells.as_array().unwrap().len(), 30);
    assert_eq!(cells[0]["level"], 4);
    assert_eq!(cells[1]["level"], 2);

    let grid = run_cli_success(dir.path(), &["stats", "heatmap"]);
    assert_eq!(grid.lines().count(), 6);

    let rows = parse_json(&run_cli_success(
        dir.path(),
        &["stats", "heatmap", "--per-habit", "--json"],
    ));
    assert_eq!(rows.as_array().unwrap().len(), 2);
    assert_eq!(rows[0]["name"], "Read");
    assert_eq!(rows[0]["cells"][1]["level"], 4);
    assert_eq!(rows[1]["cells"][1]["level"], 0);

    let text = run_cli_success(dir.path(), &["stats", "heatmap", "--per-habit"]);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("Read  ██"));
    assert!(lines[2].starts_with("Run   █·"));
}

#[test]
fn test_theme_commands() {
    let dir = TempDir::new().unwrap();
    assert_eq!(run_cli_success(dir.path(), &["theme", "show"]).trim(), "dark");
    assert_eq!(run_cli_success(dir.path(), &["theme", "toggle"]).trim(), "light");
    assert_eq!(run_cli_success(dir.path(), &["theme", "show"]).trim(), "light");
    assert_eq!(run_cli_success(dir.path(), &["theme", "set", "dark"]).trim(), "dark");
    let (_, _, code) = run_cli(dir.path(), &["theme", "set", "sepia"]);
    assert_eq!(code, 2);
}

#[test]
fn test_config_commands() {
    let dir = TempDir::new().unwrap();
    assert_eq!(run_cli_success(dir.path(), &["config", "get", "cycle.days"]).trim(), "30");
    assert_eq!(run_cli_success(dir.path(), &["config", "set", "cycle.days", "31"]).trim(), "ok");
    assert_eq!(run_cli_success(dir.path(), &["config", "get", "cycle.days"]).trim(), "31");

    let (_, _, code) = run_cli(dir.path(), &["config", "set", "cycle.days", "0"]);
    assert_eq!(code, 1);
    let (_, _, code) = run_cli(dir.path(), &["config", "get", "cycle.nope"]);
    assert_eq!(code, 1);

    run_cli_success(dir.path(), &["habit", "add", "Read", "--color", "#000"]);
    let habits = parse_json(&run_cli_success(dir.path(), &["habit", "list", "--json"]));
    assert_eq!(habits[0]["days"], 31);

    let listed = parse_json(&run_cli_success(dir.path(), &["config", "list"]));
    assert_eq!(listed["cycle"]["days"], 31);
    assert!(run_cli_success(dir.path(), &["config", "list", "--toml"]).contains("[cycle]"));

    run_cli_success(dir.path(), &["config", "reset"]);
    assert_eq!(run_cli_success(dir.path(), &["config", "get", "cycle.days"]).trim(), "30");
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();
    let out = run_cli_success(dir.path(), &["completions", "bash"]);
    assert!(out.contains("habitcycle"));
}
