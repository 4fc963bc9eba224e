//! End-to-end tests of the sortviz binary

use std::fs;

use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

use crate::helpers::sortviz;

fn json_output(args: &[&str]) -> Value {
    let dir = TempDir::new().unwrap();
    let output = sortviz(&dir.path().join("config.toml"))
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn run_reports_bubble_statistics_as_json() {
    let report = json_output(&["run", "--values", "5,3,8,1", "-a", "bubble", "--json"]);
    assert_eq!(report["algorithm"], "bubble");
    assert_eq!(report["len"], 4);
    assert_eq!(report["comparisons"], 6);
    assert_eq!(report["swaps"], 4);
    assert_eq!(report["sorted"], serde_json::json!([1, 3, 5, 8]));
}

#[test]
fn run_all_sorts_the_same_input_with_every_algorithm() {
    let reports = json_output(&["run", "--all", "--values", "4,9,2,7,1", "--json"]);
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 5);
    let names: Vec<&str> = reports
        .iter()
        .map(|r| r["algorithm"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["bubble", "selection", "insertion", "merge", "quick"]);
    for report in reports {
        assert_eq!(report["sorted"], serde_json::json!([1, 2, 4, 7, 9]));
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let args = ["run", "-a", "quick", "-n", "40", "--seed", "17", "--json"];
    let a = json_output(&args);
    let b = json_output(&args);
    assert_eq!(a["sorted"], b["sorted"]);
    assert_eq!(a["comparisons"], b["comparisons"]);
    assert_eq!(a["len"], 40);
}

#[test]
fn run_prints_table_by_default() {
    let dir = TempDir::new().unwrap();
    sortviz(&dir.path().join("config.toml"))
        .args(["run", "--values", "3,1,2", "-a", "insertion"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparisons"))
        .stdout(predicate::str::contains("Insertion Sort"))
        .stdout(predicate::str::contains("Sorted: 1, 2, 3"));
}

#[test]
fn empty_values_are_nothing_to_sort() {
    let dir = TempDir::new().unwrap();
    sortviz(&dir.path().join("config.toml"))
        .args(["run", "--values"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to sort"));
}

#[test]
fn zero_value_is_rejected() {
    let dir = TempDir::new().unwrap();
    sortviz(&dir.path().join("config.toml"))
        .args(["run", "--values", "3,0,2", "-a", "bubble"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bubble Sort: Invalid value range"))
        .stderr(predicate::str::contains("1 of 1 runs failed"));
}

#[test]
fn speed_out_of_range_is_rejected() {
    let dir = TempDir::new().unwrap();
    sortviz(&dir.path().join("config.toml"))
        .args(["run", "-s", "11", "--values", "2,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid speed 11"));
}

#[test]
fn config_file_selects_algorithm() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[playback]\nalgorithm = \"merge\"\n").unwrap();

    let output = sortviz(&path)
        .args(["run", "--values", "2,1", "--json"])
        .output()
        .unwrap();
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["algorithm"], "merge");
}

#[test]
fn config_init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sub").join("config.toml");

    sortviz(&path).args(["config", "init"]).assert().success();
    assert!(path.exists());

    sortviz(&path)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    sortviz(&path)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_show_and_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    sortviz(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[playback]"))
        .stdout(predicate::str::contains("speed = 5"));

    sortviz(&path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn info_describes_algorithms() {
    let dir = TempDir::new().unwrap();
    sortviz(&dir.path().join("config.toml"))
        .args(["info", "quick"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick Sort"))
        .stdout(predicate::str::contains("O(n log n)"));

    let output = sortviz(&dir.path().join("config.toml"))
        .arg("info")
        .output()
        .unwrap();
    let text = String::from_utf8(output.stdout).unwrap();
    for name in ["Bubble", "Selection", "Insertion", "Merge", "Quick"] {
        assert!(text.contains(&format!("{} Sort", name)));
    }
}

#[test]
fn completions_mention_binary_name() {
    let dir = TempDir::new().unwrap();
    sortviz(&dir.path().join("config.toml"))
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sortviz"));
}

#[test]
fn log_file_records_finished_sort() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("sortviz.log");
    sortviz(&dir.path().join("config.toml"))
        .arg("--log-file")
        .arg(&log)
        .args(["run", "--values", "3,2,1"])
        .assert()
        .success();

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("sort finished"));
}
