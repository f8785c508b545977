//! Integration tests for the casebench CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_run_text_output() {
    let mut cmd = Command::cargo_bin("casebench").unwrap();
    cmd.arg("run")
        .arg("-a")
        .arg("merge-sort")
        .arg("-s")
        .arg("16,64")
        .arg("--seed")
        .arg("42")
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("# merge-sort"))
        .stdout(predicate::str::contains("best"))
        .stdout(predicate::str::contains("worst"))
        .stdout(predicate::str::contains("average"))
        .stdout(predicate::str::contains(" ns"));
}

#[test]
fn test_run_json_output() {
    let mut cmd = Command::cargo_bin("casebench").unwrap();
    cmd.arg("run")
        .arg("-a")
        .arg("bubble-sort")
        .arg("-s")
        .arg("8,32")
        .arg("--seed")
        .arg("7")
        .arg("-f")
        .arg("json")
        .arg("-q");

    let output = cmd.assert().success().get_output().stdout.clone();
    let rows: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let rows = rows.as_array().unwrap();

    // 2 sizes x 3 categories
    assert_eq!(rows.len(), 6);
    for row in rows {
        assert_eq!(row["algorithm"], "bubble-sort");
        assert!(row["elapsed_nanos"].as_u64().is_some());
    }
}

#[test]
fn test_run_markdown_output() {
    let mut cmd = Command::cargo_bin("casebench").unwrap();
    cmd.arg("run")
        .arg("-a")
        .arg("linked-search")
        .arg("-s")
        .arg("10,20")
        .arg("-f")
        .arg("markdown")
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("## linked-search"))
        .stdout(predicate::str::contains("| size | case | value |"))
        .stdout(predicate::str::contains("*Total rows: 6*"));
}

#[test]
fn test_run_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("results.json");

    let mut cmd = Command::cargo_bin("casebench").unwrap();
    cmd.arg("run")
        .arg("-a")
        .arg("bst-insert")
        .arg("-s")
        .arg("16")
        .arg("-f")
        .arg("json")
        .arg("-o")
        .arg(&output_file)
        .arg("-q");

    cmd.assert().success();

    let content = fs::read_to_string(&output_file).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 3);
}

#[test]
fn test_curves_output() {
    let mut cmd = Command::cargo_bin("casebench").unwrap();
    cmd.arg("curves")
        .arg("-a")
        .arg("bubble-sort")
        .arg("-s")
        .arg("10,100")
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("# bubble-sort"))
        // worst case at n=100 is quadratic
        .stdout(predicate::str::contains("10000 ops"));
}

#[test]
fn test_list_algorithms() {
    let mut cmd = Command::cargo_bin("casebench").unwrap();
    cmd.arg("list").arg("algorithms");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("bubble-sort"))
        .stdout(predicate::str::contains("merge-sort"))
        .stdout(predicate::str::contains("selection-sort"))
        .stdout(predicate::str::contains("bst-insert"))
        .stdout(predicate::str::contains("linked-search"))
        .stdout(predicate::str::contains("O(n log n)"));
}

#[test]
fn test_list_formats() {
    let mut cmd = Command::cargo_bin("casebench").unwrap();
    cmd.arg("list").arg("formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_unknown_algorithm_fails() {
    let mut cmd = Command::cargo_bin("casebench").unwrap();
    cmd.arg("run").arg("-a").arg("quick-sort").arg("-q");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown algorithm: quick-sort"))
        .stderr(predicate::str::contains("available algorithms"));
}

#[test]
fn test_non_increasing_sweep_fails() {
    let mut cmd = Command::cargo_bin("casebench").unwrap();
    cmd.arg("run")
        .arg("-a")
        .arg("merge-sort")
        .arg("-s")
        .arg("100,50")
        .arg("-q");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("strictly increasing"));
}

#[test]
fn test_zero_size_fails() {
    let mut cmd = Command::cargo_bin("casebench").unwrap();
    cmd.arg("run")
        .arg("-a")
        .arg("merge-sort")
        .arg("-s")
        .arg("0,10")
        .arg("-q");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("input size must be positive"));
}

#[test]
fn test_seeded_runs_share_input_shapes() {
    // Two seeded runs measure the same shuffled inputs; timings differ but
    // both produce a full, well-formed table.
    for _ in 0..2 {
        let mut cmd = Command::cargo_bin("casebench").unwrap();
        cmd.arg("run")
            .arg("-a")
            .arg("selection-sort")
            .arg("-s")
            .arg("32")
            .arg("--seed")
            .arg("99")
            .arg("-f")
            .arg("json")
            .arg("-q");

        let output = cmd.assert().success().get_output().stdout.clone();
        let rows: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 3);
    }
}
