//! Result record parsing tests against real snapshot files

use std::fs;
use std::path::{Path, PathBuf};

use results_browser::record::ResultRecord;
use results_browser::Error;
use tempfile::TempDir;

fn write_fixture(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("write fixture");
    path
}

// =============================================================================
// Happy path
// =============================================================================

#[test]
fn test_load_deinterleaves_per_control() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        dir.path(),
        "results-a.json",
        r#"{"epoch": 3, "mse": 0.5, "ctrls": ["a", "b"], "cell_count": 1,
            "sample_count": 2, "targets": [1, 2, 3, 4], "outputs": [5, 6, 7, 8],
            "cell_states": [0.1, 0.2]}"#,
    );

    let record = ResultRecord::load(&path).expect("fixture must load");

    assert_eq!(record.source_path(), path);
    assert_eq!(record.epoch(), 3);
    assert!((record.mse() - 0.5).abs() < f64::EPSILON);
    assert_eq!(record.ctrl_names(), ["a", "b"]);
    assert_eq!(record.ctrl_count(), 2);
    assert_eq!(record.cell_count(), 1);
    assert_eq!(record.sample_count(), 2);

    assert_eq!(record.targets_for("a"), Some(&[1.0, 3.0][..]));
    assert_eq!(record.targets_for("b"), Some(&[2.0, 4.0][..]));
    assert_eq!(record.outputs_for("a"), Some(&[5.0, 7.0][..]));
    assert_eq!(record.outputs_for("b"), Some(&[6.0, 8.0][..]));
    assert_eq!(record.cell_states(), [vec![0.1, 0.2]]);
}

#[test]
fn test_load_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        dir.path(),
        "results-b.json",
        r#"{"epoch": 12, "mse": 0.031, "ctrls": [1, 74], "cell_count": 3,
            "sample_count": 2, "targets": [0.1, 0.2, 0.3, 0.4],
            "outputs": [0.0, 0.1, 0.2, 0.3],
            "cell_states": [1, 2, 3, 4, 5, 6]}"#,
    );

    let first = ResultRecord::load(&path).unwrap();
    let second = ResultRecord::load(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_numeric_ctrls_load_as_strings() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        dir.path(),
        "results-c.json",
        r#"{"epoch": 0, "mse": 1.5, "ctrls": [1, 74], "cell_count": 1,
            "sample_count": 1, "targets": [0.5, 0.6], "outputs": [0.4, 0.7],
            "cell_states": [0.0]}"#,
    );

    let record = ResultRecord::load(&path).unwrap();

    assert_eq!(record.ctrl_names(), ["1", "74"]);
    assert_eq!(record.targets_for("74"), Some(&[0.6][..]));
}

#[test]
fn test_trailing_partial_group_truncated() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        dir.path(),
        "results-d.json",
        r#"{"epoch": 1, "mse": 0.9, "ctrls": ["a", "b"], "cell_count": 2,
            "sample_count": 2, "targets": [1, 2, 3, 4, 5],
            "outputs": [6, 7, 8, 9, 10], "cell_states": [1, 2, 3]}"#,
    );

    let record = ResultRecord::load(&path).unwrap();

    // 5 values across 2 controls: the fifth is dropped
    assert_eq!(record.targets_for("a"), Some(&[1.0, 3.0][..]));
    assert_eq!(record.targets_for("b"), Some(&[2.0, 4.0][..]));
    // 3 values across 2 cells: the third is dropped
    assert_eq!(record.cell_states(), [vec![1.0], vec![2.0]]);
}

// =============================================================================
// Malformed input
// =============================================================================

#[test]
fn test_invalid_json_is_malformed_input() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path(), "results-e.json", "{ not json");

    let err = ResultRecord::load(&path).unwrap_err();

    assert!(matches!(err, Error::MalformedInput { .. }));
    assert!(err.to_string().contains("results-e.json"));
}

#[test]
fn test_missing_key_is_malformed_input() {
    let dir = TempDir::new().unwrap();
    // no "mse"
    let path = write_fixture(
        dir.path(),
        "results-f.json",
        r#"{"epoch": 1, "ctrls": ["a"], "cell_count": 1, "sample_count": 0,
            "targets": [], "outputs": [], "cell_states": []}"#,
    );

    let err = ResultRecord::load(&path).unwrap_err();

    assert!(matches!(err, Error::MalformedInput { .. }));
    assert!(err.to_string().contains("mse"));
}

#[test]
fn test_mistyped_key_is_malformed_input() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        dir.path(),
        "results-g.json",
        r#"{"epoch": "three", "mse": 0.5, "ctrls": ["a"], "cell_count": 1,
            "sample_count": 0, "targets": [], "outputs": [], "cell_states": []}"#,
    );

    assert!(matches!(
        ResultRecord::load(&path).unwrap_err(),
        Error::MalformedInput { .. }
    ));
}

#[test]
fn test_negative_epoch_is_malformed_input() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        dir.path(),
        "results-h.json",
        r#"{"epoch": -2, "mse": 0.5, "ctrls": ["a"], "cell_count": 1,
            "sample_count": 0, "targets": [], "outputs": [], "cell_states": []}"#,
    );

    assert!(matches!(
        ResultRecord::load(&path).unwrap_err(),
        Error::MalformedInput { .. }
    ));
}

#[test]
fn test_mismatched_targets_outputs_is_malformed_input() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        dir.path(),
        "results-i.json",
        r#"{"epoch": 1, "mse": 0.5, "ctrls": ["a"], "cell_count": 1,
            "sample_count": 2, "targets": [1, 2], "outputs": [1],
            "cell_states": [0]}"#,
    );

    let err = ResultRecord::load(&path).unwrap_err();

    assert!(matches!(err, Error::MalformedInput { .. }));
    assert!(err.to_string().contains("outputs"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();

    let err = ResultRecord::load(dir.path().join("results-missing.json")).unwrap_err();

    assert!(matches!(err, Error::Io(_)));
}
