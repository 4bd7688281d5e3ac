// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! File logging appends to an existing log instead of truncating it

use keypath_logging::{init_to_file, Level, LogFormat};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_init_to_file_appends_json_lines() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("service.log");
    fs::write(&log_path, "previous run\n").unwrap();

    init_to_file("keypath-logging", Level::INFO, LogFormat::Json, &log_path).unwrap();

    tracing::info!(marker = "second-run", "appended event");

    let content = fs::read_to_string(&log_path).unwrap();
    assert!(content.starts_with("previous run\n"), "log content: {}", content);

    let last = content.lines().last().unwrap();
    let event: serde_json::Value = serde_json::from_str(last).unwrap();
    assert_eq!(event["level"], "INFO");
    assert_eq!(event["fields"]["message"], "appended event");
    assert_eq!(event["fields"]["marker"], "second-run");
}
