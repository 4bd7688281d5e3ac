// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Lookup logging, captured through a test subscriber

use keypath_core::{Format, Resolver};
use keypath_logging::logging_config::LoggingConfig;
use keypath_logging::{init_for_test, Level, LogFormat};

const CONFIG: &str = r#"
logging:
  log-level: debug
  log-format: plaintext
service:
  name: resolver-under-test
"#;

#[test]
fn test_strict_miss_is_logged() {
    let r = Resolver::from_text(Format::Yaml, CONFIG).unwrap();

    let logging: LoggingConfig = r.extract("logging").unwrap();
    assert_eq!(logging.format, Some(LogFormat::Plaintext));
    let level = logging.level_or(Level::INFO).unwrap();
    assert_eq!(level, Level::DEBUG);

    let buffer = init_for_test("keypath-core", level).unwrap();

    assert!(r.strict().get("service.port").is_err());
    assert!(r.get("service.name").is_found());

    let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
    assert!(output.contains("Strict lookup missed"), "log output: {}", output);
    assert!(output.contains("service.port"), "log output: {}", output);
}
