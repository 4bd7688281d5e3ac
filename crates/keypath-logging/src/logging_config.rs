// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Logging configuration types

use crate::{LogFormat, Level};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logging section of a configuration tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Logging verbosity level
    #[serde(rename = "log-level")]
    pub level: Option<String>,
    /// Output format, plaintext when unset
    #[serde(rename = "log-format")]
    pub format: Option<LogFormat>,
    /// Log to this file instead of stdout
    #[serde(rename = "log-file")]
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// The configured level, or `fallback` when unset
    pub fn level_or(&self, fallback: Level) -> anyhow::Result<Level> {
        match &self.level {
            Some(s) => s
                .parse::<Level>()
                .map_err(|_| anyhow::anyhow!("Invalid log level: {}", s)),
            None => Ok(fallback),
        }
    }

    /// Install a global subscriber according to this configuration
    pub fn init(&self, component: &str) -> anyhow::Result<()> {
        let level = self.level_or(Level::INFO)?;
        let format = self.format.unwrap_or_default();
        match &self.file {
            Some(path) => crate::init_to_file(component, level, format, path),
            None => crate::init(component, level, format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_kebab_keys() {
        let cfg: LoggingConfig = serde_json::from_value(serde_json::json!({
            "log-level": "debug",
            "log-format": "json",
            "log-file": "/var/log/app.log",
        }))
        .unwrap();
        assert_eq!(cfg.level.as_deref(), Some("debug"));
        assert_eq!(cfg.format, Some(LogFormat::Json));
        assert_eq!(cfg.file, Some(PathBuf::from("/var/log/app.log")));
    }

    #[test]
    fn test_level_or() {
        let cfg = LoggingConfig {
            level: Some("warn".into()),
            ..Default::default()
        };
        assert_eq!(cfg.level_or(Level::INFO).unwrap(), Level::WARN);
        assert_eq!(LoggingConfig::default().level_or(Level::ERROR).unwrap(), Level::ERROR);

        let bad = LoggingConfig {
            level: Some("loud".into()),
            ..Default::default()
        };
        assert!(bad.level_or(Level::INFO).is_err());
    }
}
