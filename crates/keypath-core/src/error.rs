// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for resolver construction and lookups

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for resolver operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a resolver or reading from it
#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported root argument: expected a mapping, got {kind}")]
    UnsupportedRoot { kind: &'static str },

    #[error("reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parsing error{}: {source}", at(.path))]
    Yaml {
        path: Option<PathBuf>,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("TOML parsing error{}: {source}", at(.path))]
    Toml {
        path: Option<PathBuf>,
        #[source]
        source: toml::de::Error,
    },

    #[error("JSON parsing error{}: {source}", at(.path))]
    Json {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    #[error("environment overlay error: {0}")]
    Env(#[from] config::ConfigError),

    /// Raised by a strict query when the path does not resolve. Displays as the
    /// rendered message only.
    #[error("{message}")]
    StrictLookup { path: String, message: String },

    #[error(transparent)]
    Missing(#[from] NotFound),

    #[error("extracting '{path}': {source}")]
    Extract {
        path: String,
        #[source]
        source: serde_path_to_error::Error<serde_json::Error>,
    },
}

fn at(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" in {:?}", p),
        None => String::new(),
    }
}

/// The value handed back when a lookup misses and the caller asked for neither a
/// default nor strictness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    /// The full dotted path that was requested
    pub path: String,
}

impl NotFound {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key '{}' not found", self.path)
    }
}

impl std::error::Error for NotFound {}
