// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Reading serialized sources into a JSON value tree
//!
//! Parsing is delegated to `serde_yaml`, `toml` and `serde_json`; whatever the
//! source format, the result is a `serde_json::Value` so lookups are format-agnostic.

use crate::error::{Error, Result};
use serde_json::Value as J;
use std::path::Path;

/// Serialized formats a source can be read from
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Format {
    #[default]
    Yaml,
    Toml,
    Json,
}

impl Format {
    /// Pick a format from the file extension, falling back to YAML
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("toml") => Format::Toml,
            Some("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Yaml => write!(f, "yaml"),
            Format::Toml => write!(f, "toml"),
            Format::Json => write!(f, "json"),
        }
    }
}

/// Parse in-memory text in the given format
pub fn parse_str(format: Format, text: &str) -> Result<J> {
    parse(format, text, None)
}

/// Read and parse a file, choosing the format from its extension
pub fn read_file(path: &Path) -> Result<J> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let format = Format::from_path(path);
    tracing::debug!(path = %path.display(), %format, bytes = content.len(), "Loading source file");
    parse(format, &content, Some(path))
}

fn parse(format: Format, text: &str, path: Option<&Path>) -> Result<J> {
    let owned = || path.map(Path::to_path_buf);
    match format {
        Format::Yaml => {
            serde_yaml::from_str::<J>(text).map_err(|source| Error::Yaml { path: owned(), source })
        }
        Format::Toml => {
            let toml: toml::Value =
                text.parse::<toml::Value>().map_err(|source| Error::Toml { path: owned(), source })?;
            Ok(toml_to_json(toml))
        }
        Format::Json => {
            serde_json::from_str::<J>(text).map_err(|source| Error::Json { path: owned(), source })
        }
    }
}

/// Convert a TOML value to JSON
///
/// Dates and datetimes become their RFC 3339 text. Non-finite floats become `null`.
fn toml_to_json(t: toml::Value) -> J {
    match t {
        toml::Value::String(s) => J::String(s),
        toml::Value::Integer(i) => J::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f).map_or(J::Null, J::Number),
        toml::Value::Boolean(b) => J::Bool(b),
        toml::Value::Datetime(d) => J::String(d.to_string()),
        toml::Value::Array(arr) => J::Array(arr.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => {
            J::Object(table.into_iter().map(|(k, v)| (k, toml_to_json(v))).collect())
        }
    }
}

/// Name of a value's kind, for error messages
pub(crate) fn kind_of(v: &J) -> &'static str {
    match v {
        J::Null => "null",
        J::Bool(_) => "boolean",
        J::Number(_) => "number",
        J::String(_) => "string",
        J::Array(_) => "sequence",
        J::Object(_) => "mapping",
    }
}

/// Accept only mappings (or null, meaning "no root") as a tree root
pub(crate) fn ensure_mapping(v: J) -> Result<J> {
    match v {
        J::Object(_) | J::Null => Ok(v),
        other => Err(Error::UnsupportedRoot {
            kind: kind_of(&other),
        }),
    }
}
