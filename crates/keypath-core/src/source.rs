// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Building one tree out of several layered sources

use crate::error::Result;
use crate::resolve::Resolver;
use crate::{env, loader, merge};
use serde_json::Value as J;
use std::path::PathBuf;

/// One layer of a resolver's tree
#[derive(Debug, Clone)]
pub enum Source {
    /// An in-memory tree
    Value(J),
    /// A file that must exist
    File(PathBuf),
    /// A file that is skipped when it does not exist
    OptionalFile(PathBuf),
    /// `<PREFIX>_*` environment variables, see [`env::env_overlay`]
    Env { prefix: String },
    /// Dotted `key=value` pairs, see [`env::overrides_overlay`]
    Overrides(Vec<(String, String)>),
}

impl Source {
    /// Produce this layer's tree, or `None` for an absent optional file
    pub fn load(&self) -> Result<Option<J>> {
        let json = match self {
            Source::Value(v) => v.clone(),
            Source::File(path) => loader::read_file(path)?,
            Source::OptionalFile(path) => {
                if !path.exists() {
                    tracing::debug!(path = %path.display(), "Optional source file absent, skipping");
                    return Ok(None);
                }
                loader::read_file(path)?
            }
            Source::Env { prefix } => env::env_overlay(prefix)?,
            Source::Overrides(pairs) => env::overrides_overlay(pairs),
        };
        Ok(Some(loader::ensure_mapping(json)?))
    }

    fn label(&self) -> String {
        match self {
            Source::Value(_) => "value".to_string(),
            Source::File(p) | Source::OptionalFile(p) => p.display().to_string(),
            Source::Env { prefix } => format!("env:{}", prefix),
            Source::Overrides(pairs) => format!("overrides({})", pairs.len()),
        }
    }
}

impl From<J> for Source {
    fn from(v: J) -> Self {
        Source::Value(v)
    }
}

impl From<PathBuf> for Source {
    fn from(p: PathBuf) -> Self {
        Source::File(p)
    }
}

/// Merge sources in order; later layers win
///
/// Mappings merge key by key, sequences and scalars replace, and a `null` in a
/// later layer leaves the earlier value in place. A `null` under a key no earlier
/// layer set is dropped, so that key still misses.
pub fn merge_sources(sources: &[Source]) -> Result<J> {
    let mut json = J::Null;
    for source in sources {
        if let Some(layer) = source.load()? {
            tracing::debug!(source = %source.label(), "Merging layer");
            if json.is_null() {
                json = layer;
            } else {
                merge::merge_two_json(&mut json, layer);
            }
        }
    }
    Ok(json)
}

impl Resolver {
    /// Build a resolver from layered sources, merged in order
    pub fn from_layers(sources: &[Source]) -> Result<Self> {
        Self::new(merge_sources(sources)?)
    }
}
