// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Environment variable and key=value override overlays

use crate::error::Result;
use serde_json::Value as J;

/// Create a JSON overlay from `<PREFIX>_*` environment variables
///
/// Nesting uses a double underscore: `APP_DB__HOST=x` becomes `{"db": {"host": "x"}}`.
/// Keys are lowercased and values stay strings.
pub fn env_overlay(prefix: &str) -> Result<J> {
    let built = config::Config::builder()
        .add_source(config::Environment::with_prefix(prefix).prefix_separator("_").separator("__"))
        .build()?;

    let map = built.try_deserialize::<serde_json::Map<String, J>>()?;
    tracing::debug!(prefix, keys = map.len(), "Collected environment overlay");
    Ok(J::Object(map))
}

/// Create a JSON overlay from dotted key=value pairs
pub fn overrides_overlay<K, V>(kv_pairs: &[(K, V)]) -> J
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut root = serde_json::json!({});
    for (k, v) in kv_pairs {
        crate::merge::insert_dotted(&mut root, k.as_ref(), J::String(v.as_ref().to_string()));
    }
    root
}
