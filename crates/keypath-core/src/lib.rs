// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Dotted-path lookups over nested configuration trees.
//!
//! A [`Resolver`] owns one tree, built from an in-memory value, a YAML/TOML/JSON
//! file, or several layered sources, and answers lookups such as
//! `"server.tls.cert"` against it. All operations work on `serde_json::Value`
//! regardless of where the tree came from.
//!
//! ```rust
//! use keypath_core::{Lookup, Resolver};
//! use serde_json::json;
//!
//! let r = Resolver::new(json!({"b": {"child": {"key": "K"}}})).unwrap();
//! assert_eq!(r.get("b.child.key"), Lookup::Found(&json!("K")));
//! assert!(r.get("b.nope").is_missing());
//! assert_eq!(r.get_or("d", &json!(2)), &json!(2));
//! assert_eq!(
//!     r.strict_with("missing '%key%'").get("x.y").unwrap_err().to_string(),
//!     "missing 'x.y'"
//! );
//! ```

pub mod env;
pub mod error;
pub mod extract;
pub mod loader;
pub mod merge;
pub mod resolve;
pub mod source;

pub use error::{Error, NotFound, Result};
pub use loader::Format;
pub use resolve::{walk, Lookup, OnMissing, Query, Resolver, DEFAULT_STRICT_TEMPLATE};
pub use source::Source;
