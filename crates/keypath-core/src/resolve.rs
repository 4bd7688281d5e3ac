// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Dotted-path resolution over a value tree
//!
//! A lookup walks the tree one `.`-separated segment at a time. Only mappings can
//! be descended into: a sequence, scalar or `null` met before the last segment ends
//! the walk as a miss, never as an error.
//!
//! What happens on a miss is decided per call. [`Resolver::get`] hands back
//! [`Lookup::Missing`], [`Resolver::get_or`] hands back the caller's default, and a
//! strict [`Query`] (from [`Resolver::strict`]) fails with [`Error::StrictLookup`].
//! A `Query` is consumed by its lookup, so strictness never outlives the call it
//! was set up for.

use crate::error::{Error, NotFound, Result};
use crate::loader::{self, Format};
use serde_json::Value as J;
use std::borrow::Cow;
use std::path::Path;

/// Template used by [`Resolver::strict`]; `%key%` is replaced by the requested path
pub const DEFAULT_STRICT_TEMPLATE: &str = "key '%key%' not found";

const KEY_PLACEHOLDER: &str = "%key%";

/// Walk `root` along `path`, returning the value at its end
///
/// An empty path never resolves.
pub fn walk<'a>(root: &'a J, path: &str) -> Option<&'a J> {
    if path.is_empty() || root.is_null() {
        return None;
    }
    path.split('.')
        .try_fold(root, |cursor, segment| cursor.as_object()?.get(segment))
}

/// Outcome of a lookup that is not allowed to fail
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<'a> {
    /// Every segment matched; the value lives in the resolver's tree
    Found(&'a J),
    /// The path missed and the caller's default was returned
    Defaulted(&'a J),
    /// The path missed and no default was supplied
    Missing(NotFound),
}

impl<'a> Lookup<'a> {
    /// The found or defaulted value
    pub fn value(&self) -> Option<&'a J> {
        match self {
            Lookup::Found(v) | Lookup::Defaulted(v) => Some(*v),
            Lookup::Missing(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Lookup::Missing(_))
    }

    /// Promote a miss into an error
    pub fn into_result(self) -> std::result::Result<&'a J, NotFound> {
        match self {
            Lookup::Found(v) | Lookup::Defaulted(v) => Ok(v),
            Lookup::Missing(nf) => Err(nf),
        }
    }
}

/// What a query does when the path does not resolve
#[derive(Debug, Clone, PartialEq)]
pub enum OnMissing<'a> {
    /// Return [`Lookup::Missing`]
    Sentinel,
    /// Return the given value
    Default(&'a J),
    /// Fail with the given message template
    Raise(Cow<'a, str>),
}

/// A single configured lookup against a [`Resolver`]
///
/// Built by [`Resolver::query`] or [`Resolver::strict`], consumed by
/// [`Query::lookup`] or [`Query::get`].
#[derive(Debug, Clone)]
#[must_use = "a query does nothing until it is looked up"]
pub struct Query<'r> {
    root: &'r J,
    template: Option<Cow<'r, str>>,
    default: Option<&'r J>,
}

impl<'r> Query<'r> {
    /// Return `default` instead of missing or raising
    pub fn or(mut self, default: &'r J) -> Self {
        self.default = Some(default);
        self
    }

    /// The policy this query applies on a miss. A default wins over strictness.
    pub fn on_missing(&self) -> OnMissing<'_> {
        match (self.default, &self.template) {
            (Some(d), _) => OnMissing::Default(d),
            (None, Some(t)) => OnMissing::Raise(Cow::Borrowed(t.as_ref())),
            (None, None) => OnMissing::Sentinel,
        }
    }

    /// Look up `path`, failing only if the query is strict and has no default
    pub fn lookup(self, path: &str) -> Result<Lookup<'r>> {
        if let Some(v) = walk(self.root, path) {
            tracing::trace!(path, "Lookup resolved");
            return Ok(Lookup::Found(v));
        }

        if let Some(d) = self.default {
            tracing::trace!(path, "Lookup missed, using default");
            return Ok(Lookup::Defaulted(d));
        }

        match self.template {
            Some(template) => {
                let message = template.replacen(KEY_PLACEHOLDER, path, 1);
                tracing::debug!(path, %message, "Strict lookup missed");
                Err(Error::StrictLookup {
                    path: path.to_string(),
                    message,
                })
            }
            None => {
                tracing::trace!(path, "Lookup missed");
                Ok(Lookup::Missing(NotFound::new(path)))
            }
        }
    }

    /// Look up `path` and return the value, turning any miss into an error
    pub fn get(self, path: &str) -> Result<&'r J> {
        match self.lookup(path)? {
            Lookup::Found(v) | Lookup::Defaulted(v) => Ok(v),
            Lookup::Missing(nf) => Err(Error::Missing(nf)),
        }
    }
}

/// Owns a value tree and answers dotted-path lookups against it
///
/// Lookups borrow the resolver immutably; the tree is never copied or changed by
/// them. Only [`Resolver::replace_root`] changes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolver {
    root: J,
}

impl Resolver {
    /// Build a resolver over an in-memory tree
    ///
    /// The root must be a mapping, or `null` for an empty resolver on which every
    /// lookup misses.
    pub fn new(root: J) -> Result<Self> {
        Ok(Self {
            root: loader::ensure_mapping(root)?,
        })
    }

    /// Build a resolver from a file; the format comes from the extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(loader::read_file(path.as_ref())?)
    }

    /// Build a resolver from serialized text
    pub fn from_text(format: Format, text: &str) -> Result<Self> {
        Self::new(loader::parse_str(format, text)?)
    }

    /// The current tree
    pub fn root(&self) -> &J {
        &self.root
    }

    /// Swap in a new tree. No shape check is made: lookups on a non-mapping root
    /// simply miss.
    pub fn replace_root(&mut self, root: J) -> &mut Self {
        self.root = root;
        self
    }

    /// Start a non-strict query
    pub fn query(&self) -> Query<'_> {
        Query {
            root: &self.root,
            template: None,
            default: None,
        }
    }

    /// Start a query that fails with [`DEFAULT_STRICT_TEMPLATE`] on a miss
    pub fn strict(&self) -> Query<'_> {
        self.strict_with(DEFAULT_STRICT_TEMPLATE)
    }

    /// Start a query that fails on a miss with `template`, where the first
    /// `%key%` is replaced by the requested path
    pub fn strict_with<'r>(&'r self, template: impl Into<Cow<'r, str>>) -> Query<'r> {
        Query {
            root: &self.root,
            template: Some(template.into()),
            default: None,
        }
    }

    /// Look up `path`, reporting a miss as [`Lookup::Missing`]
    pub fn get(&self, path: &str) -> Lookup<'_> {
        match walk(&self.root, path) {
            Some(v) => Lookup::Found(v),
            None => Lookup::Missing(NotFound::new(path)),
        }
    }

    /// Look up `path`, returning `default` on a miss
    pub fn get_or<'a>(&'a self, path: &str, default: &'a J) -> &'a J {
        walk(&self.root, path).unwrap_or(default)
    }

    /// Whether `path` resolves
    pub fn contains(&self, path: &str) -> bool {
        walk(&self.root, path).is_some()
    }
}

impl TryFrom<J> for Resolver {
    type Error = Error;

    fn try_from(root: J) -> Result<Self> {
        Self::new(root)
    }
}
