//! Typed extraction utilities for resolved values

use crate::error::{Error, NotFound, Result};
use crate::resolve::{walk, Resolver};
use serde::de::DeserializeOwned;
use serde_json::Value as J;

/// Deserialize a value, reporting the failing inner field on error
pub fn deserialize_at<T: DeserializeOwned>(value: &J, path: &str) -> Result<T> {
    serde_path_to_error::deserialize(value.clone()).map_err(|source| Error::Extract {
        path: path.to_string(),
        source,
    })
}

impl Resolver {
    /// Extract the entire tree as a typed value
    pub fn extract_root<T: DeserializeOwned>(&self) -> Result<T> {
        deserialize_at(self.root(), "")
    }

    /// Extract the value at a dotted path; a miss is an [`Error::Missing`]
    pub fn extract<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let value = walk(self.root(), path).ok_or_else(|| NotFound::new(path))?;
        deserialize_at(value, path)
    }

    /// Extract the value at a dotted path, or `default` if it does not resolve
    pub fn extract_or<T: DeserializeOwned>(&self, path: &str, default: T) -> Result<T> {
        match walk(self.root(), path) {
            Some(value) => deserialize_at(value, path),
            None => Ok(default),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "kebab-case")]
    struct Database {
        host: String,
        port: u16,
        #[serde(default)]
        read_only: bool,
    }

    fn resolver() -> Resolver {
        Resolver::new(serde_json::json!({
            "service": {
                "database": {"host": "db.local", "port": 5432, "read-only": true},
                "broken": {"host": "db.local", "port": "not-a-port"},
                "workers": 4,
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_typed_extraction() {
        let db: Database = resolver().extract("service.database").unwrap();
        assert_eq!(
            db,
            Database {
                host: "db.local".into(),
                port: 5432,
                read_only: true
            }
        );
        let workers: u32 = resolver().extract("service.workers").unwrap();
        assert_eq!(workers, 4);
    }

    #[test]
    fn test_extraction_error_names_inner_field() {
        let err = resolver().extract::<Database>("service.broken").unwrap_err();
        match &err {
            Error::Extract { path, source } => {
                assert_eq!(path, "service.broken");
                assert_eq!(source.path().to_string(), "port");
            }
            other => panic!("expected Extract error, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_missing() {
        let err = resolver().extract::<u32>("service.threads").unwrap_err();
        assert_eq!(err.to_string(), "key 'service.threads' not found");
    }

    #[test]
    fn test_extract_or() {
        let r = resolver();
        assert_eq!(r.extract_or("service.threads", 8u32).unwrap(), 8);
        assert_eq!(r.extract_or("service.workers", 8u32).unwrap(), 4);
        assert!(r.extract_or("service.broken.port", 1u16).is_err());
    }

    #[test]
    fn test_extract_root() {
        let root: serde_json::Map<String, J> = resolver().extract_root().unwrap();
        assert!(root.contains_key("service"));
    }
}
