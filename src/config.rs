//! JSON definition of a store: its files, aliases and query settings.
//!
//! ```json
//! {
//!   "files": [
//!     {"path": "/data/pf/run1/aln.bam", "organism": "Pf", "kind": "alignment"},
//!     {"path": "/data/pf/calls.vcf.gz", "organism": "Pf", "kind": "variant", "label": "calls"}
//!   ],
//!   "aliases": {"chr1": "Pf3D7_01_v3"},
//!   "resolution": "legacy",
//!   "cache_capacity": 64
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::core::file::BioDataFile;
use crate::core::types::ResolutionMode;
use crate::registry::cache::DEFAULT_CACHE_CAPACITY;
use crate::registry::{AliasTable, BioDataFileStore, StoreError};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read store config: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse store config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Failed to build store: {0}")]
    StoreError(#[from] StoreError),
}

fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

/// Serializable store definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub files: Vec<BioDataFile>,

    #[serde(default)]
    pub aliases: AliasTable,

    #[serde(default)]
    pub resolution: ResolutionMode,

    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

impl StoreConfig {
    /// Load a store definition from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadError` if the file cannot be read or
    /// `ConfigError::ParseError` if it is not a valid definition.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a store definition from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the JSON is not a valid definition.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Export the definition to JSON
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the store this definition describes
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::StoreError` if a file entry is invalid.
    pub fn into_store(self) -> Result<BioDataFileStore, ConfigError> {
        Ok(BioDataFileStore::builder()
            .aliases(self.aliases)
            .resolution(self.resolution)
            .cache_capacity(self.cache_capacity)
            .build(self.files)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::FileKind;

    const CONFIG: &str = r#"{
        "files": [
            {"path": "/data/pf/run1/aln.bam", "organism": "Pf", "kind": "alignment"},
            {"path": "/data/pf/run2/aln.bam", "organism": "Pf", "kind": "alignment"},
            {"path": "/data/pf/calls.vcf.gz", "organism": "Pf", "kind": "variant", "label": "calls"}
        ],
        "aliases": {"chr1": "Pf3D7_01_v3", "chr2": "Pf3D7_02_v3"},
        "resolution": "strict",
        "cache_capacity": 8
    }"#;

    #[test]
    fn test_from_json() {
        let config = StoreConfig::from_json(CONFIG).unwrap();
        assert_eq!(config.files.len(), 3);
        assert_eq!(config.files[2].kind, FileKind::Variant);
        assert_eq!(config.files[2].label.as_deref(), Some("calls"));
        assert_eq!(config.aliases.alias_to_reference("chr2"), "Pf3D7_02_v3");
        assert_eq!(config.resolution, ResolutionMode::Strict);
        assert_eq!(config.cache_capacity, 8);
    }

    #[test]
    fn test_from_json_defaults() {
        let json = r#"{"files": [{"path": "a.vcf", "organism": "Pf", "kind": "variant"}]}"#;
        let config = StoreConfig::from_json(json).unwrap();
        assert!(config.aliases.is_empty());
        assert_eq!(config.resolution, ResolutionMode::Legacy);
        assert_eq!(config.cache_capacity, DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn test_from_json_missing_files() {
        let result = StoreConfig::from_json(r#"{"aliases": {}}"#);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_into_store() {
        let store = StoreConfig::from_json(CONFIG).unwrap().into_store().unwrap();
        let labels: Vec<&str> = store.files().iter().map(BioDataFile::display_label).collect();
        assert_eq!(labels, vec!["run1", "run2", "calls"]);
        assert_eq!(store.resolution(), ResolutionMode::Strict);
    }

    #[test]
    fn test_into_store_invalid_file() {
        let json = r#"{"files": [{"path": "", "organism": "Pf", "kind": "variant"}]}"#;
        let result = StoreConfig::from_json(json).unwrap().into_store();
        assert!(matches!(result, Err(ConfigError::StoreError(_))));
    }

    #[test]
    fn test_to_json_round_trip() {
        let config = StoreConfig::from_json(CONFIG).unwrap();
        let parsed = StoreConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
