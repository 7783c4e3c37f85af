//! Catalog configuration via `catalog.toml`
//!
//! A catalog directory holds one `catalog.toml`. On first open a commented
//! default file is written; to change settings, edit the file and reopen.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strata_core::{validate_collection_name, StoreError};
use strata_primitives::DEFAULT_COLLECTION;
use strata_storage::testing::FailureInjection;
use thiserror::Error;

/// Config file name placed in the catalog directory.
pub const CONFIG_FILE_NAME: &str = "catalog.toml";

/// Errors loading or saving a [`CatalogConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config file '{}': {source}", .path.display())]
    Read {
        /// File path
        path: PathBuf,
        /// I/O error
        source: std::io::Error,
    },

    /// The config file could not be written
    #[error("failed to write config file '{}': {source}", .path.display())]
    Write {
        /// File path
        path: PathBuf,
        /// I/O error
        source: std::io::Error,
    },

    /// The TOML did not parse
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config did not serialize
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The configured collection name is not a valid collection name
    #[error("invalid collection in config: {0}")]
    InvalidCollection(#[source] StoreError),
}

/// Catalog configuration loaded from `catalog.toml`.
///
/// # Example
///
/// ```toml
/// collection = "products"
///
/// [failure_injection]
/// operations = ["generate_id"]
/// connection_issue = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Collection products are stored in.
    #[serde(default = "default_collection")]
    pub collection: String,
    /// Store failures to simulate. Absent in normal use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_injection: Option<FailureInjection>,
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            collection: default_collection(),
            failure_injection: None,
        }
    }
}

impl CatalogConfig {
    /// Check the collection name against the store's naming rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCollection`] if the store would reject it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_collection_name(&self.collection).map_err(ConfigError::InvalidCollection)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Product catalog configuration
#
# Collection products are stored in (default: "products").
# At least 5 characters, no leading or trailing spaces.
collection = "products"

# Simulated store failures, for testing callers against an unreliable store.
# Operations: collection_exists, collection_element_exists, create_collection,
# generate_id, get_element, insert_element, update_element, delete_element
# [failure_injection]
# operations = ["generate_id"]
# connection_issue = true        # report as connection issue instead of failure
"#
    }

    /// Parse and validate config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not parse or the collection is invalid.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CatalogConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or the
    /// collection is invalid.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
