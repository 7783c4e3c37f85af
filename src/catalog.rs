//! ProductCatalog: a product repository with its own store

use std::path::Path;
use std::sync::Arc;

use strata_primitives::ProductRepository;
use strata_storage::InMemoryCollectionStore;
use tracing::info;

use crate::config::{CatalogConfig, ConfigError, CONFIG_FILE_NAME};

/// Repository type a [`ProductCatalog`] hands out
pub type CatalogRepository = ProductRepository<Arc<InMemoryCollectionStore>>;

/// A product repository over its own in-memory store
///
/// Nothing is persisted; a catalog directory only holds `catalog.toml`.
///
/// # Example
///
/// ```
/// use strata_catalog::{Product, ProductCatalog};
///
/// let catalog = ProductCatalog::ephemeral();
/// let id = catalog.repository().add_product(&Product::new("Pen", "Office", 1.5, 10)).unwrap();
/// assert_eq!(catalog.repository().get_product(id).unwrap().name, "Pen");
/// ```
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    store: Arc<InMemoryCollectionStore>,
    repository: CatalogRepository,
    config: CatalogConfig,
}

impl ProductCatalog {
    /// Catalog with the default configuration
    pub fn ephemeral() -> Self {
        Self::build(CatalogConfig::default())
    }

    /// Catalog with an explicit configuration
    ///
    /// Failure injection is applied to the store when configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCollection`] if the configured
    /// collection name is invalid.
    pub fn open(config: &CatalogConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config.clone()))
    }

    /// Catalog configured from `catalog.toml` in `dir`
    ///
    /// Creates the directory and a default config file if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or config file cannot be created,
    /// read or parsed.
    pub fn open_dir<P: AsRef<Path>>(dir: P) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Write {
            path: dir.to_path_buf(),
            source,
        })?;

        let config_path = dir.join(CONFIG_FILE_NAME);
        CatalogConfig::write_default_if_missing(&config_path)?;
        let config = CatalogConfig::from_file(&config_path)?;
        Self::open(&config)
    }

    fn build(config: CatalogConfig) -> Self {
        let store = match &config.failure_injection {
            Some(failures) if failures.is_enabled() => {
                info!(target: "strata::catalog", operations = ?failures.operations, connection_issue = failures.connection_issue, "Failure injection enabled");
                InMemoryCollectionStore::with_failure_injection(failures.clone())
            }
            _ => InMemoryCollectionStore::new(),
        };
        let store = Arc::new(store);
        let repository =
            ProductRepository::with_collection(Arc::clone(&store), config.collection.clone());

        info!(target: "strata::catalog", collection = %config.collection, "Catalog opened");
        Self {
            store,
            repository,
            config,
        }
    }

    /// The product repository
    pub fn repository(&self) -> &CatalogRepository {
        &self.repository
    }

    /// The backing store
    pub fn store(&self) -> &Arc<InMemoryCollectionStore> {
        &self.store
    }

    /// The configuration this catalog was opened with
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::StoreOperation;
    use strata_primitives::{Product, RepositoryErrorKind};
    use strata_storage::testing::FailureInjection;
    use tempfile::TempDir;

    #[test]
    fn ephemeral_uses_products_collection() {
        let catalog = ProductCatalog::ephemeral();
        assert_eq!(catalog.repository().collection(), "products");
        catalog
            .repository()
            .add_product(&Product::new("Pen", "Office", 1.5, 10))
            .unwrap();
        assert_eq!(catalog.store().collection_names(), vec!["products".to_string()]);
    }

    #[test]
    fn open_applies_failure_injection() {
        let config = CatalogConfig {
            failure_injection: Some(
                FailureInjection::failing(StoreOperation::GenerateId).with_connection_issue(true),
            ),
            ..CatalogConfig::default()
        };
        let catalog = ProductCatalog::open(&config).unwrap();
        let err = catalog
            .repository()
            .add_product(&Product::new("Pen", "Office", 1.5, 10))
            .unwrap_err();
        assert_eq!(err.kind(), RepositoryErrorKind::Connection);
        assert_eq!(catalog.config(), &config);
    }

    #[test]
    fn empty_failure_injection_table_leaves_store_healthy() {
        let config = CatalogConfig::from_toml_str("[failure_injection]\n").unwrap();
        let catalog = ProductCatalog::open(&config).unwrap();
        assert!(!catalog.store().failure_injection().is_enabled());
        catalog
            .repository()
            .add_product(&Product::new("Pen", "Office", 1.5, 10))
            .unwrap();
    }

    #[test]
    fn open_rejects_invalid_collection() {
        let config = CatalogConfig {
            collection: "abc".to_string(),
            failure_injection: None,
        };
        assert!(matches!(
            ProductCatalog::open(&config),
            Err(ConfigError::InvalidCollection(_))
        ));
    }

    #[test]
    fn open_dir_writes_default_config() {
        let dir = TempDir::new().unwrap();
        let catalog_dir = dir.path().join("catalog");

        let catalog = ProductCatalog::open_dir(&catalog_dir).unwrap();
        assert!(catalog_dir.join(CONFIG_FILE_NAME).exists());
        assert_eq!(catalog.config(), &CatalogConfig::default());
    }

    #[test]
    fn open_dir_reads_existing_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "collection = \"inventory\"\n",
        )
        .unwrap();

        let catalog = ProductCatalog::open_dir(dir.path()).unwrap();
        assert_eq!(catalog.repository().collection(), "inventory");
    }
}
