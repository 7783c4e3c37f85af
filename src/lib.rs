//! Strata Catalog - product catalog over an in-memory collection store
//!
//! Three layers, one crate each:
//!
//! - **strata-core**: the collection store contract (`CollectionStore`,
//!   result codes, name validation)
//! - **strata-storage**: `InMemoryCollectionStore` and test support
//!   (failure injection, call recording, reference model)
//! - **strata-primitives**: `ProductRepository`, mapping store outcomes to
//!   product-level errors
//!
//! # Quick Start
//!
//! ```
//! use strata_catalog::{Product, ProductCatalog, RepositoryErrorKind};
//!
//! let catalog = ProductCatalog::ephemeral();
//! let repo = catalog.repository();
//!
//! let id = repo.add_product(&Product::new("Pen", "Office", 1.5, 10)).unwrap();
//! assert_eq!(id, 1);
//!
//! repo.remove_product(id).unwrap();
//! let err = repo.get_product(id).unwrap_err();
//! assert_eq!(err.kind(), RepositoryErrorKind::RecordNotFound);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod config;

pub use catalog::{CatalogRepository, ProductCatalog};
pub use config::{CatalogConfig, ConfigError, CONFIG_FILE_NAME};

pub use strata_core::{
    is_valid_collection_name, validate_collection_name, CollectionStore, FailureReason,
    OperationResult, Properties, RecordId, StoreError, StoreOperation, StoreResult,
    MIN_COLLECTION_NAME_LENGTH,
};
pub use strata_primitives::{
    schema, Product, ProductRepository, RepositoryError, RepositoryErrorKind, RepositoryResult,
    SchemaError, DEFAULT_COLLECTION,
};
pub use strata_storage::testing::FailureInjection;
pub use strata_storage::InMemoryCollectionStore;
