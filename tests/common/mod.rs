//! Shared test utilities for the catalog integration tests.
//!
//! Import via `mod common;`.

#![allow(dead_code)]

use std::sync::Once;

pub use strata_catalog::{
    CatalogConfig, FailureInjection, Product, ProductCatalog, RepositoryErrorKind,
    StoreOperation,
};

static INIT_TRACING: Once = Once::new();

/// Install a test subscriber filtered by `RUST_LOG`.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// The pen from the reference scenario.
pub fn pen() -> Product {
    Product::new("Pen", "Office", 1.5, 10)
}

/// Catalog whose store fails `operations`, as connection issues if `connection_issue`.
pub fn failing_catalog(operations: &[StoreOperation], connection_issue: bool) -> ProductCatalog {
    let mut failures = FailureInjection::none().with_connection_issue(connection_issue);
    for operation in operations {
        failures = failures.fail(*operation);
    }
    let config = CatalogConfig {
        failure_injection: Some(failures),
        ..CatalogConfig::default()
    };
    ProductCatalog::open(&config).unwrap()
}
