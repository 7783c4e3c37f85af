//! Product repository over a Strata collection store
//!
//! - **Product**: the record application code reads and writes
//! - **ProductRepository**: add, get, remove and update products through any
//!   [`CollectionStore`](strata_core::CollectionStore)
//! - **schema**: the fixed property keys a product is stored under
//!
//! ## Design Principle: Stateless Facade
//!
//! The repository holds only a store and a collection name. It issues store
//! calls one at a time, stops at the first failure, and maps every store
//! outcome to a [`RepositoryError`]. Connection issues are surfaced, never
//! retried.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod product;
pub mod product_repository;
pub mod schema;

pub use error::{RepositoryError, RepositoryErrorKind, RepositoryResult};
pub use product::Product;
pub use product_repository::{ProductRepository, DEFAULT_COLLECTION};
pub use schema::SchemaError;
