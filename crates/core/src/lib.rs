//! Core types and traits for Strata collection stores
//!
//! This crate defines the foundational types used throughout the system:
//! - RecordId, Properties: Record identity and data
//! - StoreOperation: Discriminates between the store operations
//! - OperationResult: Outcome code of every store operation
//! - StoreError: Tagged non-success outcomes (Failure, InvalidCollectionName, ConnectionIssue)
//! - Collection name validation
//! - Traits: CollectionStore, the seam between storage and repository facades

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collection;
pub mod error;
pub mod traits;
pub mod types;

pub use collection::{is_valid_collection_name, validate_collection_name, MIN_COLLECTION_NAME_LENGTH};
pub use error::{FailureReason, StoreError, StoreResult};
pub use traits::CollectionStore;
pub use types::{OperationResult, Properties, RecordId, StoreOperation};
