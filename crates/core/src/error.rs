//! Error types for the collection store
//!
//! Store operations never panic and never signal failure out of band: every
//! outcome other than success is a [`StoreError`] variant.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::types::{OperationResult, RecordId, StoreOperation};
use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Non-success outcomes of a store operation
///
/// Exactly three variants, one per non-success [`OperationResult`] code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Generic failure: bad collection/record state or a logical conflict
    #[error("store operation failed: {reason}")]
    Failure {
        /// What went wrong; diagnostic only
        reason: FailureReason,
    },

    /// The collection name failed validation; no state was inspected
    #[error("invalid collection name {name:?}: {reason}")]
    InvalidCollectionName {
        /// The rejected name
        name: String,
        /// The rule the name broke
        reason: String,
    },

    /// Transport or connectivity failure
    #[error("connection issue during {operation}")]
    ConnectionIssue {
        /// The operation that could not reach the store
        operation: StoreOperation,
    },
}

impl StoreError {
    /// Outcome code of this error
    pub fn code(&self) -> OperationResult {
        match self {
            StoreError::Failure { .. } => OperationResult::Failure,
            StoreError::InvalidCollectionName { .. } => OperationResult::InvalidCollectionName,
            StoreError::ConnectionIssue { .. } => OperationResult::ConnectionIssue,
        }
    }

    /// Whether this is a connectivity failure
    pub fn is_connection_issue(&self) -> bool {
        matches!(self, StoreError::ConnectionIssue { .. })
    }

    pub(crate) fn invalid_name(name: &str, reason: &str) -> Self {
        StoreError::InvalidCollectionName {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Failure: the collection does not exist
    pub fn collection_not_found(collection: &str) -> Self {
        StoreError::Failure {
            reason: FailureReason::CollectionNotFound {
                collection: collection.to_string(),
            },
        }
    }

    /// Failure: a collection with this name already exists
    pub fn collection_already_exists(collection: &str) -> Self {
        StoreError::Failure {
            reason: FailureReason::CollectionAlreadyExists {
                collection: collection.to_string(),
            },
        }
    }

    /// Failure: the record does not exist
    pub fn element_not_found(collection: &str, id: RecordId) -> Self {
        StoreError::Failure {
            reason: FailureReason::ElementNotFound {
                collection: collection.to_string(),
                id,
            },
        }
    }

    /// Failure: a record with this id already exists
    pub fn element_already_exists(collection: &str, id: RecordId) -> Self {
        StoreError::Failure {
            reason: FailureReason::ElementAlreadyExists {
                collection: collection.to_string(),
                id,
            },
        }
    }
}

/// Why a store operation reported `Failure`
///
/// Carried for logs and assertions. Callers map every reason to the same
/// generic failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureReason {
    /// Collection missing
    #[error("collection not found: {collection}")]
    CollectionNotFound {
        /// Collection name
        collection: String,
    },

    /// Collection name already taken
    #[error("collection already exists: {collection}")]
    CollectionAlreadyExists {
        /// Collection name
        collection: String,
    },

    /// Record missing
    #[error("element {id} not found in {collection}")]
    ElementNotFound {
        /// Collection name
        collection: String,
        /// Record id
        id: RecordId,
    },

    /// Record id already taken
    #[error("element {id} already exists in {collection}")]
    ElementAlreadyExists {
        /// Collection name
        collection: String,
        /// Record id
        id: RecordId,
    },

    /// Failure forced by test configuration
    #[error("injected failure in {operation}")]
    Injected {
        /// The operation configured to fail
        operation: StoreOperation,
    },
}
