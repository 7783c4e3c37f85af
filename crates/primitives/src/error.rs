//! Repository error types
//!
//! Every store failure maps to exactly one [`RepositoryError`]; nothing is
//! retried or swallowed. [`RepositoryErrorKind`] is the coarse classification
//! callers branch on.

use strata_core::{RecordId, StoreError, StoreOperation};
use thiserror::Error;

use crate::schema::SchemaError;

/// Result type alias for repository operations
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Caller-visible failure of a repository operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The product broke a local rule; the store was not called
    #[error("invalid product: {reason}")]
    InvalidProduct {
        /// The rule that was broken
        reason: String,
    },

    /// The store reported a connection issue
    #[error("store connection failed during {operation}")]
    Connection {
        /// Store call that failed
        operation: StoreOperation,
    },

    /// The store reported any other failure
    #[error("store call {operation} failed: {source}")]
    Store {
        /// Store call that failed
        operation: StoreOperation,
        /// Error the store returned
        source: StoreError,
    },

    /// The product collection does not exist
    #[error("collection not found: {collection}")]
    CollectionNotFound {
        /// Collection name
        collection: String,
    },

    /// No product is stored under the id
    #[error("product {id} not found in {collection}")]
    ProductNotFound {
        /// Collection name
        collection: String,
        /// Requested id
        id: RecordId,
    },

    /// A stored record could not be decoded into a product
    #[error("product {id} in {collection} is malformed: {source}")]
    MalformedRecord {
        /// Collection name
        collection: String,
        /// Record id
        id: RecordId,
        /// Decode failure
        source: SchemaError,
    },
}

/// Coarse classification of a [`RepositoryError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryErrorKind {
    /// Local input validation
    Validation,
    /// Connectivity failure
    Connection,
    /// Generic repository failure
    Repository,
    /// The collection is missing
    CollectionNotFound,
    /// The record is missing
    RecordNotFound,
}

impl RepositoryError {
    /// Classification of this error
    pub fn kind(&self) -> RepositoryErrorKind {
        match self {
            RepositoryError::InvalidProduct { .. } => RepositoryErrorKind::Validation,
            RepositoryError::Connection { .. } => RepositoryErrorKind::Connection,
            RepositoryError::Store { .. } | RepositoryError::MalformedRecord { .. } => {
                RepositoryErrorKind::Repository
            }
            RepositoryError::CollectionNotFound { .. } => RepositoryErrorKind::CollectionNotFound,
            RepositoryError::ProductNotFound { .. } => RepositoryErrorKind::RecordNotFound,
        }
    }

    /// Map a failed store call
    ///
    /// A connection issue becomes [`RepositoryError::Connection`]; every
    /// other store error becomes [`RepositoryError::Store`].
    pub fn from_store(operation: StoreOperation, err: StoreError) -> Self {
        match err {
            StoreError::ConnectionIssue { .. } => RepositoryError::Connection { operation },
            source => RepositoryError::Store { operation, source },
        }
    }

    pub(crate) fn invalid_product(reason: &str) -> Self {
        RepositoryError::InvalidProduct {
            reason: reason.to_string(),
        }
    }

    /// Whether this is a connectivity failure
    pub fn is_connection(&self) -> bool {
        self.kind() == RepositoryErrorKind::Connection
    }

    /// Whether this is a collection-not-found or record-not-found failure
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind(),
            RepositoryErrorKind::CollectionNotFound | RepositoryErrorKind::RecordNotFound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn connection_issue_maps_to_connection() {
        let err = RepositoryError::from_store(
            StoreOperation::GenerateId,
            StoreError::ConnectionIssue {
                operation: StoreOperation::GenerateId,
            },
        );
        assert_eq!(
            err,
            RepositoryError::Connection {
                operation: StoreOperation::GenerateId
            }
        );
        assert!(err.is_connection());
    }

    #[test]
    fn other_store_errors_map_to_store() {
        let failures = [
            StoreError::collection_not_found("products"),
            StoreError::element_already_exists("products", 1),
            StoreError::InvalidCollectionName {
                name: "abc".to_string(),
                reason: "too short".to_string(),
            },
        ];
        for failure in failures {
            let err = RepositoryError::from_store(StoreOperation::InsertElement, failure.clone());
            assert_eq!(err.kind(), RepositoryErrorKind::Repository);
            assert_eq!(
                err,
                RepositoryError::Store {
                    operation: StoreOperation::InsertElement,
                    source: failure
                }
            );
        }
    }

    #[test]
    fn kinds() {
        assert_eq!(
            RepositoryError::invalid_product("x").kind(),
            RepositoryErrorKind::Validation
        );
        let missing = RepositoryError::CollectionNotFound {
            collection: "products".to_string(),
        };
        assert_eq!(missing.kind(), RepositoryErrorKind::CollectionNotFound);
        assert!(missing.is_not_found());

        let missing = RepositoryError::ProductNotFound {
            collection: "products".to_string(),
            id: 9,
        };
        assert_eq!(missing.kind(), RepositoryErrorKind::RecordNotFound);
        assert!(missing.is_not_found());

        let malformed = RepositoryError::MalformedRecord {
            collection: "products".to_string(),
            id: 9,
            source: SchemaError::MissingProperty { key: "Name" },
        };
        assert_eq!(malformed.kind(), RepositoryErrorKind::Repository);
        assert!(!malformed.is_not_found());
    }

    #[test]
    fn store_error_is_the_source() {
        let err = RepositoryError::from_store(
            StoreOperation::DeleteElement,
            StoreError::element_not_found("products", 4),
        );
        let source = err.source().unwrap();
        assert!(source.to_string().contains("products"));
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            RepositoryError::ProductNotFound {
                collection: "products".to_string(),
                id: 1
            }
            .to_string(),
            "product 1 not found in products"
        );
        assert_eq!(
            RepositoryError::invalid_product("Name cannot be empty.").to_string(),
            "invalid product: Name cannot be empty."
        );
    }
}
