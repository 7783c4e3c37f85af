//! Failure injection for collection store conformance testing
//!
//! Lets callers of a store be tested against both failure taxonomies
//! (generic failure and connection issue) without an unreliable backend.
//!
//! # Injection Points
//!
//! Every [`StoreOperation`] is an injection point. A configured operation
//! short-circuits before name validation and before any state access.
//!
//! # Example
//!
//! ```
//! use strata_core::StoreOperation;
//! use strata_storage::testing::FailureInjection;
//! use strata_storage::InMemoryCollectionStore;
//!
//! let failures = FailureInjection::failing(StoreOperation::GenerateId)
//!     .with_connection_issue(true);
//! let store = InMemoryCollectionStore::with_failure_injection(failures);
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strata_core::{FailureReason, StoreError, StoreOperation};

/// Configuration for failure injection
///
/// Plain data passed to a store at construction; there are no global
/// toggles. Serializable so it can be loaded from a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FailureInjection {
    /// Operations forced to fail
    pub operations: BTreeSet<StoreOperation>,
    /// Report forced failures as `ConnectionIssue` instead of `Failure`
    pub connection_issue: bool,
}

impl FailureInjection {
    /// Create config that never fails (for baseline testing)
    pub fn none() -> Self {
        Self::default()
    }

    /// Create config failing a single operation
    pub fn failing(operation: StoreOperation) -> Self {
        Self::none().fail(operation)
    }

    /// Create config failing every operation
    pub fn all() -> Self {
        FailureInjection {
            operations: StoreOperation::all().into_iter().collect(),
            connection_issue: false,
        }
    }

    /// Add an operation to fail
    pub fn fail(mut self, operation: StoreOperation) -> Self {
        self.operations.insert(operation);
        self
    }

    /// Set whether forced failures surface as connection issues
    pub fn with_connection_issue(mut self, connection_issue: bool) -> Self {
        self.connection_issue = connection_issue;
        self
    }

    /// Whether any operation is configured to fail
    pub fn is_enabled(&self) -> bool {
        !self.operations.is_empty()
    }

    /// Whether `operation` is configured to fail
    pub fn fails(&self, operation: StoreOperation) -> bool {
        self.operations.contains(&operation)
    }

    /// The error a configured operation must return, or None to proceed
    pub fn injected_error(&self, operation: StoreOperation) -> Option<StoreError> {
        if !self.fails(operation) {
            return None;
        }
        if self.connection_issue {
            Some(StoreError::ConnectionIssue { operation })
        } else {
            Some(StoreError::Failure {
                reason: FailureReason::Injected { operation },
            })
        }
    }
}
