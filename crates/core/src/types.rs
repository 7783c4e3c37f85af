//! Core types for the collection store
//!
//! This module defines the foundational types:
//! - RecordId: Integer identifier of a record within a collection
//! - Properties: Flat string-to-string property mapping of a record
//! - StoreOperation: Discriminator for the eight store operations
//! - OperationResult: The enumerated outcome code of every store operation

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a record within a collection
///
/// Assigned by the caller at insert time. The store hands out fresh values
/// through `generate_id`, but does not require inserted ids to come from it.
pub type RecordId = i64;

/// Property mapping of a record
///
/// Keys are unique within a record. BTreeMap keeps iteration deterministic,
/// so two mappings with the same entries compare equal regardless of the
/// order they were built in.
pub type Properties = BTreeMap<String, String>;

/// The operations exposed by a collection store
///
/// Used to scope failure injection, to label connection issues, and to
/// record call sequences in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreOperation {
    /// Check whether a collection exists
    CollectionExists,
    /// Check whether a record exists in a collection
    CollectionElementExists,
    /// Create an empty collection
    CreateCollection,
    /// Issue the next identifier of a collection
    GenerateId,
    /// Fetch the properties of a record
    GetElement,
    /// Insert a new record
    InsertElement,
    /// Replace the properties of a record
    UpdateElement,
    /// Remove a record
    DeleteElement,
}

impl StoreOperation {
    /// Get all store operations
    pub fn all() -> Vec<StoreOperation> {
        vec![
            StoreOperation::CollectionExists,
            StoreOperation::CollectionElementExists,
            StoreOperation::CreateCollection,
            StoreOperation::GenerateId,
            StoreOperation::GetElement,
            StoreOperation::InsertElement,
            StoreOperation::UpdateElement,
            StoreOperation::DeleteElement,
        ]
    }

    /// Stable snake_case name, matching the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            StoreOperation::CollectionExists => "collection_exists",
            StoreOperation::CollectionElementExists => "collection_element_exists",
            StoreOperation::CreateCollection => "create_collection",
            StoreOperation::GenerateId => "generate_id",
            StoreOperation::GetElement => "get_element",
            StoreOperation::InsertElement => "insert_element",
            StoreOperation::UpdateElement => "update_element",
            StoreOperation::DeleteElement => "delete_element",
        }
    }
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome code of a store operation
///
/// Every store operation ends in exactly one of these four codes. On the
/// Rust side the code is carried by [`crate::StoreResult`]: `Ok` is
/// `Success`, each [`crate::StoreError`] variant is one of the other three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationResult {
    /// The operation completed
    Success,
    /// Generic failure: missing or conflicting collection/record state
    Failure,
    /// The collection name was rejected before any state access
    InvalidCollectionName,
    /// Transport or connectivity failure
    ConnectionIssue,
}

impl OperationResult {
    /// Get the outcome code of a store result
    pub fn of<T>(result: &crate::StoreResult<T>) -> OperationResult {
        match result {
            Ok(_) => OperationResult::Success,
            Err(e) => e.code(),
        }
    }
}

impl fmt::Display for OperationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OperationResult::Success => "Success",
            OperationResult::Failure => "Failure",
            OperationResult::InvalidCollectionName => "InvalidCollectionName",
            OperationResult::ConnectionIssue => "ConnectionIssue",
        };
        f.write_str(s)
    }
}
