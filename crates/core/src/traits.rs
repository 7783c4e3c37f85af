//! Core trait definitions
//!
//! This module defines [`CollectionStore`], the seam between the storage
//! layer and the repository facades built on top of it. The in-memory
//! implementation lives in `strata-storage`; tests wrap it to record or
//! break calls.

use crate::error::StoreResult;
use crate::types::{Properties, RecordId};
use std::sync::Arc;

/// Collection-oriented record store
///
/// Every operation returns a [`StoreResult`]: `Ok` carries the output value
/// of a successful call, `Err` carries one of the three non-success codes.
/// Implementations must validate the collection name before touching state
/// and must hand out copies of record data, never references into it.
///
/// # Thread Safety
///
/// All methods take `&self`. Implementations serialize access internally.
pub trait CollectionStore: Send + Sync {
    /// Check whether a collection exists
    ///
    /// # Errors
    /// - `InvalidCollectionName` if the name is invalid
    fn collection_exists(&self, name: &str) -> StoreResult<bool>;

    /// Check whether a record exists in a collection
    ///
    /// # Errors
    /// - `InvalidCollectionName` if the name is invalid
    /// - `Failure` if the collection does not exist
    fn collection_element_exists(&self, name: &str, id: RecordId) -> StoreResult<bool>;

    /// Create an empty collection whose id counter starts at 1
    ///
    /// # Errors
    /// - `InvalidCollectionName` if the name is invalid
    /// - `Failure` if the collection already exists
    fn create_collection(&self, name: &str) -> StoreResult<()>;

    /// Issue the next identifier of a collection
    ///
    /// Returns the counter value and increments it, atomically. Issued ids are
    /// never reissued, even if no record is ever inserted under them.
    ///
    /// # Errors
    /// - `InvalidCollectionName` if the name is invalid
    /// - `Failure` if the collection does not exist
    fn generate_id(&self, name: &str) -> StoreResult<RecordId>;

    /// Fetch a snapshot of a record's properties
    ///
    /// # Errors
    /// - `InvalidCollectionName` if the name is invalid
    /// - `Failure` if the collection or the record does not exist
    fn get_element(&self, name: &str, id: RecordId) -> StoreResult<Properties>;

    /// Insert a new record
    ///
    /// # Errors
    /// - `InvalidCollectionName` if the name is invalid
    /// - `Failure` if the collection does not exist or `id` is taken
    fn insert_element(&self, name: &str, id: RecordId, properties: Properties)
        -> StoreResult<()>;

    /// Replace the whole property set of a record
    ///
    /// # Errors
    /// - `InvalidCollectionName` if the name is invalid
    /// - `Failure` if the collection or the record does not exist
    fn update_element(&self, name: &str, id: RecordId, properties: Properties)
        -> StoreResult<()>;

    /// Remove a record
    ///
    /// # Errors
    /// - `InvalidCollectionName` if the name is invalid
    /// - `Failure` if the collection or the record does not exist
    fn delete_element(&self, name: &str, id: RecordId) -> StoreResult<()>;
}

macro_rules! forward_collection_store {
    () => {
        fn collection_exists(&self, name: &str) -> StoreResult<bool> {
            (**self).collection_exists(name)
        }

        fn collection_element_exists(&self, name: &str, id: RecordId) -> StoreResult<bool> {
            (**self).collection_element_exists(name, id)
        }

        fn create_collection(&self, name: &str) -> StoreResult<()> {
            (**self).create_collection(name)
        }

        fn generate_id(&self, name: &str) -> StoreResult<RecordId> {
            (**self).generate_id(name)
        }

        fn get_element(&self, name: &str, id: RecordId) -> StoreResult<Properties> {
            (**self).get_element(name, id)
        }

        fn insert_element(
            &self,
            name: &str,
            id: RecordId,
            properties: Properties,
        ) -> StoreResult<()> {
            (**self).insert_element(name, id, properties)
        }

        fn update_element(
            &self,
            name: &str,
            id: RecordId,
            properties: Properties,
        ) -> StoreResult<()> {
            (**self).update_element(name, id, properties)
        }

        fn delete_element(&self, name: &str, id: RecordId) -> StoreResult<()> {
            (**self).delete_element(name, id)
        }
    };
}

impl<S: CollectionStore + ?Sized> CollectionStore for &S {
    forward_collection_store!();
}

impl<S: CollectionStore + ?Sized> CollectionStore for Arc<S> {
    forward_collection_store!();
}
