//! InMemoryCollectionStore: map-of-maps collection store behind one lock
//!
//! This module implements the CollectionStore trait using:
//! - `BTreeMap<String, Collection>` for deterministic collection ordering
//! - `parking_lot::RwLock` guarding ALL collection and record state
//! - A per-collection identifier counter owned by each `Collection`
//!
//! # Design Notes
//!
//! - **One lock domain**: every operation holds the lock for its full duration.
//!   Unrelated collections serialize against each other; generate_id's
//!   read-then-increment is atomic with respect to every other operation.
//! - **Check order**: injected failure, then name validation, then state.
//!   Rejected names never take the lock.
//! - **Copy out**: getters return owned copies; nothing hands out a reference
//!   into the map.
//! - **No persistence**: state lives until the last clone of the store drops.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use strata_core::{
    validate_collection_name, CollectionStore, Properties, RecordId, StoreError, StoreOperation,
    StoreResult,
};

use crate::collection::{Collection, Record};
use crate::testing::FailureInjection;

/// In-memory collection store
///
/// Clone-friendly via Arc: clones share the same collections.
///
/// # Example
///
/// ```
/// use strata_core::CollectionStore;
/// use strata_storage::InMemoryCollectionStore;
///
/// let store = InMemoryCollectionStore::new();
/// store.create_collection("products").unwrap();
/// let id = store.generate_id("products").unwrap();
/// assert_eq!(id, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCollectionStore {
    /// All collections, keyed by name
    collections: Arc<RwLock<BTreeMap<String, Collection>>>,
    /// Failures to simulate, fixed at construction
    failures: FailureInjection,
}

impl InMemoryCollectionStore {
    /// Create a new empty store that never simulates failures
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty store that simulates the configured failures
    ///
    /// Operations named in `failures` short-circuit before validation and
    /// state access. Each store carries its own configuration, so tests using
    /// different configurations can run in parallel.
    pub fn with_failure_injection(failures: FailureInjection) -> Self {
        Self {
            collections: Arc::new(RwLock::new(BTreeMap::new())),
            failures,
        }
    }

    /// The failure configuration of this store
    pub fn failure_injection(&self) -> &FailureInjection {
        &self.failures
    }

    /// Names of all collections, in sorted order
    pub fn collection_names(&self) -> Vec<String> {
        self.collections
            .read()
            .values()
            .map(|c| c.name().to_string())
            .collect()
    }

    /// Number of records in a collection, or None if it does not exist
    pub fn element_count(&self, name: &str) -> Option<usize> {
        self.collections.read().get(name).map(Collection::len)
    }

    /// Checks shared by every operation, in order: injected failure, name
    fn precheck(&self, operation: StoreOperation, name: &str) -> StoreResult<()> {
        if let Some(err) = self.failures.injected_error(operation) {
            warn!(target: "strata::store", %operation, collection = name, error = %err, "Injected failure");
            return Err(err);
        }
        validate_collection_name(name)
    }
}

impl CollectionStore for InMemoryCollectionStore {
    fn collection_exists(&self, name: &str) -> StoreResult<bool> {
        self.precheck(StoreOperation::CollectionExists, name)?;
        Ok(self.collections.read().contains_key(name))
    }

    fn collection_element_exists(&self, name: &str, id: RecordId) -> StoreResult<bool> {
        self.precheck(StoreOperation::CollectionElementExists, name)?;

        let collections = self.collections.read();
        let collection = collections
            .get(name)
            .ok_or_else(|| StoreError::collection_not_found(name))?;
        Ok(collection.contains(id))
    }

    fn create_collection(&self, name: &str) -> StoreResult<()> {
        self.precheck(StoreOperation::CreateCollection, name)?;

        let mut collections = self.collections.write();
        if collections.contains_key(name) {
            return Err(StoreError::collection_already_exists(name));
        }
        collections.insert(name.to_string(), Collection::new(name));

        info!(target: "strata::store", collection = name, "Collection created");
        Ok(())
    }

    fn generate_id(&self, name: &str) -> StoreResult<RecordId> {
        self.precheck(StoreOperation::GenerateId, name)?;

        let mut collections = self.collections.write();
        let collection = collections
            .get_mut(name)
            .ok_or_else(|| StoreError::collection_not_found(name))?;
        let id = collection.generate_element_id();

        debug!(target: "strata::store", collection = name, id, "Id generated");
        Ok(id)
    }

    fn get_element(&self, name: &str, id: RecordId) -> StoreResult<Properties> {
        self.precheck(StoreOperation::GetElement, name)?;

        let collections = self.collections.read();
        let collection = collections
            .get(name)
            .ok_or_else(|| StoreError::collection_not_found(name))?;
        let record = collection
            .get(id)
            .ok_or_else(|| StoreError::element_not_found(name, id))?;
        Ok(record.properties().clone())
    }

    fn insert_element(
        &self,
        name: &str,
        id: RecordId,
        properties: Properties,
    ) -> StoreResult<()> {
        self.precheck(StoreOperation::InsertElement, name)?;

        let mut collections = self.collections.write();
        let collection = collections
            .get_mut(name)
            .ok_or_else(|| StoreError::collection_not_found(name))?;
        let count = properties.len();
        if !collection.insert(Record::new(id, properties)) {
            return Err(StoreError::element_already_exists(name, id));
        }

        debug!(target: "strata::store", collection = name, id, properties = count, "Element inserted");
        Ok(())
    }

    fn update_element(
        &self,
        name: &str,
        id: RecordId,
        properties: Properties,
    ) -> StoreResult<()> {
        self.precheck(StoreOperation::UpdateElement, name)?;

        let mut collections = self.collections.write();
        let collection = collections
            .get_mut(name)
            .ok_or_else(|| StoreError::collection_not_found(name))?;
        let record = collection
            .get_mut(id)
            .ok_or_else(|| StoreError::element_not_found(name, id))?;
        let count = properties.len();
        record.replace_properties(properties);

        debug!(target: "strata::store", collection = name, id, properties = count, "Element updated");
        Ok(())
    }

    fn delete_element(&self, name: &str, id: RecordId) -> StoreResult<()> {
        self.precheck(StoreOperation::DeleteElement, name)?;

        let mut collections = self.collections.write();
        let collection = collections
            .get_mut(name)
            .ok_or_else(|| StoreError::collection_not_found(name))?;
        collection
            .remove(id)
            .ok_or_else(|| StoreError::element_not_found(name, id))?;

        debug!(target: "strata::store", collection = name, id, "Element deleted");
        Ok(())
    }
}
