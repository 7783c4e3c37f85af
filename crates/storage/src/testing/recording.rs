//! Call-recording store wrapper
//!
//! Forwards every call to an inner store and records which operation was
//! called, in order. Used to assert that a caller never reached the store,
//! or stopped calling it after a failure.

use parking_lot::Mutex;
use strata_core::{CollectionStore, Properties, RecordId, StoreOperation, StoreResult};

/// Store wrapper recording the sequence of operations called on it
#[derive(Debug)]
pub struct RecordingStore<S> {
    inner: S,
    calls: Mutex<Vec<StoreOperation>>,
}

impl<S> RecordingStore<S> {
    /// Wrap a store
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// The wrapped store
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Operations called so far, in call order
    pub fn calls(&self) -> Vec<StoreOperation> {
        self.calls.lock().clone()
    }

    /// Number of calls recorded
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Whether `operation` was called at least once
    pub fn was_called(&self, operation: StoreOperation) -> bool {
        self.calls.lock().contains(&operation)
    }

    /// Forget all recorded calls
    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    fn record(&self, operation: StoreOperation) {
        self.calls.lock().push(operation);
    }
}

impl<S: CollectionStore> CollectionStore for RecordingStore<S> {
    fn collection_exists(&self, name: &str) -> StoreResult<bool> {
        self.record(StoreOperation::CollectionExists);
        self.inner.collection_exists(name)
    }

    fn collection_element_exists(&self, name: &str, id: RecordId) -> StoreResult<bool> {
        self.record(StoreOperation::CollectionElementExists);
        self.inner.collection_element_exists(name, id)
    }

    fn create_collection(&self, name: &str) -> StoreResult<()> {
        self.record(StoreOperation::CreateCollection);
        self.inner.create_collection(name)
    }

    fn generate_id(&self, name: &str) -> StoreResult<RecordId> {
        self.record(StoreOperation::GenerateId);
        self.inner.generate_id(name)
    }

    fn get_element(&self, name: &str, id: RecordId) -> StoreResult<Properties> {
        self.record(StoreOperation::GetElement);
        self.inner.get_element(name, id)
    }

    fn insert_element(
        &self,
        name: &str,
        id: RecordId,
        properties: Properties,
    ) -> StoreResult<()> {
        self.record(StoreOperation::InsertElement);
        self.inner.insert_element(name, id, properties)
    }

    fn update_element(
        &self,
        name: &str,
        id: RecordId,
        properties: Properties,
    ) -> StoreResult<()> {
        self.record(StoreOperation::UpdateElement);
        self.inner.update_element(name, id, properties)
    }

    fn delete_element(&self, name: &str, id: RecordId) -> StoreResult<()> {
        self.record(StoreOperation::DeleteElement);
        self.inner.delete_element(name, id)
    }
}
