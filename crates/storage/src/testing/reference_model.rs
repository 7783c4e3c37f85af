//! Reference model for tracking expected collection store state
//!
//! The reference model is a plain, single-threaded re-statement of the store
//! rules. Property tests drive the same operation sequence through the model
//! and a real store, then require identical outcomes and identical state.
//!
//! # Example
//!
//! ```ignore
//! use strata_storage::testing::{ModelOperation, ReferenceModel};
//!
//! let mut model = ReferenceModel::new();
//! let op = ModelOperation::CreateCollection { name: "products".into() };
//! assert_eq!(model.apply(&op), op.run_against(&store));
//!
//! let mismatches = model.compare(&store);
//! assert!(mismatches.is_empty());
//! ```

use std::collections::{BTreeMap, BTreeSet};

use strata_core::{
    is_valid_collection_name, CollectionStore, OperationResult, Properties, RecordId,
};

/// Reference model tracking expected store state
#[derive(Debug, Clone, Default)]
pub struct ReferenceModel {
    /// Expected collections by name
    collections: BTreeMap<String, ModelCollection>,
    /// Every (collection, id) pair any operation has touched
    touched: BTreeSet<(String, RecordId)>,
    /// Operations applied so far
    applied_ops: usize,
}

#[derive(Debug, Clone)]
struct ModelCollection {
    next_id: RecordId,
    elements: BTreeMap<RecordId, Properties>,
}

impl Default for ModelCollection {
    fn default() -> Self {
        ModelCollection {
            next_id: 1,
            elements: BTreeMap::new(),
        }
    }
}

/// Records of an existing collection, or the code a store reports if missing
fn elements_of<'a>(
    collections: &'a mut BTreeMap<String, ModelCollection>,
    name: &str,
) -> Result<&'a mut BTreeMap<RecordId, Properties>, OperationResult> {
    collections
        .get_mut(name)
        .map(|c| &mut c.elements)
        .ok_or(OperationResult::Failure)
}

/// Operation applied to both the model and a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelOperation {
    /// collection_exists
    CollectionExists {
        /// Collection name
        name: String,
    },
    /// collection_element_exists
    ElementExists {
        /// Collection name
        name: String,
        /// Record id
        id: RecordId,
    },
    /// create_collection
    CreateCollection {
        /// Collection name
        name: String,
    },
    /// generate_id
    GenerateId {
        /// Collection name
        name: String,
    },
    /// get_element
    Get {
        /// Collection name
        name: String,
        /// Record id
        id: RecordId,
    },
    /// insert_element
    Insert {
        /// Collection name
        name: String,
        /// Record id
        id: RecordId,
        /// Properties to insert
        properties: Properties,
    },
    /// update_element
    Update {
        /// Collection name
        name: String,
        /// Record id
        id: RecordId,
        /// Replacement properties
        properties: Properties,
    },
    /// delete_element
    Delete {
        /// Collection name
        name: String,
        /// Record id
        id: RecordId,
    },
}

/// Output value of a successful operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelOutput {
    /// Operation has no output value
    Unit,
    /// Existence check result
    Exists(bool),
    /// Generated identifier
    Id(RecordId),
    /// Fetched properties
    Properties(Properties),
}

/// Outcome of an operation: output value or non-success code
pub type ModelOutcome = Result<ModelOutput, OperationResult>;

impl ModelOperation {
    /// Collection name the operation targets
    pub fn collection(&self) -> &str {
        match self {
            ModelOperation::CollectionExists { name }
            | ModelOperation::ElementExists { name, .. }
            | ModelOperation::CreateCollection { name }
            | ModelOperation::GenerateId { name }
            | ModelOperation::Get { name, .. }
            | ModelOperation::Insert { name, .. }
            | ModelOperation::Update { name, .. }
            | ModelOperation::Delete { name, .. } => name,
        }
    }

    /// Record id the operation targets, if any
    pub fn record_id(&self) -> Option<RecordId> {
        match self {
            ModelOperation::ElementExists { id, .. }
            | ModelOperation::Get { id, .. }
            | ModelOperation::Insert { id, .. }
            | ModelOperation::Update { id, .. }
            | ModelOperation::Delete { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Execute the operation against a real store
    pub fn run_against<S: CollectionStore + ?Sized>(&self, store: &S) -> ModelOutcome {
        let outcome = match self {
            ModelOperation::CollectionExists { name } => {
                store.collection_exists(name).map(ModelOutput::Exists)
            }
            ModelOperation::ElementExists { name, id } => store
                .collection_element_exists(name, *id)
                .map(ModelOutput::Exists),
            ModelOperation::CreateCollection { name } => {
                store.create_collection(name).map(|_| ModelOutput::Unit)
            }
            ModelOperation::GenerateId { name } => store.generate_id(name).map(ModelOutput::Id),
            ModelOperation::Get { name, id } => {
                store.get_element(name, *id).map(ModelOutput::Properties)
            }
            ModelOperation::Insert {
                name,
                id,
                properties,
            } => store
                .insert_element(name, *id, properties.clone())
                .map(|_| ModelOutput::Unit),
            ModelOperation::Update {
                name,
                id,
                properties,
            } => store
                .update_element(name, *id, properties.clone())
                .map(|_| ModelOutput::Unit),
            ModelOperation::Delete { name, id } => {
                store.delete_element(name, *id).map(|_| ModelOutput::Unit)
            }
        };
        outcome.map_err(|e| e.code())
    }
}

/// A difference between expected and actual store state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateMismatch {
    /// Entity that differs ("collection:name" or "element:name:id")
    pub entity: String,
    /// Expected state
    pub expected: String,
    /// Actual state
    pub actual: String,
}

impl ReferenceModel {
    /// Create a new empty reference model
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an operation and return the outcome a conforming store reports
    pub fn apply(&mut self, op: &ModelOperation) -> ModelOutcome {
        self.applied_ops += 1;

        let name = op.collection();
        if !is_valid_collection_name(name) {
            return Err(OperationResult::InvalidCollectionName);
        }
        if let Some(id) = op.record_id() {
            self.touched.insert((name.to_string(), id));
        }

        let collections = &mut self.collections;

        match op {
            ModelOperation::CollectionExists { .. } => {
                Ok(ModelOutput::Exists(collections.contains_key(name)))
            }
            ModelOperation::CreateCollection { .. } => {
                if collections.contains_key(name) {
                    return Err(OperationResult::Failure);
                }
                collections.insert(name.to_string(), ModelCollection::default());
                Ok(ModelOutput::Unit)
            }
            ModelOperation::GenerateId { .. } => {
                let collection = collections.get_mut(name).ok_or(OperationResult::Failure)?;
                let id = collection.next_id;
                collection.next_id += 1;
                Ok(ModelOutput::Id(id))
            }
            ModelOperation::ElementExists { id, .. } => {
                Ok(ModelOutput::Exists(elements_of(collections, name)?.contains_key(id)))
            }
            ModelOperation::Get { id, .. } => elements_of(collections, name)?
                .get(id)
                .cloned()
                .map(ModelOutput::Properties)
                .ok_or(OperationResult::Failure),
            ModelOperation::Insert { id, properties, .. } => {
                let elements = elements_of(collections, name)?;
                if elements.contains_key(id) {
                    return Err(OperationResult::Failure);
                }
                elements.insert(*id, properties.clone());
                Ok(ModelOutput::Unit)
            }
            ModelOperation::Update { id, properties, .. } => {
                let slot = elements_of(collections, name)?
                    .get_mut(id)
                    .ok_or(OperationResult::Failure)?;
                *slot = properties.clone();
                Ok(ModelOutput::Unit)
            }
            ModelOperation::Delete { id, .. } => elements_of(collections, name)?
                .remove(id)
                .map(|_| ModelOutput::Unit)
                .ok_or(OperationResult::Failure),
        }
    }

    /// Expected properties of a record
    pub fn get(&self, name: &str, id: RecordId) -> Option<&Properties> {
        self.collections.get(name)?.elements.get(&id)
    }

    /// Names of all expected collections
    pub fn collection_names(&self) -> impl Iterator<Item = &String> {
        self.collections.keys()
    }

    /// Number of operations applied
    pub fn total_operations(&self) -> usize {
        self.applied_ops
    }

    /// Compare expected state against a store
    ///
    /// Checks every expected collection and every record id any operation
    /// touched. Returns the list of mismatches found.
    pub fn compare<S: CollectionStore + ?Sized>(&self, store: &S) -> Vec<StateMismatch> {
        let mut mismatches = Vec::new();

        for name in self.collections.keys() {
            match store.collection_exists(name) {
                Ok(true) => {}
                other => mismatches.push(StateMismatch {
                    entity: format!("collection:{}", name),
                    expected: "present".to_string(),
                    actual: format!("{:?}", other),
                }),
            }
        }

        for (name, id) in &self.touched {
            if !self.collections.contains_key(name) {
                continue;
            }
            let expected = self.get(name, *id);
            let actual = store.get_element(name, *id).ok();
            if expected != actual.as_ref() {
                mismatches.push(StateMismatch {
                    entity: format!("element:{}:{}", name, id),
                    expected: format!("{:?}", expected),
                    actual: format!("{:?}", actual),
                });
            }
        }

        mismatches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryCollectionStore;

    fn create(name: &str) -> ModelOperation {
        ModelOperation::CreateCollection {
            name: name.to_string(),
        }
    }

    #[test]
    fn model_matches_store_on_basic_sequence() {
        let store = InMemoryCollectionStore::new();
        let mut model = ReferenceModel::new();

        let mut properties = Properties::new();
        properties.insert("name".to_string(), "Pen".to_string());

        let ops = vec![
            create("products"),
            create("products"),
            ModelOperation::GenerateId {
                name: "products".to_string(),
            },
            ModelOperation::Insert {
                name: "products".to_string(),
                id: 1,
                properties: properties.clone(),
            },
            ModelOperation::Get {
                name: "products".to_string(),
                id: 1,
            },
            ModelOperation::Delete {
                name: "products".to_string(),
                id: 1,
            },
            ModelOperation::Get {
                name: "products".to_string(),
                id: 1,
            },
            ModelOperation::GenerateId {
                name: "bad".to_string(),
            },
        ];

        for op in &ops {
            assert_eq!(model.apply(op), op.run_against(&store), "{:?}", op);
        }
        assert_eq!(model.total_operations(), ops.len());
        assert!(model.compare(&store).is_empty());
    }

    #[test]
    fn compare_detects_divergence() {
        let store = InMemoryCollectionStore::new();
        let mut model = ReferenceModel::new();

        assert_eq!(model.apply(&create("products")), Ok(ModelOutput::Unit));
        let mismatches = model.compare(&store);
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].entity, "collection:products");
    }

    #[test]
    fn invalid_names_never_touch_model_state() {
        let mut model = ReferenceModel::new();
        assert_eq!(
            model.apply(&create(" bad ")),
            Err(OperationResult::InvalidCollectionName)
        );
        assert_eq!(model.collection_names().count(), 0);
    }
}
