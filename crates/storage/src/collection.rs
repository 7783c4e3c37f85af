//! Collection and Record: the state owned by the in-memory store
//!
//! Neither type leaves the store. Callers only ever see copies of
//! record properties.

use std::collections::BTreeMap;

use strata_core::{Properties, RecordId};

/// First identifier issued by a new collection
pub(crate) const FIRST_RECORD_ID: RecordId = 1;

/// A named bucket of records with its own identifier counter
#[derive(Debug)]
pub(crate) struct Collection {
    /// Assigned at creation, immutable afterwards
    name: String,
    /// Records by id
    /// BTreeMap for deterministic iteration
    elements: BTreeMap<RecordId, Record>,
    /// Next identifier to hand out; only ever grows
    next_id: RecordId,
}

impl Collection {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            elements: BTreeMap::new(),
            next_id: FIRST_RECORD_ID,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Return the current counter value and advance the counter
    ///
    /// Deleting records never rewinds the counter.
    pub(crate) fn generate_element_id(&mut self) -> RecordId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn contains(&self, id: RecordId) -> bool {
        self.elements.contains_key(&id)
    }

    pub(crate) fn get(&self, id: RecordId) -> Option<&Record> {
        self.elements.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: RecordId) -> Option<&mut Record> {
        self.elements.get_mut(&id)
    }

    /// Insert a record, refusing to overwrite an existing id
    ///
    /// Returns false (and leaves the collection untouched) if the id is taken.
    pub(crate) fn insert(&mut self, record: Record) -> bool {
        if self.elements.contains_key(&record.id) {
            return false;
        }
        self.elements.insert(record.id, record);
        true
    }

    pub(crate) fn remove(&mut self, id: RecordId) -> Option<Record> {
        self.elements.remove(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }
}

/// A single keyed entry of a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Record {
    id: RecordId,
    properties: Properties,
}

impl Record {
    pub(crate) fn new(id: RecordId, properties: Properties) -> Self {
        Self { id, properties }
    }

    pub(crate) fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Replace the whole property set; nothing from the old set survives
    pub(crate) fn replace_properties(&mut self, properties: Properties) {
        self.properties = properties;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> Properties {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_new_collection_is_empty() {
        let collection = Collection::new("products");
        assert_eq!(collection.name(), "products");
        assert_eq!(collection.len(), 0);
        assert!(!collection.contains(FIRST_RECORD_ID));
    }

    #[test]
    fn test_generate_element_id_sequence() {
        let mut collection = Collection::new("products");
        assert_eq!(collection.generate_element_id(), 1);
        assert_eq!(collection.generate_element_id(), 2);
        assert_eq!(collection.generate_element_id(), 3);
    }

    #[test]
    fn test_counter_ignores_deletes() {
        let mut collection = Collection::new("products");
        let id = collection.generate_element_id();
        assert!(collection.insert(Record::new(id, Properties::new())));
        assert!(collection.remove(id).is_some());
        assert_eq!(collection.generate_element_id(), id + 1);
    }

    #[test]
    fn test_insert_refuses_duplicate() {
        let mut collection = Collection::new("products");
        assert!(collection.insert(Record::new(5, props(&[("a", "1")]))));
        assert!(!collection.insert(Record::new(5, props(&[("b", "2")]))));
        assert_eq!(collection.get(5).unwrap().properties(), &props(&[("a", "1")]));
    }

    #[test]
    fn test_replace_properties_discards_old_keys() {
        let mut record = Record::new(1, props(&[("a", "1"), ("b", "2")]));
        record.replace_properties(props(&[("c", "3")]));
        assert_eq!(record.properties(), &props(&[("c", "3")]));
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut collection = Collection::new("products");
        collection.insert(Record::new(9, props(&[("a", "1")])));
        collection
            .get_mut(9)
            .unwrap()
            .replace_properties(props(&[("a", "2")]));
        assert_eq!(collection.get(9).unwrap().properties()["a"], "2");
    }
}
