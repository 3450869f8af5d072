//! Ordered entity storage

use indexmap::IndexMap;
use tracing::debug;

use crate::{Record, StoreError};

/// Holds an ordered collection of records of one entity type
///
/// Insertion order is preserved and is the default display order. Identity
/// values are unique across the collection at all times.
pub struct EntityStore<R: Record> {
    records: IndexMap<R::Id, R>,
}

impl<R: Record> EntityStore<R> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }

    /// Replace the collection with `records`
    ///
    /// Fails if any two records share an identity value; on failure the
    /// prior collection is left fully intact.
    pub fn load(&mut self, records: Vec<R>) -> Result<(), StoreError> {
        let mut next = IndexMap::with_capacity(records.len());
        for record in records {
            let id = record.id().clone();
            if next.insert(id.clone(), record).is_some() {
                return Err(StoreError::DuplicateId { id: id.to_string() });
            }
        }
        debug!("entity store loaded with {} records", next.len());
        self.records = next;
        Ok(())
    }

    /// All records in insertion order
    pub fn all(&self) -> impl Iterator<Item = &R> {
        self.records.values()
    }

    /// Point lookup by identity value
    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.records.get(id)
    }

    /// Whether a record with this identity exists
    pub fn contains(&self, id: &R::Id) -> bool {
        self.records.contains_key(id)
    }

    /// Number of records in the collection
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Record> Default for EntityStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Item {
        id: String,
        label: String,
    }

    impl Item {
        fn new(id: &str, label: &str) -> Self {
            Self {
                id: id.to_string(),
                label: label.to_string(),
            }
        }
    }

    impl Record for Item {
        type Id = String;

        fn id(&self) -> &String {
            &self.id
        }

        fn search_text(&self) -> Vec<&str> {
            vec![&self.label]
        }
    }

    #[test]
    fn test_load_and_lookup() {
        let mut store = EntityStore::new();
        store
            .load(vec![Item::new("a", "first"), Item::new("b", "second")])
            .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&"b".to_string()).unwrap().label, "second");
        assert!(store.get(&"missing".to_string()).is_none());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = EntityStore::new();
        store
            .load(vec![
                Item::new("z", "last alphabetically, first inserted"),
                Item::new("a", "first alphabetically"),
                Item::new("m", "middle"),
            ])
            .unwrap();

        let ids: Vec<&str> = store.all().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_duplicate_id_rejected_atomically() {
        let mut store = EntityStore::new();
        store.load(vec![Item::new("a", "original")]).unwrap();

        let err = store
            .load(vec![
                Item::new("b", "one"),
                Item::new("c", "two"),
                Item::new("b", "one again"),
            ])
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::DuplicateId {
                id: "b".to_string()
            }
        );

        // Prior collection untouched
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&"a".to_string()).unwrap().label, "original");
    }
}
