//! Selection tracking for detail views

use tracing::debug;

use crate::{EntityStore, Record, StoreError};

/// Tracks which single record is active for detail display
///
/// Selection is validated against the full collection, not the visible
/// subset, and once set it persists across query changes: filtering the
/// selected record out of view does not clear it.
#[derive(Debug)]
pub struct SelectionController<R: Record> {
    current: Option<R::Id>,
}

impl<R: Record> SelectionController<R> {
    /// Create a controller with nothing selected
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Select the record with identity `id`
    ///
    /// Fails if `id` is not present in `store`; the previous selection is
    /// kept in that case.
    pub fn select(&mut self, store: &EntityStore<R>, id: R::Id) -> Result<(), StoreError> {
        if !store.contains(&id) {
            return Err(StoreError::UnknownId { id: id.to_string() });
        }
        debug!("selected record {}", id);
        self.current = Some(id);
        Ok(())
    }

    /// The active identity value, if any
    pub fn current(&self) -> Option<&R::Id> {
        self.current.as_ref()
    }

    /// Reset the selection to none
    pub fn clear(&mut self) {
        self.current = None;
    }
}

impl<R: Record> Default for SelectionController<R> {
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
    }

    impl Record for Item {
        type Id = String;

        fn id(&self) -> &String {
            &self.id
        }

        fn search_text(&self) -> Vec<&str> {
            vec![&self.id]
        }
    }

    fn store_with(ids: &[&str]) -> EntityStore<Item> {
        let mut store = EntityStore::new();
        store
            .load(ids.iter().map(|id| Item { id: id.to_string() }).collect())
            .unwrap();
        store
    }

    #[test]
    fn test_select_and_clear() {
        let store = store_with(&["STU001", "STU002"]);
        let mut selection = SelectionController::new();

        selection.select(&store, "STU002".to_string()).unwrap();
        assert_eq!(selection.current(), Some(&"STU002".to_string()));

        selection.clear();
        assert_eq!(selection.current(), None);
    }

    #[test]
    fn test_unknown_id_rejected_and_selection_kept() {
        let store = store_with(&["STU001", "STU002"]);
        let mut selection = SelectionController::new();
        selection.select(&store, "STU001".to_string()).unwrap();

        let err = selection.select(&store, "STU999".to_string()).unwrap_err();
        assert_eq!(
            err,
            StoreError::UnknownId {
                id: "STU999".to_string()
            }
        );
        assert_eq!(selection.current(), Some(&"STU001".to_string()));
    }
}
