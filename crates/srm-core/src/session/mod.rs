//! The per-screen list session

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::events::{events, EventBus};
use crate::{EntityStore, Facet, Query, Record, RecordSource, SelectionController, StoreError};

/// One management screen's state: entity store + query + selection
///
/// Constructed explicitly and passed by reference to the rendering layer;
/// there are no ambient singletons, so independent instances (e.g. a
/// split-screen pair) coexist freely. All operations run to completion on
/// the caller's thread.
pub struct ListSession<R: Record, F> {
    name: String,
    store: EntityStore<R>,
    query: Query<F>,
    selection: SelectionController<R>,
    events: Arc<EventBus>,
}

impl<R: Record, F> ListSession<R, F> {
    /// Create a session with its own event bus
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_events(name, Arc::new(EventBus::new()))
    }

    /// Create a session publishing to a shared event bus
    pub fn with_events(name: impl Into<String>, events: Arc<EventBus>) -> Self {
        Self {
            name: name.into(),
            store: EntityStore::new(),
            query: Query::default(),
            selection: SelectionController::new(),
            events,
        }
    }

    /// The session name (used in events and logging)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the collection from a record source
    pub fn load_from(&mut self, source: &dyn RecordSource<R>) -> anyhow::Result<()> {
        let records = source.fetch()?;
        let count = records.len();
        self.store.load(records)?;
        info!("{}: loaded {} records from {}", self.name, count, source.source_name());
        self.events.publish(events::RecordsLoaded {
            session: self.name.clone(),
            count,
        });
        Ok(())
    }

    /// Replace the collection directly
    pub fn load(&mut self, records: Vec<R>) -> Result<(), StoreError> {
        self.store.load(records)?;
        self.events.publish(events::RecordsLoaded {
            session: self.name.clone(),
            count: self.store.len(),
        });
        Ok(())
    }

    /// Read access to the full collection
    pub fn store(&self) -> &EntityStore<R> {
        &self.store
    }

    /// The current query
    pub fn query(&self) -> &Query<F> {
        &self.query
    }

    /// Set the free-text search term
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.query.term = term.into();
        self.publish_query_changed();
    }

    /// Replace the active categorical filters
    pub fn set_filters(&mut self, filters: Vec<F>) {
        self.query.filters = filters;
        self.publish_query_changed();
    }

    /// Evaluate the current query against the collection
    pub fn visible(&self) -> Vec<&R>
    where
        F: Facet<R>,
    {
        self.query.evaluate(self.store.all())
    }

    /// Select the record with identity `id`
    ///
    /// Validated against the full collection, not the visible subset:
    /// a record may be selected while filtered out of view.
    pub fn select(&mut self, id: R::Id) -> Result<(), StoreError> {
        self.selection.select(&self.store, id)?;
        if let Some(current) = self.selection.current() {
            self.events.publish(events::SelectionChanged {
                session: self.name.clone(),
                id: current.to_string(),
            });
        }
        Ok(())
    }

    /// The selected identity value, if any
    pub fn selected_id(&self) -> Option<&R::Id> {
        self.selection.current()
    }

    /// The selected record, resolved through the full collection
    ///
    /// Still resolves when the selection is filtered out of the visible set.
    pub fn selected(&self) -> Option<&R> {
        self.selection.current().and_then(|id| self.store.get(id))
    }

    /// Reset the selection to none
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.events.publish(events::SelectionCleared {
            session: self.name.clone(),
        });
    }

    /// Snapshot the query and selection for a UI layer that persists state
    pub fn save_state(&self) -> Value
    where
        F: Serialize,
        R::Id: Serialize,
    {
        json!({
            "term": self.query.term,
            "filters": self.query.filters,
            "selected": self.selection.current(),
        })
    }

    /// Restore a snapshot produced by [`save_state`](Self::save_state)
    ///
    /// Unknown filter shapes and stale selections are dropped silently; the
    /// snapshot is advisory UI state, not data.
    pub fn restore_state(&mut self, state: &Value)
    where
        F: DeserializeOwned,
        R::Id: DeserializeOwned,
    {
        if let Some(term) = state.get("term").and_then(|v| v.as_str()) {
            self.query.term = term.to_string();
        }
        if let Some(filters) = state.get("filters") {
            if let Ok(parsed) = serde_json::from_value(filters.clone()) {
                self.query.filters = parsed;
            }
        }
        if let Some(selected) = state.get("selected") {
            if selected.is_null() {
                self.selection.clear();
            } else if let Ok(id) = serde_json::from_value::<R::Id>(selected.clone()) {
                let _ = self.selection.select(&self.store, id);
            }
        }
    }

    fn publish_query_changed(&self) {
        self.events.publish(events::QueryChanged {
            session: self.name.clone(),
            term: self.query.term.clone(),
            filter_count: self.query.filters.len(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq)]
    struct Profile {
        id: String,
        name: String,
        dept: String,
    }

    impl Profile {
        fn new(id: &str, name: &str, dept: &str) -> Self {
            Self {
                id: id.to_string(),
                name: name.to_string(),
                dept: dept.to_string(),
            }
        }
    }

    impl Record for Profile {
        type Id = String;

        fn id(&self) -> &String {
            &self.id
        }

        fn search_text(&self) -> Vec<&str> {
            vec![&self.name, &self.id, &self.dept]
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    enum ProfileFacet {
        Dept(String),
    }

    impl Facet<Profile> for ProfileFacet {
        fn matches(&self, profile: &Profile) -> bool {
            match self {
                Self::Dept(dept) => profile.dept == *dept,
            }
        }
    }

    fn session() -> ListSession<Profile, ProfileFacet> {
        let mut session = ListSession::new("students");
        session
            .load(vec![
                Profile::new("STU001", "Sarah Johnson", "CS"),
                Profile::new("STU002", "Michael Chen", "Business"),
            ])
            .unwrap();
        session
    }

    #[test]
    fn test_term_narrows_visible_set() {
        let mut session = session();
        session.set_term("chen");

        let visible = session.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "STU002");
    }

    #[test]
    fn test_selection_survives_filtering() {
        let mut session = session();
        session.select("STU002".to_string()).unwrap();
        session.set_filters(vec![ProfileFacet::Dept("CS".to_string())]);

        let visible = session.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "STU001");

        // The filtered-out selection is kept and still resolves
        assert_eq!(session.selected_id(), Some(&"STU002".to_string()));
        assert_eq!(session.selected().unwrap().name, "Michael Chen");
    }

    #[test]
    fn test_select_unknown_id_leaves_selection() {
        let mut session = session();
        session.select("STU001".to_string()).unwrap();

        assert!(session.select("STU999".to_string()).is_err());
        assert_eq!(session.selected_id(), Some(&"STU001".to_string()));
    }

    #[test]
    fn test_state_snapshot_restores_query_and_selection() {
        let mut session = session();
        session.set_term("sarah");
        session.set_filters(vec![ProfileFacet::Dept("CS".to_string())]);
        session.select("STU001".to_string()).unwrap();

        let snapshot = session.save_state();

        let mut restored: ListSession<Profile, ProfileFacet> = ListSession::new("students");
        restored
            .load(vec![
                Profile::new("STU001", "Sarah Johnson", "CS"),
                Profile::new("STU002", "Michael Chen", "Business"),
            ])
            .unwrap();
        restored.restore_state(&snapshot);

        assert_eq!(restored.query().term, "sarah");
        assert_eq!(restored.query().filters.len(), 1);
        assert_eq!(restored.selected_id(), Some(&"STU001".to_string()));
    }

    #[test]
    fn test_stale_selection_dropped_on_restore() {
        let session = session();
        let mut snapshot = session.save_state();
        snapshot["selected"] = serde_json::json!("STU999");

        let mut restored = session;
        restored.restore_state(&snapshot);
        assert_eq!(restored.selected_id(), None);
    }
}
