//! Generic list projection

use srm_core::{Facet, ListSession, ListSettings, Record};

/// One visible row
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow<'a, R> {
    pub record: &'a R,
    pub is_selected: bool,
}

/// Placeholder copy shown when a filtered list has no rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyNotice {
    pub title: &'static str,
    pub hint: &'static str,
}

/// Render-ready state of one list screen
#[derive(Debug, Clone, PartialEq)]
pub struct ListProjection<'a, R> {
    /// Visible rows in collection order, capped at the configured maximum
    pub rows: Vec<ListRow<'a, R>>,

    /// Size of the full collection
    pub total: usize,

    /// Number of records matching the query, before the row cap
    pub matching: usize,

    /// Whether the row cap dropped matching records
    pub truncated: bool,

    /// The selected record, resolved through the full collection
    ///
    /// Present even when the selection is filtered out of `rows`.
    pub selected: Option<&'a R>,

    /// Whether the rendering layer should number rows
    pub show_row_numbers: bool,
}

impl<R> ListProjection<'_, R> {
    /// Whether no records match the current query
    pub fn is_empty(&self) -> bool {
        self.matching == 0
    }
}

/// Project a list session into its render-ready state
///
/// Pure: equal session state and settings produce an equal projection.
pub fn project_list<'a, R, F>(
    session: &'a ListSession<R, F>,
    settings: &ListSettings,
) -> ListProjection<'a, R>
where
    R: Record,
    F: Facet<R>,
{
    let visible = session.visible();
    let matching = visible.len();
    let truncated = matching > settings.max_rows_displayed;
    let selected_id = session.selected_id();

    let rows = visible
        .into_iter()
        .take(settings.max_rows_displayed)
        .map(|record| ListRow {
            record,
            is_selected: selected_id == Some(record.id()),
        })
        .collect();

    ListProjection {
        rows,
        total: session.store().len(),
        matching,
        truncated,
        selected: session.selected(),
        show_row_numbers: settings.show_row_numbers,
    }
}
