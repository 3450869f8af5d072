//! Record and record-source abstractions

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A single entity instance with a stable identity
///
/// The identity value is unique within its collection and is never mutated
/// after creation. It is the only field used for equality and selection.
pub trait Record {
    /// Identity field type
    type Id: Clone + Eq + Hash + Debug + Display;

    /// The identity value of this record
    fn id(&self) -> &Self::Id;

    /// String fields scanned by the free-text predicate
    fn search_text(&self) -> Vec<&str>;
}

/// Supplier of initial entity collections
///
/// Implementations are expected to hand over collections whose identity
/// values are unique; [`EntityStore::load`](crate::EntityStore::load)
/// re-checks regardless.
pub trait RecordSource<R: Record> {
    /// Produce the full collection for this source
    fn fetch(&self) -> anyhow::Result<Vec<R>>;

    /// Get the source name (for logging and events)
    fn source_name(&self) -> &str;
}
