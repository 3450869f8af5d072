//! Core session state for the student registration dashboard
//!
//! This crate provides the reusable search/filter/select abstraction behind
//! every management screen: an ordered entity store, a deterministic query
//! engine, a selection controller, and the session object that ties them
//! together for a rendering layer.

pub mod error;
pub mod events;
pub mod navigation;
pub mod notify;
pub mod query;
pub mod record;
pub mod selection;
pub mod session;
pub mod settings;
pub mod store;

// Re-export commonly used types
pub use error::StoreError;
pub use navigation::{Section, SectionContext, SectionNavigator, SectionSubscriber};
pub use notify::{Notification, NotificationKind, NotificationLog, NotificationSink};
pub use query::{Facet, Query};
pub use record::{Record, RecordSource};
pub use selection::SelectionController;
pub use session::ListSession;
pub use settings::{DashboardSettings, ListSettings, ThemeSettings};
pub use store::EntityStore;
