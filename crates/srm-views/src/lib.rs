//! View projection layer for the registration dashboard
//!
//! Pure mappings from session state to render-ready structures. A rendering
//! layer re-invokes the projectors whenever a session or the navigator
//! changes; identical inputs produce equal outputs, so unchanged screens can
//! skip re-rendering.

pub mod cards;
pub mod charts;
mod context;
pub mod list_view;
pub mod sections;

pub use cards::{StatCard, Trend};
pub use charts::{AreaSeries, BarSeries, LineSeries, PieSlice, SeriesPoint};
pub use context::DashboardContext;
pub use list_view::{project_list, EmptyNotice, ListProjection, ListRow};
pub use sections::{
    analytics_dashboard, course_catalog, overview, registration_board, student_directory,
    AnalyticsView, CourseCatalogView, OverviewView, QuickLink, RegistrationBoardView,
    StudentDirectoryView,
};
