//! Per-section dashboard projections

mod analytics;
mod courses;
mod overview;
mod registrations;
mod students;

pub use analytics::{analytics_dashboard, AnalyticsView};
pub use courses::{course_catalog, CourseCatalogView};
pub use overview::{overview, ActivityEntry, OverviewView, QuickLink};
pub use registrations::{registration_board, RegistrationBoardView};
pub use students::{student_directory, StudentDirectoryView};
