use serde::{Deserialize, Serialize};

mod navigator;
mod subscriber;

pub use navigator::SectionNavigator;
pub use subscriber::SectionSubscriber;

/// Top-level dashboard sections reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    Overview,
    Students,
    Courses,
    Registrations,
    Analytics,
}

impl Section {
    /// Every section, in sidebar order
    pub const ALL: [Section; 5] = [
        Section::Overview,
        Section::Students,
        Section::Courses,
        Section::Registrations,
        Section::Analytics,
    ];

    /// Sidebar label for this section
    pub fn label(&self) -> &'static str {
        match self {
            Section::Overview => "Dashboard Overview",
            Section::Students => "Student Management",
            Section::Courses => "Course Enrollment",
            Section::Registrations => "Registration Tracking",
            Section::Analytics => "Analytics Dashboard",
        }
    }
}

/// Context passed to subscribers when the active section changes
#[derive(Debug, Clone)]
pub struct SectionContext {
    pub section: Section,
    pub previous: Option<Section>,
}
