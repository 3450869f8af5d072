//! Domain model and sample data for the registration dashboard
//!
//! Concrete record types (students, courses, registrations) with closed
//! categorical enums, the built-in demo datasets, and the static analytics
//! series behind the charts.

pub mod analytics;
pub mod model;
pub mod samples;

use thiserror::Error;

// Re-exports
pub use model::{
    AcademicYear, CapacityLevel, Course, CourseCode, CourseFacet, CourseStatus, Department,
    Document, PaymentStatus, Priority, Registration, RegistrationFacet, RegistrationId,
    RegistrationStatus, Student, StudentFacet, StudentId, StudentStatus,
};
pub use samples::{SampleCourses, SampleRegistrations, SampleStudents};

/// Errors that can occur in model-level data handling
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown {field} label: {value}")]
    UnknownCategory { field: &'static str, value: String },
}
