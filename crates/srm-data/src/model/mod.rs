//! Typed records for the management screens

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

mod course;
mod registration;
mod student;

pub use course::{CapacityLevel, Course, CourseCode, CourseFacet, CourseStatus};
pub use registration::{
    Document, PaymentStatus, Priority, Registration, RegistrationFacet, RegistrationId,
    RegistrationStatus,
};
pub use student::{AcademicYear, Student, StudentFacet, StudentId, StudentStatus};

/// Academic department, shared by student majors and course offerings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    ComputerScience,
    Business,
    Psychology,
    Mathematics,
    Engineering,
    English,
}

impl Department {
    /// Every department, in catalog order
    pub const ALL: [Department; 6] = [
        Department::ComputerScience,
        Department::Business,
        Department::Psychology,
        Department::Mathematics,
        Department::Engineering,
        Department::English,
    ];

    /// Display label for this department
    pub fn label(&self) -> &'static str {
        match self {
            Department::ComputerScience => "Computer Science",
            Department::Business => "Business",
            Department::Psychology => "Psychology",
            Department::Mathematics => "Mathematics",
            Department::Engineering => "Engineering",
            Department::English => "English",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Department {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Computer Science" => Ok(Department::ComputerScience),
            "Business" => Ok(Department::Business),
            "Psychology" => Ok(Department::Psychology),
            "Mathematics" => Ok(Department::Mathematics),
            "Engineering" => Ok(Department::Engineering),
            "English" => Ok(Department::English),
            _ => Err(ModelError::UnknownCategory {
                field: "department",
                value: s.to_string(),
            }),
        }
    }
}
