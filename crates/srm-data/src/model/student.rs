//! Student profiles

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use srm_core::{Facet, Record};

use super::Department;
use crate::ModelError;

/// Student identity value, e.g. "STU001"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Enrollment standing of a student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudentStatus {
    Active,
    OnLeave,
    Graduated,
    Inactive,
}

impl StudentStatus {
    pub const ALL: [StudentStatus; 4] = [
        StudentStatus::Active,
        StudentStatus::OnLeave,
        StudentStatus::Graduated,
        StudentStatus::Inactive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StudentStatus::Active => "Active",
            StudentStatus::OnLeave => "On Leave",
            StudentStatus::Graduated => "Graduated",
            StudentStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StudentStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(StudentStatus::Active),
            "On Leave" => Ok(StudentStatus::OnLeave),
            "Graduated" => Ok(StudentStatus::Graduated),
            "Inactive" => Ok(StudentStatus::Inactive),
            _ => Err(ModelError::UnknownCategory {
                field: "student status",
                value: s.to_string(),
            }),
        }
    }
}

/// Class standing by accumulated credits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcademicYear {
    Freshman,
    Sophomore,
    Junior,
    Senior,
}

impl AcademicYear {
    pub fn label(&self) -> &'static str {
        match self {
            AcademicYear::Freshman => "Freshman",
            AcademicYear::Sophomore => "Sophomore",
            AcademicYear::Junior => "Junior",
            AcademicYear::Senior => "Senior",
        }
    }
}

impl fmt::Display for AcademicYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AcademicYear {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Freshman" => Ok(AcademicYear::Freshman),
            "Sophomore" => Ok(AcademicYear::Sophomore),
            "Junior" => Ok(AcademicYear::Junior),
            "Senior" => Ok(AcademicYear::Senior),
            _ => Err(ModelError::UnknownCategory {
                field: "academic year",
                value: s.to_string(),
            }),
        }
    }
}

/// One student profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub date_of_birth: NaiveDate,
    pub enrollment_date: NaiveDate,
    pub status: StudentStatus,
    pub major: Department,
    pub year: AcademicYear,
    pub gpa: f32,
    pub credits: u32,
}

impl Record for Student {
    type Id = StudentId;

    fn id(&self) -> &StudentId {
        &self.id
    }

    // Free-text search covers name, email, and major
    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.email, self.major.label()]
    }
}

/// Categorical filters available on the student directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudentFacet {
    Status(StudentStatus),
    Major(Department),
}

impl Facet<Student> for StudentFacet {
    fn matches(&self, student: &Student) -> bool {
        match self {
            Self::Status(status) => student.status == *status,
            Self::Major(major) => student.major == *major,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(StudentStatus::OnLeave.to_string(), "On Leave");
        assert_eq!("On Leave".parse::<StudentStatus>(), Ok(StudentStatus::OnLeave));
    }

    #[test]
    fn test_unknown_status_label_is_config_error() {
        assert!("Suspended".parse::<StudentStatus>().is_err());
    }
}
