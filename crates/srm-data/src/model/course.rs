//! Course offerings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use srm_core::{Facet, Record};

use super::Department;
use crate::ModelError;

/// Course identity value, e.g. "CS101"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseCode(pub String);

impl CourseCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Enrollment state of a course offering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseStatus {
    Open,
    Full,
    Closed,
    Waitlist,
}

impl CourseStatus {
    pub const ALL: [CourseStatus; 4] = [
        CourseStatus::Open,
        CourseStatus::Full,
        CourseStatus::Closed,
        CourseStatus::Waitlist,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CourseStatus::Open => "Open",
            CourseStatus::Full => "Full",
            CourseStatus::Closed => "Closed",
            CourseStatus::Waitlist => "Waitlist",
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CourseStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(CourseStatus::Open),
            "Full" => Ok(CourseStatus::Full),
            "Closed" => Ok(CourseStatus::Closed),
            "Waitlist" => Ok(CourseStatus::Waitlist),
            _ => Err(ModelError::UnknownCategory {
                field: "course status",
                value: s.to_string(),
            }),
        }
    }
}

/// How close a course is to its enrollment cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityLevel {
    Comfortable,
    NearCapacity,
    AtCapacity,
}

/// One course offering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseCode,
    pub name: String,
    pub department: Department,
    pub credits: u32,
    pub instructor: String,
    pub schedule: String,
    pub location: String,
    pub enrolled: u32,
    pub capacity: u32,
    pub status: CourseStatus,
    pub semester: String,
    pub description: String,
}

impl Course {
    /// Fraction of capacity in use, 0.0 when capacity is zero
    pub fn fill_ratio(&self) -> f32 {
        if self.capacity == 0 {
            0.0
        } else {
            self.enrolled as f32 / self.capacity as f32
        }
    }

    /// Capacity band used for enrollment-bar coloring
    pub fn capacity_level(&self) -> CapacityLevel {
        let ratio = self.fill_ratio();
        if ratio >= 1.0 {
            CapacityLevel::AtCapacity
        } else if ratio >= 0.8 {
            CapacityLevel::NearCapacity
        } else {
            CapacityLevel::Comfortable
        }
    }

    /// Whether new enrollments are rejected
    pub fn is_full(&self) -> bool {
        matches!(self.status, CourseStatus::Full)
    }
}

impl Record for Course {
    type Id = CourseCode;

    fn id(&self) -> &CourseCode {
        &self.id
    }

    // Free-text search covers name, code, and instructor
    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.id.0, &self.instructor]
    }
}

/// Categorical filters available on the course catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseFacet {
    Department(Department),
}

impl Facet<Course> for CourseFacet {
    fn matches(&self, course: &Course) -> bool {
        match self {
            Self::Department(department) => course.department == *department,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(enrolled: u32, capacity: u32) -> Course {
        Course {
            id: CourseCode::new("CS101"),
            name: "Introduction to Computer Science".to_string(),
            department: Department::ComputerScience,
            credits: 3,
            instructor: "Dr. Sarah Mitchell".to_string(),
            schedule: "MWF 9:00-10:00 AM".to_string(),
            location: "Tech Building 101".to_string(),
            enrolled,
            capacity,
            status: CourseStatus::Open,
            semester: "Fall 2024".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_capacity_levels() {
        assert_eq!(course(18, 30).capacity_level(), CapacityLevel::Comfortable);
        assert_eq!(course(28, 30).capacity_level(), CapacityLevel::NearCapacity);
        assert_eq!(course(25, 25).capacity_level(), CapacityLevel::AtCapacity);
    }

    #[test]
    fn test_zero_capacity_does_not_divide() {
        assert_eq!(course(0, 0).fill_ratio(), 0.0);
        assert_eq!(course(0, 0).capacity_level(), CapacityLevel::Comfortable);
    }
}
