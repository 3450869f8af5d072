//! Registration applications

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use srm_core::{Facet, Record};

use super::StudentId;
use crate::ModelError;

/// Registration identity value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegistrationId(pub u32);

impl fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Processing state of a registration application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistrationStatus {
    Completed,
    Pending,
    InReview,
    Rejected,
}

impl RegistrationStatus {
    pub const ALL: [RegistrationStatus; 4] = [
        RegistrationStatus::Completed,
        RegistrationStatus::Pending,
        RegistrationStatus::InReview,
        RegistrationStatus::Rejected,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RegistrationStatus::Completed => "Completed",
            RegistrationStatus::Pending => "Pending",
            RegistrationStatus::InReview => "In Review",
            RegistrationStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RegistrationStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Completed" => Ok(RegistrationStatus::Completed),
            "Pending" => Ok(RegistrationStatus::Pending),
            "In Review" => Ok(RegistrationStatus::InReview),
            "Rejected" => Ok(RegistrationStatus::Rejected),
            _ => Err(ModelError::UnknownCategory {
                field: "registration status",
                value: s.to_string(),
            }),
        }
    }
}

/// Handling priority of a registration application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Normal,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Normal, Priority::Low];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Normal => "Normal",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(Priority::High),
            "Normal" => Ok(Priority::Normal),
            "Low" => Ok(Priority::Low),
            _ => Err(ModelError::UnknownCategory {
                field: "priority",
                value: s.to_string(),
            }),
        }
    }
}

/// Payment state attached to a registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Pending,
    NotApplicable,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Supporting document attached to an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Document {
    Transcript,
    IdCopy,
    Recommendation,
}

impl Document {
    pub fn label(&self) -> &'static str {
        match self {
            Document::Transcript => "Transcript",
            Document::IdCopy => "ID Copy",
            Document::Recommendation => "Recommendation",
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One registration application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: RegistrationId,
    pub student_name: String,
    pub student_id: StudentId,
    pub course: String,
    pub registered_on: NaiveDate,
    pub status: RegistrationStatus,
    pub priority: Priority,
    pub semester: String,
    pub payment: PaymentStatus,
    pub documents: Vec<Document>,
}

impl Record for Registration {
    type Id = RegistrationId;

    fn id(&self) -> &RegistrationId {
        &self.id
    }

    // Free-text search covers student name, student id, and course title
    fn search_text(&self) -> Vec<&str> {
        vec![&self.student_name, &self.student_id.0, &self.course]
    }
}

/// Categorical filters available on the registration board
///
/// Status and priority are independent predicates; activating both narrows
/// to their intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationFacet {
    Status(RegistrationStatus),
    Priority(Priority),
}

impl Facet<Registration> for RegistrationFacet {
    fn matches(&self, registration: &Registration) -> bool {
        match self {
            Self::Status(status) => registration.status == *status,
            Self::Priority(priority) => registration.priority == *priority,
        }
    }
}
