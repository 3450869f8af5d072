//! Student management screen projection

use srm_core::{DashboardSettings, ListSession};
use srm_data::model::{Student, StudentFacet, StudentStatus};

use crate::list_view::{project_list, EmptyNotice, ListProjection};

/// Render-ready student management screen
#[derive(Debug, Clone, PartialEq)]
pub struct StudentDirectoryView<'a> {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub list: ListProjection<'a, Student>,
    /// Status universe for the filter dropdown
    pub status_choices: Vec<StudentStatus>,
    pub empty_notice: Option<EmptyNotice>,
}

/// Project the student directory from its session state
pub fn student_directory<'a>(
    session: &'a ListSession<Student, StudentFacet>,
    settings: &DashboardSettings,
) -> StudentDirectoryView<'a> {
    let list = project_list(session, &settings.list);
    let empty_notice = list.is_empty().then_some(EmptyNotice {
        title: "No students found",
        hint: "Try adjusting your search criteria or add a new student.",
    });

    StudentDirectoryView {
        heading: "Student Management",
        subheading: "Manage student profiles and academic information",
        list,
        status_choices: StudentStatus::ALL.to_vec(),
        empty_notice,
    }
}
