//! Course enrollment screen projection

use srm_core::{DashboardSettings, ListSession};
use srm_data::model::{Course, CourseFacet, Department};

use crate::cards::{course_stat_cards, StatCard};
use crate::list_view::{project_list, EmptyNotice, ListProjection};

/// Render-ready course enrollment screen
#[derive(Debug, Clone, PartialEq)]
pub struct CourseCatalogView<'a> {
    pub heading: &'static str,
    pub subheading: &'static str,
    /// Catalog-wide tiles, computed over the full collection
    pub cards: Vec<StatCard>,
    pub list: ListProjection<'a, Course>,
    /// Departments present in the catalog, in first-seen order
    pub department_choices: Vec<Department>,
    pub empty_notice: Option<EmptyNotice>,
}

/// Project the course catalog from its session state
pub fn course_catalog<'a>(
    session: &'a ListSession<Course, CourseFacet>,
    settings: &DashboardSettings,
) -> CourseCatalogView<'a> {
    let all: Vec<&Course> = session.store().all().collect();
    let cards = course_stat_cards(&all);

    let mut department_choices = Vec::new();
    for course in &all {
        if !department_choices.contains(&course.department) {
            department_choices.push(course.department);
        }
    }

    let list = project_list(session, &settings.list);
    let empty_notice = list.is_empty().then_some(EmptyNotice {
        title: "No courses found",
        hint: "Try adjusting your search criteria.",
    });

    CourseCatalogView {
        heading: "Course Enrollment",
        subheading: "Manage course offerings and student enrollments",
        cards,
        list,
        department_choices,
        empty_notice,
    }
}
