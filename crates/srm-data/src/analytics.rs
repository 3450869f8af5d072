//! Static analytics series behind the dashboard charts

use crate::model::Department;

/// One month of enrollment activity
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentMonth {
    pub month: &'static str,
    pub students: u32,
    pub courses: u32,
}

/// Student head count for one department
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentShare {
    pub department: Department,
    pub students: u32,
    /// Chart color (RGB)
    pub color: [u8; 3],
}

/// Student count within one GPA range
#[derive(Debug, Clone, PartialEq)]
pub struct GpaBand {
    pub range: &'static str,
    pub count: u32,
}

/// Enrollment vs graduation figures for one year
#[derive(Debug, Clone, PartialEq)]
pub struct GraduationYear {
    pub year: u16,
    pub graduated: u32,
    pub enrolled: u32,
}

/// A headline metric shown on the analytics screen
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    pub title: &'static str,
    pub value: &'static str,
    pub detail: &'static str,
}

/// Campus-wide figures for the overview tiles
#[derive(Debug, Clone, PartialEq)]
pub struct CampusFigures {
    pub total_students: u32,
    pub active_courses: u32,
    pub pending_registrations: u32,
    pub completion_rate: f32,
    pub student_change_pct: f32,
    pub course_change: i32,
    pub registration_change_pct: f32,
    pub completion_change_pct: f32,
}

/// Teaching-load figures for the secondary analytics tiles
#[derive(Debug, Clone, PartialEq)]
pub struct TeachingFigures {
    pub avg_class_size: f32,
    pub faculty_ratio: &'static str,
    pub avg_credits: f32,
}

/// Monthly enrollment trend over the past year
pub fn enrollment_trend() -> Vec<EnrollmentMonth> {
    let months = [
        ("Jan", 450, 25),
        ("Feb", 520, 28),
        ("Mar", 480, 30),
        ("Apr", 590, 32),
        ("May", 620, 35),
        ("Jun", 680, 38),
        ("Jul", 720, 40),
        ("Aug", 850, 45),
        ("Sep", 920, 48),
        ("Oct", 880, 46),
        ("Nov", 950, 50),
        ("Dec", 890, 47),
    ];
    months
        .into_iter()
        .map(|(month, students, courses)| EnrollmentMonth {
            month,
            students,
            courses,
        })
        .collect()
}

/// Distribution of students across departments
pub fn department_distribution() -> Vec<DepartmentShare> {
    vec![
        DepartmentShare {
            department: Department::ComputerScience,
            students: 245,
            color: [59, 130, 246],
        },
        DepartmentShare {
            department: Department::Business,
            students: 198,
            color: [16, 185, 129],
        },
        DepartmentShare {
            department: Department::Psychology,
            students: 156,
            color: [139, 92, 246],
        },
        DepartmentShare {
            department: Department::Mathematics,
            students: 134,
            color: [245, 158, 11],
        },
        DepartmentShare {
            department: Department::Engineering,
            students: 189,
            color: [239, 68, 68],
        },
        DepartmentShare {
            department: Department::English,
            students: 112,
            color: [107, 114, 128],
        },
    ]
}

/// Student performance across GPA ranges
pub fn gpa_distribution() -> Vec<GpaBand> {
    vec![
        GpaBand { range: "3.5-4.0", count: 420 },
        GpaBand { range: "3.0-3.49", count: 680 },
        GpaBand { range: "2.5-2.99", count: 340 },
        GpaBand { range: "2.0-2.49", count: 120 },
        GpaBand { range: "Below 2.0", count: 45 },
    ]
}

/// Enrollment vs graduation over recent years
pub fn graduation_trend() -> Vec<GraduationYear> {
    vec![
        GraduationYear { year: 2020, graduated: 380, enrolled: 2100 },
        GraduationYear { year: 2021, graduated: 420, enrolled: 2250 },
        GraduationYear { year: 2022, graduated: 465, enrolled: 2400 },
        GraduationYear { year: 2023, graduated: 510, enrolled: 2650 },
        GraduationYear { year: 2024, graduated: 485, enrolled: 2847 },
    ]
}

/// Headline metrics for the analytics screen
pub fn headline_metrics() -> Vec<MetricSample> {
    vec![
        MetricSample {
            title: "Enrollment Growth",
            value: "+18.7%",
            detail: "vs last semester",
        },
        MetricSample {
            title: "Retention Rate",
            value: "94.2%",
            detail: "Student retention",
        },
        MetricSample {
            title: "Course Completion",
            value: "89.5%",
            detail: "Average completion rate",
        },
        MetricSample {
            title: "Graduation Rate",
            value: "87.3%",
            detail: "4-year graduation",
        },
    ]
}

/// Campus-wide overview figures
pub fn campus_figures() -> CampusFigures {
    CampusFigures {
        total_students: 2847,
        active_courses: 45,
        pending_registrations: 127,
        completion_rate: 89.2,
        student_change_pct: 12.0,
        course_change: 3,
        registration_change_pct: -8.0,
        completion_change_pct: 2.1,
    }
}

/// Secondary analytics figures
pub fn teaching_figures() -> TeachingFigures {
    TeachingFigures {
        avg_class_size: 24.8,
        faculty_ratio: "1:16",
        avg_credits: 15.2,
    }
}
