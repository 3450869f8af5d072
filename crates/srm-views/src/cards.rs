//! Stat card projections

use srm_data::analytics::{CampusFigures, MetricSample, TeachingFigures};
use srm_data::model::{Course, Registration, RegistrationStatus};

/// Direction of a headline trend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// Render-ready numeric tile
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub detail: String,
    pub trend: Option<Trend>,
}

impl StatCard {
    fn plain(title: &str, value: impl Into<String>, detail: &str) -> Self {
        Self {
            title: title.to_string(),
            value: value.into(),
            detail: detail.to_string(),
            trend: None,
        }
    }
}

/// Format an integer with thousands separators, e.g. 2847 -> "2,847"
pub(crate) fn thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Status overview tiles for the registration board
///
/// Counts are taken over the full collection, not the filtered view.
pub fn registration_status_cards(registrations: &[&Registration]) -> Vec<StatCard> {
    let count = |status: RegistrationStatus| {
        registrations
            .iter()
            .filter(|registration| registration.status == status)
            .count()
            .to_string()
    };

    vec![
        StatCard::plain("Total", registrations.len().to_string(), "all registrations"),
        StatCard::plain("Completed", count(RegistrationStatus::Completed), "processed"),
        StatCard::plain("Pending", count(RegistrationStatus::Pending), "awaiting action"),
        StatCard::plain("In Review", count(RegistrationStatus::InReview), "under review"),
        StatCard::plain("Rejected", count(RegistrationStatus::Rejected), "declined"),
    ]
}

/// Catalog-wide tiles for the course screen
pub fn course_stat_cards(courses: &[&Course]) -> Vec<StatCard> {
    let open = courses.iter().filter(|course| !course.is_full()).count();
    let full = courses.iter().filter(|course| course.is_full()).count();
    let enrolled: u32 = courses.iter().map(|course| course.enrolled).sum();

    vec![
        StatCard::plain("Total Courses", courses.len().to_string(), "this semester"),
        StatCard::plain("Open Courses", open.to_string(), "accepting enrollments"),
        StatCard::plain("Full Courses", full.to_string(), "at capacity"),
        StatCard::plain("Total Enrolled", thousands(enrolled), "across all courses"),
    ]
}

/// The four headline tiles on the overview screen
pub fn overview_cards(figures: &CampusFigures) -> Vec<StatCard> {
    let trend = |change: f32| {
        if change >= 0.0 {
            Some(Trend::Up)
        } else {
            Some(Trend::Down)
        }
    };

    vec![
        StatCard {
            title: "Total Students".to_string(),
            value: thousands(figures.total_students),
            detail: format!("{:+}% from last month", figures.student_change_pct),
            trend: trend(figures.student_change_pct),
        },
        StatCard {
            title: "Active Courses".to_string(),
            value: figures.active_courses.to_string(),
            detail: format!("{:+} from last month", figures.course_change),
            trend: trend(figures.course_change as f32),
        },
        StatCard {
            title: "Pending Registrations".to_string(),
            value: figures.pending_registrations.to_string(),
            detail: format!("{:+}% from last month", figures.registration_change_pct),
            trend: trend(figures.registration_change_pct),
        },
        StatCard {
            title: "Completion Rate".to_string(),
            value: format!("{}%", figures.completion_rate),
            detail: format!("{:+}% from last month", figures.completion_change_pct),
            trend: trend(figures.completion_change_pct),
        },
    ]
}

/// Headline metric tiles for the analytics screen
pub fn metric_cards(metrics: &[MetricSample]) -> Vec<StatCard> {
    metrics
        .iter()
        .map(|metric| StatCard::plain(metric.title, metric.value, metric.detail))
        .collect()
}

/// Secondary teaching-load tiles for the analytics screen
pub fn teaching_cards(figures: &TeachingFigures) -> Vec<StatCard> {
    vec![
        StatCard::plain(
            "Average Class Size",
            figures.avg_class_size.to_string(),
            "students per class",
        ),
        StatCard::plain(
            "Faculty-Student Ratio",
            figures.faculty_ratio,
            "optimal ratio maintained",
        ),
        StatCard::plain(
            "Average Credits",
            figures.avg_credits.to_string(),
            "credits per student",
        ),
    ]
}
