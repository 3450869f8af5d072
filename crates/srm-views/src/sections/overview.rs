//! Overview screen projection

use chrono::{DateTime, Utc};

use srm_core::{NotificationKind, NotificationLog, Section};
use srm_data::analytics::CampusFigures;

use crate::cards::{overview_cards, thousands, StatCard};

/// A quick-action card linking to another section
#[derive(Debug, Clone, PartialEq)]
pub struct QuickLink {
    pub section: Section,
    pub title: &'static str,
    pub description: &'static str,
    pub badge: String,
}

/// One row of the recent-activity feed
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub title: String,
    pub description: String,
    pub kind: NotificationKind,
    pub raised_at: DateTime<Utc>,
}

/// Render-ready overview screen
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewView {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub cards: Vec<StatCard>,
    pub quick_links: Vec<QuickLink>,
    pub recent_activity: Vec<ActivityEntry>,
}

/// Project the overview screen from the campus figures and activity log
pub fn overview(figures: &CampusFigures, log: &NotificationLog) -> OverviewView {
    let quick_links = vec![
        QuickLink {
            section: Section::Students,
            title: "Student Profiles",
            description: "Manage student information, contact details, and academic records",
            badge: format!("{} Active", thousands(figures.total_students)),
        },
        QuickLink {
            section: Section::Courses,
            title: "Course Enrollment",
            description: "Handle course registrations, capacity management, and scheduling",
            badge: format!("{} Courses", figures.active_courses),
        },
        QuickLink {
            section: Section::Registrations,
            title: "Registration Tracking",
            description: "Monitor registration status, approvals, and pending applications",
            badge: format!("{} Pending", figures.pending_registrations),
        },
        QuickLink {
            section: Section::Analytics,
            title: "Analytics Dashboard",
            description: "View reports, trends, and data-driven insights for decision making",
            badge: format!("{}% Rate", figures.completion_rate),
        },
    ];

    let recent_activity = log
        .recent(4)
        .iter()
        .map(|notification| ActivityEntry {
            title: notification.title.clone(),
            description: notification.description.clone(),
            kind: notification.kind,
            raised_at: notification.raised_at,
        })
        .collect();

    OverviewView {
        heading: "Student Registration Dashboard",
        subheading: "Comprehensive web application for educational institutions to manage \
                     student registrations, course enrollments, and academic data efficiently.",
        cards: overview_cards(figures),
        quick_links,
        recent_activity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use srm_core::{Notification, NotificationSink};
    use srm_data::analytics;

    #[test]
    fn test_quick_links_carry_figures() {
        let view = overview(&analytics::campus_figures(), &NotificationLog::new());

        assert_eq!(view.quick_links.len(), 4);
        assert_eq!(view.quick_links[0].badge, "2,847 Active");
        assert_eq!(view.quick_links[2].badge, "127 Pending");
        assert!(view.recent_activity.is_empty());
    }

    #[test]
    fn test_recent_activity_mirrors_log() {
        let mut log = NotificationLog::new();
        for i in 0..6 {
            log.notify(Notification::info(format!("Event {i}"), ""));
        }

        let view = overview(&analytics::campus_figures(), &log);
        assert_eq!(view.recent_activity.len(), 4);
        assert_eq!(view.recent_activity[0].title, "Event 5");
    }
}
