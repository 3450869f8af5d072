//! Shared dashboard state handed to the rendering layer

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use srm_core::events::{events, EventBus};
use srm_core::{
    DashboardSettings, ListSession, Notification, NotificationLog, NotificationSink,
    SectionNavigator, StoreError,
};
use srm_data::model::{
    Course, CourseCode, CourseFacet, Registration, RegistrationFacet, Student, StudentFacet,
};
use srm_data::samples::{SampleCourses, SampleRegistrations, SampleStudents};

/// Context shared between the rendering layer and the session state
///
/// One instance per UI session. Everything is reached through `Arc` so a
/// renderer can hold the pieces it needs; all access happens on one logical
/// thread of control.
pub struct DashboardContext {
    /// Student management session
    pub students: Arc<RwLock<ListSession<Student, StudentFacet>>>,

    /// Course enrollment session
    pub courses: Arc<RwLock<ListSession<Course, CourseFacet>>>,

    /// Registration tracking session
    pub registrations: Arc<RwLock<ListSession<Registration, RegistrationFacet>>>,

    /// Active-section navigator
    pub navigator: Arc<SectionNavigator>,

    /// Notification log backing the toast UI and the activity feed
    pub notifications: Arc<RwLock<NotificationLog>>,

    /// Presentation settings
    pub settings: Arc<RwLock<DashboardSettings>>,

    /// Event bus shared by all sessions
    pub events: Arc<EventBus>,
}

impl DashboardContext {
    /// Create a context with empty collections
    pub fn new() -> Self {
        let events = Arc::new(EventBus::new());

        Self {
            students: Arc::new(RwLock::new(ListSession::with_events(
                "students",
                events.clone(),
            ))),
            courses: Arc::new(RwLock::new(ListSession::with_events(
                "courses",
                events.clone(),
            ))),
            registrations: Arc::new(RwLock::new(ListSession::with_events(
                "registrations",
                events.clone(),
            ))),
            navigator: Arc::new(SectionNavigator::with_events(events.clone())),
            notifications: Arc::new(RwLock::new(NotificationLog::new())),
            settings: Arc::new(RwLock::new(DashboardSettings::default())),
            events,
        }
    }

    /// Create a context seeded with the built-in demo datasets
    pub fn with_sample_data() -> anyhow::Result<Self> {
        let context = Self::new();
        context.students.write().load_from(&SampleStudents)?;
        context.courses.write().load_from(&SampleCourses)?;
        context.registrations.write().load_from(&SampleRegistrations)?;
        Ok(context)
    }

    /// Simulate creating a student profile
    ///
    /// Raises a notification only; the roster is not mutated.
    pub fn add_student(&self) {
        self.raise(Notification::success(
            "Student Added",
            "New student profile has been created successfully.",
        ));
    }

    /// Simulate updating the selected student profile
    pub fn update_student(&self) {
        self.raise(Notification::success(
            "Profile Updated",
            "Student information has been updated successfully.",
        ));
    }

    /// Simulate enrolling a student in `course_id`
    ///
    /// Full courses are refused with a warning notification. Fails only when
    /// the course does not exist; the catalog itself is never mutated.
    pub fn enroll_student(&self, course_id: &CourseCode) -> Result<(), StoreError> {
        let full = {
            let courses = self.courses.read();
            match courses.store().get(course_id) {
                Some(course) => course.is_full(),
                None => {
                    return Err(StoreError::UnknownId {
                        id: course_id.to_string(),
                    })
                }
            }
        };

        if full {
            debug!("enrollment refused, {} is full", course_id);
            self.raise(Notification::warning(
                "Course Full",
                format!("{course_id} has reached its maximum capacity."),
            ));
        } else {
            self.raise(Notification::success(
                "Student Enrolled",
                "Student has been successfully enrolled in the course.",
            ));
        }
        Ok(())
    }

    fn raise(&self, notification: Notification) {
        self.events.publish(events::NotificationRaised {
            title: notification.title.clone(),
            kind: notification.kind,
        });
        self.notifications.write().notify(notification);
    }
}

impl Default for DashboardContext {
    fn default() -> Self {
        Self::new()
    }
}
