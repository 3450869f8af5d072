//! Built-in demo datasets
//!
//! Static collections behind the demo dashboard. Each dataset is exposed as
//! a record source so seeding flows through the same load path a real data
//! collaborator would use.

use chrono::NaiveDate;

use srm_core::RecordSource;

use crate::model::{
    AcademicYear, Course, CourseCode, CourseStatus, Department, Document, PaymentStatus, Priority,
    Registration, RegistrationId, RegistrationStatus, Student, StudentId, StudentStatus,
};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Demo student roster
pub struct SampleStudents;

impl RecordSource<Student> for SampleStudents {
    fn fetch(&self) -> anyhow::Result<Vec<Student>> {
        Ok(vec![
            Student {
                id: StudentId::new("STU001"),
                name: "Sarah Johnson".to_string(),
                email: "sarah.johnson@email.com".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
                address: "123 Main St, Anytown, USA".to_string(),
                date_of_birth: ymd(1999, 3, 15),
                enrollment_date: ymd(2023, 9, 1),
                status: StudentStatus::Active,
                major: Department::ComputerScience,
                year: AcademicYear::Junior,
                gpa: 3.8,
                credits: 78,
            },
            Student {
                id: StudentId::new("STU002"),
                name: "Michael Chen".to_string(),
                email: "michael.chen@email.com".to_string(),
                phone: "+1 (555) 234-5678".to_string(),
                address: "456 Oak Ave, Another City, USA".to_string(),
                date_of_birth: ymd(2000, 7, 22),
                enrollment_date: ymd(2023, 9, 1),
                status: StudentStatus::Active,
                major: Department::Business,
                year: AcademicYear::Sophomore,
                gpa: 3.6,
                credits: 45,
            },
            Student {
                id: StudentId::new("STU003"),
                name: "Emily Rodriguez".to_string(),
                email: "emily.rodriguez@email.com".to_string(),
                phone: "+1 (555) 345-6789".to_string(),
                address: "789 Pine St, Somewhere, USA".to_string(),
                date_of_birth: ymd(1998, 11, 8),
                enrollment_date: ymd(2022, 9, 1),
                status: StudentStatus::OnLeave,
                major: Department::Psychology,
                year: AcademicYear::Senior,
                gpa: 3.9,
                credits: 102,
            },
            Student {
                id: StudentId::new("STU004"),
                name: "James Wilson".to_string(),
                email: "james.wilson@email.com".to_string(),
                phone: "+1 (555) 456-7890".to_string(),
                address: "321 Elm St, Elsewhere, USA".to_string(),
                date_of_birth: ymd(2001, 1, 30),
                enrollment_date: ymd(2024, 1, 15),
                status: StudentStatus::Active,
                major: Department::Mathematics,
                year: AcademicYear::Freshman,
                gpa: 4.0,
                credits: 15,
            },
        ])
    }

    fn source_name(&self) -> &str {
        "sample-students"
    }
}

/// Demo course catalog
pub struct SampleCourses;

impl RecordSource<Course> for SampleCourses {
    fn fetch(&self) -> anyhow::Result<Vec<Course>> {
        Ok(vec![
            Course {
                id: CourseCode::new("CS101"),
                name: "Introduction to Computer Science".to_string(),
                department: Department::ComputerScience,
                credits: 3,
                instructor: "Dr. Sarah Mitchell".to_string(),
                schedule: "MWF 9:00-10:00 AM".to_string(),
                location: "Tech Building 101".to_string(),
                enrolled: 28,
                capacity: 30,
                status: CourseStatus::Open,
                semester: "Fall 2024".to_string(),
                description: "Fundamental concepts of computer science including programming \
                              basics, algorithms, and data structures."
                    .to_string(),
            },
            Course {
                id: CourseCode::new("BUS201"),
                name: "Business Management Principles".to_string(),
                department: Department::Business,
                credits: 4,
                instructor: "Prof. Michael Johnson".to_string(),
                schedule: "TTh 2:00-4:00 PM".to_string(),
                location: "Business Hall 205".to_string(),
                enrolled: 25,
                capacity: 25,
                status: CourseStatus::Full,
                semester: "Fall 2024".to_string(),
                description: "Introduction to fundamental management principles, organizational \
                              behavior, and business strategy."
                    .to_string(),
            },
            Course {
                id: CourseCode::new("PSY301"),
                name: "Developmental Psychology".to_string(),
                department: Department::Psychology,
                credits: 3,
                instructor: "Dr. Emily Chen".to_string(),
                schedule: "MW 11:00-12:30 PM".to_string(),
                location: "Psychology Building 302".to_string(),
                enrolled: 22,
                capacity: 35,
                status: CourseStatus::Open,
                semester: "Fall 2024".to_string(),
                description: "Study of human development across the lifespan, from infancy \
                              through old age."
                    .to_string(),
            },
            Course {
                id: CourseCode::new("MATH205"),
                name: "Calculus II".to_string(),
                department: Department::Mathematics,
                credits: 4,
                instructor: "Dr. Robert Davis".to_string(),
                schedule: "MWF 10:00-11:00 AM, T 3:00-4:00 PM".to_string(),
                location: "Math Building 150".to_string(),
                enrolled: 18,
                capacity: 30,
                status: CourseStatus::Open,
                semester: "Fall 2024".to_string(),
                description: "Continuation of Calculus I covering integration techniques, \
                              applications, and series."
                    .to_string(),
            },
            Course {
                id: CourseCode::new("ENG102"),
                name: "English Composition".to_string(),
                department: Department::English,
                credits: 3,
                instructor: "Prof. Lisa Anderson".to_string(),
                schedule: "TTh 9:30-11:00 AM".to_string(),
                location: "Liberal Arts 210".to_string(),
                enrolled: 20,
                capacity: 25,
                status: CourseStatus::Open,
                semester: "Fall 2024".to_string(),
                description: "Advanced writing skills, research methods, and critical analysis \
                              of texts."
                    .to_string(),
            },
        ])
    }

    fn source_name(&self) -> &str {
        "sample-courses"
    }
}

/// Demo registration queue
pub struct SampleRegistrations;

impl RecordSource<Registration> for SampleRegistrations {
    fn fetch(&self) -> anyhow::Result<Vec<Registration>> {
        Ok(vec![
            Registration {
                id: RegistrationId(1),
                student_name: "Sarah Johnson".to_string(),
                student_id: StudentId::new("STU001"),
                course: "CS101 - Introduction to Computer Science".to_string(),
                registered_on: ymd(2024, 8, 15),
                status: RegistrationStatus::Completed,
                priority: Priority::Normal,
                semester: "Fall 2024".to_string(),
                payment: PaymentStatus::Paid,
                documents: vec![Document::Transcript, Document::IdCopy],
            },
            Registration {
                id: RegistrationId(2),
                student_name: "Michael Chen".to_string(),
                student_id: StudentId::new("STU002"),
                course: "BUS201 - Business Management".to_string(),
                registered_on: ymd(2024, 8, 16),
                status: RegistrationStatus::Pending,
                priority: Priority::High,
                semester: "Fall 2024".to_string(),
                payment: PaymentStatus::Pending,
                documents: vec![Document::Transcript],
            },
            Registration {
                id: RegistrationId(3),
                student_name: "Emily Rodriguez".to_string(),
                student_id: StudentId::new("STU003"),
                course: "PSY301 - Developmental Psychology".to_string(),
                registered_on: ymd(2024, 8, 17),
                status: RegistrationStatus::InReview,
                priority: Priority::Normal,
                semester: "Fall 2024".to_string(),
                payment: PaymentStatus::Paid,
                documents: vec![
                    Document::Transcript,
                    Document::IdCopy,
                    Document::Recommendation,
                ],
            },
            Registration {
                id: RegistrationId(4),
                student_name: "James Wilson".to_string(),
                student_id: StudentId::new("STU004"),
                course: "MATH205 - Calculus II".to_string(),
                registered_on: ymd(2024, 8, 18),
                status: RegistrationStatus::Rejected,
                priority: Priority::Low,
                semester: "Fall 2024".to_string(),
                payment: PaymentStatus::NotApplicable,
                documents: vec![Document::Transcript],
            },
        ])
    }

    fn source_name(&self) -> &str {
        "sample-registrations"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use srm_core::{EntityStore, ListSession};
    use crate::model::{CourseFacet, StudentFacet};

    #[test]
    fn test_sample_students_load_cleanly() {
        let mut store = EntityStore::new();
        store.load(SampleStudents.fetch().unwrap()).unwrap();
        assert_eq!(store.len(), 4);

        let emily = store.get(&StudentId::new("STU003")).unwrap();
        assert_eq!(emily.status, StudentStatus::OnLeave);
        assert_eq!(emily.year, AcademicYear::Senior);
    }

    #[test]
    fn test_sample_courses_load_cleanly() {
        let mut store = EntityStore::new();
        store.load(SampleCourses.fetch().unwrap()).unwrap();
        assert_eq!(store.len(), 5);
        assert!(store.get(&CourseCode::new("BUS201")).unwrap().is_full());
    }

    #[test]
    fn test_sample_registrations_load_cleanly() {
        let mut store = EntityStore::new();
        store.load(SampleRegistrations.fetch().unwrap()).unwrap();
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_student_search_by_name_and_major() {
        let mut session: ListSession<Student, StudentFacet> = ListSession::new("students");
        session.load_from(&SampleStudents).unwrap();

        session.set_term("chen");
        let visible = session.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, StudentId::new("STU002"));

        session.set_term("psychology");
        let visible = session.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Emily Rodriguez");
    }

    #[test]
    fn test_selection_survives_major_filter() {
        let mut session: ListSession<Student, StudentFacet> = ListSession::new("students");
        session.load_from(&SampleStudents).unwrap();

        session.select(StudentId::new("STU002")).unwrap();
        session.set_filters(vec![StudentFacet::Major(Department::ComputerScience)]);

        let visible = session.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, StudentId::new("STU001"));
        assert_eq!(session.selected_id(), Some(&StudentId::new("STU002")));
    }

    #[test]
    fn test_course_search_by_instructor() {
        let mut session: ListSession<Course, CourseFacet> = ListSession::new("courses");
        session.load_from(&SampleCourses).unwrap();

        session.set_term("anderson");
        let visible = session.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, CourseCode::new("ENG102"));
    }
}
