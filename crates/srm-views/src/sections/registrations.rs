//! Registration tracking screen projection

use srm_core::{DashboardSettings, ListSession};
use srm_data::model::{Priority, Registration, RegistrationFacet, RegistrationStatus};

use crate::cards::{registration_status_cards, StatCard};
use crate::list_view::{project_list, ListProjection};

/// Render-ready registration tracking screen
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationBoardView<'a> {
    pub heading: &'static str,
    pub subheading: &'static str,
    /// Status overview tiles, computed over the full collection
    pub cards: Vec<StatCard>,
    pub list: ListProjection<'a, Registration>,
    pub status_choices: Vec<RegistrationStatus>,
    pub priority_choices: Vec<Priority>,
}

/// Project the registration board from its session state
pub fn registration_board<'a>(
    session: &'a ListSession<Registration, RegistrationFacet>,
    settings: &DashboardSettings,
) -> RegistrationBoardView<'a> {
    let all: Vec<&Registration> = session.store().all().collect();

    RegistrationBoardView {
        heading: "Registration Tracking",
        subheading: "Monitor and manage student registration status",
        cards: registration_status_cards(&all),
        list: project_list(session, &settings.list),
        status_choices: RegistrationStatus::ALL.to_vec(),
        priority_choices: Priority::ALL.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use srm_core::RecordSource;
    use srm_data::samples::SampleRegistrations;

    #[test]
    fn test_board_combines_cards_and_list() {
        let mut session = ListSession::new("registrations");
        session.load(SampleRegistrations.fetch().unwrap()).unwrap();
        session.set_filters(vec![
            RegistrationFacet::Status(RegistrationStatus::Pending),
            RegistrationFacet::Priority(Priority::High),
        ]);

        let view = registration_board(&session, &DashboardSettings::default());
        assert_eq!(view.list.rows.len(), 1);
        assert_eq!(view.list.rows[0].record.student_name, "Michael Chen");
        // Tiles still cover the whole queue
        assert_eq!(view.cards[0].value, "4");
    }

    #[test]
    fn test_conflicting_status_filters_match_nothing() {
        let mut session = ListSession::new("registrations");
        session.load(SampleRegistrations.fetch().unwrap()).unwrap();
        session.set_filters(vec![
            RegistrationFacet::Status(RegistrationStatus::Pending),
            RegistrationFacet::Status(RegistrationStatus::Rejected),
        ]);

        let view = registration_board(&session, &DashboardSettings::default());
        assert!(view.list.is_empty());
    }
}
