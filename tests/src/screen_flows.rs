//! Screen-stack behavior shared by every module: what opening, switching
//! tabs, and going home do to the remembered selection.

use blood_donation::{BloodDonation, BloodScreen};

/// Blood donation module pinned to the fixture date used across the suite.
pub fn blood_module() -> BloodDonation {
    BloodDonation::with_sample_data(crate::filtering::fixed_today())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumira_health_shared::{RecordingShell, ShellEvent};
    use medical_records::{MedicalRecords, RecordsScreen};
    use notifications::{NotificationScreen, Notifications};
    use patient_management::{PatientManagement, PatientScreen};

    #[test]
    fn test_going_home_clears_the_selection() {
        let mut module = blood_module();

        module.open_request("BR-2").unwrap();
        assert_eq!(module.screen(), BloodScreen::Details);
        assert_eq!(module.selected_request().unwrap().id, "BR-2");

        module.back_home();
        assert_eq!(module.screen(), BloodScreen::List);
        assert!(module.selected_request().is_none());
    }

    #[test]
    fn test_plain_navigation_keeps_the_selection() {
        let mut module = blood_module();
        module.open_request("BR-2").unwrap();

        module.view_history();
        assert_eq!(module.screen(), BloodScreen::History);
        assert_eq!(module.selected_request().unwrap().id, "BR-2");

        module.view_map();
        assert_eq!(module.selected_request().unwrap().id, "BR-2");
    }

    #[test]
    fn test_record_tabs_keep_the_open_record() {
        let mut module = MedicalRecords::with_sample_data();
        module.open_record("MR-5").unwrap();

        module.show(RecordsScreen::Vitals);
        module.show(RecordsScreen::Analytics);
        module.show(RecordsScreen::Records);
        assert_eq!(module.selected_record().unwrap().id, "MR-5");

        module.back_home();
        assert!(module.selected_record().is_none());
    }

    #[test]
    fn test_notification_detail_round_trip() {
        let mut module = Notifications::with_sample_data();

        module.open_notification("NTF-1").unwrap();
        assert_eq!(module.screen(), NotificationScreen::Detail);
        assert_eq!(module.selected_notification().unwrap().id, "NTF-1");

        module.back_home();
        assert_eq!(module.screen(), NotificationScreen::List);
        assert!(module.selected_notification().is_none());
    }

    #[test]
    fn test_roster_falls_back_to_the_first_chart_after_home() {
        let mut module = PatientManagement::with_sample_data();

        module.select_patient("PT-2").unwrap();
        module.show(PatientScreen::Notes);
        assert_eq!(module.selected_chart().unwrap().summary.id, "PT-2");

        module.back_home();
        assert_eq!(module.screen(), PatientScreen::Overview);
        // No explicit selection left, so display falls back to the roster head.
        assert_eq!(module.selected_chart().unwrap().summary.id, "PT-1");
    }

    #[test]
    fn test_exit_hands_control_back_to_the_shell() {
        let shell = RecordingShell::new();

        blood_module().exit(&shell);
        Notifications::with_sample_data().exit(&shell);

        assert_eq!(shell.events(), vec![ShellEvent::Back, ShellEvent::Back]);
    }

    #[test]
    fn scenario_browse_deep_then_leave() {
        let shell = RecordingShell::new();
        let mut module = blood_module();

        module.toggle_urgent_only();
        module.open_request("BR-1").unwrap();
        module.view_map();
        module.back_home();
        module.exit(&shell);

        // The urgent filter survives the trip; the selection does not.
        assert!(module.urgent_only());
        assert!(module.selected_request().is_none());
        assert_eq!(shell.events(), vec![ShellEvent::Back]);
    }
}
