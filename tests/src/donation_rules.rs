//! Donor eligibility and the donation confirmation flow.

use blood_donation::{BloodDonation, BloodScreen, BloodView, DEFERRAL_DAYS};
use chrono::{Duration, NaiveDate};

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::test_donor;
    use lumira_health_shared::RecordingShell;

    #[test]
    fn test_eligibility_flips_exactly_at_the_deferral_boundary() {
        let donor = test_donor();
        // Last donation Jun 10, 2025; the window reopens Aug 5, 2025.
        let reopen = day(2025, 8, 5);
        assert_eq!(donor.last_donation + Duration::days(DEFERRAL_DAYS), reopen);

        let day_before = donor.eligibility(reopen - Duration::days(1));
        assert!(!day_before.is_eligible);
        assert_eq!(day_before.eligible_on, reopen);

        let on_the_day = donor.eligibility(reopen);
        assert!(on_the_day.is_eligible);

        let well_after = donor.eligibility(day(2025, 12, 1));
        assert!(well_after.is_eligible);
    }

    #[test]
    fn test_an_ineligible_donor_still_sees_the_confirm_screen() {
        // The window gates the eligibility banner, not the flow itself.
        let mut module = BloodDonation::with_sample_data(day(2025, 7, 1));
        module.begin_confirmation("BR-2").unwrap();

        match module.view() {
            BloodView::Confirm {
                request,
                eligibility,
            } => {
                assert_eq!(request.unwrap().id, "BR-2");
                assert!(!eligibility.is_eligible);
                assert_eq!(eligibility.eligible_on, day(2025, 8, 5));
            }
            other => panic!("expected confirm view, got {:?}", other),
        }
    }

    #[test]
    fn scenario_donation_flow_then_back_resets_everything() {
        let mut module = BloodDonation::with_sample_data(day(2025, 8, 20));
        let shell = RecordingShell::new();

        module.open_request("BR-3").unwrap();
        module.begin_confirmation("BR-3").unwrap();
        module.confirm_donation(&shell).unwrap();
        module.back_home();

        assert_eq!(module.screen(), BloodScreen::List);
        assert!(module.selected_request().is_none());
        assert_eq!(module.visible_requests().len(), 4);
    }
}
