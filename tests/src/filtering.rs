//! Filter subset rules shared by the list screens.
//!
//! Every list filter in the app must return exactly the matching subset,
//! keep original relative order, and be idempotent. The sample rosters pin
//! the concrete cases; randomized rosters check the rule in general.

use blood_donation::{BloodDonation, BloodRequest, DonorProfile, Urgency};
use chrono::NaiveDate;
use lumira_health_shared::schema::BloodType;
use rand::prelude::*;

/// Reference day used wherever a module wants one.
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 20).expect("valid test date")
}

pub fn test_donor() -> DonorProfile {
    DonorProfile {
        name: "Test Donor".to_string(),
        blood_type: BloodType::OPositive,
        donations: 2,
        last_donation: NaiveDate::from_ymd_opt(2025, 6, 10).expect("valid test date"),
    }
}

/// Roster of `count` requests with seeded random urgencies.
pub fn random_requests(count: usize, seed: u64) -> Vec<BloodRequest> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| BloodRequest {
            id: format!("BR-{}", i + 1),
            patient_alias: format!("Recipient {}", i + 1),
            blood_type: BloodType::OPositive,
            urgency: if rng.gen_bool(0.5) {
                Urgency::Urgent
            } else {
                Urgency::Normal
            },
            hospital: "City General Hospital".to_string(),
            distance_km: rng.gen_range(0.5..25.0),
            units_needed: rng.gen_range(1..4),
            posted: "Today".to_string(),
            note: String::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use medical_records::MedicalRecords;

    use lumira_health_shared::schema::{RecordKind, RecordStatus};

    fn visible_ids(module: &BloodDonation) -> Vec<String> {
        module
            .visible_requests()
            .iter()
            .map(|r| r.id.clone())
            .collect()
    }

    #[test]
    fn test_urgent_filter_is_exact_over_random_rosters() {
        for seed in 0..10 {
            let requests = random_requests(40, seed);
            let expected: Vec<String> = requests
                .iter()
                .filter(|r| r.urgency == Urgency::Urgent)
                .map(|r| r.id.clone())
                .collect();

            let mut module =
                BloodDonation::new(test_donor(), requests, vec![], vec![], fixed_today());
            module.toggle_urgent_only();

            // Exactly the urgent subset, in source order.
            assert_eq!(visible_ids(&module), expected, "seed {}", seed);
        }
    }

    #[test]
    fn test_record_kind_filter_returns_exactly_the_matching_subset() {
        let mut module = MedicalRecords::with_sample_data();
        module.set_kind_filter(Some(RecordKind::Consultation));

        let filtered: Vec<&str> = module
            .filtered_records()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(filtered, vec!["MR-1", "MR-5"]);

        for record in module.filtered_records() {
            assert_eq!(record.kind, RecordKind::Consultation);
        }
    }

    #[test]
    fn test_stacked_record_filters_stay_conjunctive_and_ordered() {
        let mut module = MedicalRecords::with_sample_data();
        module.set_search("chen");
        module.set_status_filter(Some(RecordStatus::Final));

        let filtered: Vec<&str> = module
            .filtered_records()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(filtered, vec!["MR-1"]);

        module.set_status_filter(None);
        let relaxed: Vec<&str> = module
            .filtered_records()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(relaxed, vec!["MR-1", "MR-5"]);
    }
}
