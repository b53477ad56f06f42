//! Role-conditional projections: the same entry points, three dashboards.

use home::{home_view, HomeView, SnapshotStat};
use lumira_health_shared::Role;

/// The health snapshot from a patient dashboard.
pub fn patient_snapshot(name: &str) -> Vec<SnapshotStat> {
    match home_view(name, Role::Patient) {
        HomeView::Patient { snapshot, .. } => snapshot,
        other => panic!("patient role produced {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::AnalyticsDashboard;
    use lumira_health_shared::Tone;

    #[test]
    fn test_bar_widths_stay_within_the_scale() {
        // The exercise stat sits past its target and must still fit the bar.
        for stat in patient_snapshot("Alex Mutua") {
            assert!(stat.display_percent() <= 100, "{} overflows", stat.label);
        }
    }

    #[test]
    fn test_occupancy_agrees_between_home_and_analytics() {
        let HomeView::HospitalAdmin { occupancy, .. } =
            home_view("Margaret Odhiambo", Role::HospitalAdmin)
        else {
            panic!("admin role produced another dashboard");
        };
        assert_eq!(occupancy.display_percent(), 81);

        let dashboard = AnalyticsDashboard::for_role(Role::HospitalAdmin);
        let beds = dashboard
            .metric_cards()
            .into_iter()
            .find(|c| c.label == "Bed Occupancy")
            .unwrap();
        assert_eq!(beds.value, format!("{}%", occupancy.display_percent()));
    }

    #[test]
    fn test_metric_cards_follow_the_requesting_role() {
        let labels = |role: Role| -> Vec<String> {
            AnalyticsDashboard::for_role(role)
                .metric_cards()
                .into_iter()
                .map(|c| c.label)
                .collect()
        };

        assert_eq!(
            labels(Role::Patient),
            vec![
                "Health Score",
                "Average Sleep",
                "Resting Heart Rate",
                "Medication Adherence"
            ]
        );
        assert_eq!(labels(Role::Doctor)[0], "Patients Seen");
        assert!(labels(Role::HospitalAdmin).contains(&"Monthly Admissions".to_string()));
    }

    #[test]
    fn test_a_falling_wait_time_reads_as_good_news() {
        let cards = AnalyticsDashboard::for_role(Role::Doctor).metric_cards();

        let wait = cards.iter().find(|c| c.label == "Average Wait Time").unwrap();
        assert_eq!(wait.delta, "-8.4%");
        assert_eq!(wait.tone, Tone::Positive);

        let backlog = cards.iter().find(|c| c.label == "Follow-ups Due").unwrap();
        assert_eq!(backlog.delta, "+3");
        assert_eq!(backlog.tone, Tone::Caution);
    }

    #[test]
    fn test_views_serialize_under_the_variant_tag() {
        let patient = serde_json::to_value(home_view("Amina", Role::Patient)).unwrap();
        let stats = &patient["Patient"]["snapshot"];
        assert_eq!(stats[1]["label"], "Weekly Exercise");
        assert_eq!(stats[1]["current"], 92);

        let admin = serde_json::to_value(home_view("Amina", Role::HospitalAdmin)).unwrap();
        assert_eq!(admin["HospitalAdmin"]["staff_on_duty"], 57);
    }
}
