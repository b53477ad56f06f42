//! Sample metrics, trend series, reports, and insights.
//!
//! Metric cards differ per role; the lower dashboard sections are shared.

use lumira_health_shared::Role;

use crate::{Delta, DeltaKind, Insight, Metric, Report, Severity, TrendDirection, TrendSeries};

fn metric(
    key: &str,
    label: &str,
    value: &str,
    amount: f64,
    kind: DeltaKind,
    trend: TrendDirection,
    higher_is_better: bool,
) -> Metric {
    Metric {
        key: key.to_string(),
        label: label.to_string(),
        value: value.to_string(),
        delta: Delta {
            amount,
            kind,
            trend,
        },
        higher_is_better,
    }
}

/// Stat cards for the requesting role.
pub fn sample_metrics(role: Role) -> Vec<Metric> {
    match role {
        Role::Patient => vec![
            metric(
                "health-score",
                "Health Score",
                "82",
                4.2,
                DeltaKind::Percent,
                TrendDirection::Up,
                true,
            ),
            metric(
                "avg-sleep",
                "Average Sleep",
                "7.2 hrs",
                0.3,
                DeltaKind::Absolute,
                TrendDirection::Up,
                true,
            ),
            metric(
                "resting-heart-rate",
                "Resting Heart Rate",
                "72 bpm",
                2.0,
                DeltaKind::Percent,
                TrendDirection::Down,
                false,
            ),
            metric(
                "med-adherence",
                "Medication Adherence",
                "96%",
                0.0,
                DeltaKind::Percent,
                TrendDirection::Flat,
                true,
            ),
        ],
        Role::Doctor => vec![
            metric(
                "patients-seen",
                "Patients Seen",
                "128",
                12.0,
                DeltaKind::Absolute,
                TrendDirection::Up,
                true,
            ),
            metric(
                "avg-wait-time",
                "Average Wait Time",
                "22 min",
                8.4,
                DeltaKind::Percent,
                TrendDirection::Down,
                false,
            ),
            metric(
                "satisfaction",
                "Patient Satisfaction",
                "4.6/5",
                0.2,
                DeltaKind::Absolute,
                TrendDirection::Up,
                true,
            ),
            metric(
                "follow-ups-due",
                "Follow-ups Due",
                "9",
                3.0,
                DeltaKind::Absolute,
                TrendDirection::Up,
                false,
            ),
        ],
        Role::HospitalAdmin => vec![
            metric(
                "bed-occupancy",
                "Bed Occupancy",
                "81%",
                2.3,
                DeltaKind::Percent,
                TrendDirection::Up,
                false,
            ),
            metric(
                "staff-on-duty",
                "Staff On Duty",
                "57",
                4.0,
                DeltaKind::Absolute,
                TrendDirection::Up,
                true,
            ),
            metric(
                "er-wait-time",
                "ER Wait Time",
                "31 min",
                5.1,
                DeltaKind::Percent,
                TrendDirection::Down,
                false,
            ),
            metric(
                "monthly-admissions",
                "Monthly Admissions",
                "412",
                6.8,
                DeltaKind::Percent,
                TrendDirection::Up,
                true,
            ),
        ],
    }
}

pub fn sample_series() -> Vec<TrendSeries> {
    vec![
        TrendSeries {
            key: "patient-visits".to_string(),
            label: "Patient Visits".to_string(),
            points: vec![310.0, 342.0, 351.0, 389.0, 402.0, 412.0],
            unit: "visits".to_string(),
        },
        TrendSeries {
            key: "average-wait".to_string(),
            label: "Average Wait".to_string(),
            points: vec![34.0, 31.0, 29.0, 30.0, 27.0, 26.0],
            unit: "min".to_string(),
        },
        TrendSeries {
            key: "satisfaction".to_string(),
            label: "Satisfaction".to_string(),
            points: vec![4.1, 4.2, 4.4, 4.3, 4.5, 4.6],
            unit: "out of 5".to_string(),
        },
    ]
}

pub fn sample_reports() -> Vec<Report> {
    vec![
        Report {
            id: "RPT-1".to_string(),
            title: "Monthly Performance Summary".to_string(),
            period: "Jul 2025".to_string(),
            generated: "Aug 1, 2025".to_string(),
        },
        Report {
            id: "RPT-2".to_string(),
            title: "Quarterly Quality Review".to_string(),
            period: "Q2 2025".to_string(),
            generated: "Jul 10, 2025".to_string(),
        },
        Report {
            id: "RPT-3".to_string(),
            title: "Staffing Utilization".to_string(),
            period: "Jul 2025".to_string(),
            generated: "Aug 3, 2025".to_string(),
        },
    ]
}

pub fn sample_insights() -> Vec<Insight> {
    vec![
        Insight {
            id: "INS-1".to_string(),
            text: "Average wait time fell for the third straight month.".to_string(),
            severity: Severity::Positive,
        },
        Insight {
            id: "INS-2".to_string(),
            text: "Bed occupancy is trending toward the 85% planning threshold.".to_string(),
            severity: Severity::Advisory,
        },
        Insight {
            id: "INS-3".to_string(),
            text: "Two departments reported repeated missed shifts this week.".to_string(),
            severity: Severity::Critical,
        },
    ]
}
