//! Analytics Dashboard Module
//!
//! Read-only dashboard over sample data:
//! - Metric cards selected per role, each with a signed delta badge
//! - Trend series summarized by min, max, mean, and latest value
//! - Generated reports and plain-language insights
//!
//! Delta badges distinguish percent deltas ("+4.2%") from absolute ones
//! ("+0.3"); whether a movement reads as good depends on the metric's
//! `higher_is_better` flag, so a falling wait time still shows positive.

pub mod data;

use serde::{Deserialize, Serialize};
use tracing::info;

use lumira_health_shared::{views, HealthError, Role, ScreenName, ScreenState, ShellPort, Tone};

// ==================== ENTITIES ====================

/// One stat card on the dashboard.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Metric {
    pub key: String,
    pub label: String,
    /// Display value ("82", "22 min"), not parsed
    pub value: String,
    pub delta: Delta,
    /// Flips which trend direction reads as good
    pub higher_is_better: bool,
}

/// Change against the previous period.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Delta {
    /// Magnitude of the change; direction lives in `trend`
    pub amount: f64,
    pub kind: DeltaKind,
    pub trend: TrendDirection,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeltaKind {
    Percent,
    Absolute,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl Delta {
    /// Badge text: "+4.2%", "-0.3", "0%".
    pub fn format(&self) -> String {
        let sign = match self.trend {
            TrendDirection::Up => "+",
            TrendDirection::Down => "-",
            TrendDirection::Flat => "",
        };
        let suffix = match self.kind {
            DeltaKind::Percent => "%",
            DeltaKind::Absolute => "",
        };
        format!("{}{}{}", sign, self.amount, suffix)
    }
}

impl Metric {
    /// Good, bad, or flat for this metric's direction of improvement.
    pub fn tone(&self) -> Tone {
        match self.delta.trend {
            TrendDirection::Flat => Tone::Neutral,
            TrendDirection::Up if self.higher_is_better => Tone::Positive,
            TrendDirection::Up => Tone::Caution,
            TrendDirection::Down if self.higher_is_better => Tone::Caution,
            TrendDirection::Down => Tone::Positive,
        }
    }
}

/// A sequence of monthly values behind one trend chart.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrendSeries {
    pub key: String,
    pub label: String,
    pub points: Vec<f64>,
    pub unit: String,
}

impl TrendSeries {
    pub fn min(&self) -> Option<f64> {
        self.points.iter().copied().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.points.iter().copied().reduce(f64::max)
    }

    pub fn mean(&self) -> Option<f64> {
        views::mean_by(&self.points, |p| *p)
    }

    pub fn latest(&self) -> Option<f64> {
        self.points.last().copied()
    }
}

/// A generated document available for export.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub id: String,
    pub title: String,
    pub period: String,
    pub generated: String,
}

/// Plain-language observation surfaced on the insights tab.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Insight {
    pub id: String,
    pub text: String,
    pub severity: Severity,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Positive,
    Advisory,
    Critical,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Positive => "Positive",
            Severity::Advisory => "Advisory",
            Severity::Critical => "Critical",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Severity::Positive => Tone::Positive,
            Severity::Advisory => Tone::Caution,
            Severity::Critical => Tone::Critical,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==================== SCREENS ====================

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AnalyticsScreen {
    Overview,
    Performance,
    Trends,
    Reports,
    Insights,
}

impl ScreenName for AnalyticsScreen {
    fn home() -> Self {
        AnalyticsScreen::Overview
    }
}

/// Metric card ready for rendering: delta formatted, tone resolved.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct MetricDisplay {
    pub label: String,
    pub value: String,
    pub delta: String,
    pub tone: Tone,
}

/// Chart summary row on the trends tab.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SeriesSummary {
    pub label: String,
    pub unit: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub latest: Option<f64>,
}

/// What the active screen shows.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub enum AnalyticsView {
    Overview {
        role: Role,
        cards: Vec<MetricDisplay>,
        headline: Option<Insight>,
    },
    Performance {
        metrics: Vec<Metric>,
    },
    Trends {
        series: Vec<SeriesSummary>,
    },
    Reports {
        reports: Vec<Report>,
    },
    Insights {
        insights: Vec<Insight>,
    },
}

// ==================== MODULE STATE ====================

/// The analytics dashboard. The metric set is fixed at construction by the
/// requesting role; everything below the cards is shared.
#[derive(Clone, Debug)]
pub struct AnalyticsDashboard {
    screen: ScreenState<AnalyticsScreen>,
    role: Role,
    metrics: Vec<Metric>,
    series: Vec<TrendSeries>,
    reports: Vec<Report>,
    insights: Vec<Insight>,
}

impl AnalyticsDashboard {
    pub fn new(
        role: Role,
        metrics: Vec<Metric>,
        series: Vec<TrendSeries>,
        reports: Vec<Report>,
        insights: Vec<Insight>,
    ) -> Self {
        Self {
            screen: ScreenState::new(),
            role,
            metrics,
            series,
            reports,
            insights,
        }
    }

    /// Dashboard seeded with the sample data for one role.
    pub fn for_role(role: Role) -> Self {
        Self::new(
            role,
            data::sample_metrics(role),
            data::sample_series(),
            data::sample_reports(),
            data::sample_insights(),
        )
    }

    pub fn screen(&self) -> AnalyticsScreen {
        self.screen.current()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    // ==================== DERIVED VIEWS ====================

    /// Cards with deltas formatted and tones resolved.
    pub fn metric_cards(&self) -> Vec<MetricDisplay> {
        self.metrics
            .iter()
            .map(|m| MetricDisplay {
                label: m.label.clone(),
                value: m.value.clone(),
                delta: m.delta.format(),
                tone: m.tone(),
            })
            .collect()
    }

    pub fn series_summaries(&self) -> Vec<SeriesSummary> {
        self.series
            .iter()
            .map(|s| SeriesSummary {
                label: s.label.clone(),
                unit: s.unit.clone(),
                min: s.min(),
                max: s.max(),
                mean: s.mean(),
                latest: s.latest(),
            })
            .collect()
    }

    /// The most severe insight, shown on the overview.
    pub fn headline_insight(&self) -> Option<&Insight> {
        self.insights
            .iter()
            .find(|i| i.severity == Severity::Critical)
            .or_else(|| {
                self.insights
                    .iter()
                    .find(|i| i.severity == Severity::Advisory)
            })
            .or_else(|| self.insights.first())
    }

    pub fn view(&self) -> AnalyticsView {
        match self.screen.current() {
            AnalyticsScreen::Overview => AnalyticsView::Overview {
                role: self.role,
                cards: self.metric_cards(),
                headline: self.headline_insight().cloned(),
            },
            AnalyticsScreen::Performance => AnalyticsView::Performance {
                metrics: self.metrics.clone(),
            },
            AnalyticsScreen::Trends => AnalyticsView::Trends {
                series: self.series_summaries(),
            },
            AnalyticsScreen::Reports => AnalyticsView::Reports {
                reports: self.reports.clone(),
            },
            AnalyticsScreen::Insights => AnalyticsView::Insights {
                insights: self.insights.clone(),
            },
        }
    }

    // ==================== ACTIONS ====================

    pub fn show(&mut self, screen: AnalyticsScreen) {
        self.screen.navigate(screen);
    }

    /// Exports a report. Placeholder behavior: the export is announced
    /// through the shell and no file is produced.
    pub fn export_report(&self, id: &str, shell: &dyn ShellPort) -> Result<(), HealthError> {
        let report = self
            .reports
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| HealthError::unknown("report", id))?;
        info!(report = %id, title = %report.title, "report exported");
        shell.announce(&format!("Report exported: {}", report.title));
        Ok(())
    }

    pub fn back_home(&mut self) {
        self.screen.back_home();
    }

    /// Hands control back to the shell.
    pub fn exit(&self, shell: &dyn ShellPort) {
        shell.go_back();
    }
}

// ==================== TESTS ====================

#[cfg(test)]
mod tests {
    use super::*;
    use lumira_health_shared::{RecordingShell, ShellEvent};

    fn delta(amount: f64, kind: DeltaKind, trend: TrendDirection) -> Delta {
        Delta {
            amount,
            kind,
            trend,
        }
    }

    #[test]
    fn test_percent_deltas_carry_sign_and_suffix() {
        assert_eq!(
            delta(4.2, DeltaKind::Percent, TrendDirection::Up).format(),
            "+4.2%"
        );
        assert_eq!(
            delta(8.4, DeltaKind::Percent, TrendDirection::Down).format(),
            "-8.4%"
        );
    }

    #[test]
    fn test_absolute_deltas_omit_the_suffix() {
        assert_eq!(
            delta(0.3, DeltaKind::Absolute, TrendDirection::Up).format(),
            "+0.3"
        );
        assert_eq!(
            delta(12.0, DeltaKind::Absolute, TrendDirection::Up).format(),
            "+12"
        );
    }

    #[test]
    fn test_flat_deltas_carry_no_sign() {
        assert_eq!(
            delta(0.0, DeltaKind::Percent, TrendDirection::Flat).format(),
            "0%"
        );
    }

    #[test]
    fn test_a_falling_wait_time_reads_as_positive() {
        let dashboard = AnalyticsDashboard::for_role(Role::Doctor);
        let wait = dashboard
            .metrics()
            .iter()
            .find(|m| m.key == "avg-wait-time")
            .unwrap();
        assert_eq!(wait.delta.trend, TrendDirection::Down);
        assert_eq!(wait.tone(), Tone::Positive);

        let follow_ups = dashboard
            .metrics()
            .iter()
            .find(|m| m.key == "follow-ups-due")
            .unwrap();
        assert_eq!(follow_ups.tone(), Tone::Caution);
    }

    #[test]
    fn test_each_role_gets_its_own_cards() {
        let patient = AnalyticsDashboard::for_role(Role::Patient);
        let admin = AnalyticsDashboard::for_role(Role::HospitalAdmin);

        assert!(patient.metrics().iter().any(|m| m.key == "health-score"));
        assert!(admin.metrics().iter().any(|m| m.key == "bed-occupancy"));
        assert!(!admin.metrics().iter().any(|m| m.key == "health-score"));
    }

    #[test]
    fn test_series_summaries_aggregate_the_points() {
        let dashboard = AnalyticsDashboard::for_role(Role::HospitalAdmin);
        let summaries = dashboard.series_summaries();
        let wait = summaries
            .iter()
            .find(|s| s.label == "Average Wait")
            .unwrap();

        assert_eq!(wait.min, Some(26.0));
        assert_eq!(wait.max, Some(34.0));
        assert_eq!(wait.latest, Some(26.0));
        let mean = wait.mean.unwrap();
        assert!((mean - 29.5).abs() < 1e-9);
    }

    #[test]
    fn test_the_headline_is_the_most_severe_insight() {
        let dashboard = AnalyticsDashboard::for_role(Role::Patient);
        assert_eq!(dashboard.headline_insight().unwrap().id, "INS-3");
    }

    #[test]
    fn test_exporting_announces_without_mutating() {
        let dashboard = AnalyticsDashboard::for_role(Role::HospitalAdmin);
        let shell = RecordingShell::new();

        dashboard.export_report("RPT-2", &shell).unwrap();
        assert_eq!(
            shell.events(),
            vec![ShellEvent::Announce(
                "Report exported: Quarterly Quality Review".to_string()
            )]
        );
        assert_eq!(dashboard.reports().len(), 3);
    }

    #[test]
    fn test_exporting_an_unknown_report_is_refused() {
        let dashboard = AnalyticsDashboard::for_role(Role::Doctor);
        let shell = RecordingShell::new();
        assert!(dashboard.export_report("RPT-99", &shell).is_err());
        assert!(shell.is_empty());
    }

    #[test]
    fn scenario_walk_every_tab_and_return() {
        let mut dashboard = AnalyticsDashboard::for_role(Role::Doctor);

        dashboard.show(AnalyticsScreen::Performance);
        assert!(matches!(
            dashboard.view(),
            AnalyticsView::Performance { .. }
        ));

        dashboard.show(AnalyticsScreen::Trends);
        match dashboard.view() {
            AnalyticsView::Trends { series } => assert_eq!(series.len(), 3),
            other => panic!("expected trends, got {:?}", other),
        }

        dashboard.back_home();
        assert_eq!(dashboard.screen(), AnalyticsScreen::Overview);
    }
}
