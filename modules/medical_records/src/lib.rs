//! Medical Records Module
//!
//! The patient's own chart:
//! - Record browsing under a combined search, kind, and status filter
//! - Prescriptions with active and low-refill subsets
//! - Latest vitals and lab results with level classification
//! - A small analytics tab summarizing the chart

pub mod data;

use serde::{Deserialize, Serialize};
use tracing::info;

use lumira_health_shared::schema::{
    active_prescriptions, low_refill, LabFlag, LabResult, MedicalRecord, Prescription, RecordKind,
    RecordStatus, VitalLevel, VitalReading,
};
use lumira_health_shared::{views, HealthError, ScreenName, ScreenState, ShellPort};

// ==================== SCREENS ====================

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecordsScreen {
    Records,
    Prescriptions,
    Vitals,
    LabResults,
    Analytics,
}

impl ScreenName for RecordsScreen {
    fn home() -> Self {
        RecordsScreen::Records
    }
}

/// Count of chart entries sharing one kind.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct KindCount {
    pub kind: RecordKind,
    pub count: usize,
}

/// What the active screen shows.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub enum RecordsView {
    Records {
        search: String,
        kind_filter: Option<RecordKind>,
        status_filter: Option<RecordStatus>,
        records: Vec<MedicalRecord>,
        total: usize,
    },
    Prescriptions {
        prescriptions: Vec<Prescription>,
        active_count: usize,
        low_refill: Vec<Prescription>,
    },
    Vitals {
        vitals: Vec<VitalReading>,
        needing_attention: usize,
    },
    LabResults {
        labs: Vec<LabResult>,
        abnormal_count: usize,
    },
    Analytics {
        by_kind: Vec<KindCount>,
        active_prescription_cost: f64,
        vitals_needing_attention: usize,
    },
}

// ==================== MODULE STATE ====================

/// The medical records module: chart datasets plus the filter state.
#[derive(Clone, Debug)]
pub struct MedicalRecords {
    screen: ScreenState<RecordsScreen>,
    records: Vec<MedicalRecord>,
    prescriptions: Vec<Prescription>,
    vitals: Vec<VitalReading>,
    labs: Vec<LabResult>,
    search: String,
    kind_filter: Option<RecordKind>,
    status_filter: Option<RecordStatus>,
}

impl MedicalRecords {
    pub fn new(
        records: Vec<MedicalRecord>,
        prescriptions: Vec<Prescription>,
        vitals: Vec<VitalReading>,
        labs: Vec<LabResult>,
    ) -> Self {
        Self {
            screen: ScreenState::new(),
            records,
            prescriptions,
            vitals,
            labs,
            search: String::new(),
            kind_filter: None,
            status_filter: None,
        }
    }

    /// Module loaded with the seeded sample chart.
    pub fn with_sample_data() -> Self {
        Self::new(
            data::sample_records(),
            data::sample_prescriptions(),
            data::sample_vitals(),
            data::sample_labs(),
        )
    }

    pub fn screen(&self) -> RecordsScreen {
        self.screen.current()
    }

    pub fn records(&self) -> &[MedicalRecord] {
        &self.records
    }

    pub fn prescriptions(&self) -> &[Prescription] {
        &self.prescriptions
    }

    // ==================== DERIVED VIEWS ====================

    /// Records passing all three filters at once: case-insensitive search
    /// over title, doctor, and summary, then kind, then status. Original
    /// order is preserved.
    pub fn filtered_records(&self) -> Vec<&MedicalRecord> {
        views::matching(&self.records, |r| {
            let matches_search = self.search.trim().is_empty()
                || views::contains_ci(&r.title, &self.search)
                || views::contains_ci(&r.doctor, &self.search)
                || views::contains_ci(&r.summary, &self.search);
            let matches_kind = self
                .kind_filter
                .as_ref()
                .map(|k| &r.kind == k)
                .unwrap_or(true);
            let matches_status = self
                .status_filter
                .map(|s| r.status == s)
                .unwrap_or(true);
            matches_search && matches_kind && matches_status
        })
    }

    pub fn selected_record(&self) -> Option<&MedicalRecord> {
        let id = self.screen.selection()?;
        self.records.iter().find(|r| r.id == id)
    }

    /// Chart entries grouped by kind, in order of first appearance.
    pub fn records_by_kind(&self) -> Vec<KindCount> {
        let mut counts: Vec<KindCount> = Vec::new();
        for record in &self.records {
            match counts.iter_mut().find(|c| c.kind == record.kind) {
                Some(entry) => entry.count += 1,
                None => counts.push(KindCount {
                    kind: record.kind.clone(),
                    count: 1,
                }),
            }
        }
        counts
    }

    /// Monthly cost across active prescriptions.
    pub fn active_prescription_cost(&self) -> f64 {
        views::total_by(&active_prescriptions(&self.prescriptions), |s| {
            s.monthly_cost
        })
    }

    pub fn vitals_needing_attention(&self) -> usize {
        views::count_matching(&self.vitals, |v| v.level != VitalLevel::Normal)
    }

    pub fn abnormal_lab_count(&self) -> usize {
        views::count_matching(&self.labs, |l| l.flag != LabFlag::Normal)
    }

    pub fn view(&self) -> RecordsView {
        match self.screen.current() {
            RecordsScreen::Records => RecordsView::Records {
                search: self.search.clone(),
                kind_filter: self.kind_filter.clone(),
                status_filter: self.status_filter,
                records: self.filtered_records().into_iter().cloned().collect(),
                total: self.records.len(),
            },
            RecordsScreen::Prescriptions => RecordsView::Prescriptions {
                prescriptions: self.prescriptions.clone(),
                active_count: active_prescriptions(&self.prescriptions).len(),
                low_refill: low_refill(&self.prescriptions)
                    .into_iter()
                    .cloned()
                    .collect(),
            },
            RecordsScreen::Vitals => RecordsView::Vitals {
                vitals: self.vitals.clone(),
                needing_attention: self.vitals_needing_attention(),
            },
            RecordsScreen::LabResults => RecordsView::LabResults {
                labs: self.labs.clone(),
                abnormal_count: self.abnormal_lab_count(),
            },
            RecordsScreen::Analytics => RecordsView::Analytics {
                by_kind: self.records_by_kind(),
                active_prescription_cost: self.active_prescription_cost(),
                vitals_needing_attention: self.vitals_needing_attention(),
            },
        }
    }

    // ==================== ACTIONS ====================

    pub fn show(&mut self, screen: RecordsScreen) {
        self.screen.navigate(screen);
    }

    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
    }

    pub fn set_kind_filter(&mut self, kind: Option<RecordKind>) {
        self.kind_filter = kind;
    }

    pub fn set_status_filter(&mut self, status: Option<RecordStatus>) {
        self.status_filter = status;
    }

    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.kind_filter = None;
        self.status_filter = None;
    }

    /// Selects one record on the records screen.
    pub fn open_record(&mut self, id: &str) -> Result<(), HealthError> {
        if !self.records.iter().any(|r| r.id == id) {
            return Err(HealthError::unknown("medical record", id));
        }
        self.screen.open(RecordsScreen::Records, id);
        Ok(())
    }

    /// Asks the pharmacy for a refill. Placeholder behavior: the request is
    /// announced through the shell and nothing in the chart changes.
    pub fn request_refill(&self, id: &str, shell: &dyn ShellPort) -> Result<(), HealthError> {
        let script = self
            .prescriptions
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| HealthError::unknown("prescription", id))?;
        info!(id = %id, medication = %script.medication, "refill requested");
        shell.announce(&format!("Refill request sent for {}", script.medication));
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
