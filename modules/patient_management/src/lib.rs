//! Patient Management Module
//!
//! The doctor-side roster:
//! - One chart per patient, shown through Overview, Records, Prescriptions,
//!   Vitals, and Notes tabs
//! - Static per-patient detail display, no filtering
//! - Messaging a patient is announced through the shell and nothing more

pub mod data;

use serde::{Deserialize, Serialize};
use tracing::info;

use lumira_health_shared::schema::{
    active_prescriptions, BloodType, MedicalRecord, Prescription, VitalLevel, VitalReading,
};
use lumira_health_shared::{views, HealthError, ScreenName, ScreenState, ShellPort};

// ==================== ENTITIES ====================

/// Roster row for one patient.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PatientSummary {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub blood_type: BloodType,
    /// Ongoing diagnoses shown as chips on the overview tab
    pub conditions: Vec<String>,
    pub last_visit: String,
}

/// Free-text note left on a chart by a clinician.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CareNote {
    pub id: String,
    pub author: String,
    pub content: String,
    pub written: String,
}

/// Everything the module holds for one patient.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PatientChart {
    pub summary: PatientSummary,
    pub records: Vec<MedicalRecord>,
    pub prescriptions: Vec<Prescription>,
    pub vitals: Vec<VitalReading>,
    pub notes: Vec<CareNote>,
}

// ==================== SCREENS ====================

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PatientScreen {
    Overview,
    Records,
    Prescriptions,
    Vitals,
    Notes,
}

impl ScreenName for PatientScreen {
    fn home() -> Self {
        PatientScreen::Overview
    }
}

/// What the active tab shows for the selected patient.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub enum PatientView {
    Overview {
        roster: Vec<PatientSummary>,
        patient: Option<PatientSummary>,
        condition_count: usize,
        active_prescription_count: usize,
        vitals_needing_attention: usize,
    },
    Records {
        patient: Option<String>,
        records: Vec<MedicalRecord>,
    },
    Prescriptions {
        patient: Option<String>,
        prescriptions: Vec<Prescription>,
        active_count: usize,
    },
    Vitals {
        patient: Option<String>,
        vitals: Vec<VitalReading>,
        needing_attention: usize,
    },
    Notes {
        patient: Option<String>,
        notes: Vec<CareNote>,
    },
}

// ==================== MODULE STATE ====================

/// The patient management module: the roster plus the active tab.
#[derive(Clone, Debug)]
pub struct PatientManagement {
    screen: ScreenState<PatientScreen>,
    charts: Vec<PatientChart>,
}

impl PatientManagement {
    pub fn new(charts: Vec<PatientChart>) -> Self {
        Self {
            screen: ScreenState::new(),
            charts,
        }
    }

    pub fn with_sample_data() -> Self {
        Self::new(data::sample_charts())
    }

    pub fn screen(&self) -> PatientScreen {
        self.screen.current()
    }

    pub fn roster(&self) -> Vec<PatientSummary> {
        self.charts.iter().map(|c| c.summary.clone()).collect()
    }

    // ==================== DERIVED VIEWS ====================

    /// The chart the tabs are showing. Falls back to the first chart on the
    /// roster when nothing is selected, so the display never starts blank.
    pub fn selected_chart(&self) -> Option<&PatientChart> {
        match self.screen.selection() {
            Some(id) => self.charts.iter().find(|c| c.summary.id == id),
            None => self.charts.first(),
        }
    }

    fn selected_name(&self) -> Option<String> {
        self.selected_chart().map(|c| c.summary.name.clone())
    }

    fn vitals_needing_attention(chart: &PatientChart) -> usize {
        views::count_matching(&chart.vitals, |v| v.level != VitalLevel::Normal)
    }

    pub fn view(&self) -> PatientView {
        let chart = self.selected_chart();
        match self.screen.current() {
            PatientScreen::Overview => PatientView::Overview {
                roster: self.roster(),
                patient: chart.map(|c| c.summary.clone()),
                condition_count: chart.map(|c| c.summary.conditions.len()).unwrap_or(0),
                active_prescription_count: chart
                    .map(|c| active_prescriptions(&c.prescriptions).len())
                    .unwrap_or(0),
                vitals_needing_attention: chart.map(Self::vitals_needing_attention).unwrap_or(0),
            },
            PatientScreen::Records => PatientView::Records {
                patient: self.selected_name(),
                records: chart.map(|c| c.records.clone()).unwrap_or_default(),
            },
            PatientScreen::Prescriptions => PatientView::Prescriptions {
                patient: self.selected_name(),
                prescriptions: chart.map(|c| c.prescriptions.clone()).unwrap_or_default(),
                active_count: chart
                    .map(|c| active_prescriptions(&c.prescriptions).len())
                    .unwrap_or(0),
            },
            PatientScreen::Vitals => PatientView::Vitals {
                patient: self.selected_name(),
                vitals: chart.map(|c| c.vitals.clone()).unwrap_or_default(),
                needing_attention: chart.map(Self::vitals_needing_attention).unwrap_or(0),
            },
            PatientScreen::Notes => PatientView::Notes {
                patient: self.selected_name(),
                notes: chart.map(|c| c.notes.clone()).unwrap_or_default(),
            },
        }
    }

    // ==================== ACTIONS ====================

    /// Switches tabs for the same patient.
    pub fn show(&mut self, screen: PatientScreen) {
        self.screen.navigate(screen);
    }

    /// Points the tabs at another chart, staying on the current tab.
    pub fn select_patient(&mut self, id: &str) -> Result<(), HealthError> {
        if !self.charts.iter().any(|c| c.summary.id == id) {
            return Err(HealthError::unknown("patient", id));
        }
        self.screen.open(self.screen.current(), id);
        Ok(())
    }

    /// Sends the patient a message. Placeholder behavior: announced through
    /// the shell, nothing is stored.
    pub fn message_patient(&self, id: &str, shell: &dyn ShellPort) -> Result<(), HealthError> {
        let chart = self
            .charts
            .iter()
            .find(|c| c.summary.id == id)
            .ok_or_else(|| HealthError::unknown("patient", id))?;
        info!(patient = %id, "message sent");
        shell.announce(&format!("Message sent to {}", chart.summary.name));
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
