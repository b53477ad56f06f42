//! Clinical record schema shared across modules.
//!
//! Medical records, prescriptions, vitals, and lab results are displayed by
//! both the Medical Records module (patient view) and the Patient Management
//! module (doctor view). The types live here once; each module still owns its
//! own in-memory instances.

use serde::{Deserialize, Serialize};

use crate::tone::Tone;
use crate::views;

// ==================== BLOOD TYPES ====================

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BloodType {
    APositive,
    ANegative,
    BPositive,
    BNegative,
    ABPositive,
    ABNegative,
    OPositive,
    ONegative,
}

impl BloodType {
    /// Short clinical label ("A+", "O-").
    pub fn label(&self) -> &'static str {
        match self {
            BloodType::APositive => "A+",
            BloodType::ANegative => "A-",
            BloodType::BPositive => "B+",
            BloodType::BNegative => "B-",
            BloodType::ABPositive => "AB+",
            BloodType::ABNegative => "AB-",
            BloodType::OPositive => "O+",
            BloodType::ONegative => "O-",
        }
    }
}

impl std::fmt::Display for BloodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==================== MEDICAL RECORDS ====================

/// One entry in a patient's chart.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MedicalRecord {
    pub id: String,
    pub title: String,
    pub kind: RecordKind,
    pub status: RecordStatus,
    pub doctor: String,
    pub department: String,
    /// Display label, not a parsed date
    pub date: String,
    pub summary: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecordKind {
    Consultation,
    LabReport,
    Imaging,
    Vaccination,
    Procedure,
    Other(String),
}

impl RecordKind {
    pub fn label(&self) -> &str {
        match self {
            RecordKind::Consultation => "Consultation",
            RecordKind::LabReport => "Lab Report",
            RecordKind::Imaging => "Imaging",
            RecordKind::Vaccination => "Vaccination",
            RecordKind::Procedure => "Procedure",
            RecordKind::Other(name) => name,
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecordStatus {
    Final,
    Pending,
    Amended,
}

impl RecordStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RecordStatus::Final => "Final",
            RecordStatus::Pending => "Pending",
            RecordStatus::Amended => "Amended",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            RecordStatus::Final => Tone::Positive,
            RecordStatus::Pending => Tone::Caution,
            RecordStatus::Amended => Tone::Info,
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==================== PRESCRIPTIONS ====================

/// A prescription as the patient sees it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Prescription {
    pub id: String,
    pub medication: String,
    /// Strength plus form ("500mg tablet")
    pub dosage: String,
    pub instructions: String,
    pub prescribed_by: String,
    pub status: PrescriptionStatus,
    pub refills_left: u32,
    pub monthly_cost: f64,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PrescriptionStatus {
    Active,
    Completed,
    Discontinued,
}

impl PrescriptionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PrescriptionStatus::Active => "Active",
            PrescriptionStatus::Completed => "Completed",
            PrescriptionStatus::Discontinued => "Discontinued",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            PrescriptionStatus::Active => Tone::Positive,
            PrescriptionStatus::Completed => Tone::Neutral,
            PrescriptionStatus::Discontinued => Tone::Critical,
        }
    }
}

impl std::fmt::Display for PrescriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Prescriptions still active for the patient.
pub fn active_prescriptions(scripts: &[Prescription]) -> Vec<&Prescription> {
    views::matching(scripts, |s| s.status == PrescriptionStatus::Active)
}

/// Active prescriptions at or below one remaining refill.
pub fn low_refill(scripts: &[Prescription]) -> Vec<&Prescription> {
    views::matching(scripts, |s| {
        s.status == PrescriptionStatus::Active && s.refills_left <= 1
    })
}

// ==================== VITALS ====================

/// One recorded vital sign measurement.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VitalReading {
    pub id: String,
    pub metric: VitalMetric,
    /// Display value ("120/80", "98.6")
    pub value: String,
    pub unit: String,
    pub recorded: String,
    pub level: VitalLevel,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum VitalMetric {
    HeartRate,
    BloodPressure,
    Temperature,
    OxygenSaturation,
    Weight,
}

impl VitalMetric {
    pub fn label(&self) -> &'static str {
        match self {
            VitalMetric::HeartRate => "Heart Rate",
            VitalMetric::BloodPressure => "Blood Pressure",
            VitalMetric::Temperature => "Temperature",
            VitalMetric::OxygenSaturation => "Oxygen Saturation",
            VitalMetric::Weight => "Weight",
        }
    }
}

impl std::fmt::Display for VitalMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum VitalLevel {
    Normal,
    Elevated,
    Low,
    Critical,
}

impl VitalLevel {
    pub fn tone(&self) -> Tone {
        match self {
            VitalLevel::Normal => Tone::Positive,
            VitalLevel::Elevated => Tone::Caution,
            VitalLevel::Low => Tone::Caution,
            VitalLevel::Critical => Tone::Critical,
        }
    }
}

// ==================== LAB RESULTS ====================

/// One analyte row on a lab report.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LabResult {
    pub id: String,
    pub test: String,
    pub value: String,
    pub unit: String,
    /// Reference interval as printed on the report
    pub reference: String,
    pub flag: LabFlag,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum LabFlag {
    Normal,
    High,
    Low,
    Critical,
}

impl LabFlag {
    pub fn label(&self) -> &'static str {
        match self {
            LabFlag::Normal => "Normal",
            LabFlag::High => "High",
            LabFlag::Low => "Low",
            LabFlag::Critical => "Critical",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            LabFlag::Normal => Tone::Positive,
            LabFlag::High => Tone::Caution,
            LabFlag::Low => Tone::Caution,
            LabFlag::Critical => Tone::Critical,
        }
    }
}

impl std::fmt::Display for LabFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
