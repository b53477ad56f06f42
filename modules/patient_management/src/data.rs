//! Sample roster for the patient management module.
//!
//! Four charts belonging to one attending doctor. Chart entries reuse the
//! shared clinical schema; each chart owns its own instances.

use lumira_health_shared::schema::{
    BloodType, MedicalRecord, Prescription, PrescriptionStatus, RecordKind, RecordStatus,
    VitalLevel, VitalMetric, VitalReading,
};

use crate::{CareNote, PatientChart, PatientSummary};

pub fn sample_charts() -> Vec<PatientChart> {
    vec![
        PatientChart {
            summary: PatientSummary {
                id: "PT-1".to_string(),
                name: "Alex Mutua".to_string(),
                age: 34,
                blood_type: BloodType::OPositive,
                conditions: vec!["Hypertension".to_string()],
                last_visit: "Aug 12, 2025".to_string(),
            },
            records: vec![
                MedicalRecord {
                    id: "PR-101".to_string(),
                    title: "Hypertension Follow-up".to_string(),
                    kind: RecordKind::Consultation,
                    status: RecordStatus::Amended,
                    doctor: "Dr. Sarah Chen".to_string(),
                    department: "Cardiology".to_string(),
                    date: "Aug 12, 2025".to_string(),
                    summary: "Medication dose adjusted; note amended with home readings."
                        .to_string(),
                },
                MedicalRecord {
                    id: "PR-102".to_string(),
                    title: "Annual Physical".to_string(),
                    kind: RecordKind::Consultation,
                    status: RecordStatus::Final,
                    doctor: "Dr. Sarah Chen".to_string(),
                    department: "General Medicine".to_string(),
                    date: "Jun 3, 2025".to_string(),
                    summary: "Routine examination, blood pressure trending high.".to_string(),
                },
            ],
            prescriptions: vec![Prescription {
                id: "PX-101".to_string(),
                medication: "Lisinopril".to_string(),
                dosage: "10mg tablet".to_string(),
                instructions: "Once daily in the morning".to_string(),
                prescribed_by: "Dr. Sarah Chen".to_string(),
                status: PrescriptionStatus::Active,
                refills_left: 3,
                monthly_cost: 12.50,
            }],
            vitals: vec![
                VitalReading {
                    id: "PV-101".to_string(),
                    metric: VitalMetric::BloodPressure,
                    value: "138/88".to_string(),
                    unit: "mmHg".to_string(),
                    recorded: "Aug 12, 2025".to_string(),
                    level: VitalLevel::Elevated,
                },
                VitalReading {
                    id: "PV-102".to_string(),
                    metric: VitalMetric::HeartRate,
                    value: "72".to_string(),
                    unit: "bpm".to_string(),
                    recorded: "Aug 12, 2025".to_string(),
                    level: VitalLevel::Normal,
                },
            ],
            notes: vec![CareNote {
                id: "CN-101".to_string(),
                author: "Dr. Sarah Chen".to_string(),
                content: "Responding well to dose change. Review home readings next visit."
                    .to_string(),
                written: "Aug 12, 2025".to_string(),
            }],
        },
        PatientChart {
            summary: PatientSummary {
                id: "PT-2".to_string(),
                name: "Grace Wanjiku".to_string(),
                age: 58,
                blood_type: BloodType::APositive,
                conditions: vec!["Type 2 Diabetes".to_string(), "Hypertension".to_string()],
                last_visit: "Aug 18, 2025".to_string(),
            },
            records: vec![
                MedicalRecord {
                    id: "PR-201".to_string(),
                    title: "Diabetes Review".to_string(),
                    kind: RecordKind::Consultation,
                    status: RecordStatus::Final,
                    doctor: "Dr. Sarah Chen".to_string(),
                    department: "Endocrinology".to_string(),
                    date: "Aug 18, 2025".to_string(),
                    summary: "HbA1c improved since last quarter, continue current regimen."
                        .to_string(),
                },
                MedicalRecord {
                    id: "PR-202".to_string(),
                    title: "HbA1c Panel".to_string(),
                    kind: RecordKind::LabReport,
                    status: RecordStatus::Final,
                    doctor: "Dr. James Osei".to_string(),
                    department: "Laboratory".to_string(),
                    date: "Aug 15, 2025".to_string(),
                    summary: "7.1%, down from 7.8%.".to_string(),
                },
            ],
            prescriptions: vec![
                Prescription {
                    id: "PX-201".to_string(),
                    medication: "Metformin".to_string(),
                    dosage: "500mg tablet".to_string(),
                    instructions: "Twice daily with meals".to_string(),
                    prescribed_by: "Dr. Sarah Chen".to_string(),
                    status: PrescriptionStatus::Active,
                    refills_left: 2,
                    monthly_cost: 6.75,
                },
                Prescription {
                    id: "PX-202".to_string(),
                    medication: "Amlodipine".to_string(),
                    dosage: "5mg tablet".to_string(),
                    instructions: "Once daily".to_string(),
                    prescribed_by: "Dr. Sarah Chen".to_string(),
                    status: PrescriptionStatus::Active,
                    refills_left: 1,
                    monthly_cost: 9.40,
                },
                Prescription {
                    id: "PX-203".to_string(),
                    medication: "Glibenclamide".to_string(),
                    dosage: "5mg tablet".to_string(),
                    instructions: "Discontinued after regimen change".to_string(),
                    prescribed_by: "Dr. Sarah Chen".to_string(),
                    status: PrescriptionStatus::Discontinued,
                    refills_left: 0,
                    monthly_cost: 4.20,
                },
            ],
            vitals: vec![
                VitalReading {
                    id: "PV-201".to_string(),
                    metric: VitalMetric::BloodPressure,
                    value: "144/92".to_string(),
                    unit: "mmHg".to_string(),
                    recorded: "Aug 18, 2025".to_string(),
                    level: VitalLevel::Elevated,
                },
                VitalReading {
                    id: "PV-202".to_string(),
                    metric: VitalMetric::Weight,
                    value: "78.5".to_string(),
                    unit: "kg".to_string(),
                    recorded: "Aug 18, 2025".to_string(),
                    level: VitalLevel::Normal,
                },
            ],
            notes: vec![
                CareNote {
                    id: "CN-201".to_string(),
                    author: "Dr. Sarah Chen".to_string(),
                    content: "Discussed diet plan. Referred to nutrition clinic.".to_string(),
                    written: "Aug 18, 2025".to_string(),
                },
                CareNote {
                    id: "CN-202".to_string(),
                    author: "Nurse J. Wanjiru".to_string(),
                    content: "Patient reports better energy levels this month.".to_string(),
                    written: "Aug 18, 2025".to_string(),
                },
            ],
        },
        PatientChart {
            summary: PatientSummary {
                id: "PT-3".to_string(),
                name: "David Kiprop".to_string(),
                age: 45,
                blood_type: BloodType::BNegative,
                conditions: vec![],
                last_visit: "Jul 30, 2025".to_string(),
            },
            records: vec![MedicalRecord {
                id: "PR-301".to_string(),
                title: "Occupational Health Check".to_string(),
                kind: RecordKind::Consultation,
                status: RecordStatus::Final,
                doctor: "Dr. Sarah Chen".to_string(),
                department: "General Medicine".to_string(),
                date: "Jul 30, 2025".to_string(),
                summary: "Fit for duty, no findings.".to_string(),
            }],
            prescriptions: vec![],
            vitals: vec![VitalReading {
                id: "PV-301".to_string(),
                metric: VitalMetric::BloodPressure,
                value: "118/76".to_string(),
                unit: "mmHg".to_string(),
                recorded: "Jul 30, 2025".to_string(),
                level: VitalLevel::Normal,
            }],
            notes: vec![],
        },
        PatientChart {
            summary: PatientSummary {
                id: "PT-4".to_string(),
                name: "Mary Atieno".to_string(),
                age: 29,
                blood_type: BloodType::ABPositive,
                conditions: vec!["Asthma".to_string()],
                last_visit: "Aug 20, 2025".to_string(),
            },
            records: vec![MedicalRecord {
                id: "PR-401".to_string(),
                title: "Asthma Action Plan Review".to_string(),
                kind: RecordKind::Consultation,
                status: RecordStatus::Final,
                doctor: "Dr. Sarah Chen".to_string(),
                department: "Pulmonology".to_string(),
                date: "Aug 20, 2025".to_string(),
                summary: "Inhaler technique reviewed, plan unchanged.".to_string(),
            }],
            prescriptions: vec![Prescription {
                id: "PX-401".to_string(),
                medication: "Salbutamol".to_string(),
                dosage: "100mcg inhaler".to_string(),
                instructions: "Two puffs as needed".to_string(),
                prescribed_by: "Dr. Sarah Chen".to_string(),
                status: PrescriptionStatus::Active,
                refills_left: 4,
                monthly_cost: 11.00,
            }],
            vitals: vec![VitalReading {
                id: "PV-401".to_string(),
                metric: VitalMetric::OxygenSaturation,
                value: "97".to_string(),
                unit: "%".to_string(),
                recorded: "Aug 20, 2025".to_string(),
                level: VitalLevel::Normal,
            }],
            notes: vec![CareNote {
                id: "CN-401".to_string(),
                author: "Dr. Sarah Chen".to_string(),
                content: "Seasonal triggers discussed, spacer recommended.".to_string(),
                written: "Aug 20, 2025".to_string(),
            }],
        },
    ]
}
