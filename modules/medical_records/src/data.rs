//! Seeded chart data for the records module. All fictional.

use lumira_health_shared::schema::{
    LabFlag, LabResult, MedicalRecord, Prescription, PrescriptionStatus, RecordKind, RecordStatus,
    VitalLevel, VitalMetric, VitalReading,
};

pub fn sample_records() -> Vec<MedicalRecord> {
    vec![
        MedicalRecord {
            id: "MR-1".to_string(),
            title: "Annual physical examination".to_string(),
            kind: RecordKind::Consultation,
            status: RecordStatus::Final,
            doctor: "Dr. Sarah Chen".to_string(),
            department: "General Medicine".to_string(),
            date: "Jan 15, 2025".to_string(),
            summary: "Routine examination, no acute findings. Blood pressure trending high."
                .to_string(),
        },
        MedicalRecord {
            id: "MR-2".to_string(),
            title: "Full blood count".to_string(),
            kind: RecordKind::LabReport,
            status: RecordStatus::Final,
            doctor: "Dr. James Osei".to_string(),
            department: "Pathology".to_string(),
            date: "Feb 3, 2025".to_string(),
            summary: "White cell count slightly above range, repeat in six weeks.".to_string(),
        },
        MedicalRecord {
            id: "MR-3".to_string(),
            title: "Chest X-ray".to_string(),
            kind: RecordKind::Imaging,
            status: RecordStatus::Pending,
            doctor: "Dr. Amara Diallo".to_string(),
            department: "Radiology".to_string(),
            date: "Mar 11, 2025".to_string(),
            summary: "Ordered after persistent cough, report awaited.".to_string(),
        },
        MedicalRecord {
            id: "MR-4".to_string(),
            title: "Influenza vaccine".to_string(),
            kind: RecordKind::Vaccination,
            status: RecordStatus::Final,
            doctor: "Nurse J. Wanjiru".to_string(),
            department: "Immunization".to_string(),
            date: "Mar 28, 2025".to_string(),
            summary: "Seasonal influenza dose administered, no reaction.".to_string(),
        },
        MedicalRecord {
            id: "MR-5".to_string(),
            title: "Cardiology follow-up".to_string(),
            kind: RecordKind::Consultation,
            status: RecordStatus::Amended,
            doctor: "Dr. Sarah Chen".to_string(),
            department: "Cardiology".to_string(),
            date: "Apr 2, 2025".to_string(),
            summary: "Medication dose adjusted; note amended with home readings.".to_string(),
        },
        MedicalRecord {
            id: "MR-6".to_string(),
            title: "Dental cleaning".to_string(),
            kind: RecordKind::Other("Dental".to_string()),
            status: RecordStatus::Final,
            doctor: "Dr. Peter Njoroge".to_string(),
            department: "Dental".to_string(),
            date: "May 20, 2025".to_string(),
            summary: "Scale and polish, next visit in six months.".to_string(),
        },
    ]
}

pub fn sample_prescriptions() -> Vec<Prescription> {
    vec![
        Prescription {
            id: "RX-1".to_string(),
            medication: "Lisinopril".to_string(),
            dosage: "10mg tablet".to_string(),
            instructions: "Once daily in the morning".to_string(),
            prescribed_by: "Dr. Sarah Chen".to_string(),
            status: PrescriptionStatus::Active,
            refills_left: 3,
            monthly_cost: 12.50,
        },
        Prescription {
            id: "RX-2".to_string(),
            medication: "Metformin".to_string(),
            dosage: "850mg tablet".to_string(),
            instructions: "Twice daily with meals".to_string(),
            prescribed_by: "Dr. James Osei".to_string(),
            status: PrescriptionStatus::Active,
            refills_left: 1,
            monthly_cost: 6.75,
        },
        Prescription {
            id: "RX-3".to_string(),
            medication: "Amoxicillin".to_string(),
            dosage: "500mg capsule".to_string(),
            instructions: "Three times daily for seven days".to_string(),
            prescribed_by: "Dr. Sarah Chen".to_string(),
            status: PrescriptionStatus::Completed,
            refills_left: 0,
            monthly_cost: 8.00,
        },
        Prescription {
            id: "RX-4".to_string(),
            medication: "Atorvastatin".to_string(),
            dosage: "20mg tablet".to_string(),
            instructions: "Once daily at night".to_string(),
            prescribed_by: "Dr. Sarah Chen".to_string(),
            status: PrescriptionStatus::Discontinued,
            refills_left: 0,
            monthly_cost: 15.25,
        },
    ]
}

pub fn sample_vitals() -> Vec<VitalReading> {
    vec![
        VitalReading {
            id: "VT-1".to_string(),
            metric: VitalMetric::HeartRate,
            value: "72".to_string(),
            unit: "bpm".to_string(),
            recorded: "Today, 08:10".to_string(),
            level: VitalLevel::Normal,
        },
        VitalReading {
            id: "VT-2".to_string(),
            metric: VitalMetric::BloodPressure,
            value: "138/88".to_string(),
            unit: "mmHg".to_string(),
            recorded: "Today, 08:10".to_string(),
            level: VitalLevel::Elevated,
        },
        VitalReading {
            id: "VT-3".to_string(),
            metric: VitalMetric::Temperature,
            value: "36.8".to_string(),
            unit: "°C".to_string(),
            recorded: "Yesterday, 21:00".to_string(),
            level: VitalLevel::Normal,
        },
        VitalReading {
            id: "VT-4".to_string(),
            metric: VitalMetric::OxygenSaturation,
            value: "98".to_string(),
            unit: "%".to_string(),
            recorded: "Yesterday, 21:00".to_string(),
            level: VitalLevel::Normal,
        },
        VitalReading {
            id: "VT-5".to_string(),
            metric: VitalMetric::Weight,
            value: "81.2".to_string(),
            unit: "kg".to_string(),
            recorded: "Monday, 07:30".to_string(),
            level: VitalLevel::Normal,
        },
    ]
}

pub fn sample_labs() -> Vec<LabResult> {
    vec![
        LabResult {
            id: "LAB-1".to_string(),
            test: "Hemoglobin".to_string(),
            value: "14.1".to_string(),
            unit: "g/dL".to_string(),
            reference: "13.0 - 17.0".to_string(),
            flag: LabFlag::Normal,
        },
        LabResult {
            id: "LAB-2".to_string(),
            test: "White blood cells".to_string(),
            value: "11.8".to_string(),
            unit: "x10^9/L".to_string(),
            reference: "4.0 - 11.0".to_string(),
            flag: LabFlag::High,
        },
        LabResult {
            id: "LAB-3".to_string(),
            test: "Platelets".to_string(),
            value: "250".to_string(),
            unit: "x10^9/L".to_string(),
            reference: "150 - 400".to_string(),
            flag: LabFlag::Normal,
        },
        LabResult {
            id: "LAB-4".to_string(),
            test: "Fasting glucose".to_string(),
            value: "5.2".to_string(),
            unit: "mmol/L".to_string(),
            reference: "3.9 - 5.5".to_string(),
            flag: LabFlag::Normal,
        },
        LabResult {
            id: "LAB-5".to_string(),
            test: "Vitamin D".to_string(),
            value: "18".to_string(),
            unit: "ng/mL".to_string(),
            reference: "20 - 50".to_string(),
            flag: LabFlag::Low,
        },
    ]
}
