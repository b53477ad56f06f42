//! Home Dashboard Module
//!
//! The landing view, and the one module with no screen machine at all: a
//! pure projection from `(display name, Role)` to a role-specific view.
//! Quick actions carry `Destination` values; `choose_action` routes one
//! through the shell port.

use serde::Serialize;
use tracing::debug;

use lumira_health_shared::{percent, Destination, Role, ShellPort};

// ==================== VIEW MODEL ====================

/// One tile on the dashboard's action row.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct QuickAction {
    pub label: String,
    pub destination: Destination,
}

/// The patient's next booked appointment.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AppointmentCard {
    pub doctor: String,
    pub specialty: String,
    pub time: String,
    pub location: String,
}

/// One progress pair on the health snapshot.
///
/// The raw pair is kept as entered; the bar itself comes from
/// `display_percent`, which clamps overachievement to a full bar while
/// `achieved`/`exceeded` stay observable on the raw numbers.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SnapshotStat {
    pub label: String,
    pub current: u32,
    pub target: u32,
    pub unit: String,
}

impl SnapshotStat {
    fn new(label: &str, current: u32, target: u32, unit: &str) -> Self {
        Self {
            label: label.to_string(),
            current,
            target,
            unit: unit.to_string(),
        }
    }

    /// Bar width, clamped to 100.
    pub fn display_percent(&self) -> u8 {
        percent(self.current, self.target)
    }

    pub fn achieved(&self) -> bool {
        self.current >= self.target
    }

    pub fn exceeded(&self) -> bool {
        self.current > self.target
    }
}

/// The dashboard, one variant per role.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub enum HomeView {
    Patient {
        greeting: String,
        next_appointment: Option<AppointmentCard>,
        snapshot: Vec<SnapshotStat>,
        quick_actions: Vec<QuickAction>,
    },
    Doctor {
        greeting: String,
        consultations_today: u32,
        pending_reviews: u32,
        quick_actions: Vec<QuickAction>,
    },
    HospitalAdmin {
        greeting: String,
        occupancy: SnapshotStat,
        staff_on_duty: u32,
        staffing_alerts: Vec<String>,
        quick_actions: Vec<QuickAction>,
    },
}

// ==================== PROJECTION ====================

fn action(label: &str, destination: Destination) -> QuickAction {
    QuickAction {
        label: label.to_string(),
        destination,
    }
}

/// Builds the dashboard for one user. Pure: same inputs, same view.
pub fn home_view(name: &str, role: Role) -> HomeView {
    let greeting = format!("Welcome back, {}", name);
    match role {
        Role::Patient => HomeView::Patient {
            greeting,
            next_appointment: Some(AppointmentCard {
                doctor: "Dr. Sarah Chen".to_string(),
                specialty: "Cardiology".to_string(),
                time: "Tomorrow, 10:30".to_string(),
                location: "City General Hospital, Room 3C".to_string(),
            }),
            snapshot: vec![
                SnapshotStat::new("Daily Steps", 7200, 8000, "steps"),
                SnapshotStat::new("Weekly Exercise", 92, 90, "min"),
                SnapshotStat::new("Water Intake", 6, 8, "glasses"),
                SnapshotStat::new("Medication Adherence", 96, 100, "%"),
            ],
            quick_actions: vec![
                action("Donate Blood", Destination::BloodDonation),
                action("My Records", Destination::MedicalRecords),
                action("Health Tips", Destination::HealthTips),
                action("Notifications", Destination::Notifications),
            ],
        },
        Role::Doctor => HomeView::Doctor {
            greeting,
            consultations_today: 8,
            pending_reviews: 3,
            quick_actions: vec![
                action("My Patients", Destination::Screen("patients".to_string())),
                action("Analytics", Destination::Analytics),
                action("Notifications", Destination::Notifications),
            ],
        },
        Role::HospitalAdmin => HomeView::HospitalAdmin {
            greeting,
            occupancy: SnapshotStat::new("Bed Occupancy", 242, 300, "beds"),
            staff_on_duty: 57,
            staffing_alerts: vec![
                "Radiology is short one technician for the night shift.".to_string(),
                "Saturday ER on-call list is still unconfirmed.".to_string(),
            ],
            quick_actions: vec![
                action("Staff Coordination", Destination::Screen("staff".to_string())),
                action("Analytics", Destination::Analytics),
                action("Notifications", Destination::Notifications),
            ],
        },
    }
}

/// Routes a chosen quick action through the shell.
pub fn choose_action(action: &QuickAction, shell: &dyn ShellPort) {
    debug!(destination = ?action.destination, "quick action chosen");
    shell.open(action.destination.clone());
}

// ==================== TESTS ====================
