//! Notifications Module
//!
//! - Notification list with unread badge and urgent subset
//! - Detail screen that marks a notification read on open
//! - Reminder toggles and per-kind notification settings
//! - Prepend flow for notifications generated locally

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use lumira_health_shared::ids::{next_id, JUST_NOW};
use lumira_health_shared::{
    error::require_text, views, Destination, HealthError, ScreenName, ScreenState, ShellPort, Tone,
};

// ==================== TYPES ====================

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum NotificationKind {
    Appointment,
    BloodRequest,
    HealthTip,
    Medication,
    System,
}

impl NotificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Appointment => "Appointment",
            NotificationKind::BloodRequest => "Blood Request",
            NotificationKind::HealthTip => "Health Tip",
            NotificationKind::Medication => "Medication",
            NotificationKind::System => "System",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            NotificationKind::Appointment => Tone::Info,
            NotificationKind::BloodRequest => Tone::Critical,
            NotificationKind::HealthTip => Tone::Positive,
            NotificationKind::Medication => Tone::Caution,
            NotificationKind::System => Tone::Neutral,
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Structured payload behind an actionable notification.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NotificationAction {
    pub appointment_id: String,
    pub doctor: String,
    pub time: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub time: String,
    pub read: bool,
    pub urgent: bool,
    pub action: Option<NotificationAction>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Reminder {
    pub id: String,
    pub title: String,
    pub schedule: String,
    pub enabled: bool,
}

/// Per-kind master switches on the settings screen.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationPrefs {
    pub appointments: bool,
    pub blood_requests: bool,
    pub health_tips: bool,
    pub medications: bool,
    pub system: bool,
}

impl NotificationPrefs {
    pub fn enabled_for(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::Appointment => self.appointments,
            NotificationKind::BloodRequest => self.blood_requests,
            NotificationKind::HealthTip => self.health_tips,
            NotificationKind::Medication => self.medications,
            NotificationKind::System => self.system,
        }
    }

    pub fn toggle(&mut self, kind: NotificationKind) {
        match kind {
            NotificationKind::Appointment => self.appointments = !self.appointments,
            NotificationKind::BloodRequest => self.blood_requests = !self.blood_requests,
            NotificationKind::HealthTip => self.health_tips = !self.health_tips,
            NotificationKind::Medication => self.medications = !self.medications,
            NotificationKind::System => self.system = !self.system,
        }
    }
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            appointments: true,
            blood_requests: true,
            health_tips: true,
            medications: true,
            system: false,
        }
    }
}

// ==================== SCREENS ====================

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum NotificationScreen {
    List,
    Detail,
    Reminders,
    Settings,
}

impl ScreenName for NotificationScreen {
    fn home() -> Self {
        NotificationScreen::List
    }
}

/// What the active screen shows.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub enum NotificationsView {
    List {
        unread: usize,
        urgent: Vec<Notification>,
        notifications: Vec<Notification>,
    },
    Detail {
        notification: Option<Notification>,
    },
    Reminders {
        reminders: Vec<Reminder>,
        enabled: usize,
    },
    Settings {
        prefs: NotificationPrefs,
    },
}

// ==================== MODULE STATE ====================

/// The notifications module: inbox, reminders, settings.
#[derive(Clone, Debug)]
pub struct Notifications {
    screen: ScreenState<NotificationScreen>,
    items: Vec<Notification>,
    reminders: Vec<Reminder>,
    prefs: NotificationPrefs,
}

impl Notifications {
    pub fn new(
        items: Vec<Notification>,
        reminders: Vec<Reminder>,
        prefs: NotificationPrefs,
    ) -> Self {
        Self {
            screen: ScreenState::new(),
            items,
            reminders,
            prefs,
        }
    }

    /// Module loaded with the seeded sample datasets.
    pub fn with_sample_data() -> Self {
        Self::new(
            sample_notifications(),
            sample_reminders(),
            NotificationPrefs::default(),
        )
    }

    pub fn screen(&self) -> NotificationScreen {
        self.screen.current()
    }

    pub fn prefs(&self) -> NotificationPrefs {
        self.prefs
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.items
    }

    // ==================== DERIVED VIEWS ====================

    /// Unread badge shown on the list screen and in the shell.
    pub fn unread_count(&self) -> usize {
        views::count_matching(&self.items, |n| !n.read)
    }

    /// Urgent subset, in original order.
    pub fn urgent(&self) -> Vec<&Notification> {
        views::matching(&self.items, |n| n.urgent)
    }

    pub fn selected_notification(&self) -> Option<&Notification> {
        let id = self.screen.selection()?;
        self.items.iter().find(|n| n.id == id)
    }

    pub fn enabled_reminder_count(&self) -> usize {
        views::count_matching(&self.reminders, |r| r.enabled)
    }

    pub fn view(&self) -> NotificationsView {
        match self.screen.current() {
            NotificationScreen::List => NotificationsView::List {
                unread: self.unread_count(),
                urgent: self.urgent().into_iter().cloned().collect(),
                notifications: self.items.clone(),
            },
            NotificationScreen::Detail => NotificationsView::Detail {
                notification: self.selected_notification().cloned(),
            },
            NotificationScreen::Reminders => NotificationsView::Reminders {
                reminders: self.reminders.clone(),
                enabled: self.enabled_reminder_count(),
            },
            NotificationScreen::Settings => NotificationsView::Settings { prefs: self.prefs },
        }
    }

    // ==================== ACTIONS ====================

    /// Opens a notification, marking it read in the same update.
    ///
    /// Opening an already-read notification leaves the unread count alone.
    pub fn open_notification(&mut self, id: &str) -> Result<(), HealthError> {
        let item = self
            .items
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| HealthError::unknown("notification", id))?;
        item.read = true;
        self.screen.open(NotificationScreen::Detail, id);
        Ok(())
    }

    /// Marks everything read without touching the ordering.
    pub fn mark_all_read(&mut self) {
        debug!(count = self.items.len(), "mark all read");
        for item in &mut self.items {
            item.read = true;
        }
    }

    pub fn toggle_reminder(&mut self, id: &str) -> Result<(), HealthError> {
        let reminder = self
            .reminders
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| HealthError::unknown("reminder", id))?;
        reminder.enabled = !reminder.enabled;
        Ok(())
    }

    pub fn toggle_pref(&mut self, kind: NotificationKind) {
        self.prefs.toggle(kind);
    }

    /// Prepends a locally generated notification.
    pub fn push_notification(
        &mut self,
        kind: NotificationKind,
        title: &str,
        body: &str,
        urgent: bool,
    ) -> Result<String, HealthError> {
        let title = require_text("title", title)?;
        let body = require_text("body", body)?;
        let id = next_id("NTF", self.items.iter().map(|n| n.id.as_str()));
        info!(id = %id, kind = %kind, "notification pushed");
        self.items.insert(
            0,
            Notification {
                id: id.clone(),
                kind,
                title,
                body,
                time: JUST_NOW.to_string(),
                read: false,
                urgent,
                action: None,
            },
        );
        Ok(id)
    }

    /// Routes the selected notification's follow-up through the shell.
    ///
    /// A notification with nothing to follow is a quiet no-op, matching the
    /// optional-callback contract.
    pub fn follow_action(&self, id: &str, shell: &dyn ShellPort) -> Result<(), HealthError> {
        let item = self
            .items
            .iter()
            .find(|n| n.id == id)
            .ok_or_else(|| HealthError::unknown("notification", id))?;
        match (&item.action, item.kind) {
            (Some(_), _) => shell.open(Destination::Screen("appointments".to_string())),
            (None, NotificationKind::BloodRequest) => shell.open(Destination::BloodDonation),
            (None, NotificationKind::HealthTip) => shell.open(Destination::HealthTips),
            (None, _) => {}
        }
        Ok(())
    }

    pub fn view_reminders(&mut self) {
        self.screen.navigate(NotificationScreen::Reminders);
    }

    pub fn view_settings(&mut self) {
        self.screen.navigate(NotificationScreen::Settings);
    }

    pub fn back_home(&mut self) {
        self.screen.back_home();
    }

    /// Hands control back to the shell.
    pub fn exit(&self, shell: &dyn ShellPort) {
        shell.go_back();
    }
}

// ==================== SAMPLE DATA ====================

pub fn sample_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "NTF-1".to_string(),
            kind: NotificationKind::Appointment,
            title: "Appointment tomorrow".to_string(),
            body: "Dr. Sarah Chen, cardiology follow-up at 10:00.".to_string(),
            time: "1 hour ago".to_string(),
            read: false,
            urgent: false,
            action: Some(NotificationAction {
                appointment_id: "APT-204".to_string(),
                doctor: "Dr. Sarah Chen".to_string(),
                time: "Tomorrow, 10:00".to_string(),
            }),
        },
        Notification {
            id: "NTF-2".to_string(),
            kind: NotificationKind::BloodRequest,
            title: "Urgent: O- blood needed".to_string(),
            body: "City General Hospital needs 2 units for emergency surgery.".to_string(),
            time: "2 hours ago".to_string(),
            read: false,
            urgent: true,
            action: None,
        },
        Notification {
            id: "NTF-3".to_string(),
            kind: NotificationKind::Medication,
            title: "Refill running low".to_string(),
            body: "Metformin has 1 refill left. Ask your pharmacy to renew.".to_string(),
            time: "Yesterday".to_string(),
            read: false,
            urgent: false,
            action: None,
        },
        Notification {
            id: "NTF-4".to_string(),
            kind: NotificationKind::HealthTip,
            title: "Hydration reminder".to_string(),
            body: "Aim for 8 glasses of water on warm days.".to_string(),
            time: "2 days ago".to_string(),
            read: true,
            urgent: false,
            action: None,
        },
        Notification {
            id: "NTF-5".to_string(),
            kind: NotificationKind::System,
            title: "Profile updated".to_string(),
            body: "Your emergency contact details were saved.".to_string(),
            time: "Last week".to_string(),
            read: true,
            urgent: false,
            action: None,
        },
    ]
}

pub fn sample_reminders() -> Vec<Reminder> {
    vec![
        Reminder {
            id: "REM-1".to_string(),
            title: "Morning medication".to_string(),
            schedule: "Daily, 08:00".to_string(),
            enabled: true,
        },
        Reminder {
            id: "REM-2".to_string(),
            title: "Evening walk".to_string(),
            schedule: "Daily, 18:30".to_string(),
            enabled: true,
        },
        Reminder {
            id: "REM-3".to_string(),
            title: "Blood pressure check".to_string(),
            schedule: "Mondays, 09:00".to_string(),
            enabled: false,
        },
    ]
}

// ==================== TESTS ====================
