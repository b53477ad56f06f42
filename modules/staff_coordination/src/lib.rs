//! Staff Coordination Module
//!
//! The hospital-admin side of the day:
//! - Today's shift schedule with an on-duty count
//! - Announcements ranked by priority
//! - A review queue of staff requests, approve or deny from Pending only
//! - A team message board, newest first

pub mod data;

use serde::{Deserialize, Serialize};
use tracing::info;

use lumira_health_shared::ids::{next_id, JUST_NOW};
use lumira_health_shared::{
    error::require_text, views, HealthError, ScreenName, ScreenState, ShellPort, Tone,
};

// ==================== ENTITIES ====================

/// One row on today's schedule.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Shift {
    pub id: String,
    pub staff: String,
    pub role: StaffRole,
    pub department: String,
    /// Display window ("08:00 - 16:00"), not parsed times
    pub window: String,
    pub status: ShiftStatus,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum StaffRole {
    Doctor,
    Nurse,
    Technician,
    Support,
}

impl StaffRole {
    pub fn label(&self) -> &'static str {
        match self {
            StaffRole::Doctor => "Doctor",
            StaffRole::Nurse => "Nurse",
            StaffRole::Technician => "Technician",
            StaffRole::Support => "Support",
        }
    }
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ShiftStatus {
    Scheduled,
    OnDuty,
    Completed,
    Missed,
}

impl ShiftStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ShiftStatus::Scheduled => "Scheduled",
            ShiftStatus::OnDuty => "On Duty",
            ShiftStatus::Completed => "Completed",
            ShiftStatus::Missed => "Missed",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            ShiftStatus::Scheduled => Tone::Info,
            ShiftStatus::OnDuty => Tone::Positive,
            ShiftStatus::Completed => Tone::Neutral,
            ShiftStatus::Missed => Tone::Critical,
        }
    }
}

impl std::fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Notice posted to all staff.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub body: String,
    pub priority: Priority,
    pub posted: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Priority::High => Tone::Critical,
            Priority::Medium => Tone::Caution,
            Priority::Low => Tone::Info,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Item in the admin review queue.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StaffRequest {
    pub id: String,
    pub requester: String,
    pub kind: RequestKind,
    pub detail: String,
    pub status: RequestStatus,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RequestKind {
    TimeOff,
    ShiftSwap,
    Overtime,
}

impl RequestKind {
    pub fn label(&self) -> &'static str {
        match self {
            RequestKind::TimeOff => "Time Off",
            RequestKind::ShiftSwap => "Shift Swap",
            RequestKind::Overtime => "Overtime",
        }
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Approved,
    Denied,
}

impl RequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Denied => "Denied",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            RequestStatus::Pending => Tone::Caution,
            RequestStatus::Approved => Tone::Positive,
            RequestStatus::Denied => Tone::Critical,
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One entry on the team message board.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StaffMessage {
    pub id: String,
    pub sender: String,
    pub content: String,
    pub sent: String,
}

// ==================== SCREENS ====================

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum StaffScreen {
    Schedule,
    Announcements,
    Requests,
    Communication,
}

impl ScreenName for StaffScreen {
    fn home() -> Self {
        StaffScreen::Schedule
    }
}

/// What the active screen shows.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub enum StaffView {
    Schedule {
        shifts: Vec<Shift>,
        on_duty_count: usize,
    },
    Announcements {
        announcements: Vec<Announcement>,
    },
    Requests {
        requests: Vec<StaffRequest>,
        pending_count: usize,
    },
    Communication {
        messages: Vec<StaffMessage>,
    },
}

// ==================== MODULE STATE ====================

/// The staff coordination module.
#[derive(Clone, Debug)]
pub struct StaffCoordination {
    screen: ScreenState<StaffScreen>,
    shifts: Vec<Shift>,
    announcements: Vec<Announcement>,
    requests: Vec<StaffRequest>,
    messages: Vec<StaffMessage>,
}

impl StaffCoordination {
    pub fn new(
        shifts: Vec<Shift>,
        announcements: Vec<Announcement>,
        requests: Vec<StaffRequest>,
        messages: Vec<StaffMessage>,
    ) -> Self {
        Self {
            screen: ScreenState::new(),
            shifts,
            announcements,
            requests,
            messages,
        }
    }

    pub fn with_sample_data() -> Self {
        Self::new(
            data::sample_shifts(),
            data::sample_announcements(),
            data::sample_requests(),
            data::sample_messages(),
        )
    }

    pub fn screen(&self) -> StaffScreen {
        self.screen.current()
    }

    pub fn requests(&self) -> &[StaffRequest] {
        &self.requests
    }

    pub fn messages(&self) -> &[StaffMessage] {
        &self.messages
    }

    // ==================== DERIVED VIEWS ====================

    /// Badge on the requests tab.
    pub fn pending_count(&self) -> usize {
        views::count_matching(&self.requests, |r| r.status == RequestStatus::Pending)
    }

    pub fn on_duty_count(&self) -> usize {
        views::count_matching(&self.shifts, |s| s.status == ShiftStatus::OnDuty)
    }

    pub fn view(&self) -> StaffView {
        match self.screen.current() {
            StaffScreen::Schedule => StaffView::Schedule {
                shifts: self.shifts.clone(),
                on_duty_count: self.on_duty_count(),
            },
            StaffScreen::Announcements => StaffView::Announcements {
                announcements: self.announcements.clone(),
            },
            StaffScreen::Requests => StaffView::Requests {
                requests: self.requests.clone(),
                pending_count: self.pending_count(),
            },
            StaffScreen::Communication => StaffView::Communication {
                messages: self.messages.clone(),
            },
        }
    }

    // ==================== ACTIONS ====================

    pub fn show(&mut self, screen: StaffScreen) {
        self.screen.navigate(screen);
    }

    pub fn approve_request(&mut self, id: &str) -> Result<(), HealthError> {
        self.review_request(id, RequestStatus::Approved)
    }

    pub fn deny_request(&mut self, id: &str) -> Result<(), HealthError> {
        self.review_request(id, RequestStatus::Denied)
    }

    /// Review moves a request out of Pending exactly once; a second review
    /// is refused rather than silently overwritten.
    fn review_request(&mut self, id: &str, outcome: RequestStatus) -> Result<(), HealthError> {
        let request = self
            .requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| HealthError::unknown("staff request", id))?;
        if request.status != RequestStatus::Pending {
            return Err(HealthError::InvalidStatusChange {
                kind: "staff request",
                id: id.to_string(),
                detail: format!("already {}", request.status),
            });
        }
        request.status = outcome;
        info!(request = %id, outcome = %outcome, "request reviewed");
        Ok(())
    }

    /// Posts to the message board. The new message lands at the top.
    pub fn send_message(&mut self, sender: &str, content: &str) -> Result<String, HealthError> {
        let sender = require_text("sender", sender)?;
        let content = require_text("content", content)?;
        let id = next_id("MSG", self.messages.iter().map(|m| m.id.as_str()));
        self.messages.insert(
            0,
            StaffMessage {
                id: id.clone(),
                sender,
                content,
                sent: JUST_NOW.to_string(),
            },
        );
        Ok(id)
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
