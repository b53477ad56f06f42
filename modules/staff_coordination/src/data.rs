//! Sample schedule, announcements, requests, and messages.

use crate::{
    Announcement, Priority, RequestKind, RequestStatus, Shift, ShiftStatus, StaffMessage,
    StaffRequest, StaffRole,
};

pub fn sample_shifts() -> Vec<Shift> {
    vec![
        Shift {
            id: "SH-1".to_string(),
            staff: "Dr. Sarah Chen".to_string(),
            role: StaffRole::Doctor,
            department: "Cardiology".to_string(),
            window: "08:00 - 16:00".to_string(),
            status: ShiftStatus::OnDuty,
        },
        Shift {
            id: "SH-2".to_string(),
            staff: "Nurse J. Wanjiru".to_string(),
            role: StaffRole::Nurse,
            department: "General Medicine".to_string(),
            window: "08:00 - 20:00".to_string(),
            status: ShiftStatus::OnDuty,
        },
        Shift {
            id: "SH-3".to_string(),
            staff: "Dr. James Osei".to_string(),
            role: StaffRole::Doctor,
            department: "Laboratory".to_string(),
            window: "16:00 - 00:00".to_string(),
            status: ShiftStatus::Scheduled,
        },
        Shift {
            id: "SH-4".to_string(),
            staff: "Peter Otieno".to_string(),
            role: StaffRole::Technician,
            department: "Radiology".to_string(),
            window: "00:00 - 08:00".to_string(),
            status: ShiftStatus::Completed,
        },
        Shift {
            id: "SH-5".to_string(),
            staff: "Faith Njeri".to_string(),
            role: StaffRole::Support,
            department: "Facilities".to_string(),
            window: "08:00 - 16:00".to_string(),
            status: ShiftStatus::Missed,
        },
        Shift {
            id: "SH-6".to_string(),
            staff: "Dr. Amara Diallo".to_string(),
            role: StaffRole::Doctor,
            department: "Pulmonology".to_string(),
            window: "16:00 - 00:00".to_string(),
            status: ShiftStatus::Scheduled,
        },
    ]
}

pub fn sample_announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: "AN-1".to_string(),
            title: "Blood Drive This Friday".to_string(),
            body: "City General Hospital hosts a community blood drive in the main atrium. \
                   All departments asked to encourage donors."
                .to_string(),
            priority: Priority::High,
            posted: "Today, 07:30".to_string(),
        },
        Announcement {
            id: "AN-2".to_string(),
            title: "New Rota System Training".to_string(),
            body: "Mandatory session on the updated shift rota tool, Thursday 14:00, Room 2B."
                .to_string(),
            priority: Priority::Medium,
            posted: "Yesterday".to_string(),
        },
        Announcement {
            id: "AN-3".to_string(),
            title: "Cafeteria Menu Update".to_string(),
            body: "The cafeteria now serves a late service until 22:00 on weekdays.".to_string(),
            priority: Priority::Low,
            posted: "Aug 18".to_string(),
        },
    ]
}

pub fn sample_requests() -> Vec<StaffRequest> {
    vec![
        StaffRequest {
            id: "RQ-1".to_string(),
            requester: "Nurse J. Wanjiru".to_string(),
            kind: RequestKind::TimeOff,
            detail: "Family event on Aug 29".to_string(),
            status: RequestStatus::Pending,
        },
        StaffRequest {
            id: "RQ-2".to_string(),
            requester: "Peter Otieno".to_string(),
            kind: RequestKind::ShiftSwap,
            detail: "Swap Saturday night for Sunday day with F. Njeri".to_string(),
            status: RequestStatus::Pending,
        },
        StaffRequest {
            id: "RQ-3".to_string(),
            requester: "Dr. James Osei".to_string(),
            kind: RequestKind::Overtime,
            detail: "Cover evening lab backlog this week".to_string(),
            status: RequestStatus::Approved,
        },
        StaffRequest {
            id: "RQ-4".to_string(),
            requester: "Faith Njeri".to_string(),
            kind: RequestKind::TimeOff,
            detail: "Medical appointment Aug 14".to_string(),
            status: RequestStatus::Denied,
        },
    ]
}

pub fn sample_messages() -> Vec<StaffMessage> {
    vec![
        StaffMessage {
            id: "MSG-1".to_string(),
            sender: "Dr. Sarah Chen".to_string(),
            content: "Cardiology rounds moved to 09:00 tomorrow.".to_string(),
            sent: "09:15".to_string(),
        },
        StaffMessage {
            id: "MSG-2".to_string(),
            sender: "Nurse J. Wanjiru".to_string(),
            content: "Bed 12 discharge paperwork is ready for sign-off.".to_string(),
            sent: "08:42".to_string(),
        },
        StaffMessage {
            id: "MSG-3".to_string(),
            sender: "Admin Office".to_string(),
            content: "Visitor hours extended this weekend.".to_string(),
            sent: "Yesterday".to_string(),
        },
    ]
}
