//! Lumira Health Console
//!
//! Stands in for the app shell: picks the modules a role sees, drives a
//! short scripted walkthrough through each one, and prints the resulting
//! views as text or JSON. Shell announcements surface on stdout the way
//! the app would toast them.

use anyhow::Result;
use chrono::Local;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use analytics::AnalyticsDashboard;
use blood_donation::BloodDonation;
use engagement::Engagement;
use home::HomeView;
use lumira_health_shared::{Destination, Role, ShellPort};
use medical_records::{MedicalRecords, RecordsScreen};
use notifications::Notifications;
use patient_management::{PatientManagement, PatientScreen, PatientView};
use staff_coordination::{StaffCoordination, StaffScreen};

#[derive(Parser, Debug)]
#[command(name = "lumira-health-console")]
#[command(about = "Walks the Lumira Health view modules for one role")]
struct Args {
    /// Role the walkthrough is projected for (patient, doctor, hospital-admin)
    #[arg(short, long, default_value = "patient")]
    role: Role,

    /// Display name used in greetings and the engagement leaderboard
    #[arg(short, long, default_value = "Alex Mutua")]
    name: String,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Shell backing the walkthrough: routing is logged, announcements print
/// where the app would toast them.
struct ConsoleShell;

impl ShellPort for ConsoleShell {
    fn go_back(&self) {
        info!("shell: back to home");
    }

    fn open(&self, destination: Destination) {
        info!(?destination, "shell: open");
    }

    fn announce(&self, message: &str) {
        println!("  >> {}", message);
    }
}

/// One module's slice of the walkthrough: a text summary plus the full view.
struct Section {
    title: &'static str,
    lines: Vec<String>,
    view: serde_json::Value,
}

impl Section {
    fn new(title: &'static str, view: &impl Serialize, lines: Vec<String>) -> Result<Self> {
        Ok(Self {
            title,
            lines,
            view: serde_json::to_value(view)?,
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let shell = ConsoleShell;

    let sections = match args.role {
        Role::Patient => patient_walkthrough(&args.name, &shell)?,
        Role::Doctor => doctor_walkthrough(&args.name, &shell)?,
        Role::HospitalAdmin => admin_walkthrough(&args.name, &shell)?,
    };

    match args.format {
        OutputFormat::Text => print_text(&args, &sections),
        OutputFormat::Json => print_json(&sections)?,
    }
    Ok(())
}

fn print_text(args: &Args, sections: &[Section]) {
    println!("Lumira Health: {} walkthrough", args.role);
    for section in sections {
        println!("\n== {} ==", section.title);
        for line in &section.lines {
            println!("  {}", line);
        }
    }
}

fn print_json(sections: &[Section]) -> Result<()> {
    let mut object = serde_json::Map::new();
    for section in sections {
        object.insert(section.title.to_string(), section.view.clone());
    }
    println!("{}", serde_json::to_string_pretty(&object)?);
    Ok(())
}

// ==================== WALKTHROUGHS ====================

fn home_section(name: &str, role: Role) -> Result<Section> {
    let view = home::home_view(name, role);
    let mut lines = Vec::new();
    match &view {
        HomeView::Patient {
            greeting,
            next_appointment,
            snapshot,
            quick_actions,
        } => {
            lines.push(greeting.clone());
            if let Some(appointment) = next_appointment {
                lines.push(format!(
                    "Next appointment: {} ({}), {}",
                    appointment.doctor, appointment.specialty, appointment.time
                ));
            }
            for stat in snapshot {
                lines.push(format!(
                    "{}: {}/{} {} ({}%)",
                    stat.label,
                    stat.current,
                    stat.target,
                    stat.unit,
                    stat.display_percent()
                ));
            }
            lines.push(format!("Quick actions: {}", action_labels(quick_actions)));
        }
        HomeView::Doctor {
            greeting,
            consultations_today,
            pending_reviews,
            quick_actions,
        } => {
            lines.push(greeting.clone());
            lines.push(format!("Consultations today: {}", consultations_today));
            lines.push(format!("Pending reviews: {}", pending_reviews));
            lines.push(format!("Quick actions: {}", action_labels(quick_actions)));
        }
        HomeView::HospitalAdmin {
            greeting,
            occupancy,
            staff_on_duty,
            staffing_alerts,
            quick_actions,
        } => {
            lines.push(greeting.clone());
            lines.push(format!(
                "{}: {}/{} ({}%)",
                occupancy.label,
                occupancy.current,
                occupancy.target,
                occupancy.display_percent()
            ));
            lines.push(format!("Staff on duty: {}", staff_on_duty));
            for alert in staffing_alerts {
                lines.push(format!("Alert: {}", alert));
            }
            lines.push(format!("Quick actions: {}", action_labels(quick_actions)));
        }
    }
    Section::new("home", &view, lines)
}

fn action_labels(actions: &[home::QuickAction]) -> String {
    actions
        .iter()
        .map(|a| a.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn notifications_section(shell: &dyn ShellPort) -> Result<Section> {
    let mut notifications = Notifications::with_sample_data();
    let before = notifications.unread_count();

    notifications.open_notification("NTF-1")?;
    notifications.follow_action("NTF-1", shell)?;
    notifications.back_home();

    let lines = vec![
        format!("Unread: {} -> {}", before, notifications.unread_count()),
        format!("Urgent: {}", notifications.urgent().len()),
        format!(
            "Reminders enabled: {}",
            notifications.enabled_reminder_count()
        ),
    ];
    Section::new("notifications", &notifications.view(), lines)
}

fn analytics_section(role: Role) -> Result<Section> {
    let dashboard = AnalyticsDashboard::for_role(role);
    let mut lines = Vec::new();
    for card in dashboard.metric_cards() {
        lines.push(format!("{}: {} ({})", card.label, card.value, card.delta));
    }
    if let Some(insight) = dashboard.headline_insight() {
        lines.push(format!("Insight: {}", insight.text));
    }
    Section::new("analytics", &dashboard.view(), lines)
}

fn patient_walkthrough(name: &str, shell: &dyn ShellPort) -> Result<Vec<Section>> {
    let mut sections = vec![home_section(name, Role::Patient)?];

    // Blood donation: check eligibility, then schedule against BR-1.
    let today = Local::now().date_naive();
    let mut blood = BloodDonation::with_sample_data(today);
    blood.toggle_urgent_only();
    let urgent_visible = blood.visible_requests().len();
    let eligibility = blood.eligibility();
    blood.open_request("BR-1")?;
    blood.begin_confirmation("BR-1")?;
    blood.confirm_donation(shell)?;
    let lines = vec![
        format!("Urgent requests: {}", urgent_visible),
        if eligibility.is_eligible {
            "Eligible to donate".to_string()
        } else {
            format!("Next eligible on {}", eligibility.eligible_on)
        },
        format!("Units donated to date: {}", blood.total_units_donated()),
    ];
    sections.push(Section::new("blood_donation", &blood.view(), lines)?);

    sections.push(notifications_section(shell)?);

    // Medical records: search the chart, then ask for a refill.
    let mut records = MedicalRecords::with_sample_data();
    records.set_search("chen");
    let matches = records.filtered_records().len();
    records.request_refill("RX-2", shell)?;
    records.show(RecordsScreen::Analytics);
    let lines = vec![
        format!("Records matching \"chen\": {}", matches),
        format!(
            "Active prescription cost: {:.2}",
            records.active_prescription_cost()
        ),
        format!("Abnormal labs: {}", records.abnormal_lab_count()),
    ];
    sections.push(Section::new("medical_records", &records.view(), lines)?);

    // Engagement: nudge a goal, like a post.
    let mut engagement = Engagement::with_sample_data(name);
    engagement.advance_goal("GL-1", 1)?;
    engagement.toggle_like("POST-1")?;
    let lines = vec![
        format!("Total points: {}", engagement.total_points()),
        format!("Leaderboard rank: {}", engagement.your_rank()),
        format!(
            "Goals: {} done, {} active",
            engagement.completed_goals(),
            engagement.active_goals()
        ),
    ];
    sections.push(Section::new("engagement", &engagement.view(), lines)?);

    sections.push(analytics_section(Role::Patient)?);
    Ok(sections)
}

fn doctor_walkthrough(name: &str, shell: &dyn ShellPort) -> Result<Vec<Section>> {
    let mut sections = vec![home_section(name, Role::Doctor)?];

    // Patient management: pull up a chart, send the patient a note.
    let mut patients = PatientManagement::with_sample_data();
    patients.select_patient("PT-2")?;
    patients.message_patient("PT-2", shell)?;
    patients.show(PatientScreen::Overview);
    let lines = match patients.view() {
        PatientView::Overview {
            patient,
            condition_count,
            active_prescription_count,
            roster,
            ..
        } => vec![
            format!("Roster: {} patients", roster.len()),
            format!(
                "Chart: {}",
                patient.map(|p| p.name).unwrap_or_else(|| "none".to_string())
            ),
            format!(
                "{} conditions, {} active prescriptions",
                condition_count, active_prescription_count
            ),
        ],
        _ => Vec::new(),
    };
    sections.push(Section::new("patient_management", &patients.view(), lines)?);

    sections.push(notifications_section(shell)?);
    sections.push(analytics_section(Role::Doctor)?);
    Ok(sections)
}

fn admin_walkthrough(name: &str, shell: &dyn ShellPort) -> Result<Vec<Section>> {
    let mut sections = vec![home_section(name, Role::HospitalAdmin)?];

    // Staff coordination: clear one request, post to the board.
    let mut staff = StaffCoordination::with_sample_data();
    let pending_before = staff.pending_count();
    staff.approve_request("RQ-1")?;
    staff.send_message(name, "Morning briefing moved to 08:15.")?;
    staff.show(StaffScreen::Requests);
    let lines = vec![
        format!("On duty: {}", staff.on_duty_count()),
        format!(
            "Pending requests: {} -> {}",
            pending_before,
            staff.pending_count()
        ),
        format!("Board messages: {}", staff.messages().len()),
    ];
    sections.push(Section::new("staff_coordination", &staff.view(), lines)?);

    sections.push(notifications_section(shell)?);
    sections.push(analytics_section(Role::HospitalAdmin)?);
    Ok(sections)
}
