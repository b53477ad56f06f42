//! Blood Donation Module
//!
//! Patient-facing donation flows:
//! - Browse open blood requests with an urgent-only filter
//! - Request details, donation center map, personal donation history
//! - Confirmation flow ending on a success screen
//! - Donor eligibility from the whole-blood deferral window

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;

use lumira_health_shared::schema::BloodType;
use lumira_health_shared::{views, HealthError, ScreenName, ScreenState, ShellPort, Tone};

/// Days a donor must wait between whole-blood donations.
pub const DEFERRAL_DAYS: i64 = 56;

// ==================== TYPES ====================

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Urgency {
    Urgent,
    Normal,
}

impl Urgency {
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Urgent => "Urgent",
            Urgency::Normal => "Normal",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Urgency::Urgent => Tone::Critical,
            Urgency::Normal => Tone::Info,
        }
    }
}

/// An open request for donated blood.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BloodRequest {
    pub id: String,
    /// De-identified display alias, never a chart name
    pub patient_alias: String,
    pub blood_type: BloodType,
    pub urgency: Urgency,
    pub hospital: String,
    pub distance_km: f64,
    pub units_needed: u32,
    pub posted: String,
    pub note: String,
}

/// A donation center shown on the map screen.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DonationCenter {
    pub id: String,
    pub name: String,
    pub address: String,
    pub distance_km: f64,
    pub open_now: bool,
}

/// One completed donation in the donor's history.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DonationRecord {
    pub id: String,
    pub date: String,
    pub center: String,
    pub blood_type: BloodType,
    pub units: u32,
}

/// The signed-in donor.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DonorProfile {
    pub name: String,
    pub blood_type: BloodType,
    pub donations: u32,
    pub last_donation: NaiveDate,
}

/// Whether the donor may give again, and from when.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Eligibility {
    pub eligible_on: NaiveDate,
    pub is_eligible: bool,
}

impl DonorProfile {
    /// Eligibility under the whole-blood deferral window.
    pub fn eligibility(&self, today: NaiveDate) -> Eligibility {
        let eligible_on = self.last_donation + Duration::days(DEFERRAL_DAYS);
        Eligibility {
            eligible_on,
            is_eligible: today >= eligible_on,
        }
    }
}

// ==================== SCREENS ====================

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BloodScreen {
    List,
    Details,
    Map,
    History,
    Confirm,
    Success,
}

impl ScreenName for BloodScreen {
    fn home() -> Self {
        BloodScreen::List
    }
}

/// What the active screen shows.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub enum BloodView {
    List {
        urgent_only: bool,
        urgent_count: usize,
        requests: Vec<BloodRequest>,
    },
    Details {
        request: Option<BloodRequest>,
    },
    Map {
        centers: Vec<DonationCenter>,
    },
    History {
        donations: Vec<DonationRecord>,
        total_units: u32,
    },
    Confirm {
        request: Option<BloodRequest>,
        eligibility: Eligibility,
    },
    Success {
        hospital: Option<String>,
    },
}

// ==================== MODULE STATE ====================

/// The blood donation module: screen machine, datasets, urgent filter.
#[derive(Clone, Debug)]
pub struct BloodDonation {
    screen: ScreenState<BloodScreen>,
    donor: DonorProfile,
    requests: Vec<BloodRequest>,
    centers: Vec<DonationCenter>,
    history: Vec<DonationRecord>,
    urgent_only: bool,
    /// Reference date for eligibility, injected so views stay deterministic
    today: NaiveDate,
}

impl BloodDonation {
    pub fn new(
        donor: DonorProfile,
        requests: Vec<BloodRequest>,
        centers: Vec<DonationCenter>,
        history: Vec<DonationRecord>,
        today: NaiveDate,
    ) -> Self {
        Self {
            screen: ScreenState::new(),
            donor,
            requests,
            centers,
            history,
            urgent_only: false,
            today,
        }
    }

    /// Module loaded with the seeded sample datasets.
    pub fn with_sample_data(today: NaiveDate) -> Self {
        Self::new(
            sample_donor(),
            sample_requests(),
            sample_centers(),
            sample_history(),
            today,
        )
    }

    pub fn screen(&self) -> BloodScreen {
        self.screen.current()
    }

    pub fn urgent_only(&self) -> bool {
        self.urgent_only
    }

    pub fn donor(&self) -> &DonorProfile {
        &self.donor
    }

    // ==================== DERIVED VIEWS ====================

    /// Requests the list screen shows under the current filter.
    pub fn visible_requests(&self) -> Vec<&BloodRequest> {
        if self.urgent_only {
            views::matching(&self.requests, |r| r.urgency == Urgency::Urgent)
        } else {
            self.requests.iter().collect()
        }
    }

    pub fn urgent_count(&self) -> usize {
        views::count_matching(&self.requests, |r| r.urgency == Urgency::Urgent)
    }

    /// The request behind the current selection, if it still exists.
    pub fn selected_request(&self) -> Option<&BloodRequest> {
        let id = self.screen.selection()?;
        self.requests.iter().find(|r| r.id == id)
    }

    pub fn eligibility(&self) -> Eligibility {
        self.donor.eligibility(self.today)
    }

    pub fn total_units_donated(&self) -> u32 {
        views::sum_by(&self.history, |d| d.units)
    }

    pub fn view(&self) -> BloodView {
        match self.screen.current() {
            BloodScreen::List => BloodView::List {
                urgent_only: self.urgent_only,
                urgent_count: self.urgent_count(),
                requests: self.visible_requests().into_iter().cloned().collect(),
            },
            BloodScreen::Details => BloodView::Details {
                request: self.selected_request().cloned(),
            },
            BloodScreen::Map => BloodView::Map {
                centers: self.centers.clone(),
            },
            BloodScreen::History => BloodView::History {
                donations: self.history.clone(),
                total_units: self.total_units_donated(),
            },
            BloodScreen::Confirm => BloodView::Confirm {
                request: self.selected_request().cloned(),
                eligibility: self.eligibility(),
            },
            BloodScreen::Success => BloodView::Success {
                hospital: self.selected_request().map(|r| r.hospital.clone()),
            },
        }
    }

    // ==================== ACTIONS ====================

    pub fn toggle_urgent_only(&mut self) {
        self.urgent_only = !self.urgent_only;
    }

    /// Opens the details screen for one request.
    pub fn open_request(&mut self, id: &str) -> Result<(), HealthError> {
        self.require_request(id)?;
        self.screen.open(BloodScreen::Details, id);
        Ok(())
    }

    pub fn view_map(&mut self) {
        self.screen.navigate(BloodScreen::Map);
    }

    pub fn view_history(&mut self) {
        self.screen.navigate(BloodScreen::History);
    }

    /// Moves the selected request into the confirmation flow.
    pub fn begin_confirmation(&mut self, id: &str) -> Result<(), HealthError> {
        self.require_request(id)?;
        self.screen.open(BloodScreen::Confirm, id);
        Ok(())
    }

    /// Completes the confirmation flow and lands on the success screen.
    ///
    /// Scheduling is not persisted anywhere; the shell announcement is the
    /// only side effect beyond the screen change.
    pub fn confirm_donation(&mut self, shell: &dyn ShellPort) -> Result<(), HealthError> {
        let request = self
            .selected_request()
            .ok_or_else(|| HealthError::unknown("blood request", "none selected"))?;
        let hospital = request.hospital.clone();
        info!(request = %request.id, hospital = %hospital, "donation confirmed");
        self.screen.navigate(BloodScreen::Success);
        shell.announce(&format!("Donation scheduled at {}", hospital));
        Ok(())
    }

    pub fn back_home(&mut self) {
        self.screen.back_home();
    }

    /// Hands control back to the shell.
    pub fn exit(&self, shell: &dyn ShellPort) {
        shell.go_back();
    }

    fn require_request(&self, id: &str) -> Result<(), HealthError> {
        if self.requests.iter().any(|r| r.id == id) {
            Ok(())
        } else {
            Err(HealthError::unknown("blood request", id))
        }
    }
}

// ==================== SAMPLE DATA ====================

fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("sample dates are valid")
}

pub fn sample_donor() -> DonorProfile {
    DonorProfile {
        name: "Alex Mutua".to_string(),
        blood_type: BloodType::OPositive,
        donations: 8,
        last_donation: sample_date(2025, 6, 10),
    }
}

pub fn sample_requests() -> Vec<BloodRequest> {
    vec![
        BloodRequest {
            id: "BR-1".to_string(),
            patient_alias: "Patient #4821".to_string(),
            blood_type: BloodType::ONegative,
            urgency: Urgency::Urgent,
            hospital: "City General Hospital".to_string(),
            distance_km: 2.3,
            units_needed: 2,
            posted: "30 minutes ago".to_string(),
            note: "Emergency surgery patient".to_string(),
        },
        BloodRequest {
            id: "BR-2".to_string(),
            patient_alias: "Patient #4790".to_string(),
            blood_type: BloodType::APositive,
            urgency: Urgency::Normal,
            hospital: "St. Mary's Medical Center".to_string(),
            distance_km: 5.1,
            units_needed: 1,
            posted: "2 hours ago".to_string(),
            note: "Scheduled transfusion".to_string(),
        },
        BloodRequest {
            id: "BR-3".to_string(),
            patient_alias: "Patient #4766".to_string(),
            blood_type: BloodType::BPositive,
            urgency: Urgency::Urgent,
            hospital: "Riverside Teaching Hospital".to_string(),
            distance_km: 3.8,
            units_needed: 3,
            posted: "1 hour ago".to_string(),
            note: "Postpartum hemorrhage".to_string(),
        },
        BloodRequest {
            id: "BR-4".to_string(),
            patient_alias: "Patient #4733".to_string(),
            blood_type: BloodType::ABPositive,
            urgency: Urgency::Normal,
            hospital: "Northside Community Hospital".to_string(),
            distance_km: 7.4,
            units_needed: 1,
            posted: "5 hours ago".to_string(),
            note: "Oncology support".to_string(),
        },
    ]
}

pub fn sample_centers() -> Vec<DonationCenter> {
    vec![
        DonationCenter {
            id: "DC-1".to_string(),
            name: "Central Blood Bank".to_string(),
            address: "14 Harbor Road".to_string(),
            distance_km: 1.9,
            open_now: true,
        },
        DonationCenter {
            id: "DC-2".to_string(),
            name: "City General Donor Suite".to_string(),
            address: "2 Hospital Drive".to_string(),
            distance_km: 2.3,
            open_now: true,
        },
        DonationCenter {
            id: "DC-3".to_string(),
            name: "Mobile Drive - Market Square".to_string(),
            address: "Market Square".to_string(),
            distance_km: 4.6,
            open_now: false,
        },
    ]
}

pub fn sample_history() -> Vec<DonationRecord> {
    vec![
        DonationRecord {
            id: "DN-1".to_string(),
            date: "Jun 10, 2025".to_string(),
            center: "Central Blood Bank".to_string(),
            blood_type: BloodType::OPositive,
            units: 1,
        },
        DonationRecord {
            id: "DN-2".to_string(),
            date: "Mar 2, 2025".to_string(),
            center: "City General Donor Suite".to_string(),
            blood_type: BloodType::OPositive,
            units: 1,
        },
        DonationRecord {
            id: "DN-3".to_string(),
            date: "Dec 14, 2024".to_string(),
            center: "Central Blood Bank".to_string(),
            blood_type: BloodType::OPositive,
            units: 2,
        },
    ]
}

// ==================== TESTS ====================
