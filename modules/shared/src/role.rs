//! User roles the shell projects modules for.

use serde::{Deserialize, Serialize};

/// The three user roles of the application.
///
/// Role never gates behavior inside a module; it selects which dataset or
/// metric set a role-conditional view projects (home dashboard, analytics).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    Patient,
    Doctor,
    HospitalAdmin,
}

impl Role {
    /// Human label used by view models.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Patient => "Patient",
            Role::Doctor => "Doctor",
            Role::HospitalAdmin => "Hospital Admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "patient" => Ok(Role::Patient),
            "doctor" => Ok(Role::Doctor),
            "admin" | "hospital" | "hospital-admin" => Ok(Role::HospitalAdmin),
            other => Err(format!(
                "Unknown role '{}' (expected patient, doctor, or hospital-admin)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod role_tests {
    use super::*;

    #[test]
    fn test_parse_accepts_admin_aliases() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::HospitalAdmin);
        assert_eq!("hospital".parse::<Role>().unwrap(), Role::HospitalAdmin);
        assert_eq!(
            "Hospital-Admin".parse::<Role>().unwrap(),
            Role::HospitalAdmin
        );
    }

    #[test]
    fn test_parse_rejects_unknown_role() {
        assert!("nurse".parse::<Role>().is_err());
    }
}
