//! Display classification tokens.

use serde::{Deserialize, Serialize};

/// The display category a status, priority, or urgency value maps to.
///
/// Classifiers are total over their enums; open-ended vocabularies
/// (`Other(..)` variants) fall back to `Neutral`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Caution,
    Critical,
    Info,
    Neutral,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Caution => "caution",
            Tone::Critical => "critical",
            Tone::Info => "info",
            Tone::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
