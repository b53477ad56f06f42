//! Workspace error type.
//!
//! No module performs I/O, so every variant is a refused local operation:
//! an unknown record id, blank form input, a malformed progress pair, or a
//! status change from a state that does not allow it. Errors exist so tests
//! and the shell can observe refusals; none is ever rendered as a
//! user-facing error state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Error)]
pub enum HealthError {
    /// An action referenced an id missing from the module's dataset.
    #[error("Unknown {kind}: {id}")]
    UnknownRecord { kind: &'static str, id: String },

    /// A create-record operation received blank or whitespace-only text.
    #[error("{field} must not be blank")]
    EmptyInput { field: &'static str },

    /// A progress pair violated `0 <= current <= target`.
    #[error("Invalid progress: current {current} exceeds target {target}")]
    InvalidProgress { current: u32, target: u32 },

    /// A status change was requested from a state that does not allow it.
    #[error("Invalid status change for {kind} {id}: {detail}")]
    InvalidStatusChange {
        kind: &'static str,
        id: String,
        detail: String,
    },
}

impl HealthError {
    pub fn unknown(kind: &'static str, id: impl Into<String>) -> Self {
        HealthError::UnknownRecord {
            kind,
            id: id.into(),
        }
    }
}

/// Trimmed `value`, or `EmptyInput` when it is blank or whitespace-only.
pub fn require_text(field: &'static str, value: &str) -> Result<String, HealthError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(HealthError::EmptyInput { field });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_require_text_trims_surrounding_whitespace() {
        assert_eq!(require_text("content", "  hello  ").unwrap(), "hello");
    }

    #[test]
    fn test_require_text_refuses_whitespace_only() {
        assert_eq!(
            require_text("content", "   \t\n"),
            Err(HealthError::EmptyInput { field: "content" })
        );
    }

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = HealthError::unknown("blood request", "BR-99");
        assert_eq!(err.to_string(), "Unknown blood request: BR-99");
    }
}
