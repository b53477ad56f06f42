//! Shared Contracts for Lumira Health View Modules
//!
//! Every feature module is an independent screen state machine over its own
//! sample dataset. This crate holds the pieces they all build on:
//! - Role: which of the three user roles a module is projected for
//! - ScreenState: the per-module screen machine (current screen + selection)
//! - Progress: bounded (current, target) pair behind goals and progress bars
//! - Tone: the display classification token status/priority enums map to
//! - ShellPort: the capability trait a parent shell supplies (back,
//!   cross-module navigation, transient announcements)
//! - HealthError: the workspace error type
//! - schema: clinical record types shared by more than one module
//! - views: small derived-view helpers (filter, count, sum, mean)

pub mod error;
pub mod ids;
pub mod port;
pub mod progress;
pub mod role;
pub mod schema;
pub mod screen;
pub mod tone;
pub mod views;

pub use error::HealthError;
pub use port::{Destination, NoopShell, RecordingShell, ShellEvent, ShellPort};
pub use progress::{percent, Progress};
pub use role::Role;
pub use screen::{ScreenName, ScreenState};
pub use tone::Tone;
