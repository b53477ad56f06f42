//! Shell capability port.
//!
//! The parent shell hands each module one object implementing `ShellPort`.
//! Every method has a no-op default body, so a shell that routes nothing is
//! already the defensive no-op the modules require; no presence checks exist
//! anywhere downstream.

use serde::{Deserialize, Serialize};

/// Cross-module navigation targets a shell can route.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Destination {
    Home,
    Notifications,
    BloodDonation,
    MedicalRecords,
    Engagement,
    Analytics,
    HealthTips,
    /// A shell-defined sub-screen addressed by string key.
    Screen(String),
}

/// Capabilities a parent shell supplies to a module.
pub trait ShellPort {
    /// Pop/hide the active module.
    fn go_back(&self) {}

    /// Navigate to another module or a named sub-screen.
    fn open(&self, destination: Destination) {
        let _ = destination;
    }

    /// Surface a transient notice to the user.
    fn announce(&self, message: &str) {
        let _ = message;
    }
}

/// Shell that ignores every capability call.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopShell;

impl ShellPort for NoopShell {}

/// One captured port invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellEvent {
    Back,
    Open(Destination),
    Announce(String),
}

/// Shell that records every capability call, for assertions.
///
/// Interior mutability keeps the trait's `&self` receivers; the whole model
/// is single threaded, so a `RefCell` suffices.
#[derive(Debug, Default)]
pub struct RecordingShell {
    events: std::cell::RefCell<Vec<ShellEvent>>,
}

impl RecordingShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ShellEvent> {
        self.events.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl ShellPort for RecordingShell {
    fn go_back(&self) {
        self.events.borrow_mut().push(ShellEvent::Back);
    }

    fn open(&self, destination: Destination) {
        self.events.borrow_mut().push(ShellEvent::Open(destination));
    }

    fn announce(&self, message: &str) {
        self.events
            .borrow_mut()
            .push(ShellEvent::Announce(message.to_string()));
    }
}

#[cfg(test)]
mod port_tests {
    use super::*;

    #[test]
    fn test_noop_shell_ignores_every_call() {
        let shell = NoopShell;
        shell.go_back();
        shell.open(Destination::Notifications);
        shell.announce("nothing listens");
    }

    #[test]
    fn test_recording_shell_captures_calls_in_order() {
        let shell = RecordingShell::new();
        shell.open(Destination::BloodDonation);
        shell.announce("Donation scheduled");
        shell.go_back();

        assert_eq!(
            shell.events(),
            vec![
                ShellEvent::Open(Destination::BloodDonation),
                ShellEvent::Announce("Donation scheduled".to_string()),
                ShellEvent::Back,
            ]
        );
    }

    #[test]
    fn test_default_bodies_make_partial_shells_safe() {
        // A shell that only routes navigation still accepts the rest.
        struct NavOnly(std::cell::Cell<u32>);
        impl ShellPort for NavOnly {
            fn open(&self, _destination: Destination) {
                self.0.set(self.0.get() + 1);
            }
        }

        let shell = NavOnly(std::cell::Cell::new(0));
        shell.announce("dropped");
        shell.go_back();
        shell.open(Destination::Home);
        assert_eq!(shell.0.get(), 1);
    }
}
