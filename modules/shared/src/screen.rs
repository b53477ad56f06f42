//! Per-module screen state machine.
//!
//! Every feature module names its screens in one enum and drives navigation
//! through `ScreenState`. The machine is cyclic: there is no history stack,
//! "back" always returns to the module's designated main screen.

use tracing::debug;

/// A module's screen enum.
///
/// Implementors are plain fieldless enums; illegal screen names are
/// unrepresentable.
pub trait ScreenName: Copy + Eq + std::fmt::Debug {
    /// The list/main screen the module opens on and returns to.
    fn home() -> Self;
}

/// Current screen plus the optionally selected record id.
///
/// Selections are stored as record ids and resolved back to records by the
/// owning module when a detail view is built, so the machine never aliases
/// the mutable dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenState<S: ScreenName> {
    current: S,
    selection: Option<String>,
}

impl<S: ScreenName> ScreenState<S> {
    /// Starts on the module's main screen with no selection.
    pub fn new() -> Self {
        Self {
            current: S::home(),
            selection: None,
        }
    }

    pub fn current(&self) -> S {
        self.current
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn is_home(&self) -> bool {
        self.current == S::home()
    }

    /// Moves to `screen`, keeping any selection.
    pub fn navigate(&mut self, screen: S) {
        debug!(from = ?self.current, to = ?screen, "navigate");
        self.current = screen;
    }

    /// Moves to `screen` with `id` as the selected record.
    pub fn open(&mut self, screen: S, id: impl Into<String>) {
        let id = id.into();
        debug!(from = ?self.current, to = ?screen, selection = %id, "open");
        self.current = screen;
        self.selection = Some(id);
    }

    /// Returns to the main screen and clears the selection.
    pub fn back_home(&mut self) {
        debug!(from = ?self.current, "back to home screen");
        self.current = S::home();
        self.selection = None;
    }
}

impl<S: ScreenName> Default for ScreenState<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod screen_tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum DemoScreen {
        List,
        Details,
        History,
    }

    impl ScreenName for DemoScreen {
        fn home() -> Self {
            DemoScreen::List
        }
    }

    #[test]
    fn test_initial_state_is_home_with_no_selection() {
        let state: ScreenState<DemoScreen> = ScreenState::new();
        assert_eq!(state.current(), DemoScreen::List);
        assert_eq!(state.selection(), None);
        assert!(state.is_home());
    }

    #[test]
    fn test_open_stores_the_selected_id() {
        let mut state: ScreenState<DemoScreen> = ScreenState::new();
        state.open(DemoScreen::Details, "REQ-2");
        assert_eq!(state.current(), DemoScreen::Details);
        assert_eq!(state.selection(), Some("REQ-2"));
    }

    #[test]
    fn test_navigate_keeps_the_selection() {
        let mut state: ScreenState<DemoScreen> = ScreenState::new();
        state.open(DemoScreen::Details, "REQ-2");
        state.navigate(DemoScreen::History);
        assert_eq!(state.current(), DemoScreen::History);
        assert_eq!(state.selection(), Some("REQ-2"));
    }

    #[test]
    fn test_back_home_restores_the_initial_state() {
        let mut state: ScreenState<DemoScreen> = ScreenState::new();
        state.open(DemoScreen::Details, "REQ-3");
        state.back_home();
        assert_eq!(state, ScreenState::new());
    }
}
