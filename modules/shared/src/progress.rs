//! Bounded progress pairs and percent displays.

use serde::{Deserialize, Serialize};

use crate::error::HealthError;

/// Clamped percent display for a (current, target) pair.
///
/// Rounds to the nearest whole percent and clamps to 100, so an exceeded
/// target reads as full rather than overflowing the bar. A zero target is
/// trivially met (`current >= target` holds for any current) and reads as
/// 100; the division is never taken.
pub fn percent(current: u32, target: u32) -> u8 {
    if target == 0 {
        return 100;
    }
    let raw = (100.0 * f64::from(current) / f64::from(target)).round();
    if raw >= 100.0 {
        100
    } else {
        raw as u8
    }
}

/// A (current, target) pair with `0 <= current <= target` enforced at
/// construction and on every update.
///
/// Goals use this instead of clamping at call sites; completion is always
/// derived, never stored alongside.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Progress {
    current: u32,
    target: u32,
}

impl Progress {
    pub fn new(current: u32, target: u32) -> Result<Self, HealthError> {
        if current > target {
            return Err(HealthError::InvalidProgress { current, target });
        }
        Ok(Self { current, target })
    }

    /// Fresh pair at zero against `target`.
    pub fn start(target: u32) -> Self {
        Self {
            current: 0,
            target,
        }
    }

    /// Pair with `current` clamped into the target, for trusted seed data.
    pub fn clamped(current: u32, target: u32) -> Self {
        Self {
            current: current.min(target),
            target,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// Advances by `delta`, clamped to the target.
    pub fn advance(&mut self, delta: u32) {
        self.current = self.current.saturating_add(delta).min(self.target);
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.target
    }

    pub fn percent(&self) -> u8 {
        percent(self.current, self.target)
    }
}


/// Property-based tests using proptest
#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The invariant holds after any advance
        #[test]
        fn advance_preserves_the_bound(
            target in 0u32..10_000,
            start in 0u32..10_000,
            deltas in proptest::collection::vec(0u32..500, 1..30)
        ) {
            let start = start.min(target);
            let mut goal = Progress::new(start, target).unwrap();

            for delta in deltas {
                goal.advance(delta);
                prop_assert!(
                    goal.current() <= goal.target(),
                    "current {} escaped target {}",
                    goal.current(), goal.target()
                );
            }
        }

        /// Advancing never moves current backwards
        #[test]
        fn advance_is_monotone(
            target in 1u32..10_000,
            deltas in proptest::collection::vec(0u32..500, 1..30)
        ) {
            let mut goal = Progress::start(target);
            let mut prev = goal.current();

            for delta in deltas {
                goal.advance(delta);
                prop_assert!(goal.current() >= prev);
                prev = goal.current();
            }
        }

        /// Completion agrees with the pair, percent stays within the display range
        #[test]
        fn percent_and_completion_agree(current in 0u32..20_000, target in 0u32..10_000) {
            let display = percent(current, target);
            prop_assert!(display <= 100);
            if current >= target {
                prop_assert_eq!(display, 100);
            }
        }
    }
}
