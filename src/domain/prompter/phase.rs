// SPDX-License-Identifier: MPL-2.0
//! Prompter phase state machine.
//!
//! This module defines the two phases of the scroll loop.

/// Whether the script is currently being scrolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptPhase {
    /// Scrolling is paused and no cadence is scheduled.
    #[default]
    Idle,
    /// The cadence is scheduled and every tick advances the position.
    Scrolling,
}

impl PromptPhase {
    /// Returns the phase matching an enabled flag.
    #[must_use]
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Self::Scrolling
        } else {
            Self::Idle
        }
    }

    /// Returns true while scrolling.
    #[must_use]
    pub fn is_scrolling(self) -> bool {
        matches!(self, Self::Scrolling)
    }

    /// Returns true while idle.
    #[must_use]
    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(PromptPhase::default(), PromptPhase::Idle);
    }

    #[test]
    fn test_from_enabled() {
        assert_eq!(PromptPhase::from_enabled(true), PromptPhase::Scrolling);
        assert_eq!(PromptPhase::from_enabled(false), PromptPhase::Idle);
    }

    #[test]
    fn test_state_checks() {
        assert!(PromptPhase::Scrolling.is_scrolling());
        assert!(!PromptPhase::Idle.is_scrolling());
        assert!(PromptPhase::Idle.is_idle());
        assert!(!PromptPhase::Scrolling.is_idle());
    }
}
