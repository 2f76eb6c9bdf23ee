// SPDX-License-Identifier: MPL-2.0
//! Prompter domain types.
//!
//! Value objects for the scroll loop, independent of any presentation
//! framework.

pub mod newtypes;
pub mod phase;

pub use newtypes::{font_bounds, speed_bounds, FontSize, ScrollPosition, ScrollSpeed};
pub use phase::PromptPhase;

/// The user-adjustable triple driving the scroll loop.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    /// Whether the cadence is running.
    pub enabled: bool,
    /// Pixels advanced per tick.
    pub speed: ScrollSpeed,
    /// Preview font size.
    pub font_size: FontSize,
}

impl ScrollState {
    /// Creates a paused state with the given speed and font size.
    #[must_use]
    pub fn new(speed: ScrollSpeed, font_size: FontSize) -> Self {
        Self {
            enabled: false,
            speed,
            font_size,
        }
    }

    /// Returns the phase implied by the enabled flag.
    #[must_use]
    pub fn phase(&self) -> PromptPhase {
        PromptPhase::from_enabled(self.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_matches_documented_defaults() {
        let state = ScrollState::default();
        assert!(!state.enabled);
        assert!((state.speed.value() - 2.0).abs() < f32::EPSILON);
        assert_eq!(state.font_size.value(), 32);
        assert_eq!(state.phase(), PromptPhase::Idle);
    }
}
