// SPDX-License-Identifier: MPL-2.0
//! Scroll loop state machine.
//!
//! `ScrollController` owns the enabled/speed/font-size triple and the scroll
//! position. It never talks to a timer directly: while it is scrolling it
//! exposes the [`TickEpoch`] of the cadence that should be running, and only
//! ticks carrying that epoch advance the position. Every transition into or
//! out of the scrolling phase issues a new epoch, so ticks from a cancelled
//! cadence are always ignored.

use super::cadence::TickEpoch;
use crate::domain::prompter::{FontSize, PromptPhase, ScrollPosition, ScrollSpeed, ScrollState};
use tracing::debug;

/// Outcome of an enabled-flag change, used by callers that log or react to
/// the cadence being scheduled or cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Idle → Scrolling, a cadence with this epoch must run.
    Started(TickEpoch),
    /// Scrolling → Idle, the previous cadence is cancelled.
    Stopped,
    /// The flag already had the requested value.
    Unchanged,
}

/// Owns the scroll state and advances the position on cadence ticks.
#[derive(Debug, Clone, Default)]
pub struct ScrollController {
    state: ScrollState,
    position: ScrollPosition,
    /// Furthest offset the surface can show, once it has reported one.
    max_position: Option<ScrollPosition>,
    epoch: TickEpoch,
}

impl ScrollController {
    /// Creates an idle controller at the top of the script.
    #[must_use]
    pub fn new(speed: ScrollSpeed, font_size: FontSize) -> Self {
        Self {
            state: ScrollState::new(speed, font_size),
            position: ScrollPosition::TOP,
            max_position: None,
            epoch: TickEpoch::default(),
        }
    }

    /// Sets the enabled flag, scheduling or cancelling the cadence.
    pub fn set_enabled(&mut self, value: bool) -> Transition {
        if self.state.enabled == value {
            return Transition::Unchanged;
        }

        self.state.enabled = value;
        self.epoch = self.epoch.next();

        if value {
            debug!(epoch = self.epoch.value(), "scrolling started");
            Transition::Started(self.epoch)
        } else {
            debug!(position = self.position.value(), "scrolling paused");
            Transition::Stopped
        }
    }

    /// Flips the enabled flag (play/pause).
    pub fn toggle(&mut self) -> Transition {
        self.set_enabled(!self.state.enabled)
    }

    /// Changes the speed by `delta`, never going below 1.
    pub fn adjust_speed(&mut self, delta: f32) {
        self.state.speed = self.state.speed.adjusted(delta);
    }

    /// Changes the font size by `delta`, clamped to 16–72.
    pub fn adjust_font_size(&mut self, delta: i32) {
        self.state.font_size = self.state.font_size.adjusted(delta);
    }

    /// Rewinds to the top and stops scrolling.
    pub fn reset(&mut self) {
        self.set_enabled(false);
        self.position = ScrollPosition::TOP;
    }

    /// Advances the position by one step if `epoch` belongs to the running
    /// cadence, stopping at the end of the content once that is known.
    ///
    /// Returns the new position for the surface to apply, or `None` when the
    /// tick is stale or the controller is idle.
    pub fn tick(&mut self, epoch: TickEpoch) -> Option<ScrollPosition> {
        if !self.state.enabled || epoch != self.epoch {
            return None;
        }
        let next = self.position.advanced(self.state.speed);
        self.position = match self.max_position {
            Some(max) => next.at_most(max),
            None => next,
        };
        Some(self.position)
    }

    /// Records the offset actually shown by the surface.
    ///
    /// The surface clamps at the end of the content and lets the user scroll
    /// by hand, so its offset is authoritative.
    pub fn sync_position(&mut self, offset: f32) {
        self.position = ScrollPosition::new(offset);
    }

    /// Caps future ticks at `max_offset`, the end of the scrollable content.
    ///
    /// A surface whose content fits reports a limit of zero.
    pub fn set_max_position(&mut self, max_offset: f32) {
        let max = ScrollPosition::new(max_offset);
        self.max_position = Some(max);
        self.position = self.position.at_most(max);
    }

    /// Epoch of the cadence that should be running, if any.
    #[must_use]
    pub fn cadence_epoch(&self) -> Option<TickEpoch> {
        self.state.enabled.then_some(self.epoch)
    }

    #[must_use]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    #[must_use]
    pub fn phase(&self) -> PromptPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    #[must_use]
    pub fn speed(&self) -> ScrollSpeed {
        self.state.speed
    }

    #[must_use]
    pub fn font_size(&self) -> FontSize {
        self.state.font_size
    }

    #[must_use]
    pub fn position(&self) -> ScrollPosition {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn run_ticks(controller: &mut ScrollController, count: usize) {
        for _ in 0..count {
            if let Some(epoch) = controller.cadence_epoch() {
                controller.tick(epoch);
            }
        }
    }

    #[test]
    fn starts_idle_with_defaults() {
        let controller = ScrollController::default();
        assert_eq!(controller.phase(), PromptPhase::Idle);
        assert!((controller.speed().value() - 2.0).abs() < f32::EPSILON);
        assert_eq!(controller.font_size().value(), 32);
        assert!(controller.position().is_top());
        assert!(controller.cadence_epoch().is_none());
    }

    proptest! {
        #[test]
        fn speed_never_drops_below_one(
            deltas in prop::collection::vec(-1000.0f32..1000.0, 0..64),
        ) {
            let mut controller = ScrollController::default();
            for delta in deltas {
                controller.adjust_speed(delta);
                prop_assert!(controller.speed().value() >= 1.0);
            }
        }

        #[test]
        fn font_size_stays_in_range(
            deltas in prop::collection::vec(any::<i32>(), 0..64),
        ) {
            let mut controller = ScrollController::default();
            for delta in deltas {
                controller.adjust_font_size(delta);
                let size = controller.font_size().value();
                prop_assert!((16..=72).contains(&size), "size {} out of range", size);
            }
        }

        #[test]
        fn ticks_never_pass_the_end(
            max_offset in 0.0f32..500.0,
            speed in 1.0f32..40.0,
            ticks in 0usize..200,
        ) {
            let mut controller = ScrollController::default();
            controller.set_max_position(max_offset);
            controller.adjust_speed(speed - controller.speed().value());
            controller.set_enabled(true);
            run_ticks(&mut controller, ticks);
            prop_assert!(controller.position().value() <= max_offset);
        }
    }

    #[test]
    fn speed_floor_survives_infinite_delta() {
        let mut controller = ScrollController::default();
        controller.adjust_speed(f32::NEG_INFINITY);
        assert!(controller.speed().value() >= 1.0);
    }

    #[test]
    fn font_size_floor_clamp_from_default() {
        let mut controller = ScrollController::default();
        controller.adjust_font_size(-100);
        assert_eq!(controller.font_size().value(), 16);
    }

    #[test]
    fn enable_then_disable_does_not_advance() {
        let mut controller = ScrollController::default();
        let Transition::Started(epoch) = controller.set_enabled(true) else {
            panic!("expected cadence to start");
        };
        controller.set_enabled(false);

        assert!(controller.tick(epoch).is_none());
        assert!(controller.position().is_top());
    }

    #[test]
    fn enabling_twice_keeps_single_cadence() {
        let mut controller = ScrollController::default();
        controller.set_enabled(true);
        let first = controller.cadence_epoch();
        assert_eq!(controller.set_enabled(true), Transition::Unchanged);
        assert_eq!(controller.cadence_epoch(), first);
    }

    #[test]
    fn stale_tick_ignored_after_restart() {
        let mut controller = ScrollController::default();
        let Transition::Started(old) = controller.set_enabled(true) else {
            panic!("expected cadence to start");
        };
        controller.set_enabled(false);
        let Transition::Started(new) = controller.set_enabled(true) else {
            panic!("expected cadence to restart");
        };

        assert_ne!(old, new);
        assert!(controller.tick(old).is_none());
        assert!(controller.tick(new).is_some());
        assert!((controller.position().value() - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn tick_while_idle_is_noop() {
        let mut controller = ScrollController::default();
        assert!(controller.tick(TickEpoch::default()).is_none());
        assert!(controller.position().is_top());
    }

    #[test]
    fn reset_is_idempotent_from_any_state() {
        let mut controller = ScrollController::default();
        controller.set_enabled(true);
        run_ticks(&mut controller, 5);
        assert!(!controller.position().is_top());

        controller.reset();
        assert!(!controller.is_enabled());
        assert!(controller.position().is_top());

        controller.reset();
        assert!(!controller.is_enabled());
        assert!(controller.position().is_top());
    }

    #[test]
    fn reset_cancels_pending_tick() {
        let mut controller = ScrollController::default();
        let Transition::Started(epoch) = controller.set_enabled(true) else {
            panic!("expected cadence to start");
        };
        controller.reset();
        assert!(controller.tick(epoch).is_none());
        assert!(controller.cadence_epoch().is_none());
    }

    #[test]
    fn clamped_scenario() {
        let mut controller = ScrollController::default();

        controller.adjust_speed(-5.0);
        assert!((controller.speed().value() - 1.0).abs() < f32::EPSILON);

        controller.adjust_font_size(50);
        assert_eq!(controller.font_size().value(), 72);

        controller.set_enabled(true);
        run_ticks(&mut controller, 7);
        assert!((controller.position().value() - 7.0).abs() < f32::EPSILON);

        controller.reset();
        assert!(controller.position().is_top());
        assert!(!controller.is_enabled());
    }

    #[test]
    fn speed_change_applies_to_next_tick() {
        let mut controller = ScrollController::default();
        controller.set_enabled(true);
        run_ticks(&mut controller, 2);
        controller.adjust_speed(0.5);
        run_ticks(&mut controller, 2);
        assert!((controller.position().value() - 9.0).abs() < f32::EPSILON);
    }

    #[test]
    fn sync_position_follows_surface() {
        let mut controller = ScrollController::default();
        controller.sync_position(120.0);
        assert!((controller.position().value() - 120.0).abs() < f32::EPSILON);
        controller.sync_position(-3.0);
        assert!(controller.position().is_top());
        controller.sync_position(f32::NAN);
        assert!(controller.position().is_top());
    }

    #[test]
    fn ticks_stop_at_end_of_content() {
        let mut controller = ScrollController::default();
        controller.set_max_position(5.0);
        controller.set_enabled(true);
        run_ticks(&mut controller, 10);
        assert!((controller.position().value() - 5.0).abs() < f32::EPSILON);

        controller.set_max_position(50.0);
        run_ticks(&mut controller, 1);
        assert!((controller.position().value() - 7.0).abs() < f32::EPSILON);
    }

    #[test]
    fn shrinking_content_pulls_position_back() {
        let mut controller = ScrollController::default();
        controller.sync_position(300.0);
        controller.set_max_position(120.0);
        assert!((controller.position().value() - 120.0).abs() < f32::EPSILON);
        controller.set_max_position(0.0);
        assert!(controller.position().is_top());
    }

    #[test]
    fn toggle_flips_phase() {
        let mut controller = ScrollController::default();
        assert!(matches!(controller.toggle(), Transition::Started(_)));
        assert_eq!(controller.phase(), PromptPhase::Scrolling);
        assert_eq!(controller.toggle(), Transition::Stopped);
        assert_eq!(controller.phase(), PromptPhase::Idle);
    }
}
