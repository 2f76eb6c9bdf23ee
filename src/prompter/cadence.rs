// SPDX-License-Identifier: MPL-2.0
//! The periodic tick driving the scroll loop.
//!
//! The cadence is an Iced time subscription keyed by a [`TickEpoch`]. Iced
//! identifies subscriptions by their hashed inputs, so a new epoch replaces
//! the running timer and returning `Subscription::none()` drops it. Each tick
//! carries the epoch it was scheduled under, which lets the controller
//! discard ticks that were already queued when the cadence was cancelled.

use iced::time::{self, Instant};
use iced::Subscription;
use std::time::Duration;

/// Interval between two scroll ticks.
pub const CADENCE: Duration = Duration::from_millis(50);

/// Identifies one scheduled cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TickEpoch(u64);

impl TickEpoch {
    /// Returns the epoch following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Builds the cadence subscription for the given epoch.
///
/// `None` means the controller is idle and no timer should exist.
pub fn subscription(epoch: Option<TickEpoch>) -> Subscription<(TickEpoch, Instant)> {
    match epoch {
        Some(epoch) => time::every(CADENCE).with(epoch),
        None => Subscription::none(),
    }
}
