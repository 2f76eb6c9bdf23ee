// SPDX-License-Identifier: MPL-2.0
//! Auto-scroll control loop.
//!
//! - [`controller`] - `ScrollController`, the Idle/Scrolling state machine
//! - [`cadence`] - the cancellable 50 ms tick subscription

pub mod cadence;
pub mod controller;

pub use cadence::{TickEpoch, CADENCE};
pub use controller::{ScrollController, Transition};
