// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! The prompter bounds themselves live with the domain newtypes; this module
//! re-exposes them under configuration names so `settings.toml` handling has
//! a single place to look.

use crate::domain::prompter::{font_bounds, speed_bounds};

// ==========================================================================
// Speed Defaults
// ==========================================================================

/// Default scroll speed (pixels per tick).
pub const DEFAULT_SPEED: f32 = speed_bounds::DEFAULT;

/// Minimum scroll speed.
pub const MIN_SPEED: f32 = speed_bounds::MIN;

/// Default increment of the speed buttons.
pub const DEFAULT_SPEED_STEP: f32 = speed_bounds::DEFAULT_STEP;

/// Smallest configurable speed increment.
pub const MIN_SPEED_STEP: f32 = speed_bounds::MIN_STEP;

// ==========================================================================
// Font Size Defaults
// ==========================================================================

/// Default preview font size in pixels.
pub const DEFAULT_FONT_SIZE: u16 = font_bounds::DEFAULT;

/// Minimum preview font size.
pub const MIN_FONT_SIZE: u16 = font_bounds::MIN;

/// Maximum preview font size.
pub const MAX_FONT_SIZE: u16 = font_bounds::MAX;

/// Default increment of the font size buttons.
pub const DEFAULT_FONT_SIZE_STEP: u16 = font_bounds::DEFAULT_STEP;

/// Smallest configurable font size increment.
pub const MIN_FONT_SIZE_STEP: u16 = font_bounds::MIN_STEP;

/// Largest configurable font size increment.
pub const MAX_FONT_SIZE_STEP: u16 = font_bounds::MAX_STEP;
