// SPDX-License-Identifier: MPL-2.0
//! Prompter newtypes.
//!
//! This module provides type-safe wrappers for the values the scroll loop
//! works with, ensuring they are always within valid ranges.

// =============================================================================
// Speed Bounds
// =============================================================================

/// Scroll speed bounds (pixels per tick, floored at 1, no upper bound).
pub mod speed_bounds {
    /// Minimum scroll speed.
    pub const MIN: f32 = 1.0;
    /// Default scroll speed.
    pub const DEFAULT: f32 = 2.0;
    /// Default speed adjustment per button press.
    pub const DEFAULT_STEP: f32 = 0.5;
    /// Smallest accepted speed adjustment step.
    pub const MIN_STEP: f32 = 0.1;
}

// =============================================================================
// ScrollSpeed
// =============================================================================

/// Distance the script advances on every cadence tick, never below 1.
///
/// This newtype enforces the floor at the type level so no caller has
/// to remember to apply it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScrollSpeed(f32);

impl ScrollSpeed {
    /// Creates a new speed, flooring the value at [`speed_bounds::MIN`].
    ///
    /// Non-finite values fall back to the minimum.
    #[must_use]
    pub fn new(speed: f32) -> Self {
        if speed.is_finite() {
            Self(speed.max(speed_bounds::MIN))
        } else {
            Self(speed_bounds::MIN)
        }
    }

    /// Returns the raw speed value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns a speed adjusted by `delta`, floored at the minimum.
    #[must_use]
    pub fn adjusted(self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }

    /// Returns whether the speed sits on the floor.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= speed_bounds::MIN
    }
}

impl Default for ScrollSpeed {
    fn default() -> Self {
        Self(speed_bounds::DEFAULT)
    }
}

impl std::fmt::Display for ScrollSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

// =============================================================================
// Font Size Bounds
// =============================================================================

/// Font size bounds (16px to 72px).
pub mod font_bounds {
    /// Minimum font size in pixels.
    pub const MIN: u16 = 16;
    /// Maximum font size in pixels.
    pub const MAX: u16 = 72;
    /// Default font size in pixels.
    pub const DEFAULT: u16 = 32;
    /// Default font size adjustment per button press.
    pub const DEFAULT_STEP: u16 = 2;
    /// Smallest accepted font size step.
    pub const MIN_STEP: u16 = 1;
    /// Largest accepted font size step.
    pub const MAX_STEP: u16 = 16;
}

// =============================================================================
// FontSize
// =============================================================================

/// Preview font size in pixels, guaranteed to be within 16–72.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontSize(u16);

impl FontSize {
    /// Creates a new font size, clamping the value to the valid range.
    #[must_use]
    pub fn new(px: i32) -> Self {
        let clamped = px.clamp(i32::from(font_bounds::MIN), i32::from(font_bounds::MAX));
        // In range of u16 after the clamp above.
        Self(u16::try_from(clamped).unwrap_or(font_bounds::DEFAULT))
    }

    /// Returns the size in pixels.
    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }

    /// Returns the size as a float, for the renderer.
    #[must_use]
    pub fn as_f32(self) -> f32 {
        f32::from(self.0)
    }

    /// Returns a size adjusted by `delta`, clamped to the valid range.
    #[must_use]
    pub fn adjusted(self, delta: i32) -> Self {
        Self::new(i32::from(self.0).saturating_add(delta))
    }

    /// Returns whether the size is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= font_bounds::MIN
    }

    /// Returns whether the size is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= font_bounds::MAX
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(font_bounds::DEFAULT)
    }
}

// =============================================================================
// ScrollPosition
// =============================================================================

/// Vertical offset into the rendered script, in pixels. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ScrollPosition(f32);

impl ScrollPosition {
    /// The top of the script.
    pub const TOP: Self = Self(0.0);

    /// Creates a position, mapping negative and non-finite offsets to zero.
    #[must_use]
    pub fn new(offset: f32) -> Self {
        if offset.is_finite() && offset > 0.0 {
            Self(offset)
        } else {
            Self::TOP
        }
    }

    /// Returns the offset in pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the position moved forward by one tick at `speed`.
    #[must_use]
    pub fn advanced(self, speed: ScrollSpeed) -> Self {
        Self::new(self.0 + speed.value())
    }

    /// Returns the position capped at `max`.
    #[must_use]
    pub fn at_most(self, max: Self) -> Self {
        if self.0 > max.0 {
            max
        } else {
            self
        }
    }

    /// Returns true at the top of the script.
    #[must_use]
    pub fn is_top(self) -> bool {
        self.0 <= 0.0
    }
}

// =============================================================================
// Tests
// =============================================================================
