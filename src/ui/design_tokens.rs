// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the teleprompter window.
//!
//! Colors are named after the role they play on screen rather than a hue
//! scale: the prompter surface, the three control families (file actions,
//! play, reset) and the neutrals the chrome is drawn with. Styles in
//! [`crate::ui::styles`] and the views read from here only.
//!
//! ```
//! use teleprompter::ui::design_tokens::{palette, spacing};
//!
//! assert_eq!(palette::PROMPTER_BACKGROUND, iced::Color::BLACK);
//! assert!(spacing::MD > spacing::SM);
//! ```

use iced::Color;

// ============================================================================
// Palette
// ============================================================================

pub mod palette {
    use super::Color;

    /// The script is always read white on black.
    pub const PROMPTER_BACKGROUND: Color = Color::BLACK;
    pub const PROMPTER_TEXT: Color = Color::WHITE;

    /// Save and load.
    pub const ACTION: Color = Color::from_rgb8(0x4d, 0x99, 0xe6);
    pub const ACTION_HOVER: Color = Color::from_rgb8(0x66, 0xb3, 0xff);

    /// Play/pause, and success toasts.
    pub const PLAY: Color = Color::from_rgb8(0x43, 0xb3, 0x67);
    pub const PLAY_HOVER: Color = Color::from_rgb8(0x54, 0xc7, 0x78);

    /// Reset, and error toasts.
    pub const RESET: Color = Color::from_rgb8(0xe5, 0x39, 0x35);
    pub const RESET_HOVER: Color = Color::from_rgb8(0xf2, 0x59, 0x54);

    pub const WARNING: Color = Color::from_rgb8(0xf1, 0xa6, 0x20);

    /// Text on light backgrounds.
    pub const INK: Color = Color::from_rgb8(0x1a, 0x1a, 0x1a);
    /// Text on filled buttons and dark backgrounds.
    pub const PAPER: Color = Color::WHITE;
    /// Disabled controls.
    pub const MUTED: Color = Color::from_rgb8(0x66, 0x66, 0x66);
    /// Hover wash for borderless buttons.
    pub const WASH_LIGHT: Color = Color::from_rgb8(0xbf, 0xbf, 0xbf);
    pub const WASH_DARK: Color = Color::from_rgb8(0x4d, 0x4d, 0x4d);
}

// ============================================================================
// Opacity
// ============================================================================

pub mod opacity {
    /// Control panels over the window background.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing (4px steps)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Diameter of the round play/pause button.
    pub const PLAY_BUTTON: f32 = 48.0;

    /// Width reserved for the speed and font size readouts so the controls
    /// row does not jump while values change.
    pub const VALUE_LABEL_WIDTH: f32 = 48.0;

    pub const TOAST_WIDTH: f32 = 320.0;

    /// Colored outline of a toast.
    pub const TOAST_ACCENT: f32 = 2.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    //! Sizes for the window chrome. The prompter text itself uses the
    //! user-controlled font size.

    /// Application name in the header.
    pub const TITLE_MD: f32 = 24.0;
    /// Panel headings and the play glyph.
    pub const TITLE_SM: f32 = 20.0;
    /// Editor text and stepper glyphs.
    pub const BODY_LG: f32 = 16.0;
    /// Labels and toasts.
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    /// Pill or circle.
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Resting filled button.
    pub const SM: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Hovered button and toasts.
    pub const MD: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);

    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);
    assert!(sizing::PLAY_BUTTON > typography::TITLE_SM);
};
