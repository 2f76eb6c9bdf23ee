// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled button in the given color, lightened on hover.
fn filled(base: Color, hover: Color, border_radius: f32, status: button::Status) -> button::Style {
    let (background, shadow) = match status {
        button::Status::Hovered => (hover, shadow::MD),
        button::Status::Disabled => (palette::MUTED, shadow::NONE),
        button::Status::Active | button::Status::Pressed => (base, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::PAPER,
        border: Border {
            color: base,
            width: 1.0,
            radius: border_radius.into(),
        },
        shadow,
        snap: true,
    }
}

/// Primary action (save, load).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::ACTION, palette::ACTION_HOVER, radius::SM, status)
}

/// Round play/pause button.
pub fn play(_theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::PLAY, palette::PLAY_HOVER, radius::FULL, status)
}

/// Destructive action (reset).
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::RESET, palette::RESET_HOVER, radius::SM, status)
}

/// Borderless button: the control group steppers and the toast dismiss.
pub fn stepper(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let text_color = if is_light { palette::INK } else { palette::PAPER };

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(if is_light {
            palette::WASH_LIGHT
        } else {
            palette::WASH_DARK
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: if matches!(status, button::Status::Disabled) {
            palette::MUTED
        } else {
            text_color
        },
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_differs_from_active() {
        let active = primary(&Theme::Dark, button::Status::Active);
        let hovered = primary(&Theme::Dark, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
    }

    #[test]
    fn play_button_is_round() {
        let style = play(&Theme::Dark, button::Status::Active);
        assert!(style.border.radius.top_left >= radius::FULL);
    }

    #[test]
    fn stepper_is_transparent_until_hovered() {
        assert!(stepper(&Theme::Light, button::Status::Active).background.is_none());
        assert!(stepper(&Theme::Light, button::Status::Hovered).background.is_some());
    }
}
