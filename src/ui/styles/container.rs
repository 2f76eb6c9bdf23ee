// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the control groups.
///
/// The color is derived from the active Iced `Theme` background so panels
/// stay readable in both light and dark modes without hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Prompter surface: white text on black, regardless of the theme, the
/// way a hardware prompter reads.
pub fn prompter(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PROMPTER_BACKGROUND)),
        text_color: Some(palette::PROMPTER_TEXT),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Toast card outlined in its severity color.
pub fn toast(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.extended_palette().background.base.color)),
        text_color: Some(theme.palette().text),
        border: Border {
            color: accent,
            width: sizing::TOAST_ACCENT,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
