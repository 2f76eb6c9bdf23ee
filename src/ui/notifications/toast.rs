// SPDX-License-Identifier: MPL-2.0
//! Toast cards stacked in the bottom-right corner of the window.

use super::manager::{Manager, Message, ToastId};
use super::notification::{Notification, Severity};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Column, Container, Row, Space, Text};
use iced::{Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// Renders every visible toast, or nothing when there are none.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        if manager.visible_count() == 0 {
            return Space::new().into();
        }

        let cards = manager
            .visible()
            .map(|(id, notification)| Self::card(id, notification, i18n));

        Container::new(
            Column::with_children(cards)
                .spacing(spacing::XS)
                .align_x(Horizontal::Right),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(spacing::MD)
        .into()
    }

    fn card<'a>(id: ToastId, notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent = accent(notification.severity());

        let args: Vec<(&str, &str)> = notification
            .message_args()
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();
        let message = i18n.tr_with_args(notification.message_key(), &args);

        let glyph = Text::new(glyph(notification.severity()))
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let dismiss = button(Text::new("\u{2715}").size(typography::BODY))
            .on_press(Message::Dismiss(id))
            .padding(spacing::XXS)
            .style(styles::button::stepper);

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(glyph)
            .push(
                Text::new(message)
                    .size(typography::BODY)
                    .width(Length::Fill),
            )
            .push(dismiss);

        Container::new(row)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| styles::container::toast(theme, accent))
            .into()
    }
}

fn accent(severity: Severity) -> Color {
    match severity {
        Severity::Success => palette::PLAY,
        Severity::Warning => palette::WARNING,
        Severity::Error => palette::RESET,
    }
}

fn glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "\u{2713}",
        Severity::Warning | Severity::Error => "\u{26A0}",
    }
}
