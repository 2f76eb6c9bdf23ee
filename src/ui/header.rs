// SPDX-License-Identifier: MPL-2.0
//! Header bar with the application title, the script file actions and the
//! theme switch.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, tooltip, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// A file dialog or file operation is in flight; file actions are disabled.
    pub dialog_pending: bool,
    /// The effective theme is dark.
    pub is_dark: bool,
}

/// Messages emitted by the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    SaveRequested,
    LoadRequested,
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Export,
    Import,
    ToggleTheme,
}

/// Process a header message and return the corresponding event.
///
/// File requests are swallowed while another dialog is pending so a second
/// click cannot open a second dialog.
#[must_use]
pub fn update(message: Message, dialog_pending: bool) -> Event {
    match message {
        Message::SaveRequested if dialog_pending => Event::None,
        Message::LoadRequested if dialog_pending => Event::None,
        Message::SaveRequested => Event::Export,
        Message::LoadRequested => Event::Import,
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("header-title")).size(typography::TITLE_MD);

    let save = file_button(
        ctx.i18n.tr("header-save"),
        ctx.i18n.tr("header-save-tooltip"),
        (!ctx.dialog_pending).then_some(Message::SaveRequested),
    );
    let load = file_button(
        ctx.i18n.tr("header-load"),
        ctx.i18n.tr("header-load-tooltip"),
        (!ctx.dialog_pending).then_some(Message::LoadRequested),
    );

    let theme_label = if ctx.is_dark {
        ctx.i18n.tr("header-theme-light")
    } else {
        ctx.i18n.tr("header-theme-dark")
    };
    let theme_button = tooltip(
        button(Text::new(theme_label))
            .on_press(Message::ToggleTheme)
            .padding(spacing::XS)
            .style(styles::button::stepper),
        Text::new(ctx.i18n.tr("header-theme-tooltip")),
        tooltip::Position::Bottom,
    )
    .gap(4);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(save)
        .push(load)
        .push(theme_button);

    Container::new(row)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

fn file_button<'a>(
    label: String,
    hint: String,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    tooltip(
        button(Text::new(label))
            .on_press_maybe(on_press)
            .padding(spacing::XS)
            .style(styles::button::primary),
        Text::new(hint),
        tooltip::Position::Bottom,
    )
    .gap(4)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_requests_map_to_events() {
        assert_eq!(update(Message::SaveRequested, false), Event::Export);
        assert_eq!(update(Message::LoadRequested, false), Event::Import);
        assert_eq!(update(Message::ToggleTheme, false), Event::ToggleTheme);
    }

    #[test]
    fn file_requests_ignored_while_dialog_pending() {
        assert_eq!(update(Message::SaveRequested, true), Event::None);
        assert_eq!(update(Message::LoadRequested, true), Event::None);
        assert_eq!(update(Message::ToggleTheme, true), Event::ToggleTheme);
    }

    #[test]
    fn header_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            dialog_pending: false,
            is_dark: true,
        });
        let _element = view(ViewContext {
            i18n: &i18n,
            dialog_pending: true,
            is_dark: false,
        });
    }
}
