// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Header on top, editor and prompter side by side, controls at the bottom,
//! toasts stacked over everything.

use super::Message;
use crate::domain::prompter::ScrollState;
use crate::i18n::fluent::I18n;
use crate::script::TextStore;
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::{self, Toast};
use crate::ui::{controls, header, preview, script_editor};
use iced::widget::{text_editor, Column, Container, Row, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub script: &'a TextStore,
    pub editor: &'a text_editor::Content,
    pub state: ScrollState,
    pub dialog_pending: bool,
    pub is_dark_theme: bool,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = header::view(header::ViewContext {
        i18n: ctx.i18n,
        dialog_pending: ctx.dialog_pending,
        is_dark: ctx.is_dark_theme,
    })
    .map(Message::Header);

    let editor = script_editor::view(script_editor::ViewContext {
        i18n: ctx.i18n,
        content: ctx.editor,
    })
    .map(Message::Editor);

    let surface = preview::view(preview::ViewContext {
        i18n: ctx.i18n,
        script: ctx.script,
        font_size: ctx.state.font_size,
    })
    .map(Message::Preview);

    let panes = Row::new()
        .spacing(spacing::SM)
        .height(Length::Fill)
        .push(Container::new(editor).width(Length::FillPortion(1)))
        .push(Container::new(surface).width(Length::FillPortion(1)));

    let controls = controls::view(controls::ViewContext {
        i18n: ctx.i18n,
        state: ctx.state,
    })
    .map(Message::Controls);

    let main = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header)
        .push(panes)
        .push(controls);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(main)
        .push(toasts)
        .into()
}
