// SPDX-License-Identifier: MPL-2.0
//! Script editing pane.
//!
//! The editor buffer is an Iced `text_editor::Content`; the [`TextStore`]
//! stays the canonical copy and is refreshed after every edit.

use crate::i18n::fluent::I18n;
use crate::script::TextStore;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{text_editor, Column, Container, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub content: &'a text_editor::Content,
}

#[derive(Debug, Clone)]
pub enum Message {
    Edit(text_editor::Action),
}

/// Applies an editor action, copying the edited text into the store.
///
/// Returns `true` when the script text changed.
pub fn update(message: Message, content: &mut text_editor::Content, store: &mut TextStore) -> bool {
    match message {
        Message::Edit(action) => {
            let is_edit = action.is_edit();
            content.perform(action);
            if is_edit {
                store.set_text(content.text());
            }
            is_edit
        }
    }
}

/// Builds an editor buffer holding the store's text.
#[must_use]
pub fn content_for(store: &TextStore) -> text_editor::Content {
    text_editor::Content::with_text(store.get_text())
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("editor-heading")).size(typography::TITLE_SM);

    let editor = text_editor(ctx.content)
        .placeholder(ctx.i18n.tr("editor-placeholder"))
        .on_action(Message::Edit)
        .size(typography::BODY_LG)
        .padding(spacing::SM)
        .height(Length::Fill);

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(heading)
            .push(editor),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::SM)
    .into()
}
