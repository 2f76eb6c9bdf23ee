// SPDX-License-Identifier: MPL-2.0
//! Prompter surface: the script rendered large, centered and white on black
//! inside a scrollable whose offset the scroll controller drives.

use crate::domain::prompter::{FontSize, ScrollPosition, ScrollSpeed};
use crate::i18n::fluent::I18n;
use crate::script::TextStore;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::scrollable::{AbsoluteOffset, Viewport};
use iced::widget::{operation, Column, Container, Id, Scrollable, Space, Text};
use iced::{Element, Length, Task};

/// Widget id of the prompter scrollable.
pub const SCROLLABLE_ID: &str = "prompter-preview";

/// Line height relative to the font size.
const LINE_HEIGHT: f32 = 1.5;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub script: &'a TextStore,
    pub font_size: FontSize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// The surface scrolled or its content was laid out again.
    Scrolled {
        /// Vertical offset actually shown.
        offset: f32,
        /// Largest offset the content allows.
        max_offset: f32,
    },
}

impl Message {
    fn from_viewport(viewport: Viewport) -> Self {
        let overflow = viewport.content_bounds().height - viewport.bounds().height;
        Message::Scrolled {
            offset: viewport.absolute_offset().y,
            max_offset: overflow.max(0.0),
        }
    }
}

/// Jumps the surface to `position`.
pub fn scroll_to<T>(position: ScrollPosition) -> Task<T> {
    operation::scroll_to(
        Id::new(SCROLLABLE_ID),
        AbsoluteOffset {
            x: 0.0,
            y: position.value(),
        },
    )
}

/// Moves the surface forward by one tick at `speed`.
///
/// The scrollable clamps relative moves to its content, so the surface stops
/// at the last line even when the controller has not learned the limit yet.
pub fn scroll_by<T>(speed: ScrollSpeed) -> Task<T> {
    operation::scroll_by(
        Id::new(SCROLLABLE_ID),
        AbsoluteOffset {
            x: 0.0,
            y: speed.value(),
        },
    )
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("preview-heading")).size(typography::TITLE_SM);

    let size = ctx.font_size.as_f32();
    let lines = ctx.script.lines().map(|line| -> Element<'a, Message> {
        if line.trim().is_empty() {
            Space::new().height(Length::Fixed(size * LINE_HEIGHT)).into()
        } else {
            Container::new(Text::new(line).size(size).line_height(LINE_HEIGHT))
                .width(Length::Fill)
                .align_x(Horizontal::Center)
                .into()
        }
    });

    let script = Column::with_children(lines)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::LG);

    let surface = Scrollable::new(script)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(Message::from_viewport);

    let framed = Container::new(surface)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::prompter);

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(heading)
            .push(framed),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::SM)
    .into()
}
