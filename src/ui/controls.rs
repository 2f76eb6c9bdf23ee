// SPDX-License-Identifier: MPL-2.0
//! Prompter control bar: play/pause, speed and font size steppers, reset.
//!
//! Keyboard shortcuts map onto the same messages so both paths share one
//! update function.

use crate::domain::prompter::ScrollState;
use crate::i18n::fluent::I18n;
use crate::prompter::{ScrollController, Transition};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::keyboard::{self, key::Named, Key};
use iced::widget::{button, container, tooltip, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Increments applied by the stepper buttons and their shortcuts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steps {
    pub speed: f32,
    pub font_size: i32,
}

impl Default for Steps {
    fn default() -> Self {
        Self {
            speed: crate::config::DEFAULT_SPEED_STEP,
            font_size: i32::from(crate::config::DEFAULT_FONT_SIZE_STEP),
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: ScrollState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    TogglePlay,
    SpeedDown,
    SpeedUp,
    FontDown,
    FontUp,
    Reset,
}

/// Effects the parent must apply to the prompter surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// Scrolling started with a fresh cadence.
    Started,
    /// Scrolling paused where it was.
    Paused,
    /// The position went back to the top; the surface must follow.
    Rewound,
}

pub fn update(message: Message, controller: &mut ScrollController, steps: Steps) -> Event {
    match message {
        Message::TogglePlay => match controller.toggle() {
            Transition::Started(_) => Event::Started,
            Transition::Stopped => Event::Paused,
            Transition::Unchanged => Event::None,
        },
        Message::SpeedDown => {
            controller.adjust_speed(-steps.speed);
            Event::None
        }
        Message::SpeedUp => {
            controller.adjust_speed(steps.speed);
            Event::None
        }
        Message::FontDown => {
            controller.adjust_font_size(-steps.font_size);
            Event::None
        }
        Message::FontUp => {
            controller.adjust_font_size(steps.font_size);
            Event::None
        }
        Message::Reset => {
            controller.reset();
            Event::Rewound
        }
    }
}

/// Maps a key press to a control message.
///
/// Space plays or pauses, arrows change the speed, `+`/`-` change the font
/// size and Home rewinds. Presses with Ctrl, Alt or Logo held are left alone.
#[must_use]
pub fn shortcut(key: &Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    match key {
        Key::Named(Named::Space) => Some(Message::TogglePlay),
        Key::Named(Named::ArrowUp) => Some(Message::SpeedUp),
        Key::Named(Named::ArrowDown) => Some(Message::SpeedDown),
        Key::Named(Named::Home) => Some(Message::Reset),
        Key::Character(c) => match c.as_str() {
            "+" | "=" => Some(Message::FontUp),
            "-" | "_" => Some(Message::FontDown),
            _ => None,
        },
        _ => None,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let (play_glyph, play_hint) = if ctx.state.enabled {
        ("\u{23F8}", i18n.tr("controls-pause"))
    } else {
        ("\u{25B6}", i18n.tr("controls-play"))
    };
    let play_button = tooltip(
        button(
            Container::new(Text::new(play_glyph).size(typography::TITLE_SM))
                .center(Length::Fill),
        )
        .on_press(Message::TogglePlay)
        .width(Length::Fixed(sizing::PLAY_BUTTON))
        .height(Length::Fixed(sizing::PLAY_BUTTON))
        .style(styles::button::play),
        Text::new(play_hint),
        tooltip::Position::Top,
    )
    .gap(4);

    let speed_group = stepper_group(
        i18n.tr("controls-speed"),
        ctx.state.speed.to_string(),
        (
            (!ctx.state.speed.is_min()).then_some(Message::SpeedDown),
            i18n.tr("controls-speed-decrease"),
        ),
        (Some(Message::SpeedUp), i18n.tr("controls-speed-increase")),
    );

    let font_value = i18n.tr_with_args(
        "controls-font-value",
        &[("size", ctx.state.font_size.value().to_string().as_str())],
    );
    let font_group = stepper_group(
        i18n.tr("controls-font"),
        font_value,
        (
            (!ctx.state.font_size.is_min()).then_some(Message::FontDown),
            i18n.tr("controls-font-decrease"),
        ),
        (
            (!ctx.state.font_size.is_max()).then_some(Message::FontUp),
            i18n.tr("controls-font-increase"),
        ),
    );

    let reset_button = tooltip(
        button(Text::new(i18n.tr("controls-reset")))
            .on_press(Message::Reset)
            .padding(spacing::XS)
            .style(styles::button::danger),
        Text::new(i18n.tr("controls-reset-tooltip")),
        tooltip::Position::Top,
    )
    .gap(4);

    let row = Row::new()
        .spacing(spacing::MD)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(play_button)
        .push(speed_group)
        .push(font_group)
        .push(reset_button);

    Container::new(row)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .style(container::rounded_box)
        .into()
}

/// Label, decrease button, current value, increase button.
///
/// A button whose message is `None` is drawn disabled (value at its bound).
fn stepper_group<'a>(
    label: String,
    value: String,
    decrease: (Option<Message>, String),
    increase: (Option<Message>, String),
) -> Element<'a, Message> {
    let step_button = |glyph: &'static str, (message, hint): (Option<Message>, String)| {
        tooltip(
            button(Text::new(glyph).size(typography::BODY_LG))
                .on_press_maybe(message)
                .padding(spacing::XS)
                .style(styles::button::stepper),
            Text::new(hint),
            tooltip::Position::Top,
        )
        .gap(4)
    };

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(label).size(typography::BODY))
        .push(step_button("\u{2212}", decrease))
        .push(
            Container::new(Text::new(value).size(typography::BODY))
                .width(Length::Fixed(sizing::VALUE_LABEL_WIDTH))
                .center_x(Length::Fixed(sizing::VALUE_LABEL_WIDTH)),
        )
        .push(step_button("+", increase));

    Container::new(row)
        .padding(spacing::XXS)
        .style(styles::container::panel)
        .into()
}
