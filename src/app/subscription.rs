// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! - the scroll cadence, present only while the prompter is scrolling
//! - native keyboard shortcuts and file drops
//! - the notification housekeeping tick

use super::Message;
use crate::prompter::{cadence, TickEpoch};
use crate::ui::controls;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Creates the scroll cadence for the running epoch, if any.
pub fn create_cadence_subscription(epoch: Option<TickEpoch>) -> Subscription<Message> {
    cadence::subscription(epoch).map(|(epoch, _instant)| Message::ScrollTick(epoch))
}

/// Routes keyboard shortcuts and file drops.
///
/// Key presses already captured by a widget (typing in the editor) are left
/// to that widget.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
            return Some(Message::FileDropped(path.clone()));
        }

        match (event, status) {
            (
                event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }),
                event::Status::Ignored,
            ) => controls::shortcut(&key, modifiers).map(Message::Controls),
            _ => None,
        }
    })
}

/// Creates a periodic tick for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
