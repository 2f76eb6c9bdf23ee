// SPDX-License-Identifier: MPL-2.0
//! Which toasts are on screen, which are waiting, and when each expires.
//!
//! At most [`MAX_VISIBLE`] toasts are shown; the rest wait in arrival
//! order. A toast's lifetime starts when it is shown, not when it is
//! pushed, so a burst of failures does not expire unseen in the queue.

use super::notification::{Notification, Severity};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of toasts on screen at once.
pub const MAX_VISIBLE: usize = 3;

/// Identifies a toast on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone)]
pub enum Message {
    /// The dismiss button of a toast was pressed.
    Dismiss(ToastId),
}

#[derive(Debug)]
struct Shown {
    id: ToastId,
    notification: Notification,
    expires_at: Option<Instant>,
}

#[derive(Debug, Default)]
pub struct Manager {
    /// On screen, newest first.
    shown: VecDeque<Shown>,
    waiting: VecDeque<Notification>,
    next_id: u64,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a toast, showing it right away if there is room.
    ///
    /// Warnings and errors are logged as they arrive.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => {
                tracing::warn!(key = notification.message_key(), "warning shown to user");
            }
            Severity::Error => {
                tracing::error!(key = notification.message_key(), "error shown to user");
            }
            Severity::Success => {}
        }

        if self.shown.len() < MAX_VISIBLE {
            self.show(notification, Instant::now());
        } else {
            self.waiting.push_back(notification);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => self.dismiss(*id, Instant::now()),
        }
    }

    /// Removes the toasts whose time ran out by `now` and shows waiting ones
    /// in their place.
    pub fn expire(&mut self, now: Instant) {
        let before = self.shown.len();
        self.shown
            .retain(|shown| shown.expires_at.is_none_or(|deadline| deadline > now));
        if self.shown.len() < before {
            self.fill(now);
        }
    }

    /// Drops earlier import/export failures once a script operation has
    /// succeeded.
    pub fn clear_script_errors(&mut self) {
        self.shown
            .retain(|shown| !shown.notification.is_script_error());
        self.waiting.retain(|waiting| !waiting.is_script_error());
        self.fill(Instant::now());
    }

    /// Toasts on screen, newest first.
    pub fn visible(&self) -> impl Iterator<Item = (ToastId, &Notification)> {
        self.shown
            .iter()
            .map(|shown| (shown.id, &shown.notification))
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.shown.len()
    }

    /// Whether anything is shown or waiting; the expiry tick only runs then.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.shown.is_empty() || !self.waiting.is_empty()
    }

    fn dismiss(&mut self, id: ToastId, now: Instant) {
        self.shown.retain(|shown| shown.id != id);
        self.fill(now);
    }

    fn show(&mut self, notification: Notification, now: Instant) {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        let expires_at = notification
            .severity()
            .lifetime()
            .map(|lifetime| now + lifetime);
        self.shown.push_front(Shown {
            id,
            notification,
            expires_at,
        });
    }

    fn fill(&mut self, now: Instant) {
        while self.shown.len() < MAX_VISIBLE {
            match self.waiting.pop_front() {
                Some(notification) => self.show(notification, now),
                None => break,
            }
        }
    }
}
