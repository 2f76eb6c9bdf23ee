// SPDX-License-Identifier: MPL-2.0
//! Toasts reporting script saves and loads, and settings problems.
//!
//! - [`Notification`] is the localized message and its [`Severity`].
//! - [`Manager`] decides what is on screen and expires it on the housekeeping
//!   tick.
//! - [`Toast`] draws the cards over the bottom-right corner of the window.
//!
//! ```ignore
//! manager.push(Notification::success("notification-export-success").with_arg("file", "talk.txt"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, ToastId};
pub use notification::{Notification, Severity};
pub use toast::Toast;
