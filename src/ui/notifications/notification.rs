// SPDX-License-Identifier: MPL-2.0
//! What a toast says and how serious it is.

use std::time::Duration;

/// How serious a toast is, which decides its accent and how long it stays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A script was saved or loaded.
    Success,
    /// Something was skipped but the session goes on (unreadable settings).
    Warning,
    /// A save or load failed.
    Error,
}

impl Severity {
    /// Time on screen before the toast goes away by itself.
    ///
    /// Errors stay until dismissed so a failed save is never missed.
    pub(super) fn lifetime(self) -> Option<Duration> {
        match self {
            Severity::Success => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A localized message waiting to be shown as a toast.
///
/// The text is resolved at render time, so a toast follows the UI language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    severity: Severity,
    message_key: String,
    message_args: Vec<(&'static str, String)>,
}

impl Notification {
    fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds a Fluent argument, such as the file name of a saved script.
    #[must_use]
    pub fn with_arg(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.message_args.push((name, value.into()));
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(&'static str, String)] {
        &self.message_args
    }

    /// Whether this reports a failed script import or export.
    pub(super) fn is_script_error(&self) -> bool {
        self.severity == Severity::Error && self.message_key.starts_with("error-script-")
    }
}
