// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::ScriptError;
use crate::prompter::TickEpoch;
use crate::ui::{controls, header, notifications, preview, script_editor};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Editor(script_editor::Message),
    Preview(preview::Message),
    Controls(controls::Message),
    Notification(notifications::NotificationMessage),
    /// One cadence tick, tagged with the epoch it was scheduled under.
    ScrollTick(TickEpoch),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    /// Result from the save dialog.
    ExportDialogResult(Option<PathBuf>),
    /// The script was written, or the write failed.
    ExportCompleted(Result<PathBuf, ScriptError>),
    /// Result from the open dialog.
    ImportDialogResult(Option<PathBuf>),
    /// The script file was read, or the read failed.
    ImportCompleted {
        path: PathBuf,
        result: Result<String, ScriptError>,
    },
    /// A file was dropped on the window.
    FileDropped(PathBuf),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional script file to load on startup.
    pub script_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TELEPROMPTER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
