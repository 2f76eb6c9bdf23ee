// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler applies one message to the `App` state and returns the task
//! the runtime should run next: a surface scroll, a file dialog or a file
//! read/write.

use super::{App, Message};
use crate::config;
use crate::domain::prompter::ScrollPosition;
use crate::error::ScriptError;
use crate::prompter::TickEpoch;
use crate::script::{self, TextStore};
use crate::ui::notifications::Notification;
use crate::ui::{controls, header, preview, script_editor};
use iced::Task;
use std::path::{Path, PathBuf};

impl App {
    pub(super) fn handle_header_message(&mut self, message: header::Message) -> Task<Message> {
        match header::update(message, self.dialog_pending) {
            header::Event::None => Task::none(),
            header::Event::Export => self.open_export_dialog(),
            header::Event::Import => self.open_import_dialog(),
            header::Event::ToggleTheme => {
                self.toggle_theme();
                Task::none()
            }
        }
    }

    pub(super) fn handle_controls_message(
        &mut self,
        message: controls::Message,
    ) -> Task<Message> {
        match controls::update(message, &mut self.controller, self.steps) {
            controls::Event::Rewound => preview::scroll_to(ScrollPosition::TOP),
            controls::Event::None | controls::Event::Started | controls::Event::Paused => {
                Task::none()
            }
        }
    }

    pub(super) fn handle_preview_message(&mut self, message: preview::Message) -> Task<Message> {
        match message {
            preview::Message::Scrolled { offset, max_offset } => {
                self.controller.set_max_position(max_offset);
                self.controller.sync_position(offset);
            }
        }
        Task::none()
    }

    /// Advances the controller and moves the surface by the same step.
    pub(super) fn handle_scroll_tick(&mut self, epoch: TickEpoch) -> Task<Message> {
        match self.controller.tick(epoch) {
            Some(_) => preview::scroll_by(self.controller.speed()),
            None => Task::none(),
        }
    }

    fn open_export_dialog(&mut self) -> Task<Message> {
        self.dialog_pending = true;
        Task::perform(
            script::pick_export_path(self.last_directory.clone()),
            Message::ExportDialogResult,
        )
    }

    fn open_import_dialog(&mut self) -> Task<Message> {
        self.dialog_pending = true;
        Task::perform(
            script::pick_import_path(self.last_directory.clone()),
            Message::ImportDialogResult,
        )
    }

    pub(super) fn handle_export_dialog_result(&mut self, path: Option<PathBuf>) -> Task<Message> {
        let Some(path) = path else {
            self.dialog_pending = false;
            return Task::none();
        };

        let text = self.script.get_text().to_owned();
        Task::perform(script::export_text(path, text), Message::ExportCompleted)
    }

    pub(super) fn handle_export_completed(
        &mut self,
        result: Result<PathBuf, ScriptError>,
    ) -> Task<Message> {
        self.dialog_pending = false;
        match result {
            Ok(path) => {
                self.remember_script_path(&path);
                self.notifications.clear_script_errors();
                self.notifications.push(
                    Notification::success("notification-export-success")
                        .with_arg("file", display_name(&path)),
                );
            }
            Err(err) => self.notifications.push(script_error_notification(&err)),
        }
        Task::none()
    }

    pub(super) fn handle_import_dialog_result(&mut self, path: Option<PathBuf>) -> Task<Message> {
        match path {
            Some(path) => self.read_script(path),
            None => {
                self.dialog_pending = false;
                Task::none()
            }
        }
    }

    /// Imports `path` without a dialog (command line, file drop).
    pub(super) fn start_import(&mut self, path: PathBuf) -> Task<Message> {
        self.dialog_pending = true;
        self.read_script(path)
    }

    fn read_script(&mut self, path: PathBuf) -> Task<Message> {
        let target = path.clone();
        Task::perform(script::import_text(path), move |result| {
            Message::ImportCompleted {
                path: target,
                result,
            }
        })
    }

    pub(super) fn handle_import_completed(
        &mut self,
        path: PathBuf,
        result: Result<String, ScriptError>,
    ) -> Task<Message> {
        self.dialog_pending = false;
        match result {
            Ok(text) => {
                replace_script(&mut self.script, &mut self.editor, text);
                self.remember_script_path(&path);
                self.notifications.clear_script_errors();
                self.notifications.push(
                    Notification::success("notification-import-success")
                        .with_arg("file", display_name(&path)),
                );
            }
            Err(err) => self.notifications.push(script_error_notification(&err)),
        }
        Task::none()
    }

    fn remember_script_path(&mut self, path: &Path) {
        self.last_directory = path.parent().map(Path::to_path_buf);
        self.script_path = Some(path.to_path_buf());
    }

    /// Switches between light and dark and persists the choice.
    fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        self.config.general.theme_mode = self.theme_mode;

        if let Err(err) = config::save(&self.config) {
            tracing::warn!("failed to save settings: {err}");
            self.notifications
                .push(Notification::warning("notification-config-save-error"));
        }
    }
}

/// Replaces the store text and rebuilds the editor buffer from it.
fn replace_script(
    store: &mut TextStore,
    editor: &mut iced::widget::text_editor::Content,
    text: String,
) {
    store.set_text(text);
    *editor = script_editor::content_for(store);
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn script_error_notification(err: &ScriptError) -> Notification {
    let notification = Notification::error(err.i18n_key());
    match err {
        ScriptError::Other(message) => notification.with_arg("error", message.clone()),
        ScriptError::NotFound | ScriptError::PermissionDenied => notification,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_file_name() {
        assert_eq!(display_name(Path::new("/home/me/talk.txt")), "talk.txt");
        assert_eq!(display_name(Path::new("/")), "/");
    }

    #[test]
    fn io_errors_carry_their_message() {
        let notification = script_error_notification(&ScriptError::Other("disk full".into()));
        assert_eq!(notification.message_key(), "error-script-io");
        assert_eq!(
            notification.message_args(),
            &[("error", "disk full".to_string())]
        );

        let notification = script_error_notification(&ScriptError::PermissionDenied);
        assert_eq!(notification.message_key(), "error-script-permission-denied");
        assert!(notification.message_args().is_empty());
    }

    #[test]
    fn replace_script_rebuilds_editor() {
        let mut store = TextStore::new("old");
        let mut editor = script_editor::content_for(&store);
        replace_script(&mut store, &mut editor, "new\ntext".to_string());

        assert_eq!(store.get_text(), "new\ntext");
        assert!(editor.text().starts_with("new\ntext"));
    }
}
