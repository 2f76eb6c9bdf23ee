// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the script editor, the
//! prompter surface and the control bar.
//!
//! The `App` struct wires together the domains (scroll controller, script
//! text, localization, settings) and translates messages into side effects
//! like file dialogs, config persistence and surface scrolling.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::prompter::ScrollController;
use crate::script::TextStore;
use crate::ui::controls::Steps;
use crate::ui::notifications;
use crate::ui::script_editor;
use crate::ui::theming::ThemeMode;
use iced::widget::text_editor;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    controller: ScrollController,
    steps: Steps,
    script: TextStore,
    /// Editor buffer mirroring `script`.
    editor: text_editor::Content,
    /// File the script was last loaded from or saved to.
    script_path: Option<PathBuf>,
    /// Directory proposed by the next file dialog.
    last_directory: Option<PathBuf>,
    /// A file dialog or file operation is in flight.
    dialog_pending: bool,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("controller", &self.controller)
            .field("script_path", &self.script_path)
            .field("dialog_pending", &self.dialog_pending)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let i18n = I18n::default();
        let script = TextStore::new(i18n.tr("default-script"));
        let editor = script_editor::content_for(&script);
        Self {
            i18n,
            config: Config::default(),
            controller: ScrollController::default(),
            steps: Steps::default(),
            script,
            editor,
            script_path: None,
            last_directory: None,
            dialog_pending: false,
            theme_mode: ThemeMode::System,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from the config file and the CLI flags,
    /// optionally importing a script given on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        tracing::info!(
            lang = ?flags.lang,
            config_dir = ?flags.config_dir,
            script = ?flags.script_path,
            "starting teleprompter"
        );
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let script = TextStore::new(i18n.tr("default-script"));
        let editor = script_editor::content_for(&script);

        let mut app = App {
            controller: ScrollController::new(
                config.prompter.initial_speed(),
                config.prompter.initial_font_size(),
            ),
            steps: Steps {
                speed: config.prompter.speed_step(),
                font_size: config.prompter.font_size_step(),
            },
            theme_mode: config.general.theme_mode,
            i18n,
            script,
            editor,
            config,
            ..Self::default()
        };

        // Nothing is scrollable until the preview reports an overflowing
        // layout; a script that fits never does.
        app.controller.set_max_position(0.0);

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let task = match flags.script_path {
            Some(path) => app.start_import(PathBuf::from(path)),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let file_name = self
            .script_path
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned());

        match file_name {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_cadence_subscription(self.controller.cadence_epoch()),
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(header_message) => self.handle_header_message(header_message),
            Message::Editor(editor_message) => {
                script_editor::update(editor_message, &mut self.editor, &mut self.script);
                Task::none()
            }
            Message::Preview(preview_message) => self.handle_preview_message(preview_message),
            Message::Controls(controls_message) => {
                self.handle_controls_message(controls_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::ScrollTick(epoch) => self.handle_scroll_tick(epoch),
            Message::Tick(now) => {
                self.notifications.expire(now);
                Task::none()
            }
            Message::ExportDialogResult(path) => self.handle_export_dialog_result(path),
            Message::ExportCompleted(result) => self.handle_export_completed(result),
            Message::ImportDialogResult(path) => self.handle_import_dialog_result(path),
            Message::ImportCompleted { path, result } => {
                self.handle_import_completed(path, result)
            }
            Message::FileDropped(path) => {
                if self.dialog_pending {
                    Task::none()
                } else {
                    self.start_import(path)
                }
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            script: &self.script,
            editor: &self.editor,
            state: self.controller.state(),
            dialog_pending: self.dialog_pending,
            is_dark_theme: self.theme_mode.is_dark(),
            notifications: &self.notifications,
        })
    }
}
