// SPDX-License-Identifier: MPL-2.0
use teleprompter::config::{self, Config, GeneralConfig, PrompterConfig};
use teleprompter::error::ScriptError;
use teleprompter::i18n::fluent::I18n;
use teleprompter::prompter::{ScrollController, Transition};
use teleprompter::script::{export_text, import_text, TextStore};
use teleprompter::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::System,
        },
        prompter: PrompterConfig::default(),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        prompter: PrompterConfig::default(),
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn test_configured_prompter_settings_seed_controller() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[prompter]\nspeed = 0.2\nfont_size = 90\n",
    )
    .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let controller = ScrollController::new(
        config.prompter.initial_speed(),
        config.prompter.initial_font_size(),
    );
    assert!((controller.speed().value() - 1.0).abs() < f32::EPSILON);
    assert_eq!(controller.font_size().value(), 72);
    assert!(!controller.is_enabled());
}

#[test]
fn test_scroll_session_scenario() {
    let mut controller = ScrollController::default();

    controller.adjust_speed(-5.0);
    controller.adjust_font_size(50);
    let Transition::Started(epoch) = controller.set_enabled(true) else {
        panic!("expected cadence to start");
    };

    for _ in 0..7 {
        controller.tick(epoch);
    }
    assert!((controller.position().value() - 7.0).abs() < f32::EPSILON);

    controller.reset();
    assert!(controller.position().is_top());
    assert!(controller.tick(epoch).is_none());
}

#[tokio::test]
async fn test_script_export_then_import() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("teleprompter-script.txt");

    let mut store = TextStore::new("Good evening.\n\nTonight's headlines: é, ü, 漢字");
    export_text(path.clone(), store.get_text().to_string())
        .await
        .expect("export should succeed");

    let written = std::fs::read(&path).expect("exported file should exist");
    assert_eq!(written, store.get_text().as_bytes());

    store.set_text("edited since");
    let imported = import_text(path).await.expect("import should succeed");
    store.set_text(imported);
    assert_eq!(
        store.get_text(),
        "Good evening.\n\nTonight's headlines: é, ü, 漢字"
    );
}

#[tokio::test]
async fn test_import_missing_file_leaves_store_untouched() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut store = TextStore::new("keep me");

    match import_text(dir.path().join("missing.txt")).await {
        Ok(text) => store.set_text(text),
        Err(err) => assert_eq!(err, ScriptError::NotFound),
    }
    assert_eq!(store.get_text(), "keep me");
}
