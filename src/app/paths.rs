// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! The first candidate present wins:
//! 1. a directory passed explicitly by the caller (tests, tools)
//! 2. `--config-dir` on the command line
//! 3. the `TELEPROMPTER_CONFIG_DIR` environment variable, when not empty
//! 4. `Teleprompter/` under the platform config directory

use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Subdirectory created under the platform config directory.
const APP_DIR: &str = "Teleprompter";

/// File name of the settings inside the config directory.
pub const SETTINGS_FILE: &str = "settings.toml";

/// Environment variable naming the config directory.
pub const ENV_CONFIG_DIR: &str = "TELEPROMPTER_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Records `--config-dir` for the rest of the session.
pub fn set_cli_config_dir(dir: PathBuf) {
    if CLI_CONFIG_DIR.set(dir).is_err() {
        tracing::warn!("config directory from the command line was already set");
    }
}

/// Path of `settings.toml`, or `None` when no config directory can be found.
pub fn settings_path(explicit_dir: Option<PathBuf>) -> Option<PathBuf> {
    pick_config_dir(
        explicit_dir,
        CLI_CONFIG_DIR.get().cloned(),
        std::env::var_os(ENV_CONFIG_DIR),
        dirs::config_dir(),
    )
    .map(|dir| dir.join(SETTINGS_FILE))
}

fn pick_config_dir(
    explicit: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<OsString>,
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .or(cli)
        .or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
        .or_else(|| platform.map(|dir| dir.join(APP_DIR)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(path: &str) -> Option<PathBuf> {
        Some(PathBuf::from(path))
    }

    #[test]
    fn explicit_dir_beats_everything() {
        let dir = pick_config_dir(
            some("/explicit"),
            some("/cli"),
            Some("/env".into()),
            some("/home/me/.config"),
        );
        assert_eq!(dir, some("/explicit"));
    }

    #[test]
    fn cli_beats_environment() {
        let dir = pick_config_dir(None, some("/cli"), Some("/env".into()), None);
        assert_eq!(dir, some("/cli"));
    }

    #[test]
    fn empty_environment_falls_back_to_platform() {
        let dir = pick_config_dir(None, None, Some(OsString::new()), some("/home/me/.config"));
        assert_eq!(dir, some("/home/me/.config/Teleprompter"));
    }

    #[test]
    fn environment_used_when_set() {
        let dir = pick_config_dir(None, None, Some("/env".into()), some("/home/me/.config"));
        assert_eq!(dir, some("/env"));
    }

    #[test]
    fn nothing_known_means_no_dir() {
        assert_eq!(pick_config_dir(None, None, None, None), None);
    }

    #[test]
    fn settings_path_appends_file_name() {
        let path = settings_path(some("/explicit")).expect("explicit dir always resolves");
        assert_eq!(path, PathBuf::from("/explicit").join(SETTINGS_FILE));
    }
}
