// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::io;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

/// Specific error types for script file import and export.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// The selected file no longer exists.
    NotFound,

    /// The file cannot be read or written with the current permissions.
    PermissionDenied,

    /// Any other I/O failure, with the raw message.
    Other(String),
}

impl ScriptError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ScriptError::NotFound => "error-script-not-found",
            ScriptError::PermissionDenied => "error-script-permission-denied",
            ScriptError::Other(_) => "error-script-io",
        }
    }
}

impl From<io::Error> for ScriptError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ScriptError::NotFound,
            io::ErrorKind::PermissionDenied => ScriptError::PermissionDenied,
            _ => ScriptError::Other(err.to_string()),
        }
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::NotFound => write!(f, "Script file not found"),
            ScriptError::PermissionDenied => write!(f, "Permission denied"),
            ScriptError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn script_error_from_io_kinds() {
        let not_found: ScriptError = io::Error::from(io::ErrorKind::NotFound).into();
        assert_eq!(not_found, ScriptError::NotFound);

        let denied: ScriptError = io::Error::from(io::ErrorKind::PermissionDenied).into();
        assert_eq!(denied, ScriptError::PermissionDenied);

        let other: ScriptError = io::Error::other("device busy").into();
        assert!(matches!(other, ScriptError::Other(msg) if msg.contains("device busy")));
    }

    #[test]
    fn script_error_i18n_keys() {
        assert_eq!(ScriptError::NotFound.i18n_key(), "error-script-not-found");
        assert_eq!(
            ScriptError::PermissionDenied.i18n_key(),
            "error-script-permission-denied"
        );
        assert_eq!(ScriptError::Other(String::new()).i18n_key(), "error-script-io");
    }

    #[test]
    fn script_error_displays_plain_message() {
        assert_eq!(ScriptError::NotFound.to_string(), "Script file not found");
        assert_eq!(ScriptError::Other("disk full".into()).to_string(), "disk full");
    }
}
