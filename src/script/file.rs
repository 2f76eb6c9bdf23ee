// SPDX-License-Identifier: MPL-2.0
//! Plain-text script files.
//!
//! Exports write the script bytes unchanged. Imports read the whole file and
//! decode it the way a browser's `readAsText` does: UTF-8, a leading
//! byte-order mark dropped, invalid sequences replaced with U+FFFD.

use crate::error::ScriptError;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File name proposed by the export dialog.
pub const DEFAULT_FILE_NAME: &str = "teleprompter-script.txt";

/// Extensions accepted by the import dialog.
pub const SCRIPT_EXTENSIONS: &[&str] = &["txt"];

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decodes raw file bytes into script text.
#[must_use]
pub fn decode_script(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

/// Writes `text` to `path` byte for byte.
pub async fn export_text(path: PathBuf, text: String) -> Result<PathBuf, ScriptError> {
    match tokio::fs::write(&path, text.as_bytes()).await {
        Ok(()) => {
            info!(path = %path.display(), bytes = text.len(), "script exported");
            Ok(path)
        }
        Err(err) => {
            warn!(path = %path.display(), "script export failed: {err}");
            Err(err.into())
        }
    }
}

/// Reads the whole file at `path` as script text.
pub async fn import_text(path: PathBuf) -> Result<String, ScriptError> {
    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            info!(path = %path.display(), bytes = bytes.len(), "script imported");
            Ok(decode_script(&bytes))
        }
        Err(err) => {
            warn!(path = %path.display(), "script import failed: {err}");
            Err(err.into())
        }
    }
}

/// Opens the native "open" dialog filtered on text files.
///
/// Returns `None` when the user cancels.
pub async fn pick_import_path(directory: Option<PathBuf>) -> Option<PathBuf> {
    let dialog = with_directory(
        rfd::AsyncFileDialog::new()
            .set_title("Load Script")
            .add_filter("Text", SCRIPT_EXTENSIONS),
        directory.as_deref(),
    );
    dialog.pick_file().await.map(|h| h.path().to_path_buf())
}

/// Opens the native "save" dialog with [`DEFAULT_FILE_NAME`] prefilled.
///
/// Returns `None` when the user cancels.
pub async fn pick_export_path(directory: Option<PathBuf>) -> Option<PathBuf> {
    let dialog = with_directory(
        rfd::AsyncFileDialog::new()
            .set_title("Save Script")
            .set_file_name(DEFAULT_FILE_NAME)
            .add_filter("Text", SCRIPT_EXTENSIONS),
        directory.as_deref(),
    );
    dialog.save_file().await.map(|h| h.path().to_path_buf())
}

fn with_directory(dialog: rfd::AsyncFileDialog, directory: Option<&Path>) -> rfd::AsyncFileDialog {
    match directory {
        Some(dir) if dir.is_dir() => dialog.set_directory(dir),
        _ => dialog,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn decode_strips_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice("Bonjour".as_bytes());
        assert_eq!(decode_script(&bytes), "Bonjour");
    }

    #[test]
    fn decode_replaces_invalid_utf8() {
        let decoded = decode_script(&[b'a', 0xFF, b'b']);
        assert_eq!(decoded, "a\u{FFFD}b");
    }

    #[test]
    fn decode_keeps_bom_only_at_start() {
        let text = "a\u{FEFF}b";
        assert_eq!(decode_script(text.as_bytes()), text);
    }

    #[tokio::test]
    async fn export_then_import_round_trips() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join(DEFAULT_FILE_NAME);
        let text = "Line one\n\n  indented — ünïcödé\r\nlast line without newline".to_string();

        let written = export_text(path.clone(), text.clone())
            .await
            .expect("export should succeed");
        assert_eq!(written, path);

        let on_disk = std::fs::read(&path).expect("file should exist");
        assert_eq!(on_disk, text.as_bytes());

        let imported = import_text(path).await.expect("import should succeed");
        assert_eq!(imported, text);
    }

    #[tokio::test]
    async fn import_missing_file_is_not_found() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let result = import_text(dir.path().join("missing.txt")).await;
        assert_eq!(result, Err(ScriptError::NotFound));
    }

    #[tokio::test]
    async fn export_into_missing_directory_fails() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("no-such-dir").join(DEFAULT_FILE_NAME);
        let result = export_text(path, "text".to_string()).await;
        assert!(result.is_err());
    }
}
