// SPDX-License-Identifier: MPL-2.0
//! Script text and its plain-text file exchange.
//!
//! - [`TextStore`] holds the script being edited and prompted.
//! - [`file`] reads and writes `.txt` scripts and opens the native dialogs.

pub mod file;

pub use file::{
    decode_script, export_text, import_text, pick_export_path, pick_import_path,
    DEFAULT_FILE_NAME,
};

/// Holds the current script text.
///
/// The text is replaced wholesale by editing or by a file import and read
/// wholesale by an export and by the preview.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextStore {
    text: String,
}

impl TextStore {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[must_use]
    pub fn get_text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Splits the script into preview lines.
    ///
    /// Empty lines are kept so blank lines in the script stay blank in the
    /// preview.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_text_replaces_whole_script() {
        let mut store = TextStore::new("first draft");
        store.set_text("second draft\nwith two lines");
        assert_eq!(store.get_text(), "second draft\nwith two lines");
    }

    #[test]
    fn lines_keep_blank_lines() {
        let store = TextStore::new("Hello\n\nWorld\n");
        let lines: Vec<&str> = store.lines().collect();
        assert_eq!(lines, vec!["Hello", "", "World", ""]);
    }

    #[test]
    fn lines_drop_carriage_returns() {
        let store = TextStore::new("one\r\ntwo");
        let lines: Vec<&str> = store.lines().collect();
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn empty_store_has_one_empty_line() {
        let store = TextStore::default();
        assert_eq!(store.lines().count(), 1);
    }
}
