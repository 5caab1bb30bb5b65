//! File reading utilities

use anyhow::{Context, Result};
use excerptor_core::Input;
use std::path::Path;

use super::STDIN_MARKER;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Input for a file path, or stdin for `-`
    pub fn input(path: &Path) -> Input {
        if path.as_os_str() == STDIN_MARKER {
            Input::from_reader(std::io::stdin())
        } else {
            Input::from_file(path)
        }
    }

    /// Read a file, or stdin for `-`, as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let text = Self::input(path)
            .into_text()
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        log::debug!("Read {} characters from {}", text.chars().count(), path.display());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("chapter.txt");

        let content = "First paragraph.\nSecond one.";
        fs::write(&file_path, content).unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let result = FileReader::read_text(Path::new("/nonexistent/chapter.txt"));
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_read_text_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("latin1.txt");
        fs::write(&file_path, [b'c', b'a', b'f', 0xe9]).unwrap();

        let err = FileReader::read_text(&file_path).unwrap_err();
        let root = err.root_cause().to_string();
        assert!(root.contains("UTF-8"), "unexpected error: {root}");
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");
        File::create(&file_path).unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), "");
    }
}
