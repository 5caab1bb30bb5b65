//! Chapter text sources
//!
//! An [`Input`] names where a chapter comes from. Nothing is read until
//! [`Input::into_text`] is called, which is also where undecodable text is
//! rejected.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::Error;

/// Where the chapter text comes from
pub enum Input {
    /// Chapter already held in memory
    Text(String),
    /// Chapter stored in a UTF-8 file
    File(PathBuf),
    /// Undecoded chapter bytes, checked for UTF-8 on read
    Bytes(Vec<u8>),
    /// Stream read to its end, such as stdin
    Reader(Box<dyn Read + Send + Sync>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("chars", &text.chars().count())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("bytes", &bytes.len())
                .finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl Input {
    /// Chapter held in memory
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Chapter stored at `path`
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Undecoded chapter bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Chapter streamed from `reader`
    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read every byte of the chapter
    ///
    /// File and reader failures become [`Error::Infrastructure`].
    pub fn into_bytes(self) -> Result<Vec<u8>, Error> {
        match self {
            Input::Text(text) => Ok(text.into_bytes()),
            Input::Bytes(bytes) => Ok(bytes),
            Input::File(path) => std::fs::read(&path).map_err(|e| {
                Error::Infrastructure(format!("cannot read chapter {}: {}", path.display(), e))
            }),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(|e| {
                    Error::Infrastructure(format!("cannot read chapter stream: {}", e))
                })?;
                Ok(buffer)
            }
        }
    }

    /// Read the chapter and decode it as UTF-8
    ///
    /// Bytes that are not UTF-8 are [`Error::InvalidInput`]; no lossy
    /// replacement is attempted.
    pub fn into_text(self) -> Result<String, Error> {
        let bytes = self.into_bytes()?;
        String::from_utf8(bytes)
            .map_err(|e| Error::InvalidInput(format!("text is not valid UTF-8: {}", e)))
    }
}
