//! Uploaded files
//!
//! An upload is a declared content type plus a way to get at the raw bytes.

use std::io;
use std::path::{Path, PathBuf};

pub trait Upload {
    /// The content type declared by the sender, if any
    fn content_type(&self) -> Option<&str>;

    /// The raw, undecoded bytes
    fn read_bytes(&self) -> io::Result<Vec<u8>>;
}

/// An upload already held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryUpload {
    content_type: Option<String>,
    bytes: Vec<u8>,
}

impl MemoryUpload {
    pub fn new(content_type: Option<&str>, bytes: impl Into<Vec<u8>>) -> Self {
        MemoryUpload {
            content_type: content_type.map(str::to_string),
            bytes: bytes.into(),
        }
    }

    /// A `text/plain` upload of `text`.
    pub fn plain_text(text: &str) -> Self {
        Self::new(Some(super::PLAIN_TEXT), text.as_bytes())
    }
}

impl Upload for MemoryUpload {
    fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    fn read_bytes(&self) -> io::Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}

/// A file on disk, read when the service asks for its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    path: PathBuf,
    content_type: Option<String>,
}

impl FileUpload {
    pub fn new(path: impl AsRef<Path>, content_type: Option<&str>) -> Self {
        FileUpload {
            path: path.as_ref().to_path_buf(),
            content_type: content_type.map(str::to_string),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Upload for FileUpload {
    fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    fn read_bytes(&self) -> io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }
}
