use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct SourceFile {
    /// Full path as yielded by the walk
    pub path: PathBuf,
    /// Just the filename
    pub filename: String,
    /// Original extension including the dot, case preserved ("" if none)
    pub extension: String,
    /// Stat result; `None` when the file could not be stat'd
    pub metadata: Option<Metadata>,
}

impl SourceFile {
    pub fn new(path: PathBuf) -> Self {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .filter(|e| !e.is_empty())
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        let metadata = fs::metadata(&path).ok();
        Self { path, filename, extension, metadata }
    }

    /// Lowercased extension, used for format checks.
    pub fn extension_lower(&self) -> String {
        self.extension.to_lowercase()
    }

    /// File size in bytes (0 if the stat failed)
    pub fn size(&self) -> u64 {
        self.metadata.as_ref().map_or(0, Metadata::len)
    }
}

/// True if the extension maps to an image or video MIME type.
pub fn is_media_file(path: &Path) -> bool {
    mime_guess::from_path(path).first().is_some_and(|mime| {
        mime.type_() == mime_guess::mime::IMAGE || mime.type_() == mime_guess::mime::VIDEO
    })
}
