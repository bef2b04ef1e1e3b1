//! Filesystem module writer

use luagen_application::ports::module_writer::{ModuleWriter, WriteError};
use std::fs;
use std::path::Path;

/// Writes generated documents to disk, overwriting existing files.
///
/// Parent directories are created for nested layouts. Writes are not
/// atomic; a crash mid-write can leave a truncated file.
#[derive(Debug, Default)]
pub struct FilesystemWriter;

impl FilesystemWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ModuleWriter for FilesystemWriter {
    fn write(&self, path: &Path, content: &str) -> Result<(), WriteError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| WriteError::Io {
                    path: parent.display().to_string(),
                    message: e.to_string(),
                })?;
            }
        }

        fs::write(path, content).map_err(|e| WriteError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
