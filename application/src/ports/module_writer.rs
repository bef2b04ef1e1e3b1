//! Module writer port

use std::path::Path;
use thiserror::Error;

/// Filesystem failure while persisting one output document.
///
/// Fails that record only; the generate loop continues.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("failed to write {path}: {message}")]
    Io { path: String, message: String },
}

/// Sink for generated module documents.
pub trait ModuleWriter: Send + Sync {
    /// Write one finished document, overwriting any existing file at the
    /// path.
    fn write(&self, path: &Path, content: &str) -> Result<(), WriteError>;
}
