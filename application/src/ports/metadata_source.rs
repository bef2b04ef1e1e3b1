//! Metadata source port
//!
//! Defines how the application layer obtains tool metadata. Adapters for
//! the local JSON file and the registry API live in the infrastructure
//! layer.

use async_trait::async_trait;
use luagen_domain::ToolManifest;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while acquiring tool metadata.
///
/// Acquisition happens once, before any record is processed, and no retry
/// is attempted: every variant aborts the run.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("invalid JSON in {path}: {message}")]
    Format { path: String, message: String },

    #[error("{0} environment variable is not set")]
    MissingCredential(&'static str),

    #[error("registry host not reachable: {0}")]
    Transport(String),

    #[error("registry returned status {status}: {body}")]
    Remote { status: u16, body: String },
}

/// Source of a tool manifest.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Fetch the tool manifest. Called once per run.
    async fn fetch(&self) -> Result<ToolManifest, SourceError>;
}
