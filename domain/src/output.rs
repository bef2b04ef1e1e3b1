//! Output path layout

use std::path::PathBuf;

/// Where generated module files land on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLayout {
    /// `<version>.lua` in the working directory.
    Flat,
    /// `<domain>/<tool>/<version>.lua`.
    Nested { domain: String, tool: String },
}

impl OutputLayout {
    /// Compute the output path for one rendered version.
    pub fn path_for(&self, version: &str) -> PathBuf {
        let file = format!("{}.lua", version);
        match self {
            OutputLayout::Flat => PathBuf::from(file),
            OutputLayout::Nested { domain, tool } => PathBuf::from(domain).join(tool).join(file),
        }
    }
}
