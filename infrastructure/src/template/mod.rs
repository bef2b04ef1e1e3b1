//! Template file loader

use luagen_application::ports::metadata_source::SourceError;
use luagen_domain::Template;
use std::fs;
use std::path::Path;

/// Loads the template document from disk.
pub struct TemplateLoader;

impl TemplateLoader {
    /// Read a template file. A missing template aborts the run.
    pub fn from_path(path: &Path) -> Result<Template, SourceError> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
            _ => SourceError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })?;
        Ok(Template::new(content))
    }
}
