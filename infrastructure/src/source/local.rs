//! Local JSON file source

use async_trait::async_trait;
use luagen_application::ports::metadata_source::{MetadataSource, SourceError};
use luagen_domain::{SchemaMap, ToolManifest};
use std::fs;
use std::path::PathBuf;

/// Reads a tool manifest from a JSON document on disk.
pub struct LocalFileSource {
    path: PathBuf,
    schema: SchemaMap,
}

impl LocalFileSource {
    pub fn new(path: impl Into<PathBuf>, schema: SchemaMap) -> Self {
        Self {
            path: path.into(),
            schema,
        }
    }
}

#[async_trait]
impl MetadataSource for LocalFileSource {
    async fn fetch(&self) -> Result<ToolManifest, SourceError> {
        let body = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SourceError::NotFound(self.path.clone()),
            _ => SourceError::Io {
                path: self.path.display().to_string(),
                message: e.to_string(),
            },
        })?;

        let root: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| SourceError::Format {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(self.schema.manifest(&root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_reads_manifest_from_disk() {
        let file = write_temp(
            r#"{ "data": { "tool": {
                "name": "samtools",
                "tags": [ { "version": "1.19", "cmds": ["samtools"] } ]
            }}}"#,
        );

        let source = LocalFileSource::new(file.path(), SchemaMap::local());
        let manifest = source.fetch().await.unwrap();
        assert_eq!(manifest.descriptor.name.as_deref(), Some("samtools"));
        assert_eq!(manifest.records.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let source = LocalFileSource::new("does-not-exist.json", SchemaMap::local());
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_invalid_json_is_format_error() {
        let file = write_temp("{ not json");
        let source = LocalFileSource::new(file.path(), SchemaMap::local());
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::Format { .. }));
    }
}
