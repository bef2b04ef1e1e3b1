//! Generate modules use case
//!
//! Drives the whole run: fetch the manifest once, then map, compose,
//! substitute, and write each record in source order. Acquisition
//! failures abort; per-record failures are logged with the record's
//! position and collected into the report while processing continues.

use crate::ports::metadata_source::{MetadataSource, SourceError};
use crate::ports::module_writer::{ModuleWriter, WriteError};
use luagen_domain::{
    MapError, OutputLayout, PlaceholderValues, SchemaMap, Template, TemplateError, ToolDescriptor,
    VersionSelection,
};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Acquisition-phase failure; aborts the whole run.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Why one record failed. The run continues with the next record.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// One failed record, by 1-based source position.
#[derive(Debug)]
pub struct RecordFailure {
    pub position: usize,
    pub error: RecordError,
}

/// Input for the generate use case.
#[derive(Debug, Clone)]
pub struct GenerateInput {
    pub template: Template,
    pub schema: SchemaMap,
    pub selection: VersionSelection,
    pub layout: OutputLayout,
}

/// Outcome of a generate run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Paths written, in source order.
    pub written: Vec<PathBuf>,
    /// Records that failed, in source order.
    pub failures: Vec<RecordFailure>,
    /// Total records in the source document.
    pub total_records: usize,
}

impl GenerateReport {
    /// The source document carried no records at all.
    pub fn no_records(&self) -> bool {
        self.total_records == 0
    }

    /// Records existed but the version selection matched none of them.
    /// Informational, not a failure.
    pub fn nothing_matched(&self) -> bool {
        self.total_records > 0 && self.written.is_empty() && self.failures.is_empty()
    }
}

/// Use case that turns a tool manifest into generated module files.
pub struct GenerateModulesUseCase<S: MetadataSource, W: ModuleWriter> {
    source: Arc<S>,
    writer: Arc<W>,
}

impl<S: MetadataSource, W: ModuleWriter> GenerateModulesUseCase<S, W> {
    pub fn new(source: Arc<S>, writer: Arc<W>) -> Self {
        Self { source, writer }
    }

    /// Execute the use case.
    pub async fn execute(&self, input: GenerateInput) -> Result<GenerateReport, GenerateError> {
        let manifest = self.source.fetch().await?;
        info!("Fetched manifest with {} records", manifest.records.len());

        let mut report = GenerateReport {
            total_records: manifest.records.len(),
            ..Default::default()
        };

        for (idx, raw) in manifest.records.iter().enumerate() {
            let position = idx + 1;
            match self.generate_one(&input, &manifest.descriptor, raw) {
                Ok(Some(path)) => {
                    info!("Generated {}", path.display());
                    report.written.push(path);
                }
                Ok(None) => {
                    debug!("Record {} not selected, skipping", position);
                }
                Err(error) => {
                    warn!("Record {} failed: {}", position, error);
                    report.failures.push(RecordFailure { position, error });
                }
            }
        }

        Ok(report)
    }

    /// Process one record: map, select, compose, substitute, write.
    ///
    /// Returns `Ok(None)` when the record is not selected. The rendered
    /// content is complete before the writer is invoked, so a failed
    /// record never leaves a partial file behind.
    fn generate_one(
        &self,
        input: &GenerateInput,
        descriptor: &ToolDescriptor,
        raw: &serde_json::Value,
    ) -> Result<Option<PathBuf>, RecordError> {
        let record = input.schema.version_record(raw)?;

        if !input.selection.matches(record.version.as_deref()) {
            return Ok(None);
        }

        let values = PlaceholderValues::compose(descriptor, &record);
        let content = input.template.render(&values)?;
        let path = input.layout.path_for(&values.version);
        self.writer.write(&path, &content)?;

        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use luagen_domain::ToolManifest;
    use serde_json::{Value, json};
    use std::path::Path;
    use std::sync::Mutex;

    struct FakeSource {
        root: Value,
    }

    #[async_trait]
    impl MetadataSource for FakeSource {
        async fn fetch(&self) -> Result<ToolManifest, SourceError> {
            Ok(SchemaMap::local().manifest(&self.root))
        }
    }

    struct FailingSource;

    #[async_trait]
    impl MetadataSource for FailingSource {
        async fn fetch(&self) -> Result<ToolManifest, SourceError> {
            Err(SourceError::Transport("connection refused".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingWriter {
        files: Mutex<Vec<(PathBuf, String)>>,
    }

    impl ModuleWriter for RecordingWriter {
        fn write(&self, path: &Path, content: &str) -> Result<(), WriteError> {
            self.files
                .lock()
                .unwrap()
                .push((path.to_path_buf(), content.to_string()));
            Ok(())
        }
    }

    fn input(selection: VersionSelection, layout: OutputLayout) -> GenerateInput {
        GenerateInput {
            template: Template::new("{name} {version}: { {cmds} }"),
            schema: SchemaMap::local(),
            selection,
            layout,
        }
    }

    fn source_with_tags(tags: Value) -> Arc<FakeSource> {
        Arc::new(FakeSource {
            root: json!({ "data": { "tool": {
                "name": "samtools",
                "tags": tags
            }}}),
        })
    }

    #[tokio::test]
    async fn test_generates_one_file_per_record() {
        let source = source_with_tags(json!([
            { "version": "1.17", "cmds": ["samtools"] },
            { "version": "1.18", "cmds": ["samtools"] },
            { "version": "1.19", "cmds": ["samtools"] },
        ]));
        let writer = Arc::new(RecordingWriter::default());
        let use_case = GenerateModulesUseCase::new(source, Arc::clone(&writer));

        let report = use_case
            .execute(input(VersionSelection::All, OutputLayout::Flat))
            .await
            .unwrap();

        assert_eq!(report.total_records, 3);
        assert_eq!(
            report.written,
            vec![
                PathBuf::from("1.17.lua"),
                PathBuf::from("1.18.lua"),
                PathBuf::from("1.19.lua"),
            ]
        );
        assert!(report.failures.is_empty());

        let files = writer.files.lock().unwrap();
        assert_eq!(files[2].1, "samtools 1.19: { \"samtools\" }");
    }

    #[tokio::test]
    async fn test_exact_selection_writes_only_the_match() {
        let source = source_with_tags(json!([
            { "version": "1.18" },
            { "version": "1.19" },
        ]));
        let writer = Arc::new(RecordingWriter::default());
        let use_case = GenerateModulesUseCase::new(source, Arc::clone(&writer));

        let layout = OutputLayout::Nested {
            domain: "biotools".to_string(),
            tool: "samtools".to_string(),
        };
        let report = use_case
            .execute(input(
                VersionSelection::Exact("1.19".to_string()),
                layout,
            ))
            .await
            .unwrap();

        assert_eq!(
            report.written,
            vec![PathBuf::from("biotools/samtools/1.19.lua")]
        );
        assert_eq!(writer.files.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_exact_selection_with_no_match_is_informational() {
        let source = source_with_tags(json!([
            { "version": "1.18" },
            { "version": "1.19" },
        ]));
        let writer = Arc::new(RecordingWriter::default());
        let use_case = GenerateModulesUseCase::new(source, Arc::clone(&writer));

        let report = use_case
            .execute(input(
                VersionSelection::Exact("9.99".to_string()),
                OutputLayout::Flat,
            ))
            .await
            .unwrap();

        assert!(report.written.is_empty());
        assert!(report.failures.is_empty());
        assert!(report.nothing_matched());
        assert!(writer.files.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_one_malformed_record_does_not_abort_the_rest() {
        let source = source_with_tags(json!([
            { "version": "1", "cmds": ["a"] },
            { "version": "2", "cmds": ["b"] },
            { "version": "3", "cmds": 42 },
            { "version": "4", "cmds": ["d"] },
            { "version": "5", "cmds": ["e"] },
        ]));
        let writer = Arc::new(RecordingWriter::default());
        let use_case = GenerateModulesUseCase::new(source, Arc::clone(&writer));

        let report = use_case
            .execute(input(VersionSelection::All, OutputLayout::Flat))
            .await
            .unwrap();

        assert_eq!(
            report.written,
            vec![
                PathBuf::from("1.lua"),
                PathBuf::from("2.lua"),
                PathBuf::from("4.lua"),
                PathBuf::from("5.lua"),
            ]
        );
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].position, 3);
    }

    #[tokio::test]
    async fn test_missing_placeholder_fails_each_record() {
        let source = source_with_tags(json!([{ "version": "1.19" }]));
        let writer = Arc::new(RecordingWriter::default());
        let use_case = GenerateModulesUseCase::new(source, Arc::clone(&writer));

        let mut bad_input = input(VersionSelection::All, OutputLayout::Flat);
        bad_input.template = Template::new("{version} {not_a_field}");

        let report = use_case.execute(bad_input).await.unwrap();
        assert!(report.written.is_empty());
        assert_eq!(report.failures.len(), 1);
        assert!(matches!(
            report.failures[0].error,
            RecordError::Template(TemplateError::MissingPlaceholder(_))
        ));
        assert!(writer.files.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_source_reports_no_records() {
        let source = source_with_tags(json!([]));
        let writer = Arc::new(RecordingWriter::default());
        let use_case = GenerateModulesUseCase::new(source, writer);

        let report = use_case
            .execute(input(VersionSelection::All, OutputLayout::Flat))
            .await
            .unwrap();
        assert!(report.no_records());
    }

    #[tokio::test]
    async fn test_source_failure_aborts_the_run() {
        let writer = Arc::new(RecordingWriter::default());
        let use_case = GenerateModulesUseCase::new(Arc::new(FailingSource), writer);

        let result = use_case
            .execute(input(VersionSelection::All, OutputLayout::Flat))
            .await;
        assert!(matches!(
            result,
            Err(GenerateError::Source(SourceError::Transport(_)))
        ));
    }
}
