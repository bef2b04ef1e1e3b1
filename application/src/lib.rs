//! Application layer for luagen
//!
//! Use cases and the ports they drive. Port adapters (the local file
//! source, the registry client, the filesystem writer) live in the
//! infrastructure layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    metadata_source::{MetadataSource, SourceError},
    module_writer::{ModuleWriter, WriteError},
};
pub use use_cases::generate_modules::{
    GenerateError, GenerateInput, GenerateModulesUseCase, GenerateReport, RecordError,
    RecordFailure,
};
