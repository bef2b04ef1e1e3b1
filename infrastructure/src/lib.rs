//! Infrastructure layer for luagen
//!
//! Adapters that implement the ports defined in the application layer:
//! metadata sources, the filesystem writer, the template file loader,
//! and configuration file loading.

pub mod config;
pub mod source;
pub mod template;
pub mod writer;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileRegistryConfig, FileSchemaConfig};
pub use source::{bundlecore::BundlecoreSource, local::LocalFileSource};
pub use template::TemplateLoader;
pub use writer::FilesystemWriter;
