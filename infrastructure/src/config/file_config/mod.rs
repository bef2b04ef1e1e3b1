//! Configuration file schema (`luagen.toml`)
//!
//! Example configuration:
//!
//! ```toml
//! [registry]
//! base_url = "https://bundlecore.com"
//!
//! [schema.remote]
//! cmds = "commands"
//! uri = "bcRegistryUrl"
//! ```
//!
//! Partial `[schema.*]` tables are completed from the built-in profiles
//! by the [`ConfigLoader`](crate::config::ConfigLoader) merge, which
//! layers the file over serialized defaults.

mod registry;
mod schema;

pub use registry::FileRegistryConfig;
pub use schema::FileSchemaConfig;

use serde::{Deserialize, Serialize};

/// Root configuration loaded from TOML files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Registry endpoint settings
    pub registry: FileRegistryConfig,
    /// Per-source schema field-name mappings
    pub schema: FileSchemaConfig,
}
