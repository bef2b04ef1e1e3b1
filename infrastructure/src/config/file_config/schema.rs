//! Schema mapping configuration (`[schema]` section)
//!
//! Field names differ between the local JSON documents and the registry
//! API (`cmds` vs `commands`, `uri` vs `bcRegistryUrl`, `tags` vs
//! `versions`), so both profiles are configuration, not code.

use luagen_domain::SchemaMap;
use serde::{Deserialize, Serialize};

/// Per-source schema field-name mappings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSchemaConfig {
    /// Field names in local JSON documents.
    pub local: SchemaMap,
    /// Field names in registry API responses.
    pub remote: SchemaMap,
}

impl Default for FileSchemaConfig {
    fn default() -> Self {
        Self {
            local: SchemaMap::local(),
            remote: SchemaMap::bundlecore(),
        }
    }
}
