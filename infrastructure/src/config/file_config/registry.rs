//! Registry configuration (`[registry]` section)

use serde::{Deserialize, Serialize};

use crate::source::bundlecore::DEFAULT_BASE_URL;

/// Registry endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRegistryConfig {
    /// Base URL of the registry host.
    pub base_url: String,
}

impl Default for FileRegistryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
