//! Tool metadata entities

use serde::{Deserialize, Serialize};

/// Tool-level metadata, shared by every document generated in a run.
///
/// All fields are optional: an absent value renders as `N/A` at
/// substitution time rather than failing the run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub doi: Option<String>,
    pub license: Option<String>,
    /// Ordered category labels.
    pub categories: Option<Vec<String>>,
}

/// One published build of a tool. Each record yields exactly one output
/// document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub version: Option<String>,
    pub uri: Option<String>,
    /// Ordered command strings.
    pub cmds: Option<Vec<String>>,
    /// Ordered entry-point argument strings.
    pub entrypoint_args: Option<Vec<String>>,
}

/// A tool descriptor together with its raw version records.
///
/// Records are kept in wire form (`serde_json::Value`); mapping happens
/// per record inside the generate loop so one malformed record cannot
/// abort the rest.
#[derive(Debug, Clone, Default)]
pub struct ToolManifest {
    pub descriptor: ToolDescriptor,
    pub records: Vec<serde_json::Value>,
}

impl ToolManifest {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Which records of a manifest to generate for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSelection {
    /// Every record, in source order.
    All,
    /// Only records whose version equals the given string.
    Exact(String),
}

impl VersionSelection {
    /// Whether a record with the given version is selected.
    pub fn matches(&self, version: Option<&str>) -> bool {
        match self {
            VersionSelection::All => true,
            VersionSelection::Exact(wanted) => version == Some(wanted.as_str()),
        }
    }
}
