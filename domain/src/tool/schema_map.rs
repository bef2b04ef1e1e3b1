//! Source-schema field-name mapping
//!
//! Local JSON documents and the registry API use different names for the
//! same record data: the record container is `tags` locally but `versions`
//! remotely, the source URI is `uri` vs `bcRegistryUrl`, the command list
//! is `cmds` vs `commands`, and the entry arguments are `entrypoint_args`
//! vs `entryCmds`. The mapping is data, not code: two built-in profiles
//! cover the known schemas and a config file can override either.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::tool::entities::{ToolDescriptor, ToolManifest, VersionRecord};

/// Errors raised while mapping a wire record into a [`VersionRecord`].
///
/// A mapping error fails that record only; the generate loop continues
/// with the next one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("field '{field}' is not a list")]
    ExpectedList { field: String },
}

/// Field names used to read records out of a source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaMap {
    /// Key of the record container under `data.tool`.
    pub records: String,
    pub version: String,
    pub uri: String,
    pub cmds: String,
    pub entrypoint_args: String,
}

impl Default for SchemaMap {
    fn default() -> Self {
        Self::local()
    }
}

impl SchemaMap {
    /// Profile for local JSON documents.
    pub fn local() -> Self {
        Self {
            records: "tags".to_string(),
            version: "version".to_string(),
            uri: "uri".to_string(),
            cmds: "cmds".to_string(),
            entrypoint_args: "entrypoint_args".to_string(),
        }
    }

    /// Profile for registry API responses.
    pub fn bundlecore() -> Self {
        Self {
            records: "versions".to_string(),
            version: "version".to_string(),
            uri: "bcRegistryUrl".to_string(),
            cmds: "commands".to_string(),
            entrypoint_args: "entryCmds".to_string(),
        }
    }

    /// Read the `data.tool` envelope of a source document.
    ///
    /// Missing envelope levels degrade to an empty manifest rather than
    /// failing; the caller reports "no records" as an informational
    /// outcome.
    pub fn manifest(&self, root: &Value) -> ToolManifest {
        let tool = root
            .get("data")
            .and_then(|data| data.get("tool"))
            .cloned()
            .unwrap_or(Value::Null);

        let records = tool
            .get(&self.records)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        ToolManifest {
            descriptor: descriptor_from(&tool),
            records,
        }
    }

    /// Map one raw record into a [`VersionRecord`].
    ///
    /// Scalar fields that are absent, null, or wrong-typed map to `None`.
    /// A list field that is present but not an array fails the record.
    pub fn version_record(&self, raw: &Value) -> Result<VersionRecord, MapError> {
        Ok(VersionRecord {
            version: scalar(raw, &self.version),
            uri: scalar(raw, &self.uri),
            cmds: list(raw, &self.cmds)?,
            entrypoint_args: list(raw, &self.entrypoint_args)?,
        })
    }
}

/// Tool-level fields use fixed names in both known schemas.
///
/// Wrong-typed values degrade to absent: tool-level oddities would affect
/// every record, and the generator treats them like missing data instead
/// of aborting the run.
fn descriptor_from(tool: &Value) -> ToolDescriptor {
    ToolDescriptor {
        name: scalar(tool, "name"),
        description: scalar(tool, "description"),
        url: scalar(tool, "url"),
        doi: scalar(tool, "doi"),
        license: scalar(tool, "license"),
        categories: list(tool, "categories").ok().flatten(),
    }
}

fn scalar(value: &Value, key: &str) -> Option<String> {
    match value.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    }
}

fn list(value: &Value, key: &str) -> Result<Option<Vec<String>>, MapError> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items.iter().map(element_text).collect())),
        Some(_) => Err(MapError::ExpectedList {
            field: key.to_string(),
        }),
    }
}

/// Non-string elements keep their JSON text.
fn element_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
