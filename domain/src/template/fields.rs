//! Placeholder composition for one descriptor/record pair
//!
//! Defaults follow the source material's conventions: an absent scalar
//! renders as the bare token `N/A` (whatever quoting the template already
//! supplies around the placeholder applies), while an absent list renders
//! as the single quoted token `"N/A"` so it still reads as a one-element
//! sequence.

use crate::tool::entities::{ToolDescriptor, VersionRecord};

/// Textual default for absent fields.
pub const ABSENT: &str = "N/A";

/// The ten placeholder values substituted into a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderValues {
    pub version: String,
    pub uri: String,
    pub cmds: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub doi: String,
    pub license: String,
    pub categories: String,
    pub entrypoint_args: String,
}

impl PlaceholderValues {
    /// Compose the placeholder values for one record of a tool.
    pub fn compose(tool: &ToolDescriptor, record: &VersionRecord) -> Self {
        Self {
            version: scalar_text(record.version.as_deref()),
            uri: scalar_text(record.uri.as_deref()),
            cmds: quoted_list(record.cmds.as_deref()),
            name: scalar_text(tool.name.as_deref()),
            description: scalar_text(tool.description.as_deref()),
            url: scalar_text(tool.url.as_deref()),
            doi: scalar_text(tool.doi.as_deref()),
            license: scalar_text(tool.license.as_deref()),
            categories: quoted_list(tool.categories.as_deref()),
            entrypoint_args: quoted_list(record.entrypoint_args.as_deref()),
        }
    }

    /// Look up a placeholder value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        let value = match name {
            "version" => &self.version,
            "uri" => &self.uri,
            "cmds" => &self.cmds,
            "name" => &self.name,
            "description" => &self.description,
            "url" => &self.url,
            "doi" => &self.doi,
            "license" => &self.license,
            "categories" => &self.categories,
            "entrypoint_args" => &self.entrypoint_args,
            _ => return None,
        };
        Some(value.as_str())
    }
}

fn scalar_text(value: Option<&str>) -> String {
    value.unwrap_or(ABSENT).to_string()
}

/// `["a", "b"]` renders as `"a", "b"`; an absent list as `"N/A"`.
fn quoted_list(values: Option<&[String]>) -> String {
    match values {
        Some(items) => items
            .iter()
            .map(|item| format!("\"{}\"", item))
            .collect::<Vec<_>>()
            .join(", "),
        None => format!("\"{}\"", ABSENT),
    }
}
