//! Domain layer for luagen
//!
//! Core model of the generator: tool metadata entities, the source-schema
//! field-name mapping, placeholder composition, and template substitution.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Manifest
//!
//! A [`ToolManifest`] is one tool's metadata together with its raw version
//! records. Records stay in wire form until the generate loop maps them,
//! so a single malformed record fails on its own instead of poisoning the
//! whole document.
//!
//! ## Schema mapping
//!
//! Local JSON documents and the registry API name the same record fields
//! differently. [`SchemaMap`] holds those names as data, with built-in
//! profiles for both known schemas.

pub mod output;
pub mod template;
pub mod tool;

// Re-export commonly used types
pub use output::OutputLayout;
pub use template::{
    document::{Template, TemplateError},
    fields::PlaceholderValues,
};
pub use tool::{
    entities::{ToolDescriptor, ToolManifest, VersionRecord, VersionSelection},
    schema_map::{MapError, SchemaMap},
};
