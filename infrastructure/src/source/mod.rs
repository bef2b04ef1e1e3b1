//! Metadata source adapters

pub mod bundlecore;
pub mod local;
