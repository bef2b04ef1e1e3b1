//! Ports — interfaces between the use cases and the outside world

pub mod metadata_source;
pub mod module_writer;
