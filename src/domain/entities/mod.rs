//! Domain Entities
//!
//! - `PropertySource` - a discovered property file
//! - `PropertyMap` - keys merged from all sources
//! - `GeneratedArtifact` - rendered output ready to be written

mod generated_artifact;
mod property_map;
mod property_source;

pub use generated_artifact::GeneratedArtifact;
pub use property_map::PropertyMap;
pub use property_source::PropertySource;
