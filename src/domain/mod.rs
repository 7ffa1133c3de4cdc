//! Domain Layer
//!
//! The core of propconst: merging property keys and rendering constants.
//!
//! ## Structure
//!
//! - `entities/` - PropertySource, PropertyMap, GeneratedArtifact
//! - `value_objects/` - GenerationTarget, FileSet, Language, ContentHash
//! - `services/` - aggregate, render, should_regenerate
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
