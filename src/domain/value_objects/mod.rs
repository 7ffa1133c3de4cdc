//! Domain Value Objects
//!
//! Immutable value types describing what to generate and where.

mod file_set;
mod generation_target;
mod hash;
mod language;

pub use file_set::{FileSet, DEFAULT_INCLUDE};
pub use generation_target::GenerationTarget;
pub use hash::ContentHash;
pub use language::Language;
