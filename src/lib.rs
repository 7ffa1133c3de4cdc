//! propconst - generate constant classes from property file keys
//!
//! Property files keep their values editable at runtime; the generated class
//! turns every key into a named constant so that references to a key are
//! checked by the compiler.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{GenerateOptions, GenerateOutcome, GenerateUseCase};
pub use config::{Config, ConfigWarning, Verbosity};
pub use domain::value_objects::{FileSet, GenerationTarget, Language};
pub use error::{ErrorKind, PropConstError, PropConstResult};
