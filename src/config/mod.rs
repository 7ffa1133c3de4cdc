//! Configuration module for propconst
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Environment variables (PROPCONST_*)
//! 3. `propconst.toml` (or the file given with `--config`)
//! 4. Built-in defaults

mod loader;
mod types;

pub use loader::{
    load_or_default, load_with_warnings, parse_with_warnings, with_env_overrides,
    with_overrides_from, ConfigWarning,
};
pub use types::{Config, FileSetConfig, Verbosity, CONFIG_FILE_NAME};
