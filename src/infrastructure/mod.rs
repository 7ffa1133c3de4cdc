//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system (timestamps, atomic writes)
//! - `scanner/` - File-set expansion with glob overrides
//! - `properties/` - Property file parsing and loading
//! - `renderers/` - Per-language source renderers
//! - `events/` - Console and JSON event sinks

pub mod events;
pub mod fs;
pub mod properties;
pub mod renderers;
pub mod scanner;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use properties::PropertiesFileLoader;
pub use renderers::{all_renderers, renderer_for, JavaRenderer, RustRenderer};
pub use scanner::GlobFileSetScanner;
