//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! The infrastructure layer provides concrete implementations.

pub mod file_set_scanner;
pub mod file_system;
pub mod generate_events;
pub mod property_loader;
pub mod source_renderer;

pub use file_set_scanner::FileSetScanner;
pub use file_system::FileSystem;
pub use generate_events::{GenerateEvent, GenerateEventSink, NoopEventSink};
pub use property_loader::PropertyLoader;
pub use source_renderer::{Constant, RenderInput, SourceRenderer};
