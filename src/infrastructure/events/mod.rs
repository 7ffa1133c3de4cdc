//! Event Sink Implementations
//!
//! Concrete implementations of GenerateEventSink:
//! - ConsoleEventSink: human-readable progress on stderr
//! - JsonEventSink: NDJSON output for CI/automation

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
