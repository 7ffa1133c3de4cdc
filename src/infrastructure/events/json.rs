//! JSON Event Sink
//!
//! Outputs generate events as NDJSON for CI/automation consumption.

use crate::domain::ports::{GenerateEvent, GenerateEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl GenerateEventSink for JsonEventSink {
    fn on_event(&self, event: GenerateEvent) {
        let json = match event {
            GenerateEvent::Started { class_name, output } => serde_json::json!({
                "event": "start",
                "command": "generate",
                "class_name": class_name,
                "output": output.display().to_string(),
            }),

            GenerateEvent::SourceDiscovered { path } => serde_json::json!({
                "event": "source",
                "command": "generate",
                "path": path.display().to_string(),
            }),

            GenerateEvent::Aggregated {
                source_count,
                key_count,
            } => serde_json::json!({
                "event": "aggregated",
                "command": "generate",
                "source_count": source_count,
                "key_count": key_count,
            }),

            GenerateEvent::UpToDate { path } => serde_json::json!({
                "event": "complete",
                "command": "generate",
                "status": "up_to_date",
                "path": path.display().to_string(),
            }),

            GenerateEvent::DirectoryCreated { path } => serde_json::json!({
                "event": "directory_created",
                "command": "generate",
                "path": path.display().to_string(),
            }),

            GenerateEvent::Written {
                path,
                constant_count,
                hash,
            } => serde_json::json!({
                "event": "complete",
                "command": "generate",
                "status": "written",
                "path": path.display().to_string(),
                "constants": constant_count,
                "hash": hash,
            }),

            GenerateEvent::DryRun {
                path,
                constant_count,
                content,
            } => serde_json::json!({
                "event": "complete",
                "command": "generate",
                "status": "dry_run",
                "path": path.display().to_string(),
                "constants": constant_count,
                "content": content,
            }),
        };

        self.write_event(json);
    }
}
