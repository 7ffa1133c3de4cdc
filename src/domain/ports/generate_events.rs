//! Generate Event Port
//!
//! Observable interface for a generation run. Sinks turn events into console
//! lines, NDJSON, or nothing at all.

use std::path::PathBuf;

/// Event emitted during a generation run
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateEvent {
    /// Run started for the given class and destination
    Started { class_name: String, output: PathBuf },

    /// A property source was found (primary file or file-set match)
    SourceDiscovered { path: PathBuf },

    /// All sources were loaded and merged
    Aggregated {
        source_count: usize,
        key_count: usize,
    },

    /// Output is newer than every source; nothing to do
    UpToDate { path: PathBuf },

    /// Output directory had to be created
    DirectoryCreated { path: PathBuf },

    /// Generated file was written
    Written {
        path: PathBuf,
        constant_count: usize,
        hash: String,
    },

    /// Rendered without writing (`--dry-run`)
    DryRun {
        path: PathBuf,
        constant_count: usize,
        content: String,
    },
}

/// Trait for receiving generate events
///
/// Implementations:
/// - ConsoleEventSink: human-readable lines on stderr
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait GenerateEventSink {
    fn on_event(&self, event: GenerateEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl GenerateEventSink for NoopEventSink {
    fn on_event(&self, _event: GenerateEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Test event sink that records all events
    #[derive(Default)]
    struct RecordingEventSink {
        events: RefCell<Vec<GenerateEvent>>,
    }

    impl GenerateEventSink for RecordingEventSink {
        fn on_event(&self, event: GenerateEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingEventSink::default();

        sink.on_event(GenerateEvent::Started {
            class_name: "Messages".to_string(),
            output: PathBuf::from("src/Messages.java"),
        });
        sink.on_event(GenerateEvent::UpToDate {
            path: PathBuf::from("src/Messages.java"),
        });

        let events = sink.events.borrow();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[1], GenerateEvent::UpToDate { .. }));
    }

    #[test]
    fn noop_sink_accepts_everything() {
        NoopEventSink.on_event(GenerateEvent::Aggregated {
            source_count: 1,
            key_count: 3,
        });
    }
}
