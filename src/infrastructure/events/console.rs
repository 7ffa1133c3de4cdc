//! Console Event Sink
//!
//! Human-readable progress lines on stderr, filtered by verbosity.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::config::Verbosity;
use crate::domain::ports::{GenerateEvent, GenerateEventSink};

pub struct ConsoleEventSink {
    verbosity: Verbosity,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    /// Console sink writing to stderr
    pub fn stderr(verbosity: Verbosity) -> Self {
        Self::with_writer(verbosity, io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(verbosity: Verbosity, writer: W) -> Self {
        Self {
            verbosity,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, min: Verbosity, message: String) {
        if self.verbosity < min {
            return;
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", message);
        }
    }
}

impl GenerateEventSink for ConsoleEventSink {
    fn on_event(&self, event: GenerateEvent) {
        match event {
            GenerateEvent::Started { class_name, output } => self.line(
                Verbosity::Verbose,
                format!("Generating {} -> {}", class_name, output.display()),
            ),
            GenerateEvent::SourceDiscovered { path } => {
                self.line(Verbosity::Debug, format!("  source {}", path.display()))
            }
            GenerateEvent::Aggregated {
                source_count,
                key_count,
            } => self.line(
                Verbosity::Verbose,
                format!(
                    "Loaded {} key{} from {} source{}",
                    key_count,
                    plural(key_count),
                    source_count,
                    plural(source_count)
                ),
            ),
            GenerateEvent::UpToDate { path } => self.line(
                Verbosity::Normal,
                format!("✓ {} is up to date", path.display()),
            ),
            GenerateEvent::DirectoryCreated { path } => self.line(
                Verbosity::Verbose,
                format!("Created directory {}", path.display()),
            ),
            GenerateEvent::Written {
                path,
                constant_count,
                hash,
            } => {
                self.line(
                    Verbosity::Normal,
                    format!(
                        "✓ Wrote {} ({} constant{})",
                        path.display(),
                        constant_count,
                        plural(constant_count)
                    ),
                );
                self.line(Verbosity::Debug, format!("  {}", hash));
            }
            GenerateEvent::DryRun {
                path,
                constant_count,
                ..
            } => self.line(
                Verbosity::Verbose,
                format!(
                    "Dry run: {} not written ({} constant{})",
                    path.display(),
                    constant_count,
                    plural(constant_count)
                ),
            ),
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
