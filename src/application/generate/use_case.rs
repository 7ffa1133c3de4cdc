//! Generate Use Case
//!
//! Orchestrates one generation run:
//! 1. Validate the class name (before any I/O)
//! 2. Discover sources (primary file, then file-sets) and their timestamps
//! 3. Aggregate keys
//! 4. Staleness check against the existing output
//! 5. Render
//! 6. Create the output directory and write atomically
//!
//! All business rules live in domain services; this is pure orchestration.

use std::path::Path;

use crate::domain::entities::{GeneratedArtifact, PropertySource};
use crate::domain::ports::{
    FileSetScanner, FileSystem, GenerateEvent, GenerateEventSink, NoopEventSink, PropertyLoader,
    SourceRenderer,
};
use crate::domain::services::{aggregate, render, should_regenerate, SourceSet};
use crate::domain::value_objects::Language;
use crate::error::{PropConstError, PropConstResult};

use super::options::GenerateOptions;
use super::result::GenerateOutcome;

/// Generate use case, parameterized by its ports
pub struct GenerateUseCase<FS, SC, PL>
where
    FS: FileSystem,
    SC: FileSetScanner,
    PL: PropertyLoader,
{
    file_system: FS,
    scanner: SC,
    loader: PL,
    renderers: Vec<Box<dyn SourceRenderer>>,
}

impl<FS, SC, PL> GenerateUseCase<FS, SC, PL>
where
    FS: FileSystem,
    SC: FileSetScanner,
    PL: PropertyLoader,
{
    pub fn new(
        file_system: FS,
        scanner: SC,
        loader: PL,
        renderers: Vec<Box<dyn SourceRenderer>>,
    ) -> Self {
        Self {
            file_system,
            scanner,
            loader,
            renderers,
        }
    }

    /// Execute silently
    pub fn execute(&self, options: &GenerateOptions) -> PropConstResult<GenerateOutcome> {
        self.execute_with_events(options, &NoopEventSink)
    }

    /// Execute, reporting progress to `events`
    pub fn execute_with_events(
        &self,
        options: &GenerateOptions,
        events: &dyn GenerateEventSink,
    ) -> PropConstResult<GenerateOutcome> {
        let target = &options.target;
        let class_name = target.class_name()?;
        let output = target.output_path()?;
        let renderer = self.renderer(target.language())?;

        events.on_event(GenerateEvent::Started {
            class_name: class_name.to_string(),
            output: output.clone(),
        });

        let sources = self.discover(options, events)?;
        let keys = aggregate(&self.loader, &sources)?;
        events.on_event(GenerateEvent::Aggregated {
            source_count: sources.len(),
            key_count: keys.len(),
        });

        if !options.force && !options.dry_run && self.is_fresh(&sources, &output) {
            events.on_event(GenerateEvent::UpToDate {
                path: output.clone(),
            });
            return Ok(GenerateOutcome::UpToDate { path: output });
        }

        let artifact = render(&keys, target, renderer)?;

        if options.dry_run {
            events.on_event(GenerateEvent::DryRun {
                path: artifact.path().to_path_buf(),
                constant_count: artifact.constant_count(),
                content: artifact.content().to_string(),
            });
            return Ok(GenerateOutcome::DryRun(artifact));
        }

        self.write(&target.output_dir(), &artifact, events)?;
        Ok(GenerateOutcome::Written(artifact))
    }

    fn renderer(&self, language: Language) -> PropConstResult<&dyn SourceRenderer> {
        self.renderers
            .iter()
            .find(|r| r.language() == language)
            .map(|r| r.as_ref())
            .ok_or_else(|| PropConstError::UnsupportedLanguage {
                language: language.to_string(),
            })
    }

    /// Timestamp every declared source, primary file first
    fn discover(
        &self,
        options: &GenerateOptions,
        events: &dyn GenerateEventSink,
    ) -> PropConstResult<SourceSet> {
        let primary = match &options.input_file {
            Some(path) => Some(self.describe(path)?),
            None => None,
        };

        let mut file_sets = Vec::with_capacity(options.file_sets.len());
        for file_set in &options.file_sets {
            let sources = self
                .scanner
                .scan(file_set)?
                .iter()
                .map(|path| self.describe(path))
                .collect::<PropConstResult<Vec<_>>>()?;
            file_sets.push(sources);
        }

        let sources = SourceSet { primary, file_sets };
        for source in sources.iter() {
            events.on_event(GenerateEvent::SourceDiscovered {
                path: source.path().to_path_buf(),
            });
        }
        Ok(sources)
    }

    fn describe(&self, path: &Path) -> PropConstResult<PropertySource> {
        let modified = self
            .file_system
            .modified(path)
            .map_err(|e| PropConstError::source_read(path, e))?;
        Ok(PropertySource::new(path, modified))
    }

    fn is_fresh(&self, sources: &SourceSet, output: &Path) -> bool {
        let output_modified = if self.file_system.exists(output) {
            self.file_system.modified(output).ok()
        } else {
            None
        };
        !should_regenerate(PropertySource::newest(sources.iter()), output_modified)
    }

    fn write(
        &self,
        dir: &Path,
        artifact: &GeneratedArtifact,
        events: &dyn GenerateEventSink,
    ) -> PropConstResult<()> {
        let created = self
            .file_system
            .create_dir_all(dir)
            .map_err(|e| PropConstError::output_write(dir, e))?;
        if created {
            events.on_event(GenerateEvent::DirectoryCreated {
                path: dir.to_path_buf(),
            });
        }

        self.file_system
            .write(artifact.path(), artifact.content())
            .map_err(|e| PropConstError::output_write(artifact.path(), e))?;

        events.on_event(GenerateEvent::Written {
            path: artifact.path().to_path_buf(),
            constant_count: artifact.constant_count(),
            hash: artifact.hash().to_string(),
        });
        Ok(())
    }
}
