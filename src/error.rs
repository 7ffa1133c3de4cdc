//! Error types for propconst
//!
//! Every failure of a generation run is one of three kinds: a configuration
//! problem, an unreadable source, or a failed output write. None of them are
//! retried and none of them leave a partially written file behind.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for propconst operations
pub type PropConstResult<T> = Result<T, PropConstError>;

/// Coarse classification of a [`PropConstError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or inconsistent configuration
    Configuration,
    /// A declared property source could not be read
    SourceRead,
    /// The generated file could not be written
    OutputWrite,
}

/// Main error type for propconst operations
#[derive(Error, Debug)]
pub enum PropConstError {
    /// No class name was configured
    #[error("cannot write class without a class name")]
    MissingClassName,

    /// Neither an input file nor any file-set match was supplied
    #[error("no readable property sources (set `inputfile` or declare a file-set)")]
    NoSources,

    /// Case normalization mapped two distinct keys onto one identifier
    #[error("keys '{first}' and '{second}' both produce the constant '{identifier}'")]
    DuplicateIdentifier {
        identifier: String,
        first: String,
        second: String,
    },

    /// A file-set include/exclude pattern could not be compiled
    #[error("invalid file-set pattern '{pattern}' in {dir}: {message}")]
    InvalidFileSet {
        dir: PathBuf,
        pattern: String,
        message: String,
    },

    /// No renderer is registered for the requested language
    #[error("no renderer available for {language}")]
    UnsupportedLanguage { language: String },

    /// The configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A property source (or file-set directory) could not be read
    #[error("cannot read property source {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output directory or file could not be written
    #[error("cannot write to {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PropConstError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PropConstError::MissingClassName
            | PropConstError::NoSources
            | PropConstError::DuplicateIdentifier { .. }
            | PropConstError::InvalidFileSet { .. }
            | PropConstError::UnsupportedLanguage { .. }
            | PropConstError::InvalidConfig { .. } => ErrorKind::Configuration,
            PropConstError::SourceRead { .. } => ErrorKind::SourceRead,
            PropConstError::OutputWrite { .. } => ErrorKind::OutputWrite,
        }
    }

    pub(crate) fn source_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PropConstError::SourceRead {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PropConstError::OutputWrite {
            path: path.into(),
            source,
        }
    }
}
