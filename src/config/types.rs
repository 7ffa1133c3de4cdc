//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::GenerateOptions;
use crate::domain::value_objects::{FileSet, GenerationTarget, Language};
use crate::error::PropConstResult;

use super::loader::{self, ConfigWarning};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "propconst.toml";

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Parse a config/env spelling, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }
}

/// A `[[fileset]]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSetConfig {
    pub dir: PathBuf,

    #[serde(default)]
    pub includes: Vec<String>,

    #[serde(default)]
    pub excludes: Vec<String>,
}

impl FileSetConfig {
    pub fn to_file_set(&self) -> FileSet {
        FileSet::new(&self.dir)
            .with_includes(self.includes.iter().cloned())
            .with_excludes(self.excludes.iter().cloned())
    }
}

/// Main configuration structure
///
/// Option names match the build-task attribute spelling (`inputfile`,
/// `destdir`, `classname`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub inputfile: Option<PathBuf>,

    #[serde(default = "default_destdir")]
    pub destdir: PathBuf,

    #[serde(default)]
    pub classname: Option<String>,

    #[serde(default)]
    pub packagename: Option<String>,

    #[serde(default)]
    pub converttoupper: bool,

    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default, rename = "fileset")]
    pub filesets: Vec<FileSetConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputfile: None,
            destdir: default_destdir(),
            classname: None,
            packagename: None,
            converttoupper: false,
            language: Language::default(),
            verbosity: Verbosity::default(),
            filesets: Vec::new(),
        }
    }
}

fn default_destdir() -> PathBuf {
    PathBuf::from(".")
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PropConstResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PropConstResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (PROPCONST_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Make relative paths relative to `base` (the config file's directory)
    pub fn resolve_relative_to(mut self, base: &Path) -> Self {
        let resolve = |p: &Path| {
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                base.join(p)
            }
        };
        self.inputfile = self
            .inputfile
            .as_deref()
            .filter(|p| !p.to_string_lossy().trim().is_empty())
            .map(resolve);
        self.destdir = resolve(&self.destdir);
        for fileset in &mut self.filesets {
            fileset.dir = resolve(&fileset.dir);
        }
        self
    }

    /// Describe the output this configuration produces
    pub fn generation_target(&self) -> GenerationTarget {
        GenerationTarget::new(self.classname.clone(), &self.destdir)
            .with_package(self.packagename.clone())
            .with_convert_to_upper(self.converttoupper)
            .with_language(self.language)
    }

    /// Freeze this configuration into the options of one generation run
    pub fn generate_options(&self) -> GenerateOptions {
        let mut options = GenerateOptions::new(self.generation_target());
        if let Some(input) = &self.inputfile {
            options = options.with_input_file(input);
        }
        for fileset in &self.filesets {
            options = options.with_file_set(fileset.to_file_set());
        }
        options
    }
}
