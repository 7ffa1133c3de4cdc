//! Generation target value object
//!
//! Describes where the generated file goes and how identifiers are derived:
//! class name, optional package, destination root, case normalization, and
//! output language.

use std::path::PathBuf;

use crate::error::{PropConstError, PropConstResult};

use super::Language;

/// Where and how to emit the constants file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTarget {
    class_name: Option<String>,
    package: Option<String>,
    dest_dir: PathBuf,
    convert_to_upper: bool,
    language: Language,
}

impl GenerationTarget {
    /// Create a target rooted at `dest_dir`. A class name is required before
    /// anything can be rendered, but may be supplied later.
    pub fn new(class_name: Option<String>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            class_name,
            package: None,
            dest_dir: dest_dir.into(),
            convert_to_upper: false,
            language: Language::default(),
        }
    }

    pub fn with_package(mut self, package: Option<String>) -> Self {
        self.package = package.filter(|p| !p.trim().is_empty());
        self
    }

    pub fn with_convert_to_upper(mut self, convert_to_upper: bool) -> Self {
        self.convert_to_upper = convert_to_upper;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// The class name, or `MissingClassName` if absent or blank
    pub fn class_name(&self) -> PropConstResult<&str> {
        match self.class_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(PropConstError::MissingClassName),
        }
    }

    /// Dotted package / namespace, if any
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn convert_to_upper(&self) -> bool {
        self.convert_to_upper
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Package translated into nested directories (`a.b.c` → `a/b/c`)
    pub fn package_dir(&self) -> PathBuf {
        self.package
            .as_deref()
            .map(|p| p.split('.').filter(|seg| !seg.is_empty()).collect::<PathBuf>())
            .unwrap_or_default()
    }

    /// Directory the generated file is written into
    pub fn output_dir(&self) -> PathBuf {
        self.dest_dir.join(self.package_dir())
    }

    /// Full path of the generated file:
    /// `dest_dir/<package as path>/<ClassName>.<ext>`
    pub fn output_path(&self) -> PropConstResult<PathBuf> {
        let file_name = format!("{}.{}", self.class_name()?, self.language.extension());
        Ok(self.output_dir().join(file_name))
    }

    /// Identifier emitted for a property key
    pub fn constant_name(&self, key: &str) -> String {
        if self.convert_to_upper {
            key.to_uppercase()
        } else {
            key.to_string()
        }
    }
}
