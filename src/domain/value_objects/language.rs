//! Language value object - which source language to emit

use serde::{Deserialize, Serialize};

/// Output language for the generated constants file
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// A Java class of `public static final String` fields
    #[default]
    Java,
    /// A Rust unit struct with associated `&str` constants
    Rust,
}

impl Language {
    /// File extension (without the dot) for generated files
    pub fn extension(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Rust => "rs",
        }
    }

    /// Get a human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Java => "Java",
            Language::Rust => "Rust",
        }
    }

    /// Parse a config/env spelling, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "java" => Some(Language::Java),
            "rust" | "rs" => Some(Language::Rust),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
