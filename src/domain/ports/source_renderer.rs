//! SourceRenderer port - language-specific text generation
//!
//! The emitter decides *which* constants exist; a renderer only decides how
//! they are spelled in one language.

use crate::domain::value_objects::Language;

/// One constant to declare
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    /// Identifier (the key, possibly upper-cased)
    pub name: String,
    /// String value (always the original key)
    pub value: String,
}

/// Everything a renderer needs to produce a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderInput<'a> {
    pub class_name: &'a str,
    pub package: Option<&'a str>,
    pub constants: &'a [Constant],
}

/// Renders a constants file for one language
pub trait SourceRenderer {
    /// Which language this renderer emits
    fn language(&self) -> Language;

    /// Produce the complete file text
    fn render(&self, input: &RenderInput<'_>) -> String;
}
