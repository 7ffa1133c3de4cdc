//! Source Renderers
//!
//! These renderers implement the SourceRenderer port, one per output
//! language.

mod escaping;
pub mod java;
pub mod rust;

pub use escaping::{escape_java, escape_rust};
pub use java::JavaRenderer;
pub use rust::RustRenderer;

use crate::domain::ports::SourceRenderer;
use crate::domain::value_objects::Language;

/// First line of every generated file
pub const GENERATED_NOTICE: &str = "DO NOT EDIT! This file has been generated by propconst";

/// Get all available renderers
pub fn all_renderers() -> Vec<Box<dyn SourceRenderer>> {
    vec![Box::new(JavaRenderer::new()), Box::new(RustRenderer::new())]
}

/// Get the renderer for a language
pub fn renderer_for(language: Language) -> Box<dyn SourceRenderer> {
    match language {
        Language::Java => Box::new(JavaRenderer::new()),
        Language::Rust => Box::new(RustRenderer::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_a_renderer() {
        let renderers = all_renderers();
        assert_eq!(renderers.len(), 2);
        for language in [Language::Java, Language::Rust] {
            assert_eq!(renderer_for(language).language(), language);
        }
    }

    #[test]
    fn all_renderers_stamp_the_notice() {
        use crate::domain::ports::RenderInput;
        for renderer in all_renderers() {
            let text = renderer.render(&RenderInput {
                class_name: "M",
                package: None,
                constants: &[],
            });
            assert!(text.contains(GENERATED_NOTICE), "{}", renderer.language());
        }
    }
}
