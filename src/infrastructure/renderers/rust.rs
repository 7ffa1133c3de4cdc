//! Rust renderer
//!
//! Emits a unit struct with one associated `&str` constant per key, so call
//! sites read `Messages::greeting` just like the Java flavour. Rust has no
//! package declaration; the package only decides the output directory and is
//! noted in the header.

use crate::domain::ports::{RenderInput, SourceRenderer};
use crate::domain::value_objects::Language;

use super::escaping::escape_rust;
use super::GENERATED_NOTICE;

#[derive(Debug, Clone, Copy, Default)]
pub struct RustRenderer;

impl RustRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl SourceRenderer for RustRenderer {
    fn language(&self) -> Language {
        Language::Rust
    }

    fn render(&self, input: &RenderInput<'_>) -> String {
        let mut out = format!("// {}\n", GENERATED_NOTICE);
        if let Some(package) = input.package {
            out.push_str(&format!("// package: {}\n", package));
        }
        out.push('\n');

        out.push_str(&format!("pub struct {};\n\n", input.class_name));
        out.push_str("#[allow(non_upper_case_globals)]\n");
        out.push_str(&format!("impl {} {{\n", input.class_name));
        for constant in input.constants {
            out.push_str(&format!(
                "    pub const {}: &'static str = \"{}\";\n",
                constant.name,
                escape_rust(&constant.value)
            ));
        }
        out.push_str("}\n");
        out
    }
}
