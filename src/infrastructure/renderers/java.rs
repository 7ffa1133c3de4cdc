//! Java renderer
//!
//! Emits one `public static final String` field per key:
//!
//! ```text
//! /**
//!  * DO NOT EDIT! This file has been generated by propconst
//! **/
//!
//! package org.example;
//!
//! public final class Messages {
//!     public static final String greeting = "greeting";
//! }
//! ```

use crate::domain::ports::{RenderInput, SourceRenderer};
use crate::domain::value_objects::Language;

use super::escaping::escape_java;
use super::GENERATED_NOTICE;

#[derive(Debug, Clone, Copy, Default)]
pub struct JavaRenderer;

impl JavaRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl SourceRenderer for JavaRenderer {
    fn language(&self) -> Language {
        Language::Java
    }

    fn render(&self, input: &RenderInput<'_>) -> String {
        let mut out = String::new();
        out.push_str(&format!("/**\n * {}\n**/\n\n", GENERATED_NOTICE));

        if let Some(package) = input.package {
            out.push_str(&format!("package {};\n\n", package));
        }

        out.push_str(&format!("public final class {} {{\n", input.class_name));
        for constant in input.constants {
            out.push_str(&format!(
                "\tpublic static final String {} = \"{}\";\n",
                constant.name,
                escape_java(&constant.value)
            ));
        }
        out.push_str("}\n");
        out
    }
}
