//! Code emitter
//!
//! Turns merged keys into constants and hands them to a language renderer.
//! Every key becomes one constant whose value is the key itself, never the
//! property value, so the compiler can check references while values stay
//! editable at runtime.

use std::collections::HashMap;

use crate::domain::entities::{GeneratedArtifact, PropertyMap};
use crate::domain::ports::{Constant, RenderInput, SourceRenderer};
use crate::domain::value_objects::GenerationTarget;
use crate::error::{PropConstError, PropConstResult};

/// Derive the constants for `keys`, in map order.
///
/// Fails with `DuplicateIdentifier` when case normalization maps two
/// distinct keys onto the same name.
pub fn constants_for(keys: &PropertyMap, target: &GenerationTarget) -> PropConstResult<Vec<Constant>> {
    let mut seen: HashMap<String, &str> = HashMap::with_capacity(keys.len());
    let mut constants = Vec::with_capacity(keys.len());

    for key in keys.keys() {
        let name = target.constant_name(key);
        if let Some(first) = seen.insert(name.clone(), key) {
            return Err(PropConstError::DuplicateIdentifier {
                identifier: name,
                first: first.to_string(),
                second: key.to_string(),
            });
        }
        constants.push(Constant {
            name,
            value: key.to_string(),
        });
    }

    Ok(constants)
}

/// Render the constants file for `target`.
///
/// The class name is validated before anything else, so a missing name never
/// yields partial text.
pub fn render(
    keys: &PropertyMap,
    target: &GenerationTarget,
    renderer: &dyn SourceRenderer,
) -> PropConstResult<GeneratedArtifact> {
    let class_name = target.class_name()?;
    let path = target.output_path()?;
    let constants = constants_for(keys, target)?;

    let content = renderer.render(&RenderInput {
        class_name,
        package: target.package(),
        constants: &constants,
    });

    Ok(GeneratedArtifact::new(path, content, constants.len()))
}
