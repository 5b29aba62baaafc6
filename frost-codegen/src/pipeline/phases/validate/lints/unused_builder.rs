use frost_manifest::Manifest;

use super::{super::Lint, type_location};
use crate::pipeline::Diagnostic;

/// Notes `builder = true` on a type without fields; the builder would only
/// ever produce the empty value.
pub struct UnusedBuilderLint;

impl Lint for UnusedBuilderLint {
    fn name(&self) -> &'static str {
        "unused-builder"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for (name, decl) in &manifest.types {
            if !decl.builder || !decl.fields.is_empty() {
                continue;
            }
            diagnostics.push(
                Diagnostic::info("validate", format!("type '{name}' requests a builder but has no fields"))
                    .at(type_location(name)),
            );
        }
    }
}
