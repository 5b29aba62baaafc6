use frost_manifest::{Manifest, TypeDecl};

use super::{super::Lint, type_location};
use crate::pipeline::Diagnostic;

/// Warns when a type has no description, or only whitespace.
///
/// The description becomes the doc comment on the generated type.
pub struct EmptyDescriptionLint;

fn is_undocumented(decl: &TypeDecl) -> bool {
    decl.description.as_deref().is_none_or(|d| d.trim().is_empty())
}

impl Lint for EmptyDescriptionLint {
    fn name(&self) -> &'static str {
        "empty-description"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let undocumented = manifest.types.iter().filter(|(_, decl)| is_undocumented(decl));
        diagnostics.extend(undocumented.map(|(name, _)| {
            Diagnostic::warning("validate", format!("type '{name}' has no description"))
                .at(type_location(name))
        }));
    }
}
