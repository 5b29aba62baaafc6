//! Built-in lints. Each reports against `types.<Name>` in the manifest.

mod duplicate_type;
mod empty_description;
mod unused_builder;

pub use duplicate_type::DuplicateTypeLint;
pub use empty_description::EmptyDescriptionLint;
pub use unused_builder::UnusedBuilderLint;

fn type_location(name: &str) -> String {
    format!("types.{name}")
}

#[cfg(test)]
fn run(lint: &dyn super::Lint, manifest: &str) -> Vec<crate::pipeline::Diagnostic> {
    use super::Lint;

    let manifest: frost_manifest::Manifest = format!(
        "[project]\nname = \"orchard\"\nlanguage = \"rust\"\n{manifest}"
    )
    .parse()
    .unwrap();

    let mut diagnostics = Vec::new();
    lint.check(&manifest, &mut diagnostics);
    diagnostics
}
