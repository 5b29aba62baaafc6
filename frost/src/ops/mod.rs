//! Core operations.
//!
//! This module contains the business logic for frost commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod clean;
pub mod generate;
pub mod init;

use std::path::Path;

use eyre::{Result, eyre};
use frost_codegen::pipeline::{CompilationContext, SnapshotPlugin};
use frost_manifest::Manifest;

pub use check::check;
pub use clean::clean;
pub use generate::generate;
pub use init::init;

use crate::language::LanguageSupport;

/// Run the pipeline for `lang`, optionally writing phase snapshots to `snapshots`.
///
/// On failure the error lists every error diagnostic recorded so far.
pub(crate) fn compile(
    manifest: Manifest,
    lang: LanguageSupport,
    snapshots: Option<&Path>,
) -> Result<CompilationContext> {
    let mut pipeline = lang.pipeline();
    if let Some(dir) = snapshots {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(dir));
    }

    tracing::debug!(language = %lang.language, types = manifest.types.len(), "compiling manifest");

    let mut ctx = CompilationContext::new(manifest);
    if let Err(err) = pipeline.run_in(&mut ctx) {
        let details: Vec<String> = ctx.errors().map(|d| format!("  {}", d)).collect();
        if details.is_empty() {
            return Err(err.wrap_err("Pipeline failed"));
        }
        return Err(eyre!("{}\n{}", err, details.join("\n")).wrap_err("Pipeline failed"));
    }

    Ok(ctx)
}

/// Collect the messages of warning diagnostics.
pub(crate) fn warnings(ctx: &CompilationContext) -> Vec<String> {
    ctx.warnings().map(|d| d.message.clone()).collect()
}

#[cfg(test)]
mod tests {
    use frost_manifest::Language;

    use super::*;

    #[test]
    fn test_compile_reports_every_error() {
        let manifest: Manifest = r#"
            [project]
            name = "orchard"
            language = "rust"

            [[types.Fruit.fields]]
            name = "color"
            type = "string"

            [[types.Fruit.fields]]
            name = "color"
            type = "string"

            [types.Basket.fields]
            self = "int"
        "#
        .parse()
        .unwrap();

        let err = compile(manifest, LanguageSupport::from(Language::Rust), None).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.starts_with("Pipeline failed: Expansion failed with 2 error(s)"));
        assert!(chain.contains("types.Fruit"));
        assert!(chain.contains("types.Basket"));
    }
}
