//! Generate operation - code generation from manifest.

use std::path::Path;

use eyre::{Context, Result};
use frost_manifest::Manifest;

use crate::{
    language::LanguageSupport,
    reports::{GenerateReport, GenerationResult, WrittenResult},
};

/// Directory, relative to the output directory, receiving pipeline snapshots.
pub const DEBUG_DIR: &str = ".frost/debug";

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for generated code.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to output debug snapshots.
    pub visualize: bool,
}

/// Execute the generate operation.
///
/// Runs the pipeline on the manifest and generates code for the target language.
pub fn generate(
    manifest: Manifest,
    lang: LanguageSupport,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let debug_dir = opts.visualize.then(|| opts.output_dir.join(DEBUG_DIR));

    let project = manifest.project.name.clone();
    let type_count = manifest.types.len();

    let ctx = super::compile(manifest, lang, debug_dir.as_deref())?;
    let warnings = super::warnings(&ctx);
    let generator = lang.generator(ctx);

    let result = if opts.dry_run {
        GenerationResult::Preview(generator.preview())
    } else {
        let result = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: result.written,
            unchanged: result.unchanged.len(),
            skipped: result.skipped,
            orphans: result.orphans,
            debug_dir,
        })
    };

    Ok(GenerateReport {
        project,
        language: lang.language.to_string(),
        warnings,
        type_count,
        result,
    })
}
