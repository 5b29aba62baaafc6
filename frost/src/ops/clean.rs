use std::path::Path;

use eyre::{Context, Result};
use frost_manifest::Manifest;

use crate::{language::LanguageSupport, reports::CleanReport};

pub struct CleanOptions<'a> {
    /// Directory the project output path is resolved against.
    pub output_dir: &'a Path,
    pub dry_run: bool,
}

/// Remove generated files whose type is no longer declared.
///
/// The manifest is compiled first so a broken manifest never deletes
/// anything.
pub fn clean(manifest: Manifest, lang: LanguageSupport, opts: CleanOptions) -> Result<CleanReport> {
    let ctx = super::compile(manifest, lang, None)?;
    let warnings = super::warnings(&ctx);
    let generator = lang.generator(ctx);

    let swept = if opts.dry_run {
        generator.preview_clean(opts.output_dir)
    } else {
        generator.clean(opts.output_dir)
    }
    .wrap_err("Failed to clean orphaned files")?;
    tracing::info!(
        deleted = swept.deleted.len(),
        skipped = swept.skipped.len(),
        dry_run = opts.dry_run,
        "cleaned output directory"
    );

    Ok(CleanReport {
        dry_run: opts.dry_run,
        warnings,
        deleted: swept.deleted,
        skipped: swept.skipped,
    })
}
