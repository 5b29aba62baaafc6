use std::path::PathBuf;

use frost_codegen::PreviewFile;

use super::output::{Output, Report};

/// Outcome of `frost generate`.
#[derive(Debug)]
pub struct GenerateReport {
    pub project: String,
    pub language: String,
    /// Pipeline warnings, printed before anything else.
    pub warnings: Vec<String>,
    pub type_count: usize,
    pub result: GenerationResult,
}

#[derive(Debug)]
pub enum GenerationResult {
    Written(WrittenResult),
    /// `--dry-run`: every file that would be written, in write order.
    Preview(Vec<PreviewFile>),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Created or changed.
    pub written: Vec<String>,
    pub unchanged: usize,
    /// Existing files without the generated header, left as they were.
    pub skipped: Vec<String>,
    /// Generated files whose type is no longer declared.
    pub orphans: Vec<String>,
    /// Set when `--visualize` wrote pipeline snapshots.
    pub debug_dir: Option<PathBuf>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if let Some(dir) = &written.debug_dir {
            out.key_value("Pipeline snapshots written to", &dir.display().to_string());
            out.newline();
        }

        let types = match self.type_count {
            1 => "1 type".to_owned(),
            n => format!("{n} types"),
        };
        out.preformatted(&format!("{} ({}): {types}", self.project, self.language));
        out.key_value("Output", &written.output_dir.display().to_string());

        if written.written.is_empty() {
            out.preformatted(&format!("{} files up to date", written.unchanged));
        } else {
            out.newline();
            out.section("Written");
            written.written.iter().for_each(|path| out.added_item(path));
        }

        if !written.skipped.is_empty() {
            out.newline();
            out.section("Skipped (missing generated header)");
            for path in &written.skipped {
                out.list_item(&format!("! {path}"));
            }
        }

        if !written.orphans.is_empty() {
            out.newline();
            out.section("Orphaned (run 'frost clean' to remove)");
            written.orphans.iter().for_each(|path| out.removed_item(path));
        }
    }
}

fn render_preview(out: &mut dyn Output, files: &[PreviewFile]) {
    for file in files {
        out.divider(&file.path);
        out.preformatted(&file.content);
    }

    out.divider("Summary");
    out.preformatted(&format!("{} files would be generated", files.len()));
}
