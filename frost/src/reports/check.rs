use std::path::PathBuf;

use super::output::{Output, Report};

/// Outcome of `frost check`: every diagnostic, grouped by severity.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    /// Language the types were expanded for.
    pub language: String,
    pub type_count: usize,
    pub field_count: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl CheckReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        let labelled = [("error", &self.errors), ("warning", &self.warnings)];
        for (label, messages) in labelled {
            for message in messages {
                out.diagnostic(format!("{label}: {message}"));
            }
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {info}"));
        }

        if !self.errors.is_empty() || !self.warnings.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} is valid for {} ({} types, {} fields)",
                self.config_path.display(),
                self.language,
                self.type_count,
                self.field_count
            ));
        }
    }
}
