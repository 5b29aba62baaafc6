use super::output::{Output, Report};

/// Outcome of `frost clean`.
#[derive(Debug)]
pub struct CleanReport {
    pub dry_run: bool,
    pub warnings: Vec<String>,
    /// Orphans deleted, or that would be on a dry run.
    pub deleted: Vec<String>,
    /// Orphans kept because their generated header was removed.
    pub skipped: Vec<String>,
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        self.warnings.iter().for_each(|w| out.warning(w));

        match (self.deleted.is_empty(), self.skipped.is_empty()) {
            (true, true) => {
                out.preformatted("No orphaned files found.");
                return;
            }
            (false, _) => {
                out.section(if self.dry_run { "Would delete" } else { "Deleted" });
                self.deleted.iter().for_each(|path| out.removed_item(path));
            }
            (true, false) => {}
        }

        if !self.skipped.is_empty() {
            if !self.deleted.is_empty() {
                out.newline();
            }
            out.section("Skipped (modified by user)");
            for path in &self.skipped {
                out.list_item(&format!("! {path}"));
            }
        }
    }
}
