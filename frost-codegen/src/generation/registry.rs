//! The set of files one generation run produces.

use std::path::Path;

use eyre::Result;
use frost_core::{File, WriteResult};

use crate::{GenerateResult, PreviewFile};

/// Write order. Shared files go first so a partial run never leaves a type
/// file without the index that declares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileCategory {
    Support,
    Type,
}

#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Path relative to the project root.
    pub path: String,
    pub content: String,
    pub category: FileCategory,
}

impl FileEntry {
    /// A file shared by every type, such as `mod.rs` or `Optional.generated.cs`.
    pub fn support(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            category: FileCategory::Support,
        }
    }

    /// The file rendered for one declared type.
    pub fn generated_type(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            category: FileCategory::Type,
            ..Self::support(path, content)
        }
    }
}

/// Every file a backend renders, collected before anything touches disk.
#[derive(Debug, Default)]
pub struct FileRegistry {
    entries: Vec<FileEntry>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: FileEntry) {
        self.entries.push(entry);
    }

    pub fn register_all(&mut self, entries: impl IntoIterator<Item = FileEntry>) {
        self.entries.extend(entries);
    }

    /// Entries in write order; registration order breaks ties.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        let mut ordered: Vec<_> = self.entries.iter().collect();
        ordered.sort_by_key(|entry| entry.category);
        ordered.into_iter()
    }

    pub fn preview(&self) -> Vec<PreviewFile> {
        self.entries()
            .map(|entry| PreviewFile {
                path: entry.path.clone(),
                content: entry.content.clone(),
            })
            .collect()
    }

    /// Write every entry under `base`.
    ///
    /// A file that exists without `header` belongs to the user and is
    /// reported as skipped rather than replaced.
    pub fn write_all(&self, base: &Path, header: &'static str) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for entry in self.entries() {
            let outcome = File::new(base.join(&entry.path), entry.content.as_str())
                .generated_by(header)
                .write()?;
            let bucket = match outcome {
                WriteResult::Written => &mut result.written,
                WriteResult::Unchanged => &mut result.unchanged,
                WriteResult::Skipped => &mut result.skipped,
            };
            bucket.push(entry.path.clone());
        }

        Ok(result)
    }
}
