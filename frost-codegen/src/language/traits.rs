//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;
use frost_ir::{FieldType, PrimitiveType};

use crate::generation::{OrphanFile, sweep_orphans};

/// A backend that renders expanded types into source files.
///
/// Backends decide file layout and syntax. Writing, orphan detection and
/// cleanup are shared, so a backend only has to say which files it owns.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "rust", "csharp")
    fn language(&self) -> &'static str;

    /// Extension of generated source files (e.g., "rs", "cs")
    fn file_extension(&self) -> &'static str;

    /// Rendered files, without touching the disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Write every file under `output_dir`
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;

    /// Files in this backend's output directory that no declared type produces.
    fn orphans(&self, output_dir: &Path) -> Result<Vec<OrphanFile>>;

    /// Delete generated orphans. Files whose generated header was removed
    /// are left alone and reported as skipped.
    fn clean(&self, output_dir: &Path) -> Result<CleanResult> {
        sweep_orphans(self.orphans(output_dir)?, false)
    }

    /// What [`clean`](Self::clean) would do.
    fn preview_clean(&self, output_dir: &Path) -> Result<CleanResult> {
        sweep_orphans(self.orphans(output_dir)?, true)
    }
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written (new or changed content)
    pub written: Vec<String>,
    /// Files whose content was already up to date
    pub unchanged: Vec<String>,
    /// Files left alone because they were not generated by frost
    pub skipped: Vec<String>,
    /// Generated files that no longer correspond to a declared type
    pub orphans: Vec<String>,
}

/// Result of cleaning orphaned files
#[derive(Debug, Default)]
pub struct CleanResult {
    /// Generated files that were deleted
    pub deleted: Vec<String>,
    /// Files that were skipped (generated header removed by the user)
    pub skipped: Vec<String>,
}

impl CleanResult {
    /// Returns true if nothing was deleted or skipped.
    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty() && self.skipped.is_empty()
    }
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Trait for mapping field types to language-specific type strings.
///
/// Implement this trait for each target language to provide type mappings.
/// Only [`map_type`](TypeMapper::map_type) needs to be called; it dispatches
/// to the other methods recursively.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a primitive to a language-specific type string
    fn map_primitive(&self, ty: PrimitiveType) -> &'static str;

    /// Map a list whose element type has already been mapped
    fn map_list(&self, element: &str) -> String;

    /// Map an optional type.
    ///
    /// Receives the unmapped inner type, since some targets wrap value
    /// types and reference types differently.
    fn map_optional(&self, inner: &FieldType) -> String;

    /// Map a map whose key and value types have already been mapped
    fn map_map(&self, key: &str, value: &str) -> String;

    /// Map a reference to another declared type
    fn map_named(&self, name: &str) -> String;

    /// Map any field type
    fn map_type(&self, ty: &FieldType) -> String {
        match ty {
            FieldType::Primitive(p) => self.map_primitive(*p).to_string(),
            FieldType::List(inner) => self.map_list(&self.map_type(inner)),
            FieldType::Optional(inner) => self.map_optional(inner),
            FieldType::Map(key, value) => self.map_map(&self.map_type(key), &self.map_type(value)),
            FieldType::Named(name) => self.map_named(name),
        }
    }
}
