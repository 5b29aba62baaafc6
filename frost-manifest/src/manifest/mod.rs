//! Manifest types and parsing for frost.toml files.

mod file;
mod language;
mod parse;
mod project;
mod types;
mod validate;

use indexmap::IndexMap;
use serde::Deserialize;

pub use file::FrostToml;
pub use language::Language;
pub use project::ProjectConfig;
pub use types::{FieldDecl, TypeDecl};
pub use validate::ParseContext;

/// Root manifest for frost.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Project metadata and output settings
    pub project: ProjectConfig,

    /// Declared value types, in declaration order
    #[serde(default)]
    pub types: IndexMap<String, TypeDecl>,
}

impl Manifest {
    /// Check if a type is declared
    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Get a declared type by name
    pub fn get_type(&self, name: &str) -> Option<&TypeDecl> {
        self.types.get(name)
    }

    /// Total number of declared fields across all types
    pub fn field_count(&self) -> usize {
        self.types.values().map(|t| t.fields.len()).sum()
    }
}
