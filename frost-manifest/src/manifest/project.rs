use serde::Deserialize;

use super::Language;

/// Project configuration from the `[project]` table
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// Project name
    pub name: String,

    /// Target language for code generation
    pub language: Language,

    /// Output directory for generated files, relative to the manifest
    pub output: Option<String>,

    /// Namespace wrapping generated code (C# only)
    pub namespace: Option<String>,
}

impl ProjectConfig {
    /// Output directory, falling back to the language default
    pub fn output_dir(&self) -> &str {
        self.output
            .as_deref()
            .unwrap_or_else(|| self.language.default_output())
    }
}
