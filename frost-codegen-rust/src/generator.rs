use std::{collections::HashSet, path::Path};

use eyre::Result;
use frost_codegen::{
    GenerateResult, LanguageCodegen, PreviewFile,
    generation::{FileEntry, FileRegistry, OrphanFile, find_orphans},
    pipeline::{CompilationContext, Pipeline},
};
use frost_ir::GeneratedType;
use frost_manifest::{Language, Manifest};
use tracing::debug;

use crate::{
    RUST_NAMING,
    files::{GENERATED_HEADER, GeneratedMod, TypeRs},
};

/// Rust code generator producing one module per immutable type
pub struct Generator {
    types: Vec<GeneratedType>,
    output: String,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.registry().preview()
    }

    #[tracing::instrument(skip_all, fields(language = "rust", types = self.types.len()))]
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = self.registry().write_all(output_dir, GENERATED_HEADER)?;

        for path in &result.written {
            debug!(path = %path, "wrote file");
        }

        result.orphans = self
            .orphans(output_dir)?
            .into_iter()
            .filter(|orphan| orphan.is_generated)
            .map(|orphan| orphan.relative_path)
            .collect();

        Ok(result)
    }

    fn orphans(&self, output_dir: &Path) -> Result<Vec<OrphanFile>> {
        let expected: HashSet<String> = std::iter::once("mod.rs".to_string())
            .chain(self.types.iter().map(|ty| TypeRs::new(ty).file_name()))
            .collect();

        find_orphans(
            output_dir,
            &self.output,
            ".rs",
            &expected,
            GENERATED_HEADER,
        )
    }
}

impl Generator {
    /// Create a generator for already expanded types, writing to `src/generated`.
    ///
    /// The types must have been expanded with [`RUST_NAMING`].
    pub fn new(types: Vec<GeneratedType>) -> Self {
        Self {
            types,
            output: Language::Rust.default_output().to_string(),
        }
    }

    /// Run the pipeline on a manifest and create a generator for its types.
    pub fn from_manifest(manifest: Manifest) -> Result<Self> {
        let ctx = Pipeline::new(RUST_NAMING).run(manifest)?;
        Ok(Self::from_context(ctx))
    }

    /// Create a generator from a pipeline run with [`RUST_NAMING`].
    pub fn from_context(mut ctx: CompilationContext) -> Self {
        let output = ctx.manifest.project.output_dir().to_string();
        let types = ctx.take_expanded().unwrap_or_default();
        Self::new(types).with_output(output)
    }

    /// Set the output directory, relative to the directory passed to `generate`.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    /// The types this generator renders.
    pub fn types(&self) -> &[GeneratedType] {
        &self.types
    }

    fn registry(&self) -> FileRegistry {
        let mut registry = FileRegistry::new();

        let module = GeneratedMod::new(&self.types);
        registry.register(FileEntry::support(
            self.relative(module.file_name()),
            module.render(),
        ));

        registry.register_all(self.types.iter().map(|ty| {
            let file = TypeRs::new(ty);
            FileEntry::generated_type(self.relative(&file.file_name()), file.render())
        }));

        registry
    }

    fn relative(&self, file: &str) -> String {
        format!("{}/{}", self.output.trim_end_matches('/'), file)
    }
}
