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
    CSHARP_NAMING,
    files::{ClassFile, GENERATED_HEADER, OptionalFile},
};

const FILE_SUFFIX: &str = ".generated.cs";

/// C# code generator producing one partial class per immutable type
pub struct Generator {
    types: Vec<GeneratedType>,
    output: String,
    namespace: Option<String>,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn file_extension(&self) -> &'static str {
        "cs"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.registry().preview()
    }

    #[tracing::instrument(skip_all, fields(language = "csharp", types = self.types.len()))]
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
        let mut expected: HashSet<String> = self
            .types
            .iter()
            .map(|ty| ClassFile::new(ty, None).file_name())
            .collect();
        if self.types.iter().any(|ty| ty.updater.is_some()) {
            expected.insert(OptionalFile::new(None).file_name().to_string());
        }

        find_orphans(
            output_dir,
            &self.output,
            FILE_SUFFIX,
            &expected,
            GENERATED_HEADER,
        )
    }
}

impl Generator {
    /// Create a generator for already expanded types, writing to `Generated`.
    ///
    /// The types must have been expanded with [`CSHARP_NAMING`].
    pub fn new(types: Vec<GeneratedType>) -> Self {
        Self {
            types,
            output: Language::CSharp.default_output().to_string(),
            namespace: None,
        }
    }

    /// Run the pipeline on a manifest and create a generator for its types.
    pub fn from_manifest(manifest: Manifest) -> Result<Self> {
        let ctx = Pipeline::new(CSHARP_NAMING).run(manifest)?;
        Ok(Self::from_context(ctx))
    }

    /// Create a generator from a pipeline run with [`CSHARP_NAMING`].
    pub fn from_context(mut ctx: CompilationContext) -> Self {
        let output = ctx.manifest.project.output_dir().to_string();
        let namespace = ctx.manifest.project.namespace.clone();
        let types = ctx.take_expanded().unwrap_or_default();

        let generator = Self::new(types).with_output(output);
        match namespace {
            Some(namespace) => generator.with_namespace(namespace),
            None => generator,
        }
    }

    /// Set the output directory, relative to the directory passed to `generate`.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    /// Wrap every generated file in `namespace <name> { ... }`.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn types(&self) -> &[GeneratedType] {
        &self.types
    }

    fn registry(&self) -> FileRegistry {
        let namespace = self.namespace.as_deref();
        let mut registry = FileRegistry::new();

        // Only the updater needs Optional<T>
        if self.types.iter().any(|ty| ty.updater.is_some()) {
            let optional = OptionalFile::new(namespace);
            registry.register(FileEntry::support(
                self.relative(optional.file_name()),
                optional.render(),
            ));
        }

        registry.register_all(self.types.iter().map(|ty| {
            let file = ClassFile::new(ty, namespace);
            FileEntry::generated_type(self.relative(&file.file_name()), file.render())
        }));

        registry
    }

    fn relative(&self, file: &str) -> String {
        format!("{}/{}", self.output.trim_end_matches('/'), file)
    }
}
