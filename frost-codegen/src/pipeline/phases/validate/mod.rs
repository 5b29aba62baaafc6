//! Manifest-level lints, run before anything is lowered.

pub mod lints;

use eyre::{Result, bail};
use frost_manifest::Manifest;
pub use lints::{DuplicateTypeLint, EmptyDescriptionLint, UnusedBuilderLint};

use crate::pipeline::{CompilationContext, Diagnostic, Phase};

/// A check over the raw manifest. Lints only add diagnostics; an
/// error-level one fails the validate phase once every lint has run.
pub trait Lint: Send + Sync {
    /// Kebab-case identifier, e.g. `duplicate-type`.
    fn name(&self) -> &'static str;

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>);
}

/// Runs every registered lint, then fails if any reported an error.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    pub fn new() -> Self {
        Self::empty()
            .with_lint(DuplicateTypeLint)
            .with_lint(EmptyDescriptionLint)
            .with_lint(UnusedBuilderLint)
    }

    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let before = ctx.diagnostics.len();
        for lint in &self.lints {
            lint.check(&ctx.manifest, &mut ctx.diagnostics);
        }
        tracing::debug!(lints = self.lints.len(), reported = ctx.diagnostics.len() - before, "linted manifest");

        match ctx.errors().count() {
            0 => Ok(()),
            errors => bail!("Validation failed with {errors} error(s)"),
        }
    }
}
