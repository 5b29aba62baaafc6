use frost_ir::{GeneratedType, SchemaIR};
use frost_manifest::Manifest;

use super::diagnostic::{Diagnostic, Severity};

/// Everything the phases have produced so far for one manifest.
#[derive(Debug)]
pub struct CompilationContext {
    pub manifest: Manifest,
    /// Set by the lower phase.
    pub ir: Option<SchemaIR>,
    /// Set by the expand phase, only when every type expanded cleanly.
    pub expanded: Option<Vec<GeneratedType>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            ir: None,
            expanded: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    /// Hand the expanded types to a backend, leaving `None` behind.
    pub fn take_expanded(&mut self) -> Option<Vec<GeneratedType>> {
        self.expanded.take()
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orchard() -> CompilationContext {
        let manifest: Manifest = r#"
            [project]
            name = "orchard"
            language = "rust"
        "#
        .parse()
        .unwrap();
        CompilationContext::new(manifest)
    }

    #[test]
    fn test_fresh_context_is_empty() {
        let mut ctx = orchard();
        assert!(ctx.ir.is_none());
        assert!(ctx.take_expanded().is_none());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_diagnostics_split_by_severity() {
        let mut ctx = orchard();
        ctx.diagnostics.extend([
            Diagnostic::warning("validate", "type 'Fruit' has no description"),
            Diagnostic::info("validate", "type 'Empty' requests a builder but has no fields"),
            Diagnostic::error("expand", "duplicate field 'color' in 'Fruit'"),
        ]);

        assert!(ctx.has_errors());
        assert_eq!(ctx.errors().count(), 1);
        assert_eq!(ctx.warnings().next().map(|d| d.phase.as_str()), Some("validate"));
    }
}
