//! Expand phase - runs the transform on every declared type.

use eyre::{Result, bail, eyre};
use tracing::debug;

use crate::{
    NamingConvention, Transformer,
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Phase that expands every [`TypeSpec`](frost_ir::TypeSpec) into a
/// [`GeneratedType`](frost_ir::GeneratedType) for one target language.
///
/// Every type is checked before the phase fails, so all transform errors
/// are reported together.
pub struct ExpandPhase {
    naming: NamingConvention,
}

impl ExpandPhase {
    pub fn new(naming: NamingConvention) -> Self {
        Self { naming }
    }
}

impl Phase for ExpandPhase {
    fn name(&self) -> &'static str {
        "expand"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let ir = ctx
            .ir
            .as_ref()
            .ok_or_else(|| eyre!("expand phase requires the lowered IR"))?;
        let transformer = Transformer::new(&self.naming).with_schema(ir);

        let mut expanded = Vec::with_capacity(ir.types.len());
        let mut errors = Vec::new();
        for spec in &ir.types {
            match transformer.generate(spec) {
                Ok(generated) => expanded.push(generated),
                Err(err) => {
                    errors.push(Diagnostic::error(self.name(), err.to_string()).at(err.location()))
                }
            }
        }

        if !errors.is_empty() {
            let count = errors.len();
            ctx.diagnostics.extend(errors);
            bail!("Expansion failed with {} error(s)", count);
        }

        debug!(types = expanded.len(), "expanded all types");
        ctx.expanded = Some(expanded);
        Ok(())
    }
}
