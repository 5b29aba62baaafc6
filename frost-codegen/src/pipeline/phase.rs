use eyre::Result;

use super::CompilationContext;

/// One step from manifest to expanded types.
///
/// A phase reads what earlier phases left in the [`CompilationContext`] and
/// stores its own output there. Problems the user should fix are recorded as
/// diagnostics; returning `Err` stops the pipeline.
pub trait Phase: Send + Sync {
    /// Stable name, used in diagnostics, plugin hooks and snapshot file names.
    fn name(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
