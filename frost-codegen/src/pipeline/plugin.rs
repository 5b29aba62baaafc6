use eyre::Result;

use super::CompilationContext;

/// Observer called around every phase, such as the [`SnapshotPlugin`](super::SnapshotPlugin)
/// behind `frost generate --visualize`.
///
/// Both hooks default to doing nothing. An `Err` from either aborts the run.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    fn on_after_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
