use eyre::Result;
use frost_manifest::Manifest;
use tracing::debug;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{ExpandPhase, LowerPhase, ValidatePhase},
};
use crate::NamingConvention;

/// Runs the built-in phases for one target language, then any extra phases.
pub struct Pipeline {
    naming: NamingConvention,
    extra_phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// `naming` decides the member names the expand phase produces.
    pub fn new(naming: NamingConvention) -> Self {
        Self {
            naming,
            extra_phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Run `phase` after expand.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.extra_phases.push(Box::new(phase));
        self
    }

    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Compile `manifest` into a fresh context.
    pub fn run(&self, manifest: Manifest) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(manifest);
        self.run_in(&mut ctx)?;
        Ok(ctx)
    }

    /// Compile into a caller-owned context.
    ///
    /// The context outlives a failed phase, so `frost check` can still list
    /// every diagnostic recorded before the failure.
    #[tracing::instrument(skip_all, fields(project = %ctx.manifest.project.name))]
    pub fn run_in(&self, ctx: &mut CompilationContext) -> Result<()> {
        let validate = ValidatePhase::new();
        let expand = ExpandPhase::new(self.naming);
        let builtin: [&dyn Phase; 3] = [&validate, &LowerPhase, &expand];

        let extra = self.extra_phases.iter().map(|phase| phase.as_ref());
        for phase in builtin.into_iter().chain(extra) {
            self.run_phase(phase, ctx)?;
        }

        Ok(())
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let name = phase.name();
        debug!(phase = name, "running phase");

        for plugin in &self.plugins {
            plugin.on_before_phase(name, ctx)?;
        }
        phase.run(ctx)?;
        for plugin in &self.plugins {
            plugin.on_after_phase(name, ctx)?;
        }

        debug!(phase = name, diagnostics = ctx.diagnostics.len(), "phase complete");
        Ok(())
    }
}
