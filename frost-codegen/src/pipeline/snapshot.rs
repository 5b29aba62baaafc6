//! Per-phase JSON dumps behind `frost generate --visualize`.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use eyre::{Result, eyre};
use frost_ir::{GeneratedType, SchemaIR};
use serde::Serialize;
use tracing::debug;

use super::{CompilationContext, Diagnostic, Plugin};

/// Context contents right after one phase finished.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    pub phase: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ir: Option<SchemaIR>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<Vec<GeneratedType>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl PhaseSnapshot {
    fn of(phase: &str, ctx: &CompilationContext) -> Self {
        Self {
            phase: phase.to_owned(),
            ir: ctx.ir.clone(),
            expanded: ctx.expanded.clone(),
            diagnostics: ctx.diagnostics.clone(),
        }
    }

    /// Write as `<dir>/<phase>.json`.
    fn write(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.json", self.phase));
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        debug!(path = %path.display(), "wrote snapshot");
        Ok(())
    }
}

/// Keeps a [`PhaseSnapshot`] after every phase, optionally mirroring each
/// one to disk as soon as it is taken.
#[derive(Default)]
pub struct SnapshotPlugin {
    taken: Mutex<Vec<PhaseSnapshot>>,
    dump_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    /// Keep snapshots in memory only.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dump_dir: Some(dir.into()),
            ..Self::default()
        }
    }

    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        match self.taken.lock() {
            Ok(taken) => taken.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Write every snapshot taken so far into `dir`.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        self.snapshots()
            .iter()
            .try_for_each(|snapshot| snapshot.write(dir.as_ref()))
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let snapshot = PhaseSnapshot::of(phase, ctx);
        if let Some(dir) = &self.dump_dir {
            snapshot.write(dir)?;
        }
        self.taken
            .lock()
            .map_err(|_| eyre!("snapshot buffer lock poisoned"))?
            .push(snapshot);
        Ok(())
    }
}
