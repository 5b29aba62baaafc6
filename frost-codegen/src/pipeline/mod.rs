//! Manifest to expanded types, one phase at a time.
//!
//! [`Pipeline`] runs validate, lower and expand, then any extra phases, over
//! a shared [`CompilationContext`]. [`Plugin`]s are called around every phase;
//! [`SnapshotPlugin`] uses that to dump intermediate state for
//! `frost generate --visualize`.
//!
//! ```ignore
//! let ctx = Pipeline::new(RUST_NAMING).run(manifest)?;
//! for warning in ctx.warnings() {
//!     eprintln!("{warning}");
//! }
//! let generator = Generator::from_context(ctx);
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
