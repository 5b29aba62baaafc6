//! Getting rendered files onto disk, and noticing the ones left behind.

mod imports;
mod orphans;
mod registry;

pub use imports::ImportCollector;
pub use orphans::{OrphanFile, find_orphans, sweep_orphans};
pub use registry::{FileCategory, FileEntry, FileRegistry};
