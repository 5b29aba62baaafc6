use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::ManifestArgs;
use crate::{
    ops::{self, clean::CleanOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// Directory the project output path is resolved against
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// List the orphaned files without deleting them
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let (manifest, lang) = self.manifest.load_for(None);
        let options = CleanOptions {
            output_dir: &self.output,
            dry_run: self.dry_run,
        };

        ops::clean(manifest, lang, options)?.render(&mut TerminalOutput::new());
        Ok(())
    }
}
