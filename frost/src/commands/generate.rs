use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use frost_manifest::Language;

use super::ManifestArgs;
use crate::{
    ops::{self, generate::GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// Directory the project output path is resolved against
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Override the language declared in frost.toml
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Print the generated files instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Dump the IR after each pipeline phase into .frost/debug/
    #[arg(long)]
    pub visualize: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let (manifest, lang) = self.manifest.load_for(self.language);
        let options = GenerateOptions {
            output_dir: &self.output,
            dry_run: self.dry_run,
            visualize: self.visualize,
        };

        ops::generate(manifest, lang, options)?.render(&mut TerminalOutput::new());
        Ok(())
    }
}
