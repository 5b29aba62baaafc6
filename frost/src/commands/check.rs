use std::process::ExitCode;

use clap::Args;
use eyre::Result;
use frost_manifest::Language;

use super::ManifestArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// Check against another language than the one declared in frost.toml
    #[arg(short, long)]
    pub language: Option<Language>,
}

impl CheckCommand {
    /// Fails the process when any error diagnostic was raised.
    pub fn run(&self) -> Result<ExitCode> {
        let (manifest, lang) = self.manifest.load_for(self.language);

        let report = ops::check(manifest, lang, &self.manifest.config);
        report.render(&mut TerminalOutput::new());

        Ok(if report.is_valid() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}
