mod check;
mod clean;
mod completions;
mod generate;
mod init;
mod list;

use std::{path::PathBuf, process::ExitCode};

use clap::{Args, Parser, Subcommand};
use eyre::Result;
use frost_manifest::{FrostToml, Language, Manifest};
use tracing_subscriber::EnvFilter;

use crate::language::LanguageSupport;

#[derive(Parser)]
#[command(name = "frost", version)]
#[command(about = "Generate immutable value types from TOML definitions")]
pub(crate) struct Cli {
    /// Show debug logs (FROST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter frost.toml
    Init(init::InitCommand),
    /// Generate code from frost.toml
    Generate(generate::GenerateCommand),
    /// Validate frost.toml without generating code
    Check(check::CheckCommand),
    /// List the types declared in frost.toml
    List(list::ListCommand),
    /// Remove orphaned generated files
    Clean(clean::CleanCommand),
    /// Print a shell completion script
    Completions(completions::CompletionsCommand),
}

impl Cli {
    pub fn run(&self) -> Result<ExitCode> {
        install_subscriber(self.verbose);

        match &self.command {
            Commands::Check(cmd) => return cmd.run(),
            Commands::Init(cmd) => cmd.run()?,
            Commands::Generate(cmd) => cmd.run()?,
            Commands::List(cmd) => cmd.run()?,
            Commands::Clean(cmd) => cmd.run()?,
            Commands::Completions(cmd) => cmd.run()?,
        }
        Ok(ExitCode::SUCCESS)
    }
}

/// Where to find the manifest, shared by every command that reads one.
#[derive(Args)]
pub(crate) struct ManifestArgs {
    /// Path to frost.toml
    #[arg(short, long, default_value = "frost.toml")]
    pub config: PathBuf,
}

impl ManifestArgs {
    /// Load the manifest. A broken manifest is reported through miette and
    /// ends the process, since there is nothing useful to continue with.
    pub fn load(&self) -> FrostToml {
        match FrostToml::open(&self.config) {
            Ok(toml) => toml,
            Err(err) => {
                eprintln!("{:?}", miette::Report::new(*err));
                std::process::exit(1);
            }
        }
    }

    /// Load the manifest, retargeted to `language` when one is given.
    pub fn load_for(&self, language: Option<Language>) -> (Manifest, LanguageSupport) {
        let mut manifest = self.load().manifest().clone();
        if let Some(language) = language {
            manifest.project.language = language;
        }
        let lang = LanguageSupport::from(manifest.project.language);
        (manifest, lang)
    }
}

fn install_subscriber(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("FROST_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

    // A subscriber may already be installed, e.g. by a test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
