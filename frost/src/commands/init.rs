use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result, eyre};
use frost_manifest::Language;

use crate::ops;

#[derive(Args)]
pub struct InitCommand {
    /// Project name; `.` names it after the current directory
    #[arg(default_value = ".")]
    pub name: String,

    /// Directory to create frost.toml in (defaults to ./<name>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Language the project generates
    #[arg(short, long, default_value = "rust")]
    pub language: Language,
}

/// Project name and target directory after resolving `.` and defaults.
#[derive(Debug, PartialEq)]
struct Target {
    name: String,
    dir: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let target = self.target(|| std::env::current_dir().wrap_err("Failed to read current directory"))?;

        std::fs::create_dir_all(&target.dir)
            .wrap_err_with(|| format!("Failed to create {}", target.dir.display()))?;
        let path = ops::init(&target.name, self.language, &target.dir)?;

        println!("Created {} ({})", path.display(), self.language);
        println!();
        println!("Next steps:");
        if target.dir != Path::new(".") {
            println!("  cd {}", target.dir.display());
        }
        println!("  frost check");
        println!("  frost generate");
        Ok(())
    }

    fn target(&self, cwd: impl FnOnce() -> Result<PathBuf>) -> Result<Target> {
        if self.name != "." {
            return Ok(Target {
                name: self.name.clone(),
                dir: self.output.clone().unwrap_or_else(|| PathBuf::from(&self.name)),
            });
        }

        let cwd = cwd()?;
        let name = cwd
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| eyre!("Current directory has no usable name"))?;
        Ok(Target {
            name: name.to_owned(),
            dir: self.output.clone().unwrap_or_else(|| PathBuf::from(".")),
        })
    }
}
