//! Init operation - write a starter frost.toml.

use std::path::{Path, PathBuf};

use eyre::{Result, bail};
use frost_core::{File, WriteResult};
use frost_manifest::Language;

/// Write a starter `frost.toml` into `output_dir`.
///
/// Never overwrites an existing manifest.
pub fn init(name: &str, language: Language, output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join("frost.toml");
    let file = File::new(&path, starter_manifest(name, language)).create_once();

    match file.write()? {
        WriteResult::Written => {
            tracing::info!(path = %path.display(), %language, "wrote starter manifest");
            Ok(path)
        }
        WriteResult::Unchanged | WriteResult::Skipped => {
            bail!("{} already exists", path.display())
        }
    }
}

/// Starter manifest content for a new project.
pub fn starter_manifest(name: &str, language: Language) -> String {
    let namespace = match language {
        Language::CSharp => format!("namespace = \"{}\"\n", frost_core::to_pascal_case(name)),
        Language::Rust => String::new(),
    };

    format!(
        r#"[project]
name = "{name}"
language = "{language}"
{namespace}
[types.Fruit]
description = "A piece of fruit"

[types.Fruit.fields]
color = "string"
skinThickness = {{ type = "int", default = 1, description = "Thickness of the skin in millimetres" }}

[types.Basket]
description = "Holds fruit"
builder = true
fields = [
    {{ name = "size", type = "int" }},
    {{ name = "contents", type = "list<Fruit>" }},
]
"#
    )
}
