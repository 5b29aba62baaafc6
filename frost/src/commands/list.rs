use clap::Args;
use eyre::Result;
use frost_manifest::{FieldDecl, TypeDecl};

use super::ManifestArgs;

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub manifest: ManifestArgs,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let frost_toml = self.manifest.load();
        let manifest = frost_toml.manifest();

        if manifest.types.is_empty() {
            println!("No types defined");
            return Ok(());
        }

        println!("Types:");
        for (name, decl) in &manifest.types {
            println!("  {}", type_line(name, decl));
            for field in &decl.fields {
                println!("    {}", field_line(field));
            }
        }

        Ok(())
    }
}

fn type_line(name: &str, decl: &TypeDecl) -> String {
    let mut line = name.to_string();
    if decl.builder {
        line.push_str(" [builder]");
    }
    if let Some(desc) = &decl.description {
        line.push_str(&format!("  {}", desc));
    }
    line
}

fn field_line(field: &FieldDecl) -> String {
    match &field.default {
        Some(default) => format!("{}: {} = {}", field.name, field.ty, default),
        None => format!("{}: {}", field.name, field.ty),
    }
}
