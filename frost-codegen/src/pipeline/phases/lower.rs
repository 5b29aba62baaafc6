//! Lower phase - transforms manifest to the schema IR.

use eyre::{Result, eyre};
use frost_ir::{FieldSpec, ProjectMeta, SchemaIR, TypeSpec};
use frost_manifest::{FieldDecl, Manifest, TypeDecl};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that transforms the manifest into [`SchemaIR`].
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.ir = Some(lower_manifest(&ctx.manifest)?);
        Ok(())
    }
}

/// Lower a manifest into a [`SchemaIR`].
pub fn lower_manifest(manifest: &Manifest) -> Result<SchemaIR> {
    let types = manifest
        .types
        .iter()
        .map(|(name, decl)| lower_type(name, decl))
        .collect::<Result<_>>()?;

    Ok(SchemaIR {
        meta: ProjectMeta {
            name: manifest.project.name.clone(),
            namespace: manifest.project.namespace.clone(),
        },
        types,
    })
}

fn lower_type(name: &str, decl: &TypeDecl) -> Result<TypeSpec> {
    let fields = decl
        .fields
        .iter()
        .map(|field| lower_field(name, field))
        .collect::<Result<_>>()?;

    Ok(TypeSpec {
        name: name.to_string(),
        description: decl.description.clone(),
        fields,
        has_builder: decl.builder,
    })
}

fn lower_field(type_name: &str, field: &FieldDecl) -> Result<FieldSpec> {
    let ty = field.field_type().map_err(|reason| {
        eyre!(
            "invalid type '{}' for field '{}' in '{}': {}",
            field.ty,
            field.name,
            type_name,
            reason
        )
    })?;
    let default = field.default_value().map_err(|reason| {
        eyre!(
            "invalid default for field '{}' in '{}': {}",
            field.name,
            type_name,
            reason
        )
    })?;

    Ok(FieldSpec {
        name: field.name.clone(),
        ty,
        default,
        description: field.description.clone(),
    })
}
