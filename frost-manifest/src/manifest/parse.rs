//! Parsing `frost.toml` from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, TypeDecl, validate::ParseContext};
use crate::{Error, Result};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "frost.toml")
    }
}

impl Manifest {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse `content`, naming it `filename` in error reports.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Deserialize, then check names, field types and defaults against the source.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = ParseContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_manifest(&manifest, &ctx)?;
    Ok(manifest)
}

fn validate_manifest(manifest: &Manifest, ctx: &ParseContext) -> Result<()> {
    if manifest.project.name.trim().is_empty() {
        return Err(ctx.validation_error("project name cannot be empty", ctx.find_span("name")));
    }

    // Each dotted segment becomes part of a C# namespace
    for segment in manifest.project.namespace.iter().flat_map(|ns| ns.split('.')) {
        ctx.validate_name(segment, "namespace")?;
    }

    for (name, decl) in &manifest.types {
        ctx.validate_name(name, "type")?;
        validate_type(decl, &ctx.push(name))?;
    }

    Ok(())
}

fn validate_type(decl: &TypeDecl, ctx: &ParseContext) -> Result<()> {
    for field in &decl.fields {
        ctx.validate_name(&field.name, "field")?;

        let ty = field
            .field_type()
            .map_err(|reason| ctx.invalid_field_type(&field.name, &field.ty, reason))?;

        let fits = match field.default_value() {
            Ok(Some(value)) => value.check_fits(&ty),
            Ok(None) => Ok(()),
            Err(reason) => Err(reason),
        };

        if let Err(reason) = fits {
            let message = format!(
                "invalid default for field '{}' in '{}': {}",
                field.name,
                ctx.path_string(),
                reason
            );
            return Err(ctx.validation_error(message, ctx.find_span(&field.name)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"
[project]
name = "orchard"
language = "rust"
"#;

    fn parse(body: &str) -> Result<Manifest> {
        format!("{}{}", HEADER, body).parse()
    }

    #[test]
    fn test_parse_valid_manifest() {
        let manifest = parse(
            r#"
[types.Fruit]
description = "A piece of fruit"

[types.Fruit.fields]
color = "string"
skinThickness = { type = "int", default = 1 }
"#,
        )
        .unwrap();

        assert_eq!(manifest.project.name, "orchard");
        assert!(manifest.has_type("Fruit"));
        assert_eq!(manifest.field_count(), 2);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = parse("[types.Fruit\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_missing_project_is_parse_error() {
        let err = "[types.Fruit]".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_type_name() {
        let err = parse("[types.2Fruit]\n").unwrap_err();
        match *err {
            Error::InvalidIdentifier { name, context, .. } => {
                assert_eq!(name, "2Fruit");
                assert_eq!(context, "type");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_field_name() {
        let err = parse(
            r#"
[types.Fruit]
fields = [{ name = "skin-thickness", type = "int" }]
"#,
        )
        .unwrap_err();
        match *err {
            Error::InvalidIdentifier { name, context, .. } => {
                assert_eq!(name, "skin-thickness");
                assert_eq!(context, "field in 'Fruit'");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_field_type() {
        let err = parse(
            r#"
[types.Fruit.fields]
color = "list<string"
"#,
        )
        .unwrap_err();
        match *err {
            Error::InvalidFieldType {
                type_name,
                field,
                ty,
                span,
                ..
            } => {
                assert_eq!(type_name, "Fruit");
                assert_eq!(field, "color");
                assert_eq!(ty, "list<string");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_default_must_match_type() {
        let err = parse(
            r#"
[types.Fruit.fields]
ripe = { type = "bool", default = "yes" }
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid default for field 'ripe'"));
    }

    #[test]
    fn test_default_not_allowed_on_collections() {
        let err = parse(
            r#"
[types.Basket.fields]
sizes = { type = "list<int>", default = 1 }
"#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_reserved_words_are_accepted() {
        let manifest = parse(
            r#"
[types.Token.fields]
type = "string"
class = "int"
"#,
        )
        .unwrap();
        assert_eq!(manifest.get_type("Token").unwrap().fields.len(), 2);
    }

    #[test]
    fn test_invalid_namespace() {
        let err = r#"
[project]
name = "orchard"
language = "csharp"
namespace = "Orchard..Types"
"#
        .parse::<Manifest>()
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Manifest::from_file("/nonexistent/frost.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
