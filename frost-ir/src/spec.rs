//! Input side of the IR: the declared value types.
//!
//! # Architecture
//!
//! ```text
//! frost.toml → Manifest (parsing) → SchemaIR (lowering) → Transformer (expansion)
//! ```

use serde::Serialize;

use crate::{DefaultValue, FieldType};

/// Lowered manifest - every declared type plus project metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaIR {
    /// Project metadata.
    pub meta: ProjectMeta,
    /// Declared types, in declaration order.
    pub types: Vec<TypeSpec>,
}

impl SchemaIR {
    /// Names of all declared types, in declaration order.
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.name.as_str()).collect()
    }

    /// Find a declared type by name.
    pub fn get(&self, name: &str) -> Option<&TypeSpec> {
        self.types.iter().find(|t| t.name == name)
    }
}

/// Project metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectMeta {
    /// Project name.
    pub name: String,
    /// Namespace to wrap generated code in, when the target has one.
    pub namespace: Option<String>,
}

/// Declaration of an immutable value type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeSpec {
    /// Type name as declared.
    pub name: String,
    /// Description emitted as documentation.
    pub description: Option<String>,
    /// Fields, in declared order.
    pub fields: Vec<FieldSpec>,
    /// Whether a mutable builder is generated alongside the type.
    pub has_builder: bool,
}

impl TypeSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
            has_builder: false,
        }
    }

    /// Append a field with the given name and type.
    pub fn field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.fields.push(FieldSpec::new(name, ty));
        self
    }

    /// Append a fully specified field.
    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_builder(mut self, has_builder: bool) -> Self {
        self.has_builder = has_builder;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns true if the type declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A declared field of a [`TypeSpec`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Field name as declared.
    pub name: String,
    /// Declared type.
    pub ty: FieldType,
    /// Value used by the zero-parameter factory.
    pub default: Option<DefaultValue>,
    /// Description emitted as documentation.
    pub description: Option<String>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            default: None,
            description: None,
        }
    }

    pub fn default_value(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_spec_builder_style() {
        let spec = TypeSpec::new("Fruit")
            .description("A piece of fruit")
            .field("color", FieldType::string())
            .with_field(
                FieldSpec::new("skinThickness", FieldType::int())
                    .default_value(DefaultValue::Int(1)),
            )
            .with_builder(true);

        assert_eq!(spec.name, "Fruit");
        assert!(spec.has_builder);
        assert!(!spec.is_empty());
        let names: Vec<_> = spec.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["color", "skinThickness"]);
        assert_eq!(spec.fields[1].default, Some(DefaultValue::Int(1)));
    }

    #[test]
    fn test_schema_lookup() {
        let schema = SchemaIR {
            meta: ProjectMeta {
                name: "orchard".into(),
                namespace: None,
            },
            types: vec![TypeSpec::new("Fruit"), TypeSpec::new("Basket")],
        };

        assert_eq!(schema.type_names(), vec!["Fruit", "Basket"]);
        assert!(schema.get("Basket").is_some());
        assert!(schema.get("basket").is_none());
    }
}
