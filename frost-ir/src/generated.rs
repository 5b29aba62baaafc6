//! Output side of the IR: the members of an expanded immutable type.
//!
//! A [`GeneratedType`] is produced from a [`TypeSpec`](crate::TypeSpec) by
//! the transformer. All names are final target-language identifiers, with
//! reserved words already escaped, so backends only decide layout and
//! syntax.

use serde::Serialize;

use crate::{DefaultValue, FieldType};

/// An immutable value type ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedType {
    /// Target type name.
    pub name: String,
    /// Declared type name.
    pub source: String,
    /// File name (without extension) the type is written to.
    pub file_stem: String,
    pub description: Option<String>,
    /// Private backing fields, one per declared field.
    pub fields: Vec<BackingField>,
    /// Read-only accessors, one per declared field.
    pub accessors: Vec<Accessor>,
    /// Single-field withers, one per declared field.
    pub withers: Vec<Wither>,
    /// Zero-parameter factory.
    pub empty_factory: Factory,
    /// Factory taking every field in declared order. Absent for types without fields.
    pub full_factory: Option<Factory>,
    /// Multi-field updater. Absent for types without fields.
    pub updater: Option<Updater>,
    pub builder: Option<GeneratedBuilderType>,
}

impl GeneratedType {
    /// Returns true if the type has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Find a backing field by its target name.
    pub fn field(&self, name: &str) -> Option<&BackingField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A private field holding one declared value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackingField {
    /// Target field name.
    pub name: String,
    /// Declared field name.
    pub source: String,
    /// Parameter name used for this field in factories and constructors.
    pub param: String,
    pub ty: FieldType,
    pub default: Option<DefaultValue>,
    pub description: Option<String>,
}

/// Public read-only access to a backing field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Accessor {
    pub name: String,
    /// Target name of the backing field.
    pub field: String,
    pub ty: FieldType,
}

/// Returns a copy of the value with one field replaced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wither {
    pub name: String,
    /// Target name of the backing field.
    pub field: String,
    pub ty: FieldType,
}

/// A static factory method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Factory {
    pub name: String,
    pub params: Vec<Param>,
}

/// Returns a copy of the value with any subset of fields replaced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Updater {
    pub name: String,
    /// One parameter per field, each optional in the rendered signature.
    pub params: Vec<Param>,
}

/// A method or constructor parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Param {
    pub name: String,
    pub ty: FieldType,
}

/// Mutable companion of a [`GeneratedType`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedBuilderType {
    /// Builder type name.
    pub name: String,
    /// Whether the builder is declared inside the immutable type.
    pub nested: bool,
    /// Mutable properties, one per declared field.
    pub properties: Vec<BuilderProperty>,
    /// Builder method producing the immutable snapshot.
    pub to_immutable: String,
    /// Static method on the immutable type creating an empty builder.
    pub create_builder: String,
    /// Instance method on the immutable type seeding a builder from it.
    pub to_builder: String,
}

/// A get/set pair on the builder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuilderProperty {
    pub getter: String,
    pub setter: String,
    /// Target name of the backing field.
    pub field: String,
    pub ty: FieldType,
}
