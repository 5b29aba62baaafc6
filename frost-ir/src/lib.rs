//! Intermediate representation types for the frost generator.
//!
//! This crate provides the neutral data model shared by every stage of
//! the frost pipeline. The input side ([`TypeSpec`], [`FieldSpec`]) is
//! a plain description of the value types to synthesize; the output side
//! ([`GeneratedType`], [`GeneratedBuilderType`]) lists every member the
//! backends must render, already named for the target language.
//!
//! # Architecture
//!
//! ```text
//! frost.toml → frost-manifest (parsing) → frost-ir (TypeSpec)
//!            → transform (GeneratedType) → backend (source files)
//! ```
//!
//! The IR types are:
//! - Language-agnostic (no Rust/C#-specific concerns)
//! - Independent of how declarations are sourced
//! - Self-contained (no dependencies beyond serde)

mod generated;
mod spec;
mod types;

pub use generated::{
    Accessor, BackingField, BuilderProperty, Factory, GeneratedBuilderType, GeneratedType, Param,
    Updater, Wither,
};
pub use spec::{FieldSpec, ProjectMeta, SchemaIR, TypeSpec};
pub use types::{DefaultValue, FieldType, PrimitiveType};
