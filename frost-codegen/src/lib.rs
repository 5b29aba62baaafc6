//! Shared code generation utilities for the frost generator.
//!
//! This crate provides the language-agnostic half of code generation:
//! the transform that expands a [`TypeSpec`](frost_ir::TypeSpec) into the
//! members of an immutable type, and the plumbing each backend shares.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`transform`] - The field-to-immutable-type transform
//! - [`pipeline`] - Compilation phases, plugins and diagnostics
//! - [`generation`] - Output management (orphaned file detection)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, NamingConvention, etc.)
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod generation;
pub mod language;
pub mod pipeline;
pub mod transform;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, CodeFragment, Indent, RawCode, Renderable};
pub use language::{
    CleanResult, GenerateResult, LanguageCodegen, NamingConvention, PreviewFile, TypeMapper,
};
pub use transform::{TransformError, Transformer};
