//! Parsing and validation of `frost.toml` manifests.
//!
//! Errors carry the manifest source so they render with labelled spans
//! through [`miette`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result};
pub use manifest::{
    FieldDecl, FrostToml, Language, Manifest, ParseContext, ProjectConfig, TypeDecl,
};
