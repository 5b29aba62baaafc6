//! C# code generator for frost.
//!
//! This crate renders expanded immutable types as C# partial classes.
//!
//! # Usage
//!
//! This crate is used internally by the `frost` CLI tool. You typically don't need
//! to use it directly.
//!
//! ```ignore
//! use frost_codegen_csharp::Generator;
//! use frost_codegen::LanguageCodegen;
//! use frost_manifest::Manifest;
//! use std::path::Path;
//!
//! let manifest = Manifest::from_file("frost.toml")?;
//! let generator = Generator::from_manifest(manifest)?;
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("."))?;
//! ```
//!
//! # Generated Output
//!
//! - `Generated/<Name>.generated.cs` - one partial class per declared type
//! - `Generated/Optional.generated.cs` - the `Optional<T>` struct taken by `With(...)`

mod cs_file;
mod generator;
mod naming;
mod type_mapper;

pub mod ast;
pub mod files;

pub use ast::{Class, Constructor, FieldDecl, Method, Property};
pub use cs_file::CSharpFile;
pub use frost_codegen::{CleanResult, GenerateResult, LanguageCodegen, PreviewFile, RawCode};
pub use generator::Generator;
pub use naming::CSHARP_NAMING;
pub use type_mapper::CSharpTypeMapper;
