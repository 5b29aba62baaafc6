mod generator;
mod naming;
mod rust_file;
mod type_mapper;

pub mod ast;
pub mod files;

pub use ast::{Field, Fn, Impl, Param, Receiver, Struct, StructLiteral};
pub use frost_codegen::{CleanResult, GenerateResult, LanguageCodegen, PreviewFile, RawCode};
pub use generator::Generator;
pub use naming::RUST_NAMING;
pub use rust_file::{RustFile, Use};
pub use type_mapper::RustTypeMapper;
