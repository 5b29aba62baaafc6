//! Core utilities and types for the frost generator.
//!
//! This crate provides fundamental types and utilities used across
//! the frost crates: generated file writing, case conversion and
//! identifier checks.

mod file;
mod utils;

pub use file::{File, GENERATED_HEADER, Overwrite, WriteResult, is_generated};
pub use utils::{to_camel_case, to_pascal_case, to_snake_case, validate_identifier};
