//! The seam between the shared transform and each target language.
//!
//! A backend supplies a [`NamingConvention`] for the transform, a
//! [`TypeMapper`] for field types, and a [`LanguageCodegen`] that renders
//! and writes the files.

mod naming;
mod traits;

pub use naming::NamingConvention;
pub use traits::{CleanResult, GenerateResult, LanguageCodegen, PreviewFile, TypeMapper};
