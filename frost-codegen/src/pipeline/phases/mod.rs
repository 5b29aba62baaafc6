//! The phases every pipeline runs, in order: validate, lower, expand.

mod expand;
mod lower;
mod validate;

pub use expand::ExpandPhase;
pub use lower::LowerPhase;
pub use validate::{DuplicateTypeLint, EmptyDescriptionLint, Lint, UnusedBuilderLint, ValidatePhase};
