//! Line-oriented source writer shared by the backends.
//!
//! Backend AST nodes implement [`Renderable`] and describe themselves as a
//! flat list of [`CodeFragment`]s. [`CodeBuilder`] owns indentation, so a
//! node never needs to know how deeply it is nested.

mod code_builder;
mod indent;
mod raw;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use raw::RawCode;
pub use renderable::{CodeFragment, Renderable};
