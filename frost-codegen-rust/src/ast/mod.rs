//! Rust AST builders for generating structs, impls, and functions.
//!
//! These provide a high-level API for constructing Rust syntax,
//! which can then be rendered via CodeBuilder.

mod fns;
mod impls;
mod literals;
mod structs;

pub use fns::{Fn, Param, Receiver};
pub use impls::Impl;
pub use literals::StructLiteral;
pub use structs::{Field, Struct};

use frost_codegen::CodeFragment;

/// Turn a possibly multi-line description into `///` fragments.
pub(crate) fn doc_fragments(doc: &str) -> Vec<CodeFragment> {
    doc.lines()
        .map(|line| CodeFragment::Doc(line.trim_end().to_string()))
        .collect()
}
