//! Nodes that describe themselves as fragments.

/// A piece of emitted source before indentation is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    Line(String),
    Blank,
    /// `///` comment. Rust docs and C# XML docs share the prefix.
    Doc(String),
    /// `header`, then `body` one level deeper, then `close` if present.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
}

/// A backend AST node that can be written by a [`CodeBuilder`](super::CodeBuilder).
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        T::to_fragments(self)
    }
}
