//! C# class builder.

use frost_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::summary_fragments;

/// Builder for `partial` classes.
///
/// Every member is preceded by a blank line, including the first.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    doc: Option<String>,
    members: Vec<Vec<CodeFragment>>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            members: Vec::new(),
        }
    }

    pub fn doc_opt(mut self, doc: Option<&str>) -> Self {
        self.doc = doc.map(str::to_string);
        self
    }

    /// Add a member (any Renderable, including a nested class).
    pub fn member(mut self, member: &impl Renderable) -> Self {
        self.members.push(member.to_fragments());
        self
    }

    /// Build the class as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::csharp();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.doc.as_deref().map(summary_fragments).unwrap_or_default();

        let body = self
            .members
            .iter()
            .flat_map(|member| std::iter::once(CodeFragment::Blank).chain(member.iter().cloned()))
            .collect();

        fragments.push(CodeFragment::Block {
            header: format!("public partial class {} {{", self.name),
            body,
            close: Some("}".to_string()),
        });
        fragments
    }
}
