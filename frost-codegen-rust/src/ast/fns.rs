//! Functions and their parameters.

use std::fmt;

use frost_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::doc_fragments;

/// How a method takes `self`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receiver {
    /// `&self`
    Ref,
    /// `&mut self`
    Mut,
}

impl Receiver {
    fn as_str(self) -> &'static str {
        match self {
            Self::Ref => "&self",
            Self::Mut => "&mut self",
        }
    }
}

/// `name: ty`
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}

/// A free function or method. Public unless [`Fn::private`] is called,
/// which trait impls need.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    attrs: Vec<String>,
    public: bool,
    receiver: Option<Receiver>,
    params: Vec<Param>,
    returns: Option<String>,
    body: Vec<CodeFragment>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            attrs: Vec::new(),
            public: true,
            receiver: None,
            params: Vec::new(),
            returns: None,
            body: Vec::new(),
        }
    }

    pub fn doc(self, doc: impl Into<String>) -> Self {
        Self {
            doc: Some(doc.into()),
            ..self
        }
    }

    pub fn doc_opt(self, doc: Option<&str>) -> Self {
        Self {
            doc: doc.map(str::to_owned),
            ..self
        }
    }

    /// An outer attribute, written without `#[...]`.
    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn private(self) -> Self {
        Self { public: false, ..self }
    }

    pub fn receiver(self, receiver: Receiver) -> Self {
        Self {
            receiver: Some(receiver),
            ..self
        }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn returns(self, ty: impl Into<String>) -> Self {
        Self {
            returns: Some(ty.into()),
            ..self
        }
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }

    /// Append a multi-line node such as a struct literal to the body.
    pub fn body_node(mut self, node: &impl Renderable) -> Self {
        self.body.extend(node.to_fragments());
        self
    }

    fn signature(&self) -> String {
        let receiver = self.receiver.map(|r| r.as_str().to_owned());
        let params: Vec<String> = receiver
            .into_iter()
            .chain(self.params.iter().map(Param::to_string))
            .collect();

        let mut sig = String::new();
        if self.public {
            sig.push_str("pub ");
        }
        sig.push_str(&format!("fn {}({})", self.name, params.join(", ")));
        if let Some(ret) = &self.returns {
            sig.push_str(&format!(" -> {ret}"));
        }
        sig.push_str(" {");
        sig
    }

    pub fn build(&self) -> String {
        let mut out = CodeBuilder::rust();
        out.emit(self);
        out.build()
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let docs = self.doc.as_deref().map(doc_fragments).unwrap_or_default();
        let attrs = self.attrs.iter().map(|a| CodeFragment::Line(format!("#[{a}]")));

        docs.into_iter()
            .chain(attrs)
            .chain([CodeFragment::Block {
                header: self.signature(),
                body: self.body.clone(),
                close: Some("}".to_owned()),
            }])
            .collect()
    }
}
