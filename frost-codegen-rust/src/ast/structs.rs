//! `struct` items.

use frost_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::doc_fragments;

/// One named field of a [`Struct`].
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    ty: String,
    doc: Option<String>,
    public: bool,
}

impl Field {
    /// A `pub` field.
    pub fn public(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            public: true,
        }
    }

    /// A field visible only inside its module.
    pub fn private(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            public: false,
            ..Self::public(name, ty)
        }
    }

    pub fn doc_opt(mut self, doc: Option<&str>) -> Self {
        self.doc = doc.map(str::to_owned);
        self
    }

    fn fragments(&self) -> impl Iterator<Item = CodeFragment> + '_ {
        let vis = if self.public { "pub " } else { "" };
        self.doc
            .as_deref()
            .map(doc_fragments)
            .unwrap_or_default()
            .into_iter()
            .chain([CodeFragment::Line(format!("{vis}{}: {},", self.name, self.ty))])
    }
}

/// A `pub struct` with named fields.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    doc: Option<String>,
    derives: Vec<String>,
    fields: Vec<Field>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            derives: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn doc_opt(mut self, doc: Option<&str>) -> Self {
        self.doc = doc.map(str::to_owned);
        self
    }

    pub fn derives<'d>(mut self, traits: impl IntoIterator<Item = &'d str>) -> Self {
        self.derives.extend(traits.into_iter().map(str::to_owned));
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn build(&self) -> String {
        let mut out = CodeBuilder::rust();
        out.emit(self);
        out.build()
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.doc.as_deref().map(doc_fragments).unwrap_or_default();

        if !self.derives.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "#[derive({})]",
                self.derives.join(", ")
            )));
        }

        // Unit-like braces keep `Self {}` literals valid for field-less types.
        if self.fields.is_empty() {
            fragments.push(CodeFragment::Line(format!("pub struct {} {{}}", self.name)));
        } else {
            fragments.push(CodeFragment::Block {
                header: format!("pub struct {} {{", self.name),
                body: self.fields.iter().flat_map(Field::fragments).collect(),
                close: Some("}".into()),
            });
        }

        fragments
    }
}
