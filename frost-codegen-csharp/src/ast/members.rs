//! Class members: fields, constructors, methods and properties.

use frost_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::summary_fragments;

/// A field declaration, e.g. `private readonly System.Int32 size;`.
#[derive(Debug, Clone)]
pub struct FieldDecl {
    modifiers: String,
    ty: String,
    name: String,
}

impl FieldDecl {
    /// A `private readonly` field.
    pub fn readonly(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            modifiers: "private readonly".to_string(),
            ty: ty.into(),
            name: name.into(),
        }
    }

    /// A mutable `private` field.
    pub fn mutable(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            modifiers: "private".to_string(),
            ty: ty.into(),
            name: name.into(),
        }
    }
}

impl Renderable for FieldDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!(
            "{} {} {};",
            self.modifiers, self.ty, self.name
        ))]
    }
}

/// A constructor. The opening brace goes on its own line.
#[derive(Debug, Clone)]
pub struct Constructor {
    visibility: String,
    name: String,
    doc: Option<String>,
    params: Vec<String>,
    body: Vec<String>,
}

impl Constructor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            visibility: "public".to_string(),
            name: name.into(),
            doc: None,
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn internal(mut self) -> Self {
        self.visibility = "internal".to_string();
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a `Type name` parameter.
    pub fn param(mut self, ty: &str, name: &str) -> Self {
        self.params.push(format!("{} {}", ty, name));
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }
}

impl Renderable for Constructor {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.doc.as_deref().map(summary_fragments).unwrap_or_default();
        fragments.push(CodeFragment::Line(format!(
            "{} {}({})",
            self.visibility,
            self.name,
            self.params.join(", ")
        )));
        fragments.push(CodeFragment::Block {
            header: "{".to_string(),
            body: self.body.iter().cloned().map(CodeFragment::Line).collect(),
            close: Some("}".to_string()),
        });
        fragments
    }
}

/// A method. The opening brace stays on the signature line.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    doc: Option<String>,
    is_static: bool,
    return_type: String,
    params: Vec<String>,
    body: Vec<String>,
}

impl Method {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            is_static: false,
            return_type: return_type.into(),
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn doc_opt(mut self, doc: Option<&str>) -> Self {
        self.doc = doc.map(str::to_string);
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Add a `Type name` parameter.
    pub fn param(mut self, ty: &str, name: &str) -> Self {
        self.params.push(format!("{} {}", ty, name));
        self
    }

    /// Add a parameter written out in full, e.g. with a default value.
    pub fn raw_param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Build the method as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::csharp();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.doc.as_deref().map(summary_fragments).unwrap_or_default();
        let modifiers = if self.is_static { "public static" } else { "public" };
        fragments.push(CodeFragment::Block {
            header: format!(
                "{} {} {}({}) {{",
                modifiers,
                self.return_type,
                self.name,
                self.params.join(", ")
            ),
            body: self.body.iter().cloned().map(CodeFragment::Line).collect(),
            close: Some("}".to_string()),
        });
        fragments
    }
}

/// A property backed by a field, read-only unless a setter is added.
#[derive(Debug, Clone)]
pub struct Property {
    name: String,
    ty: String,
    field: String,
    doc: Option<String>,
    has_setter: bool,
}

impl Property {
    pub fn new(ty: impl Into<String>, name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            field: field.into(),
            doc: None,
            has_setter: false,
        }
    }

    pub fn doc_opt(mut self, doc: Option<&str>) -> Self {
        self.doc = doc.map(str::to_string);
        self
    }

    pub fn with_setter(mut self) -> Self {
        self.has_setter = true;
        self
    }
}

impl Renderable for Property {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.doc.as_deref().map(summary_fragments).unwrap_or_default();

        let mut body = vec![CodeFragment::Line(format!(
            "get {{ return this.{}; }}",
            self.field
        ))];
        if self.has_setter {
            body.push(CodeFragment::Line(format!(
                "set {{ this.{} = value; }}",
                self.field
            )));
        }

        fragments.push(CodeFragment::Block {
            header: format!("public {} {} {{", self.ty, self.name),
            body,
            close: Some("}".to_string()),
        });
        fragments
    }
}
