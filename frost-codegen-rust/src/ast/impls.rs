//! `impl` blocks, inherent or for a trait.

use frost_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::Fn;

#[derive(Debug, Clone)]
pub struct Impl {
    header: String,
    methods: Vec<Fn>,
}

impl Impl {
    /// `impl Type { .. }`
    pub fn new(type_name: impl AsRef<str>) -> Self {
        Self {
            header: format!("impl {} {{", type_name.as_ref()),
            methods: Vec::new(),
        }
    }

    /// `impl Trait for Type { .. }`
    pub fn of_trait(trait_name: &str, type_name: &str) -> Self {
        Self {
            header: format!("impl {trait_name} for {type_name} {{"),
            methods: Vec::new(),
        }
    }

    pub fn method(mut self, method: Fn) -> Self {
        self.methods.push(method);
        self
    }

    pub fn methods(mut self, methods: impl IntoIterator<Item = Fn>) -> Self {
        self.methods.extend(methods);
        self
    }

    pub fn build(&self) -> String {
        let mut out = CodeBuilder::rust();
        out.emit(self);
        out.build()
    }
}

impl Renderable for Impl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        for (i, method) in self.methods.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(method.to_fragments());
        }

        vec![CodeFragment::Block {
            header: self.header.clone(),
            body,
            close: Some("}".into()),
        }]
    }
}
