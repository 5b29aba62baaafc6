//! Struct literal expressions (`Self { a, b: value }`).

use frost_codegen::{CodeFragment, Renderable};

/// A struct literal with one initializer per field.
#[derive(Debug, Clone)]
pub struct StructLiteral {
    path: String,
    fields: Vec<(String, String)>,
}

impl StructLiteral {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            fields: Vec::new(),
        }
    }

    /// Initialize `name` with `expr`. Uses shorthand when they are equal.
    pub fn field(mut self, name: impl Into<String>, expr: impl Into<String>) -> Self {
        self.fields.push((name.into(), expr.into()));
        self
    }
}

impl Renderable for StructLiteral {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            return vec![CodeFragment::Line(format!("{} {{}}", self.path))];
        }

        let body = self
            .fields
            .iter()
            .map(|(name, expr)| {
                if name == expr {
                    CodeFragment::Line(format!("{},", name))
                } else {
                    CodeFragment::Line(format!("{}: {},", name, expr))
                }
            })
            .collect();

        vec![CodeFragment::Block {
            header: format!("{} {{", self.path),
            body,
            close: Some("}".to_string()),
        }]
    }
}

#[cfg(test)]
mod tests {
    use frost_codegen::CodeBuilder;

    use super::*;

    fn render(literal: &StructLiteral) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(literal);
        builder.build()
    }

    #[test]
    fn test_empty_literal() {
        assert_eq!(render(&StructLiteral::new("Self")), "Self {}\n");
    }

    #[test]
    fn test_literal_shorthand() {
        let literal = StructLiteral::new("Self")
            .field("color", "color")
            .field("size", "self.size")
            .field("r#type", "r#type");
        assert_eq!(
            render(&literal),
            "Self {\n    color,\n    size: self.size,\n    r#type,\n}\n"
        );
    }
}
