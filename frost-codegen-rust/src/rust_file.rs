//! A complete generated `.rs` file.

use frost_codegen::{CodeBuilder, CodeFragment, Renderable, generation::ImportCollector};

/// `use path::{names};`
#[derive(Debug, Clone)]
pub struct Use {
    path: String,
    names: Vec<String>,
}

impl Use {
    pub fn new<S: Into<String>>(path: impl Into<String>, names: impl IntoIterator<Item = S>) -> Self {
        Self {
            path: path.into(),
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    fn line(&self) -> String {
        match self.names.as_slice() {
            [] => format!("use {};", self.path),
            [name] => format!("use {}::{name};", self.path),
            names => format!("use {}::{{{}}};", self.path, names.join(", ")),
        }
    }
}

impl Renderable for Use {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.line())]
    }
}

/// Header comment, then the `use` block, then items separated by blank lines.
pub struct RustFile {
    header: String,
    uses: Vec<Use>,
    items: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            uses: Vec::new(),
            items: Vec::new(),
        }
    }

    /// One `use` per module in `imports`, in the collector's order.
    pub fn imports(mut self, imports: &ImportCollector) -> Self {
        self.uses.extend(
            imports
                .iter()
                .map(|(module, names)| Use::new(module, names.iter().cloned())),
        );
        self
    }

    pub fn item(mut self, node: impl Renderable) -> Self {
        self.items.push(node.to_fragments());
        self
    }

    pub fn render(&self) -> String {
        let mut out = CodeBuilder::rust();
        out.push_line(&self.header);

        if !self.uses.is_empty() {
            out.push_blank();
            for stmt in &self.uses {
                out.emit(stmt);
            }
        }

        for item in &self.items {
            out.push_blank();
            for fragment in item {
                out.apply_fragment(fragment.clone());
            }
        }

        out.build()
    }
}

#[cfg(test)]
mod tests {
    use frost_codegen::RawCode;

    use super::*;

    const HEADER: &str = "// Code generated by frost. DO NOT EDIT.";

    #[test]
    fn test_header_only() {
        assert_eq!(RustFile::new(HEADER).render(), format!("{HEADER}\n"));
    }

    #[test]
    fn test_use_shapes() {
        assert_eq!(Use::new("std::fmt", Vec::<String>::new()).line(), "use std::fmt;");
        assert_eq!(Use::new("super", ["Fruit"]).line(), "use super::Fruit;");
        assert_eq!(
            Use::new("super", ["Basket", "Fruit"]).line(),
            "use super::{Basket, Fruit};"
        );
    }

    #[test]
    fn test_imports_then_items() {
        let mut imports = ImportCollector::new();
        imports.add("std::collections", "BTreeMap");
        imports.add("super", "Fruit");
        imports.add("super", "Basket");

        let out = RustFile::new(HEADER)
            .imports(&imports)
            .item(RawCode::lines(["pub struct Crate {}"]))
            .item(RawCode::lines(["impl Crate {}"]))
            .render();

        assert_eq!(
            out,
            format!(
                "{HEADER}\n\nuse std::collections::BTreeMap;\nuse super::{{Basket, Fruit}};\n\npub struct Crate {{}}\n\nimpl Crate {{}}\n"
            )
        );
    }

    #[test]
    fn test_raw_code_keeps_lines_together() {
        let out = RustFile::new(HEADER)
            .item(RawCode::lines(["mod fruit;", "mod basket;"]))
            .render();
        assert_eq!(out, format!("{HEADER}\n\nmod fruit;\nmod basket;\n"));
    }
}
