//! A complete generated `.cs` file.

use frost_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Header comment, then the items, wrapped in a `namespace` block when one
/// is set.
///
/// ```ignore
/// let source = CSharpFile::new(HEADER)
///     .namespace(Some("Orchard"))
///     .item(fruit_class)
///     .render();
/// ```
pub struct CSharpFile {
    header: String,
    namespace: Option<String>,
    items: Vec<Vec<CodeFragment>>,
}

impl CSharpFile {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            namespace: None,
            items: Vec::new(),
        }
    }

    pub fn namespace(mut self, namespace: Option<&str>) -> Self {
        self.namespace = namespace.map(str::to_owned);
        self
    }

    pub fn item(mut self, node: impl Renderable) -> Self {
        self.items.push(node.to_fragments());
        self
    }

    pub fn render(self) -> String {
        let mut out = CodeBuilder::csharp();
        out.push_line(&self.header);
        if self.items.is_empty() {
            return out.build();
        }
        out.push_blank();

        let mut body = Vec::new();
        for (i, item) in self.items.into_iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(item);
        }

        match self.namespace {
            Some(namespace) => out.apply_fragment(CodeFragment::Block {
                header: format!("namespace {namespace} {{"),
                body,
                close: Some("}".to_owned()),
            }),
            None => body.into_iter().for_each(|f| out.apply_fragment(f)),
        }
        out.build()
    }
}
