use super::{CodeFragment, Indent, Renderable};

/// Accumulates generated source one line at a time, tracking nesting depth.
///
/// ```
/// use frost_codegen::builder::CodeBuilder;
///
/// let mut out = CodeBuilder::csharp();
/// out.push_line("public partial class Fruit {")
///     .push_indent()
///     .push_line("private readonly System.String color;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(
///     out.build(),
///     "public partial class Fruit {\n\tprivate readonly System.String color;\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    out: String,
    depth: usize,
    indent: Indent,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            out: String::new(),
            depth: 0,
            indent,
        }
    }

    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    pub fn csharp() -> Self {
        Self::new(Indent::CSHARP)
    }

    /// Write `text` at the current depth and end the line.
    pub fn push_line(&mut self, text: &str) -> &mut Self {
        self.indent.write_to(&mut self.out, self.depth);
        self.out.push_str(text);
        self.out.push('\n');
        self
    }

    /// Blank lines carry no indentation.
    pub fn push_blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Write every fragment of `node` at the current depth.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(text) => {
                self.push_line(&text);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Doc(text) if text.is_empty() => {
                self.push_line("///");
            }
            CodeFragment::Doc(text) => {
                self.push_line(&format!("/// {text}"));
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header).push_indent();
                body.into_iter().for_each(|f| self.apply_fragment(f));
                self.push_dedent();
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
        }
    }

    pub fn build(self) -> String {
        self.out
    }
}
