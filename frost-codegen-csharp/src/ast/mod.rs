//! C# AST builders for generating classes and their members.
//!
//! These provide a high-level API for constructing C# syntax,
//! which can then be rendered via CodeBuilder.

mod class;
mod members;

pub use class::Class;
pub use members::{Constructor, FieldDecl, Method, Property};

use frost_codegen::CodeFragment;

/// Turn a possibly multi-line description into `/// <summary>` fragments.
pub(crate) fn summary_fragments(doc: &str) -> Vec<CodeFragment> {
    let lines: Vec<String> = doc.lines().map(|l| escape_xml(l.trim_end())).collect();

    match lines.as_slice() {
        [] => Vec::new(),
        [line] => vec![CodeFragment::Doc(format!("<summary>{}</summary>", line))],
        _ => std::iter::once(CodeFragment::Doc("<summary>".to_string()))
            .chain(lines.into_iter().map(CodeFragment::Doc))
            .chain(std::iter::once(CodeFragment::Doc("</summary>".to_string())))
            .collect(),
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use frost_codegen::CodeBuilder;

    fn render(doc: &str) -> String {
        let mut builder = CodeBuilder::csharp();
        for fragment in summary_fragments(doc) {
            builder.apply_fragment(fragment);
        }
        builder.build()
    }

    #[test]
    fn test_single_line_summary() {
        assert_eq!(render("A piece of fruit"), "/// <summary>A piece of fruit</summary>\n");
    }

    #[test]
    fn test_multi_line_summary() {
        assert_eq!(
            render("First line\nSecond line"),
            "/// <summary>\n/// First line\n/// Second line\n/// </summary>\n"
        );
    }

    #[test]
    fn test_summary_escapes_xml() {
        assert_eq!(
            render("Maps a -> b & c"),
            "/// <summary>Maps a -&gt; b &amp; c</summary>\n"
        );
    }
}
