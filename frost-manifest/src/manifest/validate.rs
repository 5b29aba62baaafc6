//! Source-aware checks run after the manifest deserializes.

use std::sync::Arc;

use frost_core::validate_identifier;
use miette::{NamedSource, SourceSpan};

use crate::{Error, Result};

#[derive(Debug)]
struct Source {
    text: String,
    filename: String,
}

/// Where validation currently is in a manifest, plus the text to point into.
///
/// ```ignore
/// let ctx = ParseContext::new(src, "frost.toml");
/// ctx.validate_name("Fruit", "type")?;
/// ctx.push("Fruit").validate_name("color", "field")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: Arc<Source>,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(Source {
                text: src.to_owned(),
                filename: filename.to_owned(),
            }),
            path: Vec::new(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.source.filename
    }

    /// A context one level deeper, e.g. inside `types.Fruit`.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// Dotted path of the current position.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// `kind`, qualified by the enclosing path when there is one.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_owned()
        } else {
            format!("{kind} in '{}'", self.path_string())
        }
    }

    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(&self.source.text, name)
    }

    pub fn find_value_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_span(&self.source.text, value)
    }

    /// Reject names that are not identifiers. Reserved words pass; each
    /// backend escapes them when deriving member names.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        match validate_identifier(name) {
            None => Ok(()),
            Some(reason) => Err(Box::new(Error::InvalidIdentifier {
                src: self.named_source(),
                span: self.find_span(name),
                name: name.to_owned(),
                context: self.context_for(kind),
                reason: reason.to_owned(),
            })),
        }
    }

    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        Box::new(Error::Parse {
            src: self.named_source(),
            span: source.span().map(SourceSpan::from),
            source,
        })
    }

    pub fn validation_error(&self, message: impl Into<String>, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    pub fn invalid_field_type(&self, field: &str, ty: &str, reason: String) -> Box<Error> {
        Box::new(Error::InvalidFieldType {
            src: self.named_source(),
            span: self.find_value_span(ty),
            type_name: self.path_string(),
            field: field.to_owned(),
            ty: ty.to_owned(),
            reason,
        })
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.source.filename, self.source.text.clone())
    }
}

/// Locate `name` as a TOML key: in a table header, an inline table, an
/// array entry's `name = "..."`, or at the start of a line.
///
/// Returns `None` rather than guessing when no key position matches.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let at = |start: usize| Some(SourceSpan::from((start, name.len())));

    // `[types.Fruit]` and `[types.Fruit.fields]`
    for header in [format!(".{name}]"), format!(".{name}.")] {
        if let Some(pos) = src.find(&header) {
            return at(pos + 1);
        }
    }

    // `{ size = ...` and `, size = ...`
    for (open, skip) in [("{ ", 2), ("{", 1), (", ", 2), (",", 1)] {
        for eq in [" ", "="] {
            if let Some(pos) = src.find(&format!("{open}{name}{eq}")) {
                return at(pos + skip);
            }
        }
    }

    // `name = "size"` inside `[[types.X.fields]]`
    for quote in ['"', '\''] {
        let entry = format!("name = {quote}{name}{quote}");
        if let Some(pos) = src.find(&entry) {
            return at(pos + "name = ".len() + 1);
        }
    }

    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let key = line.trim_start();
        let is_key = key
            .strip_prefix(name)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if is_key {
            return at(offset + line.len() - key.len());
        }
        offset += line.len();
    }

    None
}

/// Locate a quoted string value, excluding the quotes.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    ['"', '\''].into_iter().find_map(|quote| {
        src.find(&format!("{quote}{value}{quote}"))
            .map(|pos| SourceSpan::from((pos + 1, value.len())))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(src: &str, name: &str) -> Option<(usize, usize)> {
        find_name_span(src, name).map(|s| (s.offset(), s.len()))
    }

    #[test]
    fn test_table_header() {
        assert_eq!(span("[types.Fruit]\ndescription = \"x\"", "Fruit"), Some((7, 5)));
        assert_eq!(span("[types.Fruit.fields]\ncolor = \"string\"", "Fruit"), Some((7, 5)));
    }

    #[test]
    fn test_key_at_line_start() {
        let src = "[types.Fruit.fields]\n  color = \"string\"";
        assert_eq!(span(src, "color"), Some((23, 5)));
    }

    #[test]
    fn test_key_prefix_does_not_match() {
        assert_eq!(span("[types.Fruit.fields]\ncolorful = \"string\"", "color"), None);
    }

    #[test]
    fn test_inline_table_key() {
        assert_eq!(span(r#"fields = { size = { type = "int" } }"#, "size"), Some((11, 4)));
        assert_eq!(span(r#"fields = {size={ type = "int" } }"#, "size"), Some((10, 4)));
    }

    #[test]
    fn test_array_entry_name() {
        let src = "[[types.Basket.fields]]\nname = \"size\"\ntype = \"int\"";
        assert_eq!(span(src, "size"), Some((32, 4)));
    }

    #[test]
    fn test_text_inside_strings_is_ignored() {
        assert_eq!(span(r#"description = "Fruit salad""#, "Fruit"), None);
    }

    #[test]
    fn test_value_span_excludes_quotes() {
        let found = find_value_span(r#"color = "strin""#, "strin").unwrap();
        assert_eq!((found.offset(), found.len()), (9, 5));
    }

    #[test]
    fn test_nested_context() {
        let ctx = ParseContext::new("", "frost.toml");
        assert_eq!(ctx.filename(), "frost.toml");
        assert_eq!(ctx.context_for("type"), "type");

        let fruit = ctx.push("Fruit");
        assert_eq!(fruit.context_for("field"), "field in 'Fruit'");
        assert_eq!(fruit.push("color").path_string(), "Fruit.color");
    }

    #[test]
    fn test_validate_name() {
        let ctx = ParseContext::new("[types.Fruit.fields]\n2color = \"string\"", "frost.toml");
        assert!(ctx.validate_name("skin_thickness", "field").is_ok());
        assert!(ctx.validate_name("type", "field").is_ok());

        let err = ctx.validate_name("2color", "field").unwrap_err();
        assert_eq!(err.to_string(), "invalid field name '2color'");
    }
}
