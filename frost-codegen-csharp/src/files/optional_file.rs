//! The `Optional<T>` struct used by the multi-field `With` method.

use super::HEADER;
use crate::{CSharpFile, RawCode};

/// `Optional.generated.cs`: distinguishes "not supplied" from a supplied `null`.
pub struct OptionalFile<'a> {
    namespace: Option<&'a str>,
}

impl<'a> OptionalFile<'a> {
    pub fn new(namespace: Option<&'a str>) -> Self {
        Self { namespace }
    }

    pub fn file_name(&self) -> &'static str {
        "Optional.generated.cs"
    }

    pub fn render(&self) -> String {
        CSharpFile::new(HEADER)
            .namespace(self.namespace)
            .item(RawCode::lines([
                "/// <summary>A value that may or may not have been supplied.</summary>",
                "public partial struct Optional<T> {",
                "",
                "\tprivate readonly T value;",
                "",
                "\tprivate readonly System.Boolean isDefined;",
                "",
                "\t/// <summary>Initializes a new instance holding <paramref name=\"value\"/>.</summary>",
                "\tpublic Optional(T value)",
                "\t{",
                "\t\tthis.value = value;",
                "\t\tthis.isDefined = true;",
                "\t}",
                "",
                "\tpublic System.Boolean IsDefined {",
                "\t\tget { return this.isDefined; }",
                "\t}",
                "",
                "\tpublic T Value {",
                "\t\tget { return this.value; }",
                "\t}",
                "",
                "\tpublic static implicit operator Optional<T>(T value) {",
                "\t\treturn new Optional<T>(value);",
                "\t}",
                "}",
            ]))
            .render()
    }
}
