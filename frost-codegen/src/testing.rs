//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::path::Path;

use eyre::Result;
use frost_core::{to_camel_case, to_pascal_case, to_snake_case};
use frost_ir::{DefaultValue, FieldSpec, FieldType, PrimitiveType, TypeSpec};

use crate::NamingConvention;

/// A snake_case convention with raw-identifier escaping and a top-level builder.
pub const TEST_NAMING: NamingConvention = NamingConvention {
    language: "test-snake",
    type_case: to_pascal_case,
    file_case: to_snake_case,
    member_case: to_snake_case,
    field_case: to_snake_case,
    param_case: to_snake_case,
    reserved_words: &[
        "crate", "fn", "match", "mod", "self", "Self", "struct", "super", "type",
    ],
    unescapable: &["self", "Self", "super", "crate"],
    reserved_type_names: &["Option", "String", "Vec"],
    escape_reserved: |name| format!("r#{}", name),
    empty_factory: "create",
    full_factory: "new",
    setter_prefix: Some("set_"),
    nested_builder: false,
    fields_share_member_scope: false,
};

/// A PascalCase property convention with `@` escaping and a nested builder.
pub const TEST_PASCAL_NAMING: NamingConvention = NamingConvention {
    language: "test-pascal",
    type_case: to_pascal_case,
    file_case: to_pascal_case,
    member_case: to_pascal_case,
    field_case: to_camel_case,
    param_case: to_camel_case,
    reserved_words: &["class", "int", "namespace", "string"],
    unescapable: &[],
    reserved_type_names: &["Optional"],
    escape_reserved: |name| format!("@{}", name),
    empty_factory: "Create",
    full_factory: "Create",
    setter_prefix: None,
    nested_builder: true,
    fields_share_member_scope: true,
};

/// The `Fruit` type used throughout the tests: a string and an int field.
pub fn fruit_spec() -> TypeSpec {
    TypeSpec::new("Fruit")
        .description("A piece of fruit")
        .field("color", FieldType::string())
        .with_field(
            FieldSpec::new("skinThickness", FieldType::int())
                .default_value(DefaultValue::Int(1))
                .description("Thickness of the skin in millimetres"),
        )
}

/// The `Basket` type: holds fruit and has a builder.
pub fn basket_spec() -> TypeSpec {
    TypeSpec::new("Basket")
        .field("size", FieldType::Primitive(PrimitiveType::Int))
        .field("contents", FieldType::list(FieldType::named("Fruit")))
        .with_builder(true)
}

/// Assert that two strings are equal, with a nice diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        // Simple line-by-line diff
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Generate code into a temporary directory and return the path.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}
