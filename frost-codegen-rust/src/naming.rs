//! Rust-specific naming conventions.

use frost_codegen::NamingConvention;
use frost_core::{to_pascal_case, to_snake_case};

fn escape_rust_reserved(name: &str) -> String {
    format!("r#{}", name)
}

/// Rust naming conventions.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    language: "Rust",
    type_case: to_pascal_case,
    file_case: to_snake_case,
    member_case: to_snake_case,
    field_case: to_snake_case,
    param_case: to_snake_case,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
        "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
        "gen",
    ],
    // Raw identifiers are rejected for these
    unescapable: &["self", "Self", "super", "crate"],
    // Names the generated code refers to unqualified
    reserved_type_names: &[
        "Option", "Some", "None", "Vec", "String", "Box", "Default", "Clone", "Debug",
        "PartialEq", "BTreeMap", "Result", "Ok", "Err",
    ],
    escape_reserved: escape_rust_reserved,
    empty_factory: "create",
    full_factory: "new",
    setter_prefix: Some("set_"),
    nested_builder: false,
    fields_share_member_scope: false,
};
