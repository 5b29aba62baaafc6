//! C#-specific naming conventions.

use frost_codegen::NamingConvention;
use frost_core::{to_camel_case, to_pascal_case};

fn escape_csharp_reserved(name: &str) -> String {
    format!("@{}", name)
}

/// C# naming conventions.
pub const CSHARP_NAMING: NamingConvention = NamingConvention {
    language: "C#",
    // Types, files and members use PascalCase
    type_case: to_pascal_case,
    file_case: to_pascal_case,
    member_case: to_pascal_case,
    // Fields and parameters use camelCase
    field_case: to_camel_case,
    param_case: to_camel_case,
    reserved_words: &[
        "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
        "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
        "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
        "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
        "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
        "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed",
        "short", "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw",
        "true", "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using",
        "virtual", "void", "volatile", "while",
    ],
    unescapable: &[],
    // `Builder` would be shadowed by the nested builder class
    reserved_type_names: &["Optional", "System", "Builder"],
    escape_reserved: escape_csharp_reserved,
    empty_factory: "Create",
    full_factory: "Create",
    setter_prefix: None,
    nested_builder: true,
    fields_share_member_scope: true,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csharp_naming_type() {
        assert_eq!(CSHARP_NAMING.type_name("fruit_basket"), "FruitBasket");
        assert_eq!(CSHARP_NAMING.file_name("fruit_basket"), "FruitBasket");
    }

    #[test]
    fn test_csharp_naming_members() {
        assert_eq!(CSHARP_NAMING.member_name("skinThickness"), "SkinThickness");
        assert_eq!(CSHARP_NAMING.field_name("SkinThickness"), "skinThickness");
        assert_eq!(CSHARP_NAMING.param_name("skin_thickness"), "skinThickness");
        assert_eq!(CSHARP_NAMING.wither_name("skinThickness"), "WithSkinThickness");
        assert_eq!(CSHARP_NAMING.setter_name("color"), "Color");
        assert_eq!(CSHARP_NAMING.builder_type_name("Fruit"), "Builder");
    }

    #[test]
    fn test_csharp_escape_reserved() {
        assert_eq!(CSHARP_NAMING.field_name("class"), "@class");
        assert_eq!(CSHARP_NAMING.param_name("int"), "@int");
        assert_eq!(CSHARP_NAMING.member_name("class"), "Class");
    }
}
