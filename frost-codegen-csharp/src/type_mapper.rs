//! C# type mapper implementation.

use frost_codegen::TypeMapper;
use frost_ir::{FieldType, PrimitiveType};

use crate::CSHARP_NAMING;

/// C# type mapper implementation.
///
/// Primitives are written with their `System` names so generated code
/// needs no `using` directives.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpTypeMapper;

impl CSharpTypeMapper {
    /// Whether `ty` maps to a C# value type.
    pub fn is_value_type(ty: &FieldType) -> bool {
        match ty {
            FieldType::Primitive(p) => *p != PrimitiveType::String,
            // Nullable<T> is itself a struct
            FieldType::Optional(inner) => Self::is_value_type(inner),
            _ => false,
        }
    }
}

impl TypeMapper for CSharpTypeMapper {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn map_primitive(&self, ty: PrimitiveType) -> &'static str {
        match ty {
            PrimitiveType::String => "System.String",
            PrimitiveType::Int => "System.Int32",
            PrimitiveType::Long => "System.Int64",
            PrimitiveType::Float => "System.Single",
            PrimitiveType::Double => "System.Double",
            PrimitiveType::Bool => "System.Boolean",
            PrimitiveType::Char => "System.Char",
            PrimitiveType::Byte => "System.Byte",
        }
    }

    fn map_list(&self, element: &str) -> String {
        format!("System.Collections.Immutable.ImmutableList<{}>", element)
    }

    fn map_optional(&self, inner: &FieldType) -> String {
        let mapped = self.map_type(inner);
        if Self::is_value_type(inner) {
            format!("System.Nullable<{}>", mapped)
        } else {
            // Reference types are already nullable
            mapped
        }
    }

    fn map_map(&self, key: &str, value: &str) -> String {
        format!(
            "System.Collections.Immutable.ImmutableDictionary<{}, {}>",
            key, value
        )
    }

    fn map_named(&self, name: &str) -> String {
        CSHARP_NAMING.type_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(s: &str) -> String {
        CSharpTypeMapper.map_type(&s.parse().unwrap())
    }

    #[test]
    fn test_csharp_primitive_types() {
        assert_eq!(map("string"), "System.String");
        assert_eq!(map("int"), "System.Int32");
        assert_eq!(map("long"), "System.Int64");
        assert_eq!(map("float"), "System.Single");
        assert_eq!(map("bool"), "System.Boolean");
    }

    #[test]
    fn test_csharp_collection_types() {
        assert_eq!(
            map("list<Fruit>"),
            "System.Collections.Immutable.ImmutableList<Fruit>"
        );
        assert_eq!(
            map("map<string, fruit_basket>"),
            "System.Collections.Immutable.ImmutableDictionary<System.String, FruitBasket>"
        );
    }

    #[test]
    fn test_csharp_optional_types() {
        assert_eq!(map("int?"), "System.Nullable<System.Int32>");
        assert_eq!(map("string?"), "System.String");
        assert_eq!(map("Fruit?"), "Fruit");
        assert_eq!(
            map("list<double?>"),
            "System.Collections.Immutable.ImmutableList<System.Nullable<System.Double>>"
        );
    }
}
