//! Rust type mapper implementation.

use frost_codegen::TypeMapper;
use frost_ir::{FieldType, PrimitiveType};

use crate::RUST_NAMING;

/// Rust type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustTypeMapper;

impl RustTypeMapper {
    /// Whether values of `ty` are `Copy` and returned by value from accessors.
    pub fn is_copy(ty: &FieldType) -> bool {
        match ty {
            FieldType::Primitive(p) => *p != PrimitiveType::String,
            FieldType::Optional(inner) => Self::is_copy(inner),
            _ => false,
        }
    }

    /// Type returned by an accessor for a field of type `ty`.
    pub fn accessor_type(&self, ty: &FieldType) -> String {
        if Self::is_copy(ty) {
            return self.map_type(ty);
        }

        match ty {
            FieldType::Primitive(PrimitiveType::String) => "&str".to_string(),
            FieldType::List(element) => format!("&[{}]", self.map_type(element)),
            FieldType::Optional(inner) => match inner.as_ref() {
                FieldType::Primitive(PrimitiveType::String) => "Option<&str>".to_string(),
                other => format!("Option<&{}>", self.map_type(other)),
            },
            other => format!("&{}", self.map_type(other)),
        }
    }

    /// Expression reading the field `self.<field>` for an accessor.
    pub fn accessor_expr(&self, ty: &FieldType, field: &str) -> String {
        if Self::is_copy(ty) {
            return format!("self.{}", field);
        }

        match ty {
            FieldType::Optional(inner) => match inner.as_ref() {
                FieldType::Primitive(PrimitiveType::String) => {
                    format!("self.{}.as_deref()", field)
                }
                _ => format!("self.{}.as_ref()", field),
            },
            _ => format!("&self.{}", field),
        }
    }

    /// Expression copying `<receiver>.<field>` into a new value.
    ///
    /// Generated types may carry an accessor named `clone`, which method
    /// syntax would pick over `Clone::clone`, so named values use the
    /// qualified path.
    pub fn copy_expr(&self, ty: &FieldType, receiver: &str, field: &str) -> String {
        match ty {
            _ if Self::is_copy(ty) => format!("{}.{}", receiver, field),
            FieldType::Named(_) => format!("Clone::clone(&{}.{})", receiver, field),
            _ => format!("{}.{}.clone()", receiver, field),
        }
    }
}

impl TypeMapper for RustTypeMapper {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn map_primitive(&self, ty: PrimitiveType) -> &'static str {
        match ty {
            PrimitiveType::String => "String",
            PrimitiveType::Int => "i32",
            PrimitiveType::Long => "i64",
            PrimitiveType::Float => "f32",
            PrimitiveType::Double => "f64",
            PrimitiveType::Bool => "bool",
            PrimitiveType::Char => "char",
            PrimitiveType::Byte => "u8",
        }
    }

    fn map_list(&self, element: &str) -> String {
        format!("Vec<{}>", element)
    }

    fn map_optional(&self, inner: &FieldType) -> String {
        format!("Option<{}>", self.map_type(inner))
    }

    fn map_map(&self, key: &str, value: &str) -> String {
        format!("BTreeMap<{}, {}>", key, value)
    }

    fn map_named(&self, name: &str) -> String {
        RUST_NAMING.type_name(name)
    }
}
