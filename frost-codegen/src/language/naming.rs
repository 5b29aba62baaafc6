//! Naming conventions for different programming languages.

/// Language-specific naming conventions.
///
/// Defines how declared names become target identifiers, which words are
/// reserved, and how generated member names are derived from field names.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Human-readable language name used in messages (e.g. "Rust")
    pub language: &'static str,
    /// Transform a declared type name to a type name (e.g. "fruit_basket" -> "FruitBasket")
    pub type_case: fn(&str) -> String,
    /// Transform a declared type name to a file stem (e.g. "FruitBasket" -> "fruit_basket")
    pub file_case: fn(&str) -> String,
    /// Transform a name to a method or property name
    pub member_case: fn(&str) -> String,
    /// Transform a field name to a backing field name
    pub field_case: fn(&str) -> String,
    /// Transform a field name to a parameter name
    pub param_case: fn(&str) -> String,
    /// Words that must be escaped before use as identifiers
    pub reserved_words: &'static [&'static str],
    /// Words that cannot be used even when escaped
    pub unescapable: &'static [&'static str],
    /// Type names that would shadow names the generated code relies on
    pub reserved_type_names: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "r#type" in Rust)
    pub escape_reserved: fn(&str) -> String,
    /// Name of the zero-parameter factory
    pub empty_factory: &'static str,
    /// Name of the factory taking every field
    pub full_factory: &'static str,
    /// Prefix for builder setter methods; `None` when setters are properties
    pub setter_prefix: Option<&'static str>,
    /// Whether the builder is declared inside the immutable type
    pub nested_builder: bool,
    /// Whether backing fields and members share one namespace
    pub fields_share_member_scope: bool,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Check if a name can never be used as an identifier.
    pub fn is_unescapable(&self, name: &str) -> bool {
        self.unescapable.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) && !self.is_unescapable(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        self.safe_name(&(self.type_case)(name))
    }

    /// Transform for use as a file stem.
    pub fn file_name(&self, name: &str) -> String {
        // File names don't need escaping
        (self.file_case)(name)
    }

    /// Transform and make safe for use as a method or property name.
    pub fn member_name(&self, name: &str) -> String {
        self.safe_name(&(self.member_case)(name))
    }

    /// Transform and make safe for use as a backing field name.
    pub fn field_name(&self, name: &str) -> String {
        self.safe_name(&(self.field_case)(name))
    }

    /// Transform and make safe for use as a parameter name.
    pub fn param_name(&self, name: &str) -> String {
        self.safe_name(&(self.param_case)(name))
    }

    /// Name of the single-field wither for `field`.
    pub fn wither_name(&self, field: &str) -> String {
        self.member_name(&format!("with_{}", field))
    }

    /// Name of the builder setter for `field`.
    pub fn setter_name(&self, field: &str) -> String {
        match self.setter_prefix {
            Some(prefix) => self.member_name(&format!("{}{}", prefix, field)),
            None => self.member_name(field),
        }
    }

    /// Name of the multi-field updater.
    pub fn updater_name(&self) -> String {
        self.member_name("with")
    }

    /// Name of the builder type for an immutable type named `type_name`.
    pub fn builder_type_name(&self, type_name: &str) -> String {
        if self.nested_builder {
            "Builder".to_string()
        } else {
            format!("{}Builder", type_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{TEST_NAMING, TEST_PASCAL_NAMING};

    #[test]
    fn test_safe_name() {
        assert_eq!(TEST_NAMING.safe_name("type"), "r#type");
        assert_eq!(TEST_NAMING.safe_name("color"), "color");
        // Unescapable words are left alone for the caller to reject
        assert_eq!(TEST_NAMING.safe_name("self"), "self");
    }

    #[test]
    fn test_derived_names() {
        assert_eq!(TEST_NAMING.type_name("fruit_basket"), "FruitBasket");
        assert_eq!(TEST_NAMING.file_name("FruitBasket"), "fruit_basket");
        assert_eq!(TEST_NAMING.member_name("skinThickness"), "skin_thickness");
        assert_eq!(TEST_NAMING.wither_name("skinThickness"), "with_skin_thickness");
        assert_eq!(TEST_NAMING.setter_name("color"), "set_color");
        assert_eq!(TEST_NAMING.updater_name(), "with");
        assert_eq!(TEST_NAMING.builder_type_name("Fruit"), "FruitBuilder");
    }

    #[test]
    fn test_escaped_members() {
        assert_eq!(TEST_NAMING.member_name("type"), "r#type");
        assert_eq!(TEST_NAMING.param_name("match"), "r#match");
        assert_eq!(TEST_NAMING.wither_name("type"), "with_type");
    }

    #[test]
    fn test_property_style_names() {
        assert_eq!(TEST_PASCAL_NAMING.member_name("skinThickness"), "SkinThickness");
        assert_eq!(TEST_PASCAL_NAMING.field_name("SkinThickness"), "skinThickness");
        assert_eq!(TEST_PASCAL_NAMING.param_name("class"), "@class");
        assert_eq!(TEST_PASCAL_NAMING.wither_name("color"), "WithColor");
        // Setters share the property name
        assert_eq!(TEST_PASCAL_NAMING.setter_name("color"), "Color");
        assert_eq!(TEST_PASCAL_NAMING.builder_type_name("Fruit"), "Builder");
    }
}
