//! Field type definitions.

use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

/// Primitive field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveType {
    String,
    Int,
    Long,
    Float,
    Double,
    Bool,
    Char,
    Byte,
}

impl PrimitiveType {
    /// All primitives, in the order they are documented.
    pub const ALL: [PrimitiveType; 8] = [
        PrimitiveType::String,
        PrimitiveType::Int,
        PrimitiveType::Long,
        PrimitiveType::Float,
        PrimitiveType::Double,
        PrimitiveType::Bool,
        PrimitiveType::Char,
        PrimitiveType::Byte,
    ];

    /// Get the name used in declarations (e.g. `int`).
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Bool => "bool",
            PrimitiveType::Char => "char",
            PrimitiveType::Byte => "byte",
        }
    }

    /// Look up a primitive by its declared name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }

    /// Returns true for `float` and `double`.
    pub fn is_floating(&self) -> bool {
        matches!(self, PrimitiveType::Float | PrimitiveType::Double)
    }
}

/// Declared type of a field - language-agnostic representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// A primitive scalar.
    Primitive(PrimitiveType),
    /// An ordered sequence (`list<T>`).
    List(Box<FieldType>),
    /// A value that may be absent (`optional<T>` or `T?`).
    Optional(Box<FieldType>),
    /// A key/value mapping (`map<K, V>`).
    Map(Box<FieldType>, Box<FieldType>),
    /// A reference to another declared type.
    Named(String),
}

impl FieldType {
    pub fn string() -> Self {
        Self::Primitive(PrimitiveType::String)
    }

    pub fn int() -> Self {
        Self::Primitive(PrimitiveType::Int)
    }

    pub fn bool() -> Self {
        Self::Primitive(PrimitiveType::Bool)
    }

    pub fn list(inner: FieldType) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn optional(inner: FieldType) -> Self {
        Self::Optional(Box::new(inner))
    }

    pub fn map(key: FieldType, value: FieldType) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Get the primitive if this is a primitive type.
    pub fn as_primitive(&self) -> Option<PrimitiveType> {
        match self {
            FieldType::Primitive(p) => Some(*p),
            _ => None,
        }
    }

    /// Collect every named type referenced by this type, in order of appearance.
    pub fn named_refs(&self) -> Vec<&str> {
        let mut refs = Vec::new();
        self.collect_named(&mut refs);
        refs
    }

    fn collect_named<'a>(&'a self, refs: &mut Vec<&'a str>) {
        match self {
            FieldType::Primitive(_) => {}
            FieldType::List(inner) | FieldType::Optional(inner) => inner.collect_named(refs),
            FieldType::Map(key, value) => {
                key.collect_named(refs);
                value.collect_named(refs);
            }
            FieldType::Named(name) => refs.push(name),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Primitive(p) => f.write_str(p.as_str()),
            FieldType::List(inner) => write!(f, "list<{}>", inner),
            FieldType::Optional(inner) => write!(f, "optional<{}>", inner),
            FieldType::Map(key, value) => write!(f, "map<{}, {}>", key, value),
            FieldType::Named(name) => f.write_str(name),
        }
    }
}

impl Serialize for FieldType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = TypeParser { src: s, pos: 0 };
        let ty = parser.parse_type()?;
        parser.skip_ws();
        if parser.pos < s.len() {
            return Err(format!(
                "unexpected '{}' in type '{}'",
                &s[parser.pos..],
                s.trim()
            ));
        }
        Ok(ty)
    }
}

/// Recursive-descent parser for type expressions like `map<string, list<Fruit>>`.
struct TypeParser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> TypeParser<'a> {
    fn parse_type(&mut self) -> Result<FieldType, String> {
        self.skip_ws();
        let ident = self.ident()?;
        self.skip_ws();

        let base = match ident {
            "list" if self.eat('<') => {
                let inner = self.parse_type()?;
                self.expect('>')?;
                FieldType::list(inner)
            }
            "optional" if self.eat('<') => {
                let inner = self.parse_type()?;
                self.expect('>')?;
                FieldType::optional(inner)
            }
            "map" if self.eat('<') => {
                let key = self.parse_type()?;
                self.expect(',')?;
                let value = self.parse_type()?;
                self.expect('>')?;
                FieldType::map(key, value)
            }
            other => match PrimitiveType::from_name(other) {
                Some(p) => FieldType::Primitive(p),
                None => FieldType::Named(other.to_string()),
            },
        };

        self.skip_ws();
        if self.eat('?') {
            Ok(FieldType::optional(base))
        } else {
            Ok(base)
        }
    }

    fn ident(&mut self) -> Result<&'a str, String> {
        let rest = &self.src[self.pos..];
        let len = rest
            .char_indices()
            .find(|&(i, c)| {
                !(c == '_' || c.is_ascii_alphabetic() || (i > 0 && c.is_ascii_digit()))
            })
            .map_or(rest.len(), |(i, _)| i);

        if len == 0 {
            return Err(match rest.chars().next() {
                Some(c) => format!("expected a type name, found '{}'", c),
                None => "expected a type name".to_string(),
            });
        }

        self.pos += len;
        Ok(&rest[..len])
    }

    fn skip_ws(&mut self) {
        let rest = &self.src[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn eat(&mut self, c: char) -> bool {
        self.skip_ws();
        if self.src[self.pos..].starts_with(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, c: char) -> Result<(), String> {
        if self.eat(c) {
            Ok(())
        } else {
            match self.src[self.pos..].chars().next() {
                Some(found) => Err(format!("expected '{}', found '{}'", c, found)),
                None => Err(format!("expected '{}' before end of type", c)),
            }
        }
    }
}

/// Default value for a field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DefaultValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl DefaultValue {
    /// Get a short name for the kind of value (used in messages).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
        }
    }

    /// Check that this value can initialize a field of type `ty`.
    ///
    /// Only primitives and optional primitives accept defaults.
    pub fn check_fits(&self, ty: &FieldType) -> Result<(), String> {
        let primitive = match ty {
            FieldType::Primitive(p) => *p,
            FieldType::Optional(inner) => match inner.as_ref() {
                FieldType::Primitive(p) => *p,
                _ => return Err(format!("type '{}' does not accept a default value", ty)),
            },
            _ => return Err(format!("type '{}' does not accept a default value", ty)),
        };

        let fits = match (self, primitive) {
            (Self::String(_), PrimitiveType::String) => true,
            (Self::String(s), PrimitiveType::Char) => {
                let mut chars = s.chars();
                matches!((chars.next(), chars.next()), (Some(c), None) if c.len_utf16() == 1)
            }
            (Self::Int(i), PrimitiveType::Int) => i32::try_from(*i).is_ok(),
            (Self::Int(i), PrimitiveType::Byte) => u8::try_from(*i).is_ok(),
            (Self::Int(_), PrimitiveType::Long) => true,
            // finite doubles must stay finite when narrowed to f32
            (Self::Float(f), PrimitiveType::Float) => !f.is_finite() || (*f as f32).is_finite(),
            (Self::Int(_) | Self::Float(_), p) if p.is_floating() => true,
            (Self::Bool(_), PrimitiveType::Bool) => true,
            _ => false,
        };

        if fits {
            Ok(())
        } else {
            Err(format!(
                "{} default is not a valid '{}' value",
                self.kind(),
                ty
            ))
        }
    }
}
