//! Type and field declarations.

use frost_ir::{DefaultValue, FieldType};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// A value type declared under `[types.<Name>]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDecl {
    /// Description emitted as documentation
    pub description: Option<String>,

    /// Whether to generate a mutable builder
    #[serde(default)]
    pub builder: bool,

    /// Fields, in declaration order
    /// Supports both formats:
    /// - Map: `[types.Fruit.fields]` with `color = "string"` or `color = { type = "string" }`
    /// - Array: `fields = [{ name = "color", type = "string" }]` or `[[types.Fruit.fields]]`
    #[serde(default, deserialize_with = "deserialize_fields")]
    pub fields: Vec<FieldDecl>,
}

impl TypeDecl {
    /// Get a field by its declared name
    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A declared field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    /// Field name
    pub name: String,

    /// Type expression as written (e.g. `list<Fruit>`)
    pub ty: String,

    /// Default value used by the zero-parameter factory
    pub default: Option<toml::Value>,

    /// Description emitted as documentation
    pub description: Option<String>,
}

impl FieldDecl {
    /// Parse the declared type expression.
    pub fn field_type(&self) -> Result<FieldType, String> {
        self.ty.parse()
    }

    /// Convert the declared default into an IR value.
    pub fn default_value(&self) -> Result<Option<DefaultValue>, String> {
        let Some(value) = &self.default else {
            return Ok(None);
        };

        let default = match value {
            toml::Value::String(s) => DefaultValue::String(s.clone()),
            toml::Value::Integer(i) => DefaultValue::Int(*i),
            toml::Value::Float(f) => DefaultValue::Float(*f),
            toml::Value::Boolean(b) => DefaultValue::Bool(*b),
            other => {
                return Err(format!(
                    "{} defaults are not supported, use a string, integer, float, or boolean",
                    other.type_str()
                ));
            }
        };

        Ok(Some(default))
    }
}

/// Field body when written as a table
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldBody {
    #[serde(rename = "type")]
    ty: String,
    default: Option<toml::Value>,
    description: Option<String>,
}

/// Field with name for array format deserialization
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldWithName {
    name: String,
    #[serde(rename = "type")]
    ty: String,
    default: Option<toml::Value>,
    description: Option<String>,
}

/// Short `"type"` string or full table
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FieldValue {
    Short(String),
    Full(FieldBody),
}

/// Untagged enum to support both array and map formats for fields
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FieldsFormat {
    Array(Vec<FieldWithName>),
    Map(IndexMap<String, FieldValue>),
}

impl From<FieldsFormat> for Vec<FieldDecl> {
    fn from(format: FieldsFormat) -> Self {
        match format {
            FieldsFormat::Array(vec) => vec
                .into_iter()
                .map(|f| FieldDecl {
                    name: f.name,
                    ty: f.ty,
                    default: f.default,
                    description: f.description,
                })
                .collect(),
            FieldsFormat::Map(map) => map
                .into_iter()
                .map(|(name, value)| match value {
                    FieldValue::Short(ty) => FieldDecl {
                        name,
                        ty,
                        default: None,
                        description: None,
                    },
                    FieldValue::Full(body) => FieldDecl {
                        name,
                        ty: body.ty,
                        default: body.default,
                        description: body.description,
                    },
                })
                .collect(),
        }
    }
}

fn deserialize_fields<'de, D>(deserializer: D) -> std::result::Result<Vec<FieldDecl>, D::Error>
where
    D: Deserializer<'de>,
{
    FieldsFormat::deserialize(deserializer).map(Into::into)
}
