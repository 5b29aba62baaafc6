use thiserror::Error;

/// Reasons a type cannot be expanded.
///
/// Every variant is detected before any output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("duplicate field '{field}' in '{type_name}'{}", clash(.field, .first))]
    DuplicateField {
        type_name: String,
        /// The later of the two fields, as declared.
        field: String,
        /// The earlier field it collides with, as declared.
        first: String,
    },

    #[error("invalid identifier '{name}' in '{type_name}': {reason}")]
    InvalidIdentifier {
        type_name: String,
        /// Declared field the identifier comes from, if any.
        field: Option<String>,
        name: String,
        reason: String,
    },

    #[error("unsupported type '{ty}' for field '{field}' in '{type_name}': {reason}")]
    UnsupportedFieldType {
        type_name: String,
        field: String,
        ty: String,
        reason: String,
    },
}

fn clash(field: &str, first: &str) -> String {
    if field == first {
        String::new()
    } else {
        format!(" (same generated name as '{}')", first)
    }
}

impl TransformError {
    /// Declared name of the type the error belongs to.
    pub fn type_name(&self) -> &str {
        match self {
            TransformError::DuplicateField { type_name, .. }
            | TransformError::InvalidIdentifier { type_name, .. }
            | TransformError::UnsupportedFieldType { type_name, .. } => type_name,
        }
    }

    /// Declared name of the offending field, if the error is about one.
    pub fn field(&self) -> Option<&str> {
        match self {
            TransformError::DuplicateField { field, .. }
            | TransformError::UnsupportedFieldType { field, .. } => Some(field),
            TransformError::InvalidIdentifier { field, .. } => field.as_deref(),
        }
    }

    /// Manifest path of the offending declaration, e.g. `types.Fruit.fields.color`.
    pub fn location(&self) -> String {
        match self.field() {
            Some(field) => format!("types.{}.fields.{}", self.type_name(), field),
            None => format!("types.{}", self.type_name()),
        }
    }
}
