use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors are boxed: the variants that carry the manifest source are large.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Why a `frost.toml` could not be loaded.
///
/// Every variant except [`Error::Io`] carries the manifest text, so miette
/// can point at the offending key or value.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(frost::io_error),
        help("run 'frost init <name>' to create a new project")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse frost.toml")]
    #[diagnostic(code(frost::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(frost::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(frost::invalid_identifier),
        help("{reason}. Names start with a letter or underscore and contain only letters, digits and underscores.")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("not an identifier")]
        span: Option<SourceSpan>,
        name: String,
        /// What the name was for, e.g. `field in 'Fruit'`.
        context: String,
        reason: String,
    },

    #[error("invalid type '{ty}' for field '{field}' in '{type_name}'")]
    #[diagnostic(
        code(frost::invalid_field_type),
        help(
            "{reason}. Field types are string, int, long, float, double, bool, char, byte, list<T>, optional<T> (or T?), map<K, V>, or the name of a declared type"
        )
    )]
    InvalidFieldType {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown field type")]
        span: Option<SourceSpan>,
        type_name: String,
        field: String,
        ty: String,
        reason: String,
    },
}

impl Error {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Box<Self> {
        Box::new(Self::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
