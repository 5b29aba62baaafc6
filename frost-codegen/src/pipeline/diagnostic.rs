//! Problems found while compiling a manifest.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    /// Generation cannot continue.
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn is_error(self) -> bool {
        self == Self::Error
    }

    pub fn is_warning(self) -> bool {
        self == Self::Warning
    }

    fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Name of the phase that raised it.
    pub phase: String,
    pub message: String,
    /// Dotted manifest path, e.g. `types.Fruit.fields.color`.
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn error(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, phase.into(), message.into())
    }

    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Warning, phase.into(), message.into())
    }

    pub fn info(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Info, phase.into(), message.into())
    }

    pub fn at(self, location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            ..self
        }
    }

    fn with_severity(severity: Severity, phase: String, message: String) -> Self {
        Self {
            severity,
            phase,
            message,
            location: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        match &self.location {
            Some(location) => write!(f, " (at {location})"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_location() {
        let diag = Diagnostic::error("expand", "duplicate field 'color' in 'Fruit'");
        assert!(diag.severity.is_error());
        assert_eq!(diag.to_string(), "error: duplicate field 'color' in 'Fruit'");
    }

    #[test]
    fn test_display_with_location() {
        let diag = Diagnostic::warning("validate", "type 'Fruit' has no description").at("types.Fruit");
        assert!(diag.severity.is_warning());
        assert_eq!(
            diag.to_string(),
            "warning: type 'Fruit' has no description (at types.Fruit)"
        );
    }

    #[test]
    fn test_info_is_neither_error_nor_warning() {
        let diag = Diagnostic::info("validate", "note");
        assert!(!diag.severity.is_error());
        assert!(!diag.severity.is_warning());
        assert_eq!(Severity::Info.to_string(), "info");
    }
}
