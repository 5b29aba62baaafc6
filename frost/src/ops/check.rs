//! Check operation - manifest validation.

use std::path::Path;

use frost_codegen::pipeline::{CompilationContext, Severity};
use frost_manifest::Manifest;

use crate::{language::LanguageSupport, reports::CheckReport};

/// Execute the check operation.
///
/// Runs the whole pipeline, including expansion for the target language,
/// and collects every diagnostic. A failed phase is reported, not returned.
pub fn check(manifest: Manifest, lang: LanguageSupport, config_path: &Path) -> CheckReport {
    let type_count = manifest.types.len();
    let field_count = manifest.field_count();

    let mut ctx = CompilationContext::new(manifest);
    let failure = lang.pipeline().run_in(&mut ctx).err();

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    // A phase can fail without recording a diagnostic
    if let Some(err) = failure
        && errors.is_empty()
    {
        errors.push(err.to_string());
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        language: lang.language.to_string(),
        type_count,
        field_count,
        errors,
        warnings,
        infos,
    }
}

#[cfg(test)]
mod tests {
    use frost_manifest::Language;

    use super::*;

    fn check_str(content: &str, language: Language) -> CheckReport {
        check(
            content.parse().unwrap(),
            LanguageSupport::from(language),
            Path::new("frost.toml"),
        )
    }

    #[test]
    fn test_valid_manifest() {
        let report = check_str(
            r#"
            [project]
            name = "orchard"
            language = "rust"

            [types.Fruit]
            description = "A piece of fruit"

            [types.Fruit.fields]
            color = "string"
            "#,
            Language::Rust,
        );

        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
        assert_eq!(report.type_count, 1);
        assert_eq!(report.field_count, 1);
    }

    #[test]
    fn test_errors_depend_on_target() {
        let content = r#"
            [project]
            name = "orchard"
            language = "rust"

            [types.Optional]
            description = "Clashes with the C# support type"

            [types.Optional.fields]
            value = "int"
        "#;

        assert!(check_str(content, Language::Rust).is_valid());

        let report = check_str(content, Language::CSharp);
        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].ends_with("--> types.Optional"));
    }

    #[test]
    fn test_warnings_and_infos() {
        let report = check_str(
            r#"
            [project]
            name = "orchard"
            language = "rust"

            [types.Marker]
            builder = true
            "#,
            Language::Rust,
        );

        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.infos.len(), 1);
    }
}
