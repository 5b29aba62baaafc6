use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A backend frost can generate for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Rust,
    #[serde(alias = "cs")]
    CSharp,
}

impl Language {
    /// Canonical name, as written in `[project] language`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::CSharp => "csharp",
        }
    }

    /// Where generated files go when `[project] output` is unset.
    pub fn default_output(&self) -> &'static str {
        match self {
            Self::Rust => "src/generated",
            Self::CSharp => "Generated",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Rust => &["rust", "rs"],
            Self::CSharp => &["csharp", "cs", "c#"],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive, accepting the short aliases too.
impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();
        [Self::Rust, Self::CSharp]
            .into_iter()
            .find(|lang| lang.aliases().contains(&wanted.as_str()))
            .ok_or_else(|| format!("unknown language '{s}', expected 'rust' or 'csharp'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        for (input, expected) in [
            ("rust", Language::Rust),
            ("RS", Language::Rust),
            ("CSharp", Language::CSharp),
            ("cs", Language::CSharp),
            ("C#", Language::CSharp),
        ] {
            assert_eq!(input.parse::<Language>(), Ok(expected), "{input}");
        }
    }

    #[test]
    fn test_unknown_language() {
        let err = "kotlin".parse::<Language>().unwrap_err();
        assert_eq!(err, "unknown language 'kotlin', expected 'rust' or 'csharp'");
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for lang in [Language::Rust, Language::CSharp] {
            assert_eq!(lang.to_string().parse::<Language>(), Ok(lang));
        }
    }

    #[test]
    fn test_manifest_spelling() {
        let lang: Language = serde_json::from_str(r#""cs""#).unwrap();
        assert_eq!(lang, Language::CSharp);
        assert_eq!(Language::CSharp.default_output(), "Generated");
        assert_eq!(Language::Rust.default_output(), "src/generated");
    }
}
