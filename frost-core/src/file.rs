use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::Result;

/// First line of every generated Rust file.
pub const GENERATED_HEADER: &str = "// Code generated by frost. DO NOT EDIT.";

/// Whether `content` begins with `header`, ignoring a UTF-8 byte order mark.
pub fn is_generated(content: &str, header: &str) -> bool {
    content.trim_start_matches('\u{feff}').starts_with(header)
}

/// What [`File::write`] may do when the target already exists with other content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    Always,
    /// Leave any existing file in place.
    Never,
    /// Replace only a file that still starts with this header. Removing the
    /// header hands the file over to the user.
    IfGenerated(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// Already held exactly this content.
    Unchanged,
    /// Existing content kept because of the [`Overwrite`] policy.
    Skipped,
}

/// Content destined for one path, with its overwrite policy.
pub struct File {
    path: PathBuf,
    content: String,
    overwrite: Overwrite,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::Always,
        }
    }

    /// Write only if nothing exists at the path yet.
    pub fn create_once(self) -> Self {
        self.overwrite(Overwrite::Never)
    }

    /// Replace only files previously generated with `header`.
    pub fn generated_by(self, header: &'static str) -> Self {
        self.overwrite(Overwrite::IfGenerated(header))
    }

    pub fn overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write, creating parent directories as needed.
    pub fn write(&self) -> Result<WriteResult> {
        let existing = match fs::read_to_string(&self.path) {
            Ok(existing) => Some(existing),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => return Err(err.into()),
        };

        if let Some(existing) = existing {
            if existing == self.content {
                return Ok(WriteResult::Unchanged);
            }
            let replaceable = match self.overwrite {
                Overwrite::Always => true,
                Overwrite::Never => false,
                Overwrite::IfGenerated(header) => is_generated(&existing, header),
            };
            if !replaceable {
                return Ok(WriteResult::Skipped);
            }
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn generated(body: &str) -> String {
        format!("{GENERATED_HEADER}\n\n{body}")
    }

    #[test]
    fn test_creates_missing_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("src/generated/fruit.rs");

        assert_eq!(File::new(&path, "x").write().unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "x");
    }

    #[test]
    fn test_same_content_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let file = File::new(temp.path().join("fruit.rs"), "x");

        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(file.write().unwrap(), WriteResult::Unchanged);
    }

    #[test]
    fn test_always_replaces() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("fruit.rs");
        fs::write(&path, "old").unwrap();

        assert_eq!(File::new(&path, "new").write().unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_create_once_keeps_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("frost.toml");
        fs::write(&path, "[project]").unwrap();

        let result = File::new(&path, "other").create_once().write().unwrap();
        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "[project]");
    }

    #[test]
    fn test_generated_file_is_replaced() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("fruit.rs");
        fs::write(&path, generated("old")).unwrap();

        let file = File::new(&path, generated("new")).generated_by(GENERATED_HEADER);
        assert_eq!(file.path(), path);
        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), generated("new"));
    }

    #[test]
    fn test_file_without_header_is_kept() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("fruit.rs");
        fs::write(&path, "pub struct Fruit;").unwrap();

        let result = File::new(&path, generated("new"))
            .generated_by(GENERATED_HEADER)
            .write()
            .unwrap();
        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "pub struct Fruit;");
    }

    #[test]
    fn test_is_generated() {
        assert!(is_generated(&generated(""), GENERATED_HEADER));
        assert!(is_generated("\u{feff}// <auto-generated/>", "// <auto-generated/>"));
        assert!(!is_generated("// Code generated by hand", GENERATED_HEADER));
    }
}
