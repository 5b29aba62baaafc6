use std::path::{Path, PathBuf};

use super::Manifest;
use crate::{Error, Result};

/// A `frost.toml` on disk: its path, raw text, and the manifest parsed from it.
///
/// The text is kept so an edit can be re-validated before it is saved.
pub struct FrostToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl FrostToml {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::with_content(path, content)
    }

    /// Parse `content` as if it had been read from `path`.
    pub fn with_content(path: impl Into<PathBuf>, content: String) -> Result<Self> {
        let path = path.into();
        let manifest = parse_at(&path, &content)?;
        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the file; relative output paths resolve against it.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new("."))
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Replace the text. Nothing changes if the new text does not parse.
    pub fn set_content(&mut self, content: String) -> Result<()> {
        self.manifest = parse_at(&self.path, &content)?;
        self.content = content;
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        std::fs::write(&self.path, &self.content).map_err(|e| Error::io(&self.path, e))
    }
}

fn parse_at(path: &Path, content: &str) -> Result<Manifest> {
    Manifest::from_str_with_filename(content, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    const CONTENT: &str = r#"[project]
name = "orchard"
language = "rust"

[types.Fruit.fields]
color = "string"
"#;

    #[test]
    fn test_save_and_open() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("frost.toml");

        let file = FrostToml::with_content(&path, CONTENT.to_string()).unwrap();
        file.save().unwrap();

        let reopened = FrostToml::open(&path).unwrap();
        assert_eq!(reopened.content(), CONTENT);
        assert!(reopened.manifest().has_type("Fruit"));
        assert_eq!(reopened.dir(), temp.path());
    }

    #[test]
    fn test_set_content_rejects_invalid() {
        let mut file = FrostToml::with_content("frost.toml", CONTENT.to_string()).unwrap();
        assert!(file.set_content("not toml [".to_string()).is_err());
        // Previous content is kept on failure
        assert_eq!(file.content(), CONTENT);

        let updated = CONTENT.replace("Fruit", "Basket");
        file.set_content(updated).unwrap();
        assert!(file.manifest().has_type("Basket"));
    }

    #[test]
    fn test_dir_of_bare_filename() {
        let file = FrostToml::with_content("frost.toml", CONTENT.to_string()).unwrap();
        assert_eq!(file.dir(), Path::new(""));
    }
}
