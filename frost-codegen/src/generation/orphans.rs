//! Detection of generated files that no longer have a declared type.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use eyre::Result;
use frost_core::is_generated;
use tracing::{debug, warn};

use crate::CleanResult;

/// A file in the output directory that no current type produces.
#[derive(Debug, Clone)]
pub struct OrphanFile {
    /// Path relative to the project root, including the output directory
    /// (e.g., "src/generated/apple.rs")
    pub relative_path: String,
    /// Full filesystem path
    pub full_path: PathBuf,
    /// Whether the file still starts with the generated header
    pub is_generated: bool,
}

/// Find orphaned files in `root/output`.
///
/// Scans the directory (non-recursively) for files ending in `suffix` whose
/// names are not in `expected`. Each orphan is tagged with whether it still
/// carries `header`, since only those are safe to delete.
pub fn find_orphans(
    root: &Path,
    output: &str,
    suffix: &str,
    expected: &HashSet<String>,
    header: &str,
) -> Result<Vec<OrphanFile>> {
    let dir = root.join(output);
    let prefix = output.trim_end_matches('/');
    let mut orphans = Vec::new();

    if !dir.exists() {
        return Ok(orphans);
    }

    for entry in std::fs::read_dir(&dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        let Some(file_name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };

        if !file_name.ends_with(suffix) || expected.contains(&file_name) {
            continue;
        }

        let is_generated = std::fs::read_to_string(&path)
            .map(|content| is_generated(&content, header))
            .unwrap_or(false);

        let relative_path = match prefix {
            "" | "." => file_name,
            prefix => format!("{prefix}/{file_name}"),
        };
        orphans.push(OrphanFile {
            relative_path,
            full_path: path,
            is_generated,
        });
    }

    // read_dir order is platform dependent
    orphans.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    Ok(orphans)
}

/// Delete the orphans that still carry the generated header, or only list
/// them when `dry_run` is set. Orphans the user has taken over are skipped.
pub fn sweep_orphans(orphans: Vec<OrphanFile>, dry_run: bool) -> Result<CleanResult> {
    let mut result = CleanResult::default();

    for orphan in orphans {
        if !orphan.is_generated {
            warn!(path = %orphan.relative_path, "skipping orphaned file without generated header");
            result.skipped.push(orphan.relative_path);
            continue;
        }
        if !dry_run {
            std::fs::remove_file(&orphan.full_path)?;
            debug!(path = %orphan.relative_path, "deleted orphaned file");
        }
        result.deleted.push(orphan.relative_path);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use frost_core::GENERATED_HEADER;
    use tempfile::TempDir;

    use super::*;

    fn expected(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_missing_dir_has_no_orphans() {
        let temp = TempDir::new().unwrap();
        let orphans = find_orphans(
            temp.path(),
            "missing",
            ".rs",
            &expected(&[]),
            GENERATED_HEADER,
        )
        .unwrap();
        assert!(orphans.is_empty());
    }

    #[test]
    fn test_finds_orphans_with_status() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("src/generated");
        fs::create_dir_all(&dir).unwrap();

        fs::write(dir.join("fruit.rs"), format!("{}\n", GENERATED_HEADER)).unwrap();
        fs::write(dir.join("mod.rs"), format!("{}\n", GENERATED_HEADER)).unwrap();
        fs::write(dir.join("apple.rs"), format!("{}\n", GENERATED_HEADER)).unwrap();
        fs::write(dir.join("helpers.rs"), "pub fn help() {}\n").unwrap();
        fs::write(dir.join("notes.txt"), "not source").unwrap();

        let orphans = find_orphans(
            temp.path(),
            "src/generated/",
            ".rs",
            &expected(&["fruit.rs", "mod.rs"]),
            GENERATED_HEADER,
        )
        .unwrap();

        let names: Vec<_> = orphans.iter().map(|o| o.relative_path.as_str()).collect();
        assert_eq!(names, vec!["src/generated/apple.rs", "src/generated/helpers.rs"]);
        assert!(orphans[0].is_generated);
        assert!(!orphans[1].is_generated);
    }

    #[test]
    fn test_compound_suffix() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();

        fs::write(dir.join("Apple.generated.cs"), "// <auto-generated>").unwrap();
        fs::write(dir.join("Apple.cs"), "partial class Apple {}").unwrap();

        let orphans =
            find_orphans(dir, ".", ".generated.cs", &expected(&[]), "// <auto-generated>").unwrap();

        assert_eq!(orphans.len(), 1);
        assert_eq!(orphans[0].relative_path, "Apple.generated.cs");
    }

    #[test]
    fn test_sweep_keeps_user_owned_files() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        fs::write(dir.join("apple.rs"), format!("{}\n", GENERATED_HEADER)).unwrap();
        fs::write(dir.join("helpers.rs"), "pub fn help() {}\n").unwrap();

        let scan = || find_orphans(dir, "", ".rs", &expected(&[]), GENERATED_HEADER).unwrap();

        let preview = sweep_orphans(scan(), true).unwrap();
        assert_eq!(preview.deleted, vec!["apple.rs"]);
        assert_eq!(preview.skipped, vec!["helpers.rs"]);
        assert!(dir.join("apple.rs").exists());

        let cleaned = sweep_orphans(scan(), false).unwrap();
        assert_eq!(cleaned.deleted, vec!["apple.rs"]);
        assert!(!dir.join("apple.rs").exists());
        assert!(dir.join("helpers.rs").exists());
    }
}
