//! Filesystem behaviour of the C# generator.

use std::{fs, str::FromStr};

use frost_codegen::testing::generate_to_temp;
use frost_codegen_csharp::{Generator, LanguageCodegen};
use frost_manifest::Manifest;

fn generator(types: &str) -> Generator {
    let manifest = Manifest::from_str(&format!(
        "[project]\nname = \"orchard\"\nlanguage = \"csharp\"\n\n{}",
        types
    ))
    .expect("Failed to parse manifest");
    Generator::from_manifest(manifest).expect("Failed to expand types")
}

const FRUIT_AND_APPLE: &str = r#"
[types.Fruit.fields]
color = "string"

[types.Apple.fields]
variety = "string"
"#;

const FRUIT_ONLY: &str = r#"
[types.Fruit.fields]
color = "string"
"#;

#[test]
fn test_generate_writes_files() {
    let temp = generate_to_temp(|dir| {
        let result = generator(FRUIT_AND_APPLE).generate(dir)?;
        assert_eq!(
            result.written,
            vec![
                "Generated/Optional.generated.cs",
                "Generated/Fruit.generated.cs",
                "Generated/Apple.generated.cs"
            ]
        );
        Ok(())
    })
    .unwrap();

    let fruit = fs::read_to_string(temp.path().join("Generated/Fruit.generated.cs")).unwrap();
    assert!(fruit.contains("public partial class Fruit {"));
}

#[test]
fn test_generate_twice_is_unchanged() {
    let temp = tempfile::TempDir::new().unwrap();
    let generator = generator(FRUIT_AND_APPLE);

    generator.generate(temp.path()).unwrap();
    let result = generator.generate(temp.path()).unwrap();

    assert!(result.written.is_empty());
    assert_eq!(result.unchanged.len(), 3);
}

#[test]
fn test_handwritten_partial_is_ignored() {
    let temp = tempfile::TempDir::new().unwrap();
    let generator = generator(FRUIT_ONLY);
    generator.generate(temp.path()).unwrap();

    // Hand-written halves of partial classes do not use the generated suffix
    let partial = temp.path().join("Generated/Fruit.cs");
    fs::write(&partial, "public partial class Fruit { }\n").unwrap();

    let result = generator.generate(temp.path()).unwrap();
    assert!(result.orphans.is_empty());
    assert!(generator.clean(temp.path()).unwrap().is_empty());
    assert!(partial.exists());
}

#[test]
fn test_removed_type_is_reported_and_cleaned() {
    let temp = tempfile::TempDir::new().unwrap();
    generator(FRUIT_AND_APPLE).generate(temp.path()).unwrap();

    let fruit_only = generator(FRUIT_ONLY);
    let result = fruit_only.generate(temp.path()).unwrap();
    assert_eq!(result.orphans, vec!["Generated/Apple.generated.cs"]);

    let cleaned = fruit_only.clean(temp.path()).unwrap();
    assert_eq!(cleaned.deleted, vec!["Generated/Apple.generated.cs"]);
    assert!(!temp.path().join("Generated/Apple.generated.cs").exists());
    assert!(temp.path().join("Generated/Optional.generated.cs").exists());
}

#[test]
fn test_edited_generated_file_is_kept() {
    let temp = tempfile::TempDir::new().unwrap();
    let dir = temp.path().join("Generated");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("Old.generated.cs"), "public class Old { }\n").unwrap();

    let generator = generator(FRUIT_ONLY);
    let preview = generator.preview_clean(temp.path()).unwrap();
    assert!(preview.deleted.is_empty());
    assert_eq!(preview.skipped, vec!["Generated/Old.generated.cs"]);

    let cleaned = generator.clean(temp.path()).unwrap();
    assert_eq!(cleaned.skipped, vec!["Generated/Old.generated.cs"]);
    assert!(dir.join("Old.generated.cs").exists());
}
