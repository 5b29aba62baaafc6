use std::collections::{HashMap, hash_map::Entry};

use frost_manifest::Manifest;

use super::{super::Lint, type_location};
use crate::pipeline::Diagnostic;

/// Errors on type names that differ only by case or underscores.
///
/// `FruitBasket` and `fruit_basket` both become `FruitBasket` in
/// `fruit_basket.rs` or `FruitBasket.cs`, so the second would overwrite
/// the first.
pub struct DuplicateTypeLint;

impl Lint for DuplicateTypeLint {
    fn name(&self) -> &'static str {
        "duplicate-type"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let mut first_by_key: HashMap<String, &str> = HashMap::new();

        for name in manifest.types.keys() {
            let key: String = name.chars().filter(|&c| c != '_').flat_map(char::to_lowercase).collect();
            match first_by_key.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(name);
                }
                Entry::Occupied(first) => diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!("duplicate type '{name}' (conflicts with '{}')", first.get()),
                    )
                    .at(type_location(name)),
                ),
            }
        }
    }
}
