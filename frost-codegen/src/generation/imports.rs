//! Deduplicated `use` targets for a generated file.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Names to import, grouped by module.
///
/// Modules come out in the order they were first seen; names within a
/// module are sorted, so two runs over the same type agree byte for byte.
///
/// ```
/// use frost_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("super", "Fruit");
/// imports.add("std::collections", "BTreeMap");
/// imports.add("super", "Basket");
///
/// let modules: Vec<_> = imports.iter().map(|(module, _)| module).collect();
/// assert_eq!(modules, ["super", "std::collections"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    modules: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, module: &str, name: &str) {
        self.modules
            .entry(module.to_owned())
            .or_default()
            .insert(name.to_owned());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.modules.iter().map(|(module, names)| (module.as_str(), names))
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_name_is_kept_once() {
        let mut imports = ImportCollector::new();
        imports.add("super", "Fruit");
        imports.add("super", "Fruit");

        let names: Vec<_> = imports.iter().flat_map(|(_, names)| names).collect();
        assert_eq!(names, ["Fruit"]);
    }

    #[test]
    fn test_names_sorted_within_module() {
        let mut imports = ImportCollector::new();
        assert!(imports.is_empty());
        imports.add("super", "Fruit");
        imports.add("super", "Basket");

        let (_, names) = imports.iter().next().unwrap();
        assert_eq!(names.iter().collect::<Vec<_>>(), ["Basket", "Fruit"]);
    }
}
