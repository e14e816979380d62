//! Name-keyed catalogs of static game data

use serde::Deserialize;
use std::collections::HashMap;
use stencil_core::Result;

/// One catalog entry plus the attributes the model consults
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    pub name: String,
    /// The record kind (or signal namespace) this entry belongs to
    #[serde(default)]
    pub group: Option<String>,
    /// Items: how many fit in one inventory slot
    #[serde(default)]
    pub stack_size: Option<u32>,
    /// Recipes: input item names
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Modules: recipe names the module is restricted to (empty = any)
    #[serde(default)]
    pub limitation: Vec<String>,
}

impl Entry {
    /// Create a bare entry with just a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: None,
            stack_size: None,
            ingredients: Vec::new(),
            limitation: Vec::new(),
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_stack_size(mut self, stack_size: u32) -> Self {
        self.stack_size = Some(stack_size);
        self
    }

    pub fn with_ingredients(mut self, ingredients: Vec<String>) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub fn with_limitation(mut self, limitation: Vec<String>) -> Self {
        self.limitation = limitation;
        self
    }
}

/// TOML file format for catalog data
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    entry: Vec<Entry>,
}

/// A name-indexed catalog. Registration order is preserved so a record kind
/// can default to the first entry of its group.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, Entry>,
    order: Vec<String>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a TOML string of `[[entry]]` tables
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        let mut catalog = Self::new();
        for entry in file.entry {
            catalog.register(entry);
        }
        Ok(catalog)
    }

    /// Register an entry. Re-registering a name overwrites the entry but
    /// keeps its original position in the order.
    pub fn register(&mut self, entry: Entry) {
        if !self.entries.contains_key(&entry.name) {
            self.order.push(entry.name.clone());
        }
        self.entries.insert(entry.name.clone(), entry);
    }

    /// Check whether a name is known to this catalog
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Get an entry by name
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// All names, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    /// The group an entry belongs to
    pub fn group_of(&self, name: &str) -> Option<&str> {
        self.entries.get(name).and_then(|e| e.group.as_deref())
    }

    /// The first registered name with the given group
    pub fn first_of_group(&self, group: &str) -> Option<&str> {
        self.order
            .iter()
            .find(|name| self.group_of(name) == Some(group))
            .map(|s| s.as_str())
    }

    /// All names with the given group, in registration order
    pub fn names_of_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a str> {
        self.order
            .iter()
            .filter(move |name| self.group_of(name) == Some(group))
            .map(|s| s.as_str())
    }

    /// An item's stack size, if the entry declares one
    pub fn stack_size(&self, name: &str) -> Option<u32> {
        self.entries.get(name).and_then(|e| e.stack_size)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_toml() {
        let toml = r#"
[[entry]]
name = "fast-inserter"
group = "inserter"

[[entry]]
name = "iron-plate"
stack_size = 100
"#;
        let catalog = Catalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("fast-inserter"));
        assert_eq!(catalog.stack_size("iron-plate"), Some(100));
        assert_eq!(catalog.group_of("fast-inserter"), Some("inserter"));
    }

    #[test]
    fn test_first_of_group_follows_registration_order() {
        let mut catalog = Catalog::new();
        catalog.register(Entry::named("burner-mining-drill").with_group("mining-drill"));
        catalog.register(Entry::named("inserter").with_group("inserter"));
        catalog.register(Entry::named("electric-mining-drill").with_group("mining-drill"));

        assert_eq!(catalog.first_of_group("mining-drill"), Some("burner-mining-drill"));
        assert_eq!(catalog.first_of_group("inserter"), Some("inserter"));
        assert_eq!(catalog.first_of_group("beacon"), None);
    }

    #[test]
    fn test_reregister_keeps_position() {
        let mut catalog = Catalog::new();
        catalog.register(Entry::named("a").with_group("g"));
        catalog.register(Entry::named("b").with_group("g"));
        catalog.register(Entry::named("a").with_group("g").with_stack_size(5));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.first_of_group("g"), Some("a"));
        assert_eq!(catalog.stack_size("a"), Some(5));
    }
}
