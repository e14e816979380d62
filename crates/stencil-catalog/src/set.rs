//! The bundle of catalogs diagnostics consult

use crate::catalog::Catalog;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;
use stencil_core::Result;

/// Which catalog a name should be resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Entity,
    Tile,
    Item,
    Recipe,
    Module,
    Signal,
}

impl CatalogKind {
    pub fn name(&self) -> &'static str {
        match self {
            CatalogKind::Entity => "entity",
            CatalogKind::Tile => "tile",
            CatalogKind::Item => "item",
            CatalogKind::Recipe => "recipe",
            CatalogKind::Module => "module",
            CatalogKind::Signal => "signal",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All six static catalogs. The model only ever reads from these.
#[derive(Debug, Clone, Default)]
pub struct CatalogSet {
    pub entities: Catalog,
    pub tiles: Catalog,
    pub items: Catalog,
    pub recipes: Catalog,
    pub modules: Catalog,
    pub signals: Catalog,
}

impl CatalogSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the catalog for a kind
    pub fn get(&self, kind: CatalogKind) -> &Catalog {
        match kind {
            CatalogKind::Entity => &self.entities,
            CatalogKind::Tile => &self.tiles,
            CatalogKind::Item => &self.items,
            CatalogKind::Recipe => &self.recipes,
            CatalogKind::Module => &self.modules,
            CatalogKind::Signal => &self.signals,
        }
    }

    /// Build the embedded vanilla dataset
    pub fn builtin_data() -> Result<Self> {
        Ok(Self {
            entities: Catalog::from_toml_str(include_str!("../data/entities.toml"))?,
            tiles: Catalog::from_toml_str(include_str!("../data/tiles.toml"))?,
            items: Catalog::from_toml_str(include_str!("../data/items.toml"))?,
            recipes: Catalog::from_toml_str(include_str!("../data/recipes.toml"))?,
            modules: Catalog::from_toml_str(include_str!("../data/modules.toml"))?,
            signals: Catalog::from_toml_str(include_str!("../data/signals.toml"))?,
        })
    }

    /// Load a catalog set from a directory holding one TOML file per
    /// catalog (`entities.toml`, `tiles.toml`, ...). Missing files leave
    /// the corresponding catalog empty.
    pub fn from_dir<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut set = Self::new();
        for (file, slot) in [
            ("entities.toml", CatalogKind::Entity),
            ("tiles.toml", CatalogKind::Tile),
            ("items.toml", CatalogKind::Item),
            ("recipes.toml", CatalogKind::Recipe),
            ("modules.toml", CatalogKind::Module),
            ("signals.toml", CatalogKind::Signal),
        ] {
            let file_path = path.join(file);
            if file_path.exists() {
                let content = std::fs::read_to_string(&file_path)?;
                *set.get_mut(slot) = Catalog::from_toml_str(&content)?;
            }
        }
        Ok(set)
    }

    fn get_mut(&mut self, kind: CatalogKind) -> &mut Catalog {
        match kind {
            CatalogKind::Entity => &mut self.entities,
            CatalogKind::Tile => &mut self.tiles,
            CatalogKind::Item => &mut self.items,
            CatalogKind::Recipe => &mut self.recipes,
            CatalogKind::Module => &mut self.modules,
            CatalogKind::Signal => &mut self.signals,
        }
    }
}

static BUILTIN: LazyLock<CatalogSet> =
    LazyLock::new(|| CatalogSet::builtin_data().expect("embedded catalog data is valid"));

/// The embedded vanilla dataset, built once on first use
pub fn builtin() -> &'static CatalogSet {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_data_loads() {
        let set = builtin();
        assert!(set.entities.contains("inserter"));
        assert!(set.tiles.contains("concrete"));
        assert!(set.items.contains("iron-plate"));
    }

    #[test]
    fn test_builtin_groups_resolve_kinds() {
        let set = builtin();
        assert_eq!(set.entities.group_of("fast-inserter"), Some("inserter"));
        assert_eq!(
            set.entities.first_of_group("assembling-machine"),
            Some("assembling-machine-1")
        );
    }

    #[test]
    fn test_modules_are_also_items() {
        let set = builtin();
        for name in set.modules.names() {
            assert!(set.items.contains(name), "module '{}' missing from items", name);
        }
    }
}
