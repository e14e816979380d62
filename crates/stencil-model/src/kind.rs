//! Record kind descriptors and the kind registry
//!
//! A `RecordKind` fixes, per record type, the composed facet set and the
//! serializable shape derived from it. Kinds are built once and live for
//! the whole process.

use crate::facet::{self, Facet};
use crate::field::{FieldDef, Slot};
use crate::fields;
use std::collections::HashSet;
use std::sync::LazyLock;
use stencil_catalog::{CatalogKind, CatalogSet};
use stencil_schema::{FieldShape, RecordShape, ValueShape};

/// The broad family a record kind belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Entity,
    Tile,
    Planner,
}

/// Static descriptor of one record kind
pub struct RecordKind {
    /// The kind name; for entities this doubles as the catalog group
    pub name: &'static str,
    pub category: Category,
    /// Planners nest their body under this key in the serialized form
    pub root_key: Option<&'static str>,
    /// The catalog record names of this kind are resolved against
    pub catalog: CatalogKind,
    /// Fields every record of this category carries
    pub universal: &'static [&'static FieldDef],
    /// Composed facets, in declaration order
    pub facets: &'static [&'static Facet],
    /// The serializable shape derived from the composed fields
    pub shape: RecordShape,
}

static ENTITY_UNIVERSAL: [&FieldDef; 4] = [
    &fields::NAME,
    &fields::ENTITY_NUMBER,
    &fields::POSITION,
    &fields::TAGS,
];

static TILE_UNIVERSAL: [&FieldDef; 2] = [&fields::NAME, &fields::POSITION];

static DECON_UNIVERSAL: [&FieldDef; 3] = [&fields::DECON_ITEM, &fields::LABEL, &fields::VERSION];

impl RecordKind {
    fn entity(name: &'static str, facets: &'static [&'static Facet]) -> Self {
        Self::build(
            name,
            Category::Entity,
            None,
            CatalogKind::Entity,
            &ENTITY_UNIVERSAL,
            facets,
        )
    }

    fn tile(name: &'static str) -> Self {
        Self::build(
            name,
            Category::Tile,
            None,
            CatalogKind::Tile,
            &TILE_UNIVERSAL,
            &[],
        )
    }

    fn planner(
        name: &'static str,
        root_key: &'static str,
        universal: &'static [&'static FieldDef],
        facets: &'static [&'static Facet],
    ) -> Self {
        Self::build(
            name,
            Category::Planner,
            Some(root_key),
            CatalogKind::Item,
            universal,
            facets,
        )
    }

    fn build(
        name: &'static str,
        category: Category,
        root_key: Option<&'static str>,
        catalog: CatalogKind,
        universal: &'static [&'static FieldDef],
        facets: &'static [&'static Facet],
    ) -> Self {
        // Composed facets must contribute disjoint fields.
        let mut seen: HashSet<(Slot, &str)> = HashSet::new();
        for def in universal
            .iter()
            .chain(facets.iter().flat_map(|f| f.fields.iter()))
        {
            assert!(
                seen.insert((def.slot, def.key)),
                "kind '{}' composes duplicate field '{}'",
                name,
                def.key
            );
        }

        let shape = derive_shape(name, universal, facets);
        Self {
            name,
            category,
            root_key,
            catalog,
            universal,
            facets,
            shape,
        }
    }

    /// Every field the kind declares, universal first, then facet fields in
    /// declaration order
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldDef> + '_ {
        self.universal
            .iter()
            .copied()
            .chain(self.facets.iter().flat_map(|f| f.fields.iter().copied()))
    }

    /// Whether the kind declares the given field
    pub fn declares(&self, def: &FieldDef) -> bool {
        self.fields()
            .any(|d| d.key == def.key && d.slot == def.slot)
    }
}

fn derive_shape(
    name: &str,
    universal: &[&FieldDef],
    facets: &[&Facet],
) -> RecordShape {
    let mut top = Vec::new();
    let mut control = Vec::new();
    let mut settings = Vec::new();

    for def in universal
        .iter()
        .chain(facets.iter().flat_map(|f| f.fields.iter()))
    {
        let required = def.key == "name" || matches!(def.shape, ValueShape::Literal(_));
        let field = FieldShape {
            key: def.key,
            required,
            shape: def.shape.clone(),
        };
        match def.slot {
            Slot::Root => top.push(field),
            Slot::Control => control.push(field),
            Slot::Settings => settings.push(field),
        }
    }

    if !control.is_empty() {
        top.push(FieldShape::optional(
            "control_behavior",
            ValueShape::Object(control),
        ));
    }
    if !settings.is_empty() {
        top.push(FieldShape::optional("settings", ValueShape::Object(settings)));
    }

    RecordShape::new(name, top)
}

static INSERTER_FACETS: &[&Facet] = &[
    &facet::STACK_SIZE,
    &facet::READ_HAND,
    &facet::INSERTER_MODE,
    &facet::CIRCUIT_CONDITION,
    &facet::LOGISTIC_CONDITION,
    &facet::ENABLE_DISABLE,
    &facet::CIRCUIT_CONNECTABLE,
    &facet::DIRECTIONAL,
];

static INSERTER: LazyLock<RecordKind> =
    LazyLock::new(|| RecordKind::entity("inserter", INSERTER_FACETS));

static FILTER_INSERTER_FACETS: &[&Facet] = &[
    &facet::ITEM_FILTERS,
    &facet::STACK_SIZE,
    &facet::READ_HAND,
    &facet::INSERTER_MODE,
    &facet::CIRCUIT_CONDITION,
    &facet::LOGISTIC_CONDITION,
    &facet::ENABLE_DISABLE,
    &facet::CIRCUIT_CONNECTABLE,
    &facet::DIRECTIONAL,
];

static FILTER_INSERTER: LazyLock<RecordKind> =
    LazyLock::new(|| RecordKind::entity("filter-inserter", FILTER_INSERTER_FACETS));

static ASSEMBLING_MACHINE_FACETS: &[&Facet] =
    &[&facet::RECIPE, &facet::ITEM_REQUESTS, &facet::MACHINE_MODULES];

static ASSEMBLING_MACHINE: LazyLock<RecordKind> =
    LazyLock::new(|| RecordKind::entity("assembling-machine", ASSEMBLING_MACHINE_FACETS));

static MINING_DRILL_FACETS: &[&Facet] = &[
    &facet::ITEM_REQUESTS,
    &facet::DRILL_MODULES,
    &facet::READ_RESOURCES,
    &facet::CIRCUIT_CONDITION,
    &facet::LOGISTIC_CONDITION,
    &facet::ENABLE_DISABLE,
    &facet::CIRCUIT_CONNECTABLE,
    &facet::DIRECTIONAL,
];

static MINING_DRILL: LazyLock<RecordKind> =
    LazyLock::new(|| RecordKind::entity("mining-drill", MINING_DRILL_FACETS));

static TRAIN_STOP_FACETS: &[&Facet] = &[
    &facet::COLOR,
    &facet::STATION,
    &facet::CIRCUIT_CONDITION,
    &facet::LOGISTIC_CONDITION,
    &facet::ENABLE_DISABLE,
    &facet::CIRCUIT_CONNECTABLE,
    &facet::DIRECTIONAL,
];

static TRAIN_STOP: LazyLock<RecordKind> =
    LazyLock::new(|| RecordKind::entity("train-stop", TRAIN_STOP_FACETS));

static RAIL_CHAIN_SIGNAL_FACETS: &[&Facet] = &[
    &facet::RAIL_SIGNALS,
    &facet::CIRCUIT_CONNECTABLE,
    &facet::DIRECTIONAL,
];

static RAIL_CHAIN_SIGNAL: LazyLock<RecordKind> =
    LazyLock::new(|| RecordKind::entity("rail-chain-signal", RAIL_CHAIN_SIGNAL_FACETS));

static LAND_MINE: LazyLock<RecordKind> = LazyLock::new(|| RecordKind::entity("land-mine", &[]));

static CONTAINER_FACETS: &[&Facet] = &[
    &facet::INVENTORY,
    &facet::ITEM_REQUESTS,
    &facet::CIRCUIT_CONNECTABLE,
];

static CONTAINER: LazyLock<RecordKind> =
    LazyLock::new(|| RecordKind::entity("container", CONTAINER_FACETS));

static LOGISTIC_STORAGE_CONTAINER_FACETS: &[&Facet] = &[
    &facet::INVENTORY,
    &facet::ITEM_REQUESTS,
    &facet::CIRCUIT_CONNECTABLE,
    &facet::REQUEST_FILTERS,
];

static LOGISTIC_STORAGE_CONTAINER: LazyLock<RecordKind> = LazyLock::new(|| {
    RecordKind::entity("logistic-storage-container", LOGISTIC_STORAGE_CONTAINER_FACETS)
});

static LOGISTIC_BUFFER_CONTAINER_FACETS: &[&Facet] = &[
    &facet::INVENTORY,
    &facet::ITEM_REQUESTS,
    &facet::LOGISTIC_MODE,
    &facet::CIRCUIT_CONNECTABLE,
    &facet::REQUEST_FILTERS,
];

static LOGISTIC_BUFFER_CONTAINER: LazyLock<RecordKind> = LazyLock::new(|| {
    RecordKind::entity("logistic-buffer-container", LOGISTIC_BUFFER_CONTAINER_FACETS)
});

static ELECTRIC_ENERGY_INTERFACE_FACETS: &[&Facet] = &[&facet::POWER_INTERFACE];

static ELECTRIC_ENERGY_INTERFACE: LazyLock<RecordKind> = LazyLock::new(|| {
    RecordKind::entity("electric-energy-interface", ELECTRIC_ENERGY_INTERFACE_FACETS)
});

static ROCKET_SILO_FACETS: &[&Facet] = &[&facet::ITEM_REQUESTS, &facet::AUTO_LAUNCH];

static ROCKET_SILO: LazyLock<RecordKind> =
    LazyLock::new(|| RecordKind::entity("rocket-silo", ROCKET_SILO_FACETS));

static TILE: LazyLock<RecordKind> = LazyLock::new(|| RecordKind::tile("tile"));

static DECONSTRUCTION_PLANNER_FACETS: &[&Facet] = &[
    &facet::PLANNER_META,
    &facet::ENTITY_FILTER_BLOCK,
    &facet::TILE_FILTER_BLOCK,
];

static DECONSTRUCTION_PLANNER: LazyLock<RecordKind> = LazyLock::new(|| {
    RecordKind::planner(
        "deconstruction-planner",
        "deconstruction_planner",
        &DECON_UNIVERSAL,
        DECONSTRUCTION_PLANNER_FACETS,
    )
});

pub fn inserter() -> &'static RecordKind {
    &INSERTER
}

pub fn filter_inserter() -> &'static RecordKind {
    &FILTER_INSERTER
}

pub fn assembling_machine() -> &'static RecordKind {
    &ASSEMBLING_MACHINE
}

pub fn mining_drill() -> &'static RecordKind {
    &MINING_DRILL
}

pub fn train_stop() -> &'static RecordKind {
    &TRAIN_STOP
}

pub fn rail_chain_signal() -> &'static RecordKind {
    &RAIL_CHAIN_SIGNAL
}

pub fn land_mine() -> &'static RecordKind {
    &LAND_MINE
}

pub fn container() -> &'static RecordKind {
    &CONTAINER
}

pub fn logistic_storage_container() -> &'static RecordKind {
    &LOGISTIC_STORAGE_CONTAINER
}

pub fn logistic_buffer_container() -> &'static RecordKind {
    &LOGISTIC_BUFFER_CONTAINER
}

pub fn electric_energy_interface() -> &'static RecordKind {
    &ELECTRIC_ENERGY_INTERFACE
}

pub fn rocket_silo() -> &'static RecordKind {
    &ROCKET_SILO
}

pub fn tile() -> &'static RecordKind {
    &TILE
}

pub fn deconstruction_planner() -> &'static RecordKind {
    &DECONSTRUCTION_PLANNER
}

static REGISTRY: LazyLock<Vec<&'static RecordKind>> = LazyLock::new(|| {
    vec![
        inserter(),
        filter_inserter(),
        assembling_machine(),
        mining_drill(),
        train_stop(),
        rail_chain_signal(),
        land_mine(),
        container(),
        logistic_storage_container(),
        logistic_buffer_container(),
        electric_energy_interface(),
        rocket_silo(),
        tile(),
        deconstruction_planner(),
    ]
});

/// Every registered kind
pub fn all_kinds() -> &'static [&'static RecordKind] {
    &REGISTRY
}

/// Look up a kind by its name
pub fn record_kind(name: &str) -> Option<&'static RecordKind> {
    all_kinds().iter().copied().find(|k| k.name == name)
}

/// Resolve a concrete entity name (e.g. `"fast-inserter"`) to its kind via
/// the entity catalog's group
pub fn kind_for_entity(name: &str, catalogs: &CatalogSet) -> Option<&'static RecordKind> {
    catalogs.entities.group_of(name).and_then(record_kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_names_are_unique() {
        let mut names = HashSet::new();
        for kind in all_kinds() {
            assert!(names.insert(kind.name), "duplicate kind '{}'", kind.name);
        }
    }

    #[test]
    fn test_every_kind_builds_disjoint_fields() {
        // Building a kind asserts disjointness; touching each one is enough.
        for kind in all_kinds() {
            assert!(kind.fields().count() > 0, "kind '{}' has no fields", kind.name);
        }
    }

    #[test]
    fn test_control_fields_fold_into_one_object() {
        let kind = inserter();
        let control = kind.shape.field("control_behavior").unwrap();
        match &control.shape {
            ValueShape::Object(fields) => {
                assert!(fields.iter().any(|f| f.key == "circuit_condition"));
                assert!(fields.iter().any(|f| f.key == "circuit_set_stack_size"));
            }
            other => panic!("expected object shape, got {:?}", other),
        }
    }

    #[test]
    fn test_planner_shape_nests_settings() {
        let kind = deconstruction_planner();
        assert_eq!(kind.root_key, Some("deconstruction_planner"));
        let settings = kind.shape.field("settings").unwrap();
        match &settings.shape {
            ValueShape::Object(fields) => {
                assert!(fields.iter().any(|f| f.key == "entity_filters"));
                assert!(fields.iter().any(|f| f.key == "tile_selection_mode"));
            }
            other => panic!("expected object shape, got {:?}", other),
        }
    }

    #[test]
    fn test_entity_name_is_required() {
        let field = inserter().shape.field("name").unwrap();
        assert!(field.required);
        let field = inserter().shape.field("direction").unwrap();
        assert!(!field.required);
    }

    #[test]
    fn test_kind_for_entity_resolves_group() {
        let catalogs = stencil_catalog::builtin();
        let kind = kind_for_entity("fast-inserter", catalogs).unwrap();
        assert_eq!(kind.name, "inserter");
        assert!(kind_for_entity("unknown-thing", catalogs).is_none());
    }

    #[test]
    fn test_declares_distinguishes_slots() {
        assert!(inserter().declares(&fields::CIRCUIT_CONDITION));
        assert!(!land_mine().declares(&fields::CIRCUIT_CONDITION));
        assert!(!inserter().declares(&fields::ENTITY_FILTERS));
    }
}
