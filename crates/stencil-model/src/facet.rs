//! Capability facets composable onto record kinds
//!
//! A facet is an independently optional bundle of fields plus an optional
//! semantic check hook. Facets never assume another facet's fields exist;
//! the disjointness of composed field sets is asserted when a kind is
//! built.

use crate::diagnostics::Warning;
use crate::field::FieldDef;
use crate::fields;
use crate::record::Record;
use stencil_catalog::{CatalogKind, CatalogSet};

/// A semantic check contributed by a facet. Runs only after structural
/// validation has passed; appends findings and never aborts.
pub type FacetCheck = fn(&Record, &CatalogSet, &mut Vec<Warning>);

/// An independently optional attribute bundle
pub struct Facet {
    pub name: &'static str,
    pub fields: &'static [&'static FieldDef],
    pub check: Option<FacetCheck>,
}

pub static DIRECTIONAL: Facet = Facet {
    name: "directional",
    fields: &[&fields::DIRECTION],
    check: None,
};

pub static COLOR: Facet = Facet {
    name: "color",
    fields: &[&fields::COLOR],
    check: None,
};

pub static STACK_SIZE: Facet = Facet {
    name: "stack_size",
    fields: &[
        &fields::OVERRIDE_STACK_SIZE,
        &fields::CIRCUIT_SET_STACK_SIZE,
        &fields::STACK_CONTROL_INPUT_SIGNAL,
    ],
    check: None,
};

pub static CIRCUIT_CONNECTABLE: Facet = Facet {
    name: "circuit_connectable",
    fields: &[&fields::CONNECTIONS],
    check: None,
};

pub static ENABLE_DISABLE: Facet = Facet {
    name: "enable_disable",
    fields: &[&fields::CIRCUIT_ENABLE_DISABLE],
    check: None,
};

pub static CIRCUIT_CONDITION: Facet = Facet {
    name: "circuit_condition",
    fields: &[&fields::CIRCUIT_CONDITION],
    check: None,
};

pub static LOGISTIC_CONDITION: Facet = Facet {
    name: "logistic_condition",
    fields: &[
        &fields::CONNECT_TO_LOGISTIC_NETWORK,
        &fields::LOGISTIC_CONDITION,
    ],
    check: None,
};

pub static READ_HAND: Facet = Facet {
    name: "read_hand",
    fields: &[
        &fields::CIRCUIT_READ_HAND_CONTENTS,
        &fields::CIRCUIT_HAND_READ_MODE,
    ],
    check: None,
};

pub static INSERTER_MODE: Facet = Facet {
    name: "inserter_mode_of_operation",
    fields: &[&fields::INSERTER_MODE_OF_OPERATION],
    check: None,
};

pub static LOGISTIC_MODE: Facet = Facet {
    name: "logistic_mode_of_operation",
    fields: &[&fields::LOGISTIC_MODE_OF_OPERATION],
    check: None,
};

pub static ITEM_FILTERS: Facet = Facet {
    name: "item_filters",
    fields: &[&fields::ITEM_FILTERS, &fields::FILTER_MODE],
    check: None,
};

pub static REQUEST_FILTERS: Facet = Facet {
    name: "request_filters",
    fields: &[&fields::REQUEST_FILTERS],
    check: None,
};

pub static ITEM_REQUESTS: Facet = Facet {
    name: "item_requests",
    fields: &[&fields::ITEM_REQUESTS],
    check: Some(check_request_names),
};

/// Module limitation and ingredient checks for crafting machines
pub static MACHINE_MODULES: Facet = Facet {
    name: "machine_modules",
    fields: &[],
    check: Some(check_machine_requests),
};

/// Mining drills only accept modules in their item requests
pub static DRILL_MODULES: Facet = Facet {
    name: "drill_modules",
    fields: &[],
    check: Some(check_drill_requests),
};

pub static INVENTORY: Facet = Facet {
    name: "inventory",
    fields: &[&fields::BAR],
    check: None,
};

pub static RECIPE: Facet = Facet {
    name: "recipe",
    fields: &[&fields::RECIPE],
    check: Some(check_recipe),
};

pub static RAIL_SIGNALS: Facet = Facet {
    name: "rail_signal_outputs",
    fields: &[
        &fields::RED_OUTPUT_SIGNAL,
        &fields::YELLOW_OUTPUT_SIGNAL,
        &fields::GREEN_OUTPUT_SIGNAL,
        &fields::BLUE_OUTPUT_SIGNAL,
    ],
    check: None,
};

pub static READ_RESOURCES: Facet = Facet {
    name: "read_resources",
    fields: &[&fields::CIRCUIT_READ_RESOURCES],
    check: None,
};

pub static STATION: Facet = Facet {
    name: "station",
    fields: &[
        &fields::STATION,
        &fields::MANUAL_TRAINS_LIMIT,
        &fields::READ_FROM_TRAIN,
        &fields::READ_STOPPED_TRAIN,
        &fields::TRAIN_STOPPED_SIGNAL,
        &fields::SET_TRAINS_LIMIT,
        &fields::TRAINS_LIMIT_SIGNAL,
        &fields::READ_TRAINS_COUNT,
        &fields::TRAINS_COUNT_SIGNAL,
    ],
    check: None,
};

pub static POWER_INTERFACE: Facet = Facet {
    name: "power_interface",
    fields: &[
        &fields::BUFFER_SIZE,
        &fields::POWER_PRODUCTION,
        &fields::POWER_USAGE,
    ],
    check: None,
};

pub static AUTO_LAUNCH: Facet = Facet {
    name: "auto_launch",
    fields: &[&fields::AUTO_LAUNCH],
    check: None,
};

pub static PLANNER_META: Facet = Facet {
    name: "planner_meta",
    fields: &[&fields::DESCRIPTION, &fields::ICONS],
    check: None,
};

pub static ENTITY_FILTER_BLOCK: Facet = Facet {
    name: "entity_filter_block",
    fields: &[
        &fields::ENTITY_FILTER_MODE,
        &fields::ENTITY_FILTERS,
        &fields::TREES_AND_ROCKS_ONLY,
    ],
    check: None,
};

pub static TILE_FILTER_BLOCK: Facet = Facet {
    name: "tile_filter_block",
    fields: &[
        &fields::TILE_FILTER_MODE,
        &fields::TILE_FILTERS,
        &fields::TILE_SELECTION_MODE,
    ],
    check: None,
};

fn check_request_names(record: &Record, catalogs: &CatalogSet, warnings: &mut Vec<Warning>) {
    for (item, _count) in record.item_requests() {
        if !catalogs.items.contains(&item) {
            warnings.push(Warning::UnrecognizedName {
                catalog: CatalogKind::Item,
                name: item,
            });
        }
    }
}

fn check_recipe(record: &Record, catalogs: &CatalogSet, warnings: &mut Vec<Warning>) {
    let recipe = record.get::<String>(&fields::RECIPE).ok().flatten();
    if let Some(recipe) = recipe {
        if !catalogs.recipes.contains(&recipe) {
            warnings.push(Warning::UnrecognizedName {
                catalog: CatalogKind::Recipe,
                name: recipe,
            });
        }
    }
}

fn check_machine_requests(record: &Record, catalogs: &CatalogSet, warnings: &mut Vec<Warning>) {
    let recipe = record.get::<String>(&fields::RECIPE).ok().flatten();

    for (item, _count) in record.item_requests() {
        if let Some(module) = catalogs.modules.get(&item) {
            // A limited module may only be requested when the configured
            // recipe is within its limitation set.
            if let Some(recipe) = &recipe {
                if !module.limitation.is_empty() && !module.limitation.contains(recipe) {
                    warnings.push(Warning::ModuleLimitation {
                        module: item.clone(),
                        recipe: recipe.clone(),
                    });
                }
            }
        } else if let Some(recipe) = &recipe {
            let used = catalogs
                .recipes
                .get(recipe)
                .map(|entry| entry.ingredients.contains(&item))
                .unwrap_or(true);
            if !used {
                warnings.push(Warning::ItemLimitation {
                    item: item.clone(),
                    reason: format!("recipe '{}' does not use it", recipe),
                });
            }
        }
    }
}

fn check_drill_requests(record: &Record, catalogs: &CatalogSet, warnings: &mut Vec<Warning>) {
    for (item, _count) in record.item_requests() {
        if catalogs.items.contains(&item) && !catalogs.modules.contains(&item) {
            warnings.push(Warning::ItemLimitation {
                item,
                reason: "only modules can be placed in a mining drill".to_string(),
            });
        }
    }
}
