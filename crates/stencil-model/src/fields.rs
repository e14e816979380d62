//! The field inventory: every `FieldDef` a facet or record category can
//! contribute. Grouped by the facet that owns them; see `facet` for the
//! groupings themselves.

use crate::field::{FieldDef, FilterSpec, Slot};
use stencil_catalog::CatalogKind;
use stencil_schema::ValueShape;

// Universal fields

pub static NAME: FieldDef = FieldDef {
    key: "name",
    slot: Slot::Root,
    shape: ValueShape::String,
    filter: None,
};

pub static ENTITY_NUMBER: FieldDef = FieldDef {
    key: "entity_number",
    slot: Slot::Root,
    shape: ValueShape::UInt { max: None },
    filter: None,
};

pub static POSITION: FieldDef = FieldDef {
    key: "position",
    slot: Slot::Root,
    shape: ValueShape::Position,
    filter: None,
};

pub static TAGS: FieldDef = FieldDef {
    key: "tags",
    slot: Slot::Root,
    shape: ValueShape::Tags,
    filter: None,
};

pub static LABEL: FieldDef = FieldDef {
    key: "label",
    slot: Slot::Root,
    shape: ValueShape::String,
    filter: None,
};

pub static VERSION: FieldDef = FieldDef {
    key: "version",
    slot: Slot::Root,
    shape: ValueShape::UInt { max: None },
    filter: None,
};

pub static DECON_ITEM: FieldDef = FieldDef {
    key: "item",
    slot: Slot::Root,
    shape: ValueShape::Literal("deconstruction-planner"),
    filter: None,
};

// Planner metadata

pub static DESCRIPTION: FieldDef = FieldDef {
    key: "description",
    slot: Slot::Settings,
    shape: ValueShape::String,
    filter: None,
};

pub static ICONS: FieldDef = FieldDef {
    key: "icons",
    slot: Slot::Settings,
    shape: ValueShape::Icons,
    filter: None,
};

// Direction and color

pub static DIRECTION: FieldDef = FieldDef {
    key: "direction",
    slot: Slot::Root,
    shape: ValueShape::IntEnum { max: 7 },
    filter: None,
};

pub static COLOR: FieldDef = FieldDef {
    key: "color",
    slot: Slot::Root,
    shape: ValueShape::Color,
    filter: None,
};

// Stack size overrides

pub static OVERRIDE_STACK_SIZE: FieldDef = FieldDef {
    key: "override_stack_size",
    slot: Slot::Root,
    shape: ValueShape::UInt { max: None },
    filter: None,
};

pub static CIRCUIT_SET_STACK_SIZE: FieldDef = FieldDef {
    key: "circuit_set_stack_size",
    slot: Slot::Control,
    shape: ValueShape::Bool,
    filter: None,
};

pub static STACK_CONTROL_INPUT_SIGNAL: FieldDef = FieldDef {
    key: "stack_control_input_signal",
    slot: Slot::Control,
    shape: ValueShape::SignalId,
    filter: None,
};

// Circuit connectivity and conditions

pub static CONNECTIONS: FieldDef = FieldDef {
    key: "connections",
    slot: Slot::Root,
    shape: ValueShape::Connections,
    filter: None,
};

pub static CIRCUIT_ENABLE_DISABLE: FieldDef = FieldDef {
    key: "circuit_enable_disable",
    slot: Slot::Control,
    shape: ValueShape::Bool,
    filter: None,
};

pub static CIRCUIT_CONDITION: FieldDef = FieldDef {
    key: "circuit_condition",
    slot: Slot::Control,
    shape: ValueShape::Condition,
    filter: None,
};

pub static CONNECT_TO_LOGISTIC_NETWORK: FieldDef = FieldDef {
    key: "connect_to_logistic_network",
    slot: Slot::Control,
    shape: ValueShape::Bool,
    filter: None,
};

pub static LOGISTIC_CONDITION: FieldDef = FieldDef {
    key: "logistic_condition",
    slot: Slot::Control,
    shape: ValueShape::Condition,
    filter: None,
};

// Inserter hand introspection and modes of operation

pub static CIRCUIT_READ_HAND_CONTENTS: FieldDef = FieldDef {
    key: "circuit_read_hand_contents",
    slot: Slot::Control,
    shape: ValueShape::Bool,
    filter: None,
};

pub static CIRCUIT_HAND_READ_MODE: FieldDef = FieldDef {
    key: "circuit_hand_read_mode",
    slot: Slot::Control,
    shape: ValueShape::IntEnum { max: 1 },
    filter: None,
};

pub static INSERTER_MODE_OF_OPERATION: FieldDef = FieldDef {
    key: "circuit_mode_of_operation",
    slot: Slot::Control,
    shape: ValueShape::IntEnum { max: 3 },
    filter: None,
};

pub static LOGISTIC_MODE_OF_OPERATION: FieldDef = FieldDef {
    key: "circuit_mode_of_operation",
    slot: Slot::Control,
    shape: ValueShape::IntEnum { max: 1 },
    filter: None,
};

// Item filters (filter inserters)

pub static ITEM_FILTERS: FieldDef = FieldDef {
    key: "filters",
    slot: Slot::Root,
    shape: ValueShape::Filters { counted: false },
    filter: Some(FilterSpec {
        catalog: CatalogKind::Item,
        capacity: 5,
    }),
};

pub static FILTER_MODE: FieldDef = FieldDef {
    key: "filter_mode",
    slot: Slot::Root,
    shape: ValueShape::StrEnum {
        values: &["whitelist", "blacklist"],
    },
    filter: None,
};

// Logistic request filters

pub static REQUEST_FILTERS: FieldDef = FieldDef {
    key: "request_filters",
    slot: Slot::Root,
    shape: ValueShape::Filters { counted: true },
    filter: Some(FilterSpec {
        catalog: CatalogKind::Item,
        capacity: 1000,
    }),
};

// Item requests (modules, machine inputs)

pub static ITEM_REQUESTS: FieldDef = FieldDef {
    key: "items",
    slot: Slot::Root,
    shape: ValueShape::ItemRequests,
    filter: None,
};

// Inventory limiting

pub static BAR: FieldDef = FieldDef {
    key: "bar",
    slot: Slot::Root,
    shape: ValueShape::UInt { max: None },
    filter: None,
};

// Recipes

pub static RECIPE: FieldDef = FieldDef {
    key: "recipe",
    slot: Slot::Root,
    shape: ValueShape::String,
    filter: None,
};

// Rail signal outputs

pub static RED_OUTPUT_SIGNAL: FieldDef = FieldDef {
    key: "red_output_signal",
    slot: Slot::Control,
    shape: ValueShape::SignalId,
    filter: None,
};

pub static YELLOW_OUTPUT_SIGNAL: FieldDef = FieldDef {
    key: "yellow_output_signal",
    slot: Slot::Control,
    shape: ValueShape::SignalId,
    filter: None,
};

pub static GREEN_OUTPUT_SIGNAL: FieldDef = FieldDef {
    key: "green_output_signal",
    slot: Slot::Control,
    shape: ValueShape::SignalId,
    filter: None,
};

pub static BLUE_OUTPUT_SIGNAL: FieldDef = FieldDef {
    key: "blue_output_signal",
    slot: Slot::Control,
    shape: ValueShape::SignalId,
    filter: None,
};

// Resource reading (mining drills)

pub static CIRCUIT_READ_RESOURCES: FieldDef = FieldDef {
    key: "circuit_read_resources",
    slot: Slot::Control,
    shape: ValueShape::Bool,
    filter: None,
};

// Train stops

pub static STATION: FieldDef = FieldDef {
    key: "station",
    slot: Slot::Root,
    shape: ValueShape::String,
    filter: None,
};

pub static MANUAL_TRAINS_LIMIT: FieldDef = FieldDef {
    key: "manual_trains_limit",
    slot: Slot::Root,
    shape: ValueShape::UInt { max: None },
    filter: None,
};

pub static READ_FROM_TRAIN: FieldDef = FieldDef {
    key: "read_from_train",
    slot: Slot::Control,
    shape: ValueShape::Bool,
    filter: None,
};

pub static READ_STOPPED_TRAIN: FieldDef = FieldDef {
    key: "read_stopped_train",
    slot: Slot::Control,
    shape: ValueShape::Bool,
    filter: None,
};

pub static TRAIN_STOPPED_SIGNAL: FieldDef = FieldDef {
    key: "train_stopped_signal",
    slot: Slot::Control,
    shape: ValueShape::SignalId,
    filter: None,
};

pub static SET_TRAINS_LIMIT: FieldDef = FieldDef {
    key: "set_trains_limit",
    slot: Slot::Control,
    shape: ValueShape::Bool,
    filter: None,
};

pub static TRAINS_LIMIT_SIGNAL: FieldDef = FieldDef {
    key: "trains_limit_signal",
    slot: Slot::Control,
    shape: ValueShape::SignalId,
    filter: None,
};

pub static READ_TRAINS_COUNT: FieldDef = FieldDef {
    key: "read_trains_count",
    slot: Slot::Control,
    shape: ValueShape::Bool,
    filter: None,
};

pub static TRAINS_COUNT_SIGNAL: FieldDef = FieldDef {
    key: "trains_count_signal",
    slot: Slot::Control,
    shape: ValueShape::SignalId,
    filter: None,
};

// Electric energy interfaces

pub static BUFFER_SIZE: FieldDef = FieldDef {
    key: "buffer_size",
    slot: Slot::Root,
    shape: ValueShape::UInt { max: None },
    filter: None,
};

pub static POWER_PRODUCTION: FieldDef = FieldDef {
    key: "power_production",
    slot: Slot::Root,
    shape: ValueShape::UInt { max: None },
    filter: None,
};

pub static POWER_USAGE: FieldDef = FieldDef {
    key: "power_usage",
    slot: Slot::Root,
    shape: ValueShape::UInt { max: None },
    filter: None,
};

// Rocket silos

pub static AUTO_LAUNCH: FieldDef = FieldDef {
    key: "auto_launch",
    slot: Slot::Root,
    shape: ValueShape::Bool,
    filter: None,
};

// Deconstruction planner filter blocks

pub static ENTITY_FILTER_MODE: FieldDef = FieldDef {
    key: "entity_filter_mode",
    slot: Slot::Settings,
    shape: ValueShape::IntEnum { max: 1 },
    filter: None,
};

pub static ENTITY_FILTERS: FieldDef = FieldDef {
    key: "entity_filters",
    slot: Slot::Settings,
    shape: ValueShape::Filters { counted: false },
    filter: Some(FilterSpec {
        catalog: CatalogKind::Entity,
        capacity: 30,
    }),
};

pub static TREES_AND_ROCKS_ONLY: FieldDef = FieldDef {
    key: "trees_and_rocks_only",
    slot: Slot::Settings,
    shape: ValueShape::Bool,
    filter: None,
};

pub static TILE_FILTER_MODE: FieldDef = FieldDef {
    key: "tile_filter_mode",
    slot: Slot::Settings,
    shape: ValueShape::IntEnum { max: 1 },
    filter: None,
};

pub static TILE_FILTERS: FieldDef = FieldDef {
    key: "tile_filters",
    slot: Slot::Settings,
    shape: ValueShape::Filters { counted: false },
    filter: Some(FilterSpec {
        catalog: CatalogKind::Tile,
        capacity: 30,
    }),
};

pub static TILE_SELECTION_MODE: FieldDef = FieldDef {
    key: "tile_selection_mode",
    slot: Slot::Settings,
    shape: ValueShape::IntEnum { max: 3 },
    filter: None,
};
