//! Field descriptors shared by facets, schema derivation, and accessors

use stencil_catalog::CatalogKind;
use stencil_schema::ValueShape;

/// Where a field is stored within a record's root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Top level of the root mapping
    Root,
    /// Nested under the lazily created `control_behavior` object
    Control,
    /// Nested under the planner `settings` object
    Settings,
}

impl Slot {
    /// The key of the nested container, if any
    pub fn container_key(&self) -> Option<&'static str> {
        match self {
            Slot::Root => None,
            Slot::Control => Some("control_behavior"),
            Slot::Settings => Some("settings"),
        }
    }
}

/// Catalog binding and advisory capacity for a filter-shaped field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    /// Which catalog filter names are checked against
    pub catalog: CatalogKind,
    /// Advisory slot capacity; exceeding it is a warning, not an error
    pub capacity: u32,
}

/// A single optional field contributed by a facet (or by the universal
/// field set of a record category)
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub key: &'static str,
    pub slot: Slot,
    pub shape: ValueShape,
    pub filter: Option<FilterSpec>,
}
