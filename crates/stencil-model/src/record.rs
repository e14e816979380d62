//! Records: composed placeable units and their lifecycle
//!
//! A record owns a `root` mapping holding exactly its serializable state.
//! Unset optional fields are absent from the root, never present as null.
//! All reads and writes go through the field definitions declared by the
//! record's kind; writing a field the kind does not declare is an error.

use crate::diagnostics::{Diagnostics, Warning};
use crate::field::{FieldDef, Slot};
use crate::fields;
use crate::filter::FilterList;
use crate::kind::{self, Category, RecordKind};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use stencil_catalog::{CatalogKind, CatalogSet};
use stencil_core::{
    Direction, FilterMode, Icon, Position, Result, StencilError, TileSelectionMode, Version,
};
use stencil_schema::{value_type_name, ValueShape};

/// How construction treats arguments matching no facet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArgumentPolicy {
    /// Collect a warning per unrecognized argument and ignore it
    #[default]
    Warn,
    /// Fail construction on the first unrecognized argument
    Error,
}

/// Icon fields carry at most this many slots.
const ICON_CAPACITY: u32 = 4;

/// A single placeable record
pub struct Record {
    kind: &'static RecordKind,
    root: Map<String, Value>,
    valid: bool,
}

impl Record {
    /// Create a record with only its universal identity fields set.
    /// Entities and tiles default their name to the first catalog entry of
    /// the kind's group; planners are stamped with the current version.
    pub fn new(kind: &'static RecordKind) -> Self {
        let mut root = Map::new();
        match kind.category {
            Category::Entity | Category::Tile => {
                let catalog = stencil_catalog::builtin().get(kind.catalog);
                if let Some(name) = catalog.first_of_group(kind.name) {
                    root.insert("name".to_string(), Value::String(name.to_string()));
                }
            }
            Category::Planner => {
                root.insert("item".to_string(), Value::String(kind.name.to_string()));
                root.insert("version".to_string(), Value::from(Version::CURRENT.raw()));
            }
        }
        Self {
            kind,
            root,
            valid: false,
        }
    }

    /// Create an entity or tile record with a specific prototype name.
    /// Whether the name is recognized is an inspection concern, not a
    /// construction failure.
    pub fn named(kind: &'static RecordKind, name: &str) -> Self {
        assert!(
            kind.category != Category::Planner,
            "planners have no prototype name"
        );
        let mut record = Self::new(kind);
        record
            .root
            .insert("name".to_string(), Value::String(name.to_string()));
        record
    }

    /// Create a record from keyword-style arguments. Arguments are consumed
    /// facet by facet in declaration order; whatever remains is reported
    /// per the policy. Nested `control_behavior`/`settings` objects are
    /// accepted and flattened, with flat keys winning on conflict.
    pub fn with_args(
        kind: &'static RecordKind,
        args: Map<String, Value>,
        policy: ArgumentPolicy,
    ) -> Result<(Self, Vec<Warning>)> {
        let mut record = Self::new(kind);
        let mut args = flatten_args(args)?;
        let mut warnings = Vec::new();

        for def in kind.universal.iter().copied() {
            if let Some(value) = args.remove(def.key) {
                record.set_value(def, Some(value))?;
            }
        }
        for facet in kind.facets {
            for def in facet.fields.iter().copied() {
                if let Some(value) = args.remove(def.key) {
                    record.set_value(def, Some(value))?;
                }
            }
        }

        // One finding per leftover argument; discovery is not cut short by
        // the first unknown name.
        for argument in args.keys() {
            match policy {
                ArgumentPolicy::Warn => warnings.push(Warning::UnrecognizedArgument {
                    kind: kind.name.to_string(),
                    argument: argument.clone(),
                }),
                ArgumentPolicy::Error => {
                    return Err(StencilError::UnrecognizedArgument {
                        kind: kind.name.to_string(),
                        argument: argument.clone(),
                    })
                }
            }
        }

        Ok((record, warnings))
    }

    /// Reconstruct a record from its serialized form, resolving the kind
    /// from the planner root key or the entity/tile name.
    pub fn from_value(value: &Value, policy: ArgumentPolicy) -> Result<(Self, Vec<Warning>)> {
        let (kind, body) = resolve_serialized(value)?;
        Self::with_args(kind, body, policy)
    }

    /// Reconstruct a record that must be of a specific kind
    pub fn from_value_for(
        kind: &'static RecordKind,
        value: &Value,
        policy: ArgumentPolicy,
    ) -> Result<(Self, Vec<Warning>)> {
        let (resolved, body) = resolve_serialized(value)?;
        if !std::ptr::eq(resolved, kind) {
            return Err(StencilError::KindMismatch {
                expected: kind.name.to_string(),
                got: resolved.name.to_string(),
            });
        }
        Self::with_args(kind, body, policy)
    }

    /// Like `from_value`, with explicit arguments layered on top of the
    /// serialized data. Explicit arguments win on conflict.
    pub fn from_value_with(
        value: &Value,
        args: Map<String, Value>,
        policy: ArgumentPolicy,
    ) -> Result<(Self, Vec<Warning>)> {
        let (kind, mut body) = resolve_serialized(value)?;
        for (key, value) in args {
            body.insert(key, value);
        }
        Self::with_args(kind, body, policy)
    }

    pub fn kind(&self) -> &'static RecordKind {
        self.kind
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind.name
    }

    /// The record's serializable state
    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    // =========================================================================
    // Generic accessors
    // =========================================================================

    /// Read a field, deserializing into the requested type. Returns `None`
    /// for an unset field.
    pub fn get<T: DeserializeOwned>(&self, def: &FieldDef) -> Result<Option<T>> {
        self.ensure_declared(def)?;
        match self.raw_field(def) {
            None => Ok(None),
            Some(value) => T::deserialize(value.clone()).map(Some).map_err(|e| {
                StencilError::AttributeType {
                    field: def.key.to_string(),
                    detail: e.to_string(),
                }
            }),
        }
    }

    /// Write a field. `None` clears it (the key is removed, never stored as
    /// null); `Some` type-checks the value against the field's shape before
    /// storing, so a failed assignment leaves the prior state intact.
    pub fn set<T: Serialize>(&mut self, def: &FieldDef, value: Option<T>) -> Result<()> {
        let value = match value {
            None => None,
            Some(v) => {
                Some(
                    serde_json::to_value(v).map_err(|e| StencilError::AttributeType {
                        field: def.key.to_string(),
                        detail: e.to_string(),
                    })?,
                )
            }
        };
        self.set_value(def, value)
    }

    /// Dynamic-value assignment; `set` and the constructor path both land
    /// here. JSON null is treated as the unset sentinel.
    pub fn set_value(&mut self, def: &FieldDef, value: Option<Value>) -> Result<()> {
        self.ensure_declared(def)?;
        match value {
            None | Some(Value::Null) => self.clear_field(def),
            Some(value) => {
                stencil_schema::conforms(&def.shape, &value).map_err(|violation| {
                    StencilError::AttributeType {
                        field: def.key.to_string(),
                        detail: violation.to_string(),
                    }
                })?;
                self.container_mut(def.slot)
                    .insert(def.key.to_string(), value);
            }
        }
        self.valid = false;
        Ok(())
    }

    /// Read a filter-list field
    pub fn filters(&self, def: &FieldDef) -> Result<Option<FilterList>> {
        self.get(def)
    }

    /// Mutate a filter-list field in place. The list is created lazily; a
    /// mutation that leaves an absent list empty creates nothing.
    pub fn update_filters(
        &mut self,
        def: &FieldDef,
        apply: impl FnOnce(&mut FilterList),
    ) -> Result<()> {
        let existing = self.get::<FilterList>(def)?;
        let was_present = existing.is_some();
        let mut list = existing.unwrap_or_default();
        apply(&mut list);
        if !was_present && list.is_empty() {
            return Ok(());
        }
        self.set(def, Some(list))
    }

    // =========================================================================
    // Universal field accessors
    // =========================================================================

    pub fn name(&self) -> Option<&str> {
        self.root.get("name").and_then(Value::as_str)
    }

    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.set(&fields::NAME, Some(name))
    }

    pub fn entity_number(&self) -> Result<Option<u64>> {
        self.get(&fields::ENTITY_NUMBER)
    }

    pub fn set_entity_number(&mut self, id: Option<u64>) -> Result<()> {
        self.set(&fields::ENTITY_NUMBER, id)
    }

    pub fn position(&self) -> Result<Option<Position>> {
        self.get(&fields::POSITION)
    }

    pub fn set_position(&mut self, position: Option<Position>) -> Result<()> {
        self.set(&fields::POSITION, position)
    }

    pub fn label(&self) -> Result<Option<String>> {
        self.get(&fields::LABEL)
    }

    pub fn set_label(&mut self, label: Option<&str>) -> Result<()> {
        self.set(&fields::LABEL, label)
    }

    pub fn version(&self) -> Result<Option<Version>> {
        self.get(&fields::VERSION)
    }

    pub fn set_version(&mut self, version: Option<Version>) -> Result<()> {
        self.set(&fields::VERSION, version)
    }

    pub fn description(&self) -> Result<Option<String>> {
        self.get(&fields::DESCRIPTION)
    }

    pub fn set_description(&mut self, description: Option<&str>) -> Result<()> {
        self.set(&fields::DESCRIPTION, description)
    }

    pub fn icons(&self) -> Result<Option<Vec<Icon>>> {
        self.get(&fields::ICONS)
    }

    pub fn set_icons(&mut self, icons: Option<Vec<Icon>>) -> Result<()> {
        self.set(&fields::ICONS, icons)
    }

    pub fn direction(&self) -> Result<Option<Direction>> {
        self.get(&fields::DIRECTION)
    }

    pub fn set_direction(&mut self, direction: Option<Direction>) -> Result<()> {
        self.set(&fields::DIRECTION, direction)
    }

    pub fn entity_filter_mode(&self) -> Result<Option<FilterMode>> {
        self.get(&fields::ENTITY_FILTER_MODE)
    }

    pub fn set_entity_filter_mode(&mut self, mode: Option<FilterMode>) -> Result<()> {
        self.set(&fields::ENTITY_FILTER_MODE, mode)
    }

    pub fn tile_filter_mode(&self) -> Result<Option<FilterMode>> {
        self.get(&fields::TILE_FILTER_MODE)
    }

    pub fn set_tile_filter_mode(&mut self, mode: Option<FilterMode>) -> Result<()> {
        self.set(&fields::TILE_FILTER_MODE, mode)
    }

    pub fn tile_selection_mode(&self) -> Result<Option<TileSelectionMode>> {
        self.get(&fields::TILE_SELECTION_MODE)
    }

    pub fn set_tile_selection_mode(&mut self, mode: Option<TileSelectionMode>) -> Result<()> {
        self.set(&fields::TILE_SELECTION_MODE, mode)
    }

    // =========================================================================
    // Filter conveniences
    // =========================================================================

    /// Set one entity filter slot on a deconstruction planner
    pub fn set_entity_filter(&mut self, index: u32, name: Option<&str>) -> Result<()> {
        self.update_filters(&fields::ENTITY_FILTERS, |list| list.set(index, name, None))
    }

    /// Assign the leading entity filter slots in order
    pub fn set_entity_filters<'a, I: IntoIterator<Item = &'a str>>(&mut self, names: I) -> Result<()> {
        self.update_filters(&fields::ENTITY_FILTERS, |list| list.set_many(names))
    }

    /// Set one tile filter slot on a deconstruction planner
    pub fn set_tile_filter(&mut self, index: u32, name: Option<&str>) -> Result<()> {
        self.update_filters(&fields::TILE_FILTERS, |list| list.set(index, name, None))
    }

    /// Assign the leading tile filter slots in order
    pub fn set_tile_filters<'a, I: IntoIterator<Item = &'a str>>(&mut self, names: I) -> Result<()> {
        self.update_filters(&fields::TILE_FILTERS, |list| list.set_many(names))
    }

    /// Set one item filter slot (filter inserters)
    pub fn set_item_filter(&mut self, index: u32, name: Option<&str>) -> Result<()> {
        self.update_filters(&fields::ITEM_FILTERS, |list| list.set(index, name, None))
    }

    /// Assign the leading item filter slots in order
    pub fn set_item_filters<'a, I: IntoIterator<Item = &'a str>>(&mut self, names: I) -> Result<()> {
        self.update_filters(&fields::ITEM_FILTERS, |list| list.set_many(names))
    }

    /// Set one logistic request slot. A `None` count defaults to the item's
    /// stack size (zero when the item is unknown).
    pub fn set_request_filter(
        &mut self,
        catalogs: &CatalogSet,
        index: u32,
        item: Option<&str>,
        count: Option<u32>,
    ) -> Result<()> {
        let count = match (item, count) {
            (Some(item), None) => Some(catalogs.items.stack_size(item).unwrap_or(0)),
            (_, count) => count,
        };
        self.update_filters(&fields::REQUEST_FILTERS, |list| list.set(index, item, count))
    }

    /// Request an amount of an item (module slots, machine inputs). `None`
    /// removes the request.
    pub fn set_item_request(&mut self, item: &str, count: Option<u64>) -> Result<()> {
        let mut requests = self
            .get::<Map<String, Value>>(&fields::ITEM_REQUESTS)?
            .unwrap_or_default();
        match count {
            Some(count) => {
                requests.insert(item.to_string(), Value::from(count));
            }
            None => {
                requests.remove(item);
            }
        }
        if requests.is_empty() {
            self.set_value(&fields::ITEM_REQUESTS, None)
        } else {
            self.set_value(&fields::ITEM_REQUESTS, Some(Value::Object(requests)))
        }
    }

    /// Current item requests as (name, count) pairs
    pub fn item_requests(&self) -> Vec<(String, u64)> {
        self.raw_field(&fields::ITEM_REQUESTS)
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .filter_map(|(k, v)| v.as_u64().map(|count| (k.clone(), count)))
                    .collect()
            })
            .unwrap_or_default()
    }

    // =========================================================================
    // Diagnostics pipeline
    // =========================================================================

    /// Whether the last validation is still current
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Check the root against the kind's shape. Idempotent: a record that
    /// validated once stays valid until the next mutation. On failure the
    /// root is untouched and the validity flag stays false.
    pub fn validate(&mut self) -> Result<()> {
        if self.valid {
            return Ok(());
        }
        let violations = stencil_schema::check(&self.kind.shape, &self.root);
        if violations.is_empty() {
            self.valid = true;
            Ok(())
        } else {
            Err(StencilError::StructuralFormat {
                kind: self.kind.name.to_string(),
                violations: violations.iter().map(|v| v.to_string()).collect(),
            })
        }
    }

    /// Validate, then run every semantic check. A structural failure is
    /// returned as the sole error with no warnings: semantic checks assume
    /// a sound shape and never walk a broken one. Semantic checks append
    /// findings and never abort each other.
    pub fn inspect(&mut self, catalogs: &CatalogSet) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        if let Err(error) = self.validate() {
            diagnostics.errors.push(error);
            return diagnostics;
        }

        self.check_record_name(catalogs, &mut diagnostics.warnings);
        for def in self.kind.fields() {
            self.check_field(def, catalogs, &mut diagnostics.warnings);
        }
        for facet in self.kind.facets {
            if let Some(check) = facet.check {
                check(self, catalogs, &mut diagnostics.warnings);
            }
        }
        diagnostics
    }

    fn check_record_name(&self, catalogs: &CatalogSet, warnings: &mut Vec<Warning>) {
        if matches!(self.kind.category, Category::Entity | Category::Tile) {
            if let Some(name) = self.name() {
                if !catalogs.get(self.kind.catalog).contains(name) {
                    warnings.push(Warning::UnrecognizedName {
                        catalog: self.kind.catalog,
                        name: name.to_string(),
                    });
                }
            }
        }
    }

    fn check_field(&self, def: &FieldDef, catalogs: &CatalogSet, warnings: &mut Vec<Warning>) {
        let value = match self.raw_field(def) {
            Some(value) => value,
            None => return,
        };

        if let Some(spec) = def.filter {
            if let Some(entries) = value.as_array() {
                if entries.len() as u32 > spec.capacity {
                    warnings.push(Warning::CapacityExceeded {
                        field: def.key,
                        len: entries.len(),
                        capacity: spec.capacity,
                    });
                }
                for entry in entries {
                    let index = entry.get("index").and_then(Value::as_u64).unwrap_or(0);
                    if index < 1 || index > u64::from(spec.capacity) {
                        warnings.push(Warning::IndexRange {
                            field: def.key,
                            index: index.try_into().unwrap_or(u32::MAX),
                            capacity: spec.capacity,
                        });
                    }
                    if let Some(name) = entry.get("name").and_then(Value::as_str) {
                        if !catalogs.get(spec.catalog).contains(name) {
                            warnings.push(Warning::UnrecognizedName {
                                catalog: spec.catalog,
                                name: name.to_string(),
                            });
                        }
                    }
                }
            }
        }

        if matches!(def.shape, ValueShape::Icons) {
            for icon in value.as_array().into_iter().flatten() {
                let index = icon.get("index").and_then(Value::as_u64).unwrap_or(0);
                if index < 1 || index > u64::from(ICON_CAPACITY) {
                    warnings.push(Warning::IndexRange {
                        field: def.key,
                        index: index.try_into().unwrap_or(u32::MAX),
                        capacity: ICON_CAPACITY,
                    });
                }
                if let Some(name) = icon
                    .get("signal")
                    .and_then(|s| s.get("name"))
                    .and_then(Value::as_str)
                {
                    if !catalogs.signals.contains(name) {
                        warnings.push(Warning::UnrecognizedName {
                            catalog: CatalogKind::Signal,
                            name: name.to_string(),
                        });
                    }
                }
            }
        }
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    /// The serialized form. Planner bodies nest under their root key;
    /// entities and tiles serialize their root directly. Unset fields and
    /// empty sub-objects are never emitted.
    pub fn to_value(&self) -> Value {
        let body = Value::Object(self.root.clone());
        match self.kind.root_key {
            Some(key) => {
                let mut outer = Map::new();
                outer.insert(key.to_string(), body);
                Value::Object(outer)
            }
            None => body,
        }
    }

    // =========================================================================
    // Internals shared with the merge engine
    // =========================================================================

    pub(crate) fn raw_field(&self, def: &FieldDef) -> Option<&Value> {
        let container = match def.slot.container_key() {
            None => &self.root,
            Some(key) => self.root.get(key)?.as_object()?,
        };
        container.get(def.key)
    }

    pub(crate) fn insert_raw(&mut self, def: &FieldDef, value: Value) {
        self.container_mut(def.slot)
            .insert(def.key.to_string(), value);
    }

    pub(crate) fn invalidate(&mut self) {
        self.valid = false;
    }

    fn ensure_declared(&self, def: &FieldDef) -> Result<()> {
        if self.kind.declares(def) {
            Ok(())
        } else {
            Err(StencilError::UnknownField {
                kind: self.kind.name.to_string(),
                field: def.key.to_string(),
            })
        }
    }

    fn container_mut(&mut self, slot: Slot) -> &mut Map<String, Value> {
        match slot.container_key() {
            None => &mut self.root,
            Some(key) => {
                let entry = self
                    .root
                    .entry(key.to_string())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !entry.is_object() {
                    *entry = Value::Object(Map::new());
                }
                entry.as_object_mut().expect("container is an object")
            }
        }
    }

    fn clear_field(&mut self, def: &FieldDef) {
        match def.slot.container_key() {
            None => {
                self.root.remove(def.key);
            }
            Some(container_key) => {
                let emptied = match self
                    .root
                    .get_mut(container_key)
                    .and_then(Value::as_object_mut)
                {
                    Some(container) => {
                        container.remove(def.key);
                        container.is_empty()
                    }
                    None => false,
                };
                // An emptied sub-structure is dropped so it never serializes.
                if emptied {
                    self.root.remove(container_key);
                }
            }
        }
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.kind.name == other.kind.name && self.root == other.root
    }
}

impl std::fmt::Debug for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Record")
            .field("kind", &self.kind.name)
            .field("root", &self.root)
            .finish()
    }
}

impl Clone for Record {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            root: self.root.clone(),
            valid: self.valid,
        }
    }
}

fn flatten_args(mut args: Map<String, Value>) -> Result<Map<String, Value>> {
    for container in ["control_behavior", "settings"] {
        if let Some(value) = args.remove(container) {
            match value {
                Value::Object(inner) => {
                    for (key, value) in inner {
                        // Flat keys win over nested duplicates.
                        args.entry(key).or_insert(value);
                    }
                }
                Value::Null => {}
                other => {
                    return Err(StencilError::AttributeType {
                        field: container.to_string(),
                        detail: format!("expected object, got {}", value_type_name(&other)),
                    })
                }
            }
        }
    }
    Ok(args)
}

fn resolve_serialized(value: &Value) -> Result<(&'static RecordKind, Map<String, Value>)> {
    let map = value
        .as_object()
        .ok_or_else(|| StencilError::UnknownKind(value_type_name(value).to_string()))?;

    for kind in kind::all_kinds() {
        if let Some(root_key) = kind.root_key {
            if let Some(body) = map.get(root_key) {
                let body = body.as_object().cloned().ok_or_else(|| {
                    StencilError::AttributeType {
                        field: root_key.to_string(),
                        detail: format!("expected object, got {}", value_type_name(body)),
                    }
                })?;
                return Ok((kind, body));
            }
        }
    }

    let name = map
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| StencilError::UnknownKind("<unnamed record>".to_string()))?;
    let catalogs = stencil_catalog::builtin();
    let resolved = kind::kind_for_entity(name, catalogs)
        .or_else(|| catalogs.tiles.contains(name).then(kind::tile))
        .ok_or_else(|| StencilError::UnknownKind(name.to_string()))?;
    Ok((resolved, map.clone()))
}
