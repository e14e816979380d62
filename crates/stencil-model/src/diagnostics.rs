//! Diagnostic results: advisory warnings and the errors/warnings bundle

use std::fmt;
use stencil_catalog::CatalogKind;
use stencil_core::StencilError;

/// An advisory finding. Warnings never make a record unusable.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// A referenced name is absent from the relevant static catalog
    UnrecognizedName { catalog: CatalogKind, name: String },
    /// A filter or icon index is outside the slot range of its field
    IndexRange {
        field: &'static str,
        index: u32,
        capacity: u32,
    },
    /// A list holds more entries than its field has slots
    CapacityExceeded {
        field: &'static str,
        len: usize,
        capacity: u32,
    },
    /// A constructor argument matched no facet of the kind
    UnrecognizedArgument { kind: String, argument: String },
    /// A limited module is requested alongside a recipe outside its set
    ModuleLimitation { module: String, recipe: String },
    /// An item request the receiving entity cannot make use of
    ItemLimitation { item: String, reason: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnrecognizedName { catalog, name } => {
                write!(f, "unrecognized {} '{}'", catalog, name)
            }
            Warning::IndexRange {
                field,
                index,
                capacity,
            } => write!(
                f,
                "index {} of '{}' is outside [1, {}]",
                index, field, capacity
            ),
            Warning::CapacityExceeded {
                field,
                len,
                capacity,
            } => write!(
                f,
                "'{}' holds {} entries but has {} slots",
                field, len, capacity
            ),
            Warning::UnrecognizedArgument { kind, argument } => {
                write!(f, "'{}' has no attribute '{}'", kind, argument)
            }
            Warning::ModuleLimitation { module, recipe } => {
                write!(f, "module '{}' cannot be used with recipe '{}'", module, recipe)
            }
            Warning::ItemLimitation { item, reason } => {
                write!(f, "cannot request '{}': {}", item, reason)
            }
        }
    }
}

/// The outcome of inspecting a record: fatal errors (the record cannot be
/// serialized or used) and advisory warnings.
#[derive(Debug, Default)]
pub struct Diagnostics {
    pub errors: Vec<StencilError>,
    pub warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the record can be used (no fatal errors)
    pub fn is_usable(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get a human-readable summary
    pub fn summary(&self) -> String {
        if self.errors.is_empty() && self.warnings.is_empty() {
            return "No findings.".to_string();
        }
        format!(
            "{} error(s), {} warning(s)",
            self.errors.len(),
            self.warnings.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_is_usable() {
        let diagnostics = Diagnostics::new();
        assert!(diagnostics.is_usable());
        assert_eq!(diagnostics.summary(), "No findings.");
    }

    #[test]
    fn test_warnings_do_not_block_use() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.warnings.push(Warning::UnrecognizedName {
            catalog: CatalogKind::Entity,
            name: "tree-99".to_string(),
        });
        assert!(diagnostics.is_usable());
        assert_eq!(diagnostics.summary(), "0 error(s), 1 warning(s)");
    }

    #[test]
    fn test_warning_display() {
        let warning = Warning::IndexRange {
            field: "entity_filters",
            index: 31,
            capacity: 30,
        };
        assert_eq!(
            warning.to_string(),
            "index 31 of 'entity_filters' is outside [1, 30]"
        );
    }
}
