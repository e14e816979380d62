//! Stencil Catalog - Static game-data lookups
//!
//! Catalogs map prototype names to the handful of attributes the model
//! consults (group, stack size, recipe ingredients, module limitations).
//! The model never mutates them; unrecognized names surface as warnings
//! during inspection, not as lookup failures.

mod catalog;
mod set;

pub use catalog::{Catalog, Entry};
pub use set::{builtin, CatalogKind, CatalogSet};
