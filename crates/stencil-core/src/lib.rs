//! Stencil Core - Foundational types for the Stencil blueprint model
//!
//! This crate provides the types every other Stencil crate depends on:
//! - `StencilError` and the `Result` alias
//! - `Version` - the packed 64-bit format version
//! - Domain value types (`Position`, `Color`, `SignalId`, `Condition`, ...)

mod error;
mod types;
mod version;

pub use error::{Result, StencilError};
pub use types::{
    Color, Comparator, Condition, Direction, FilterMode, Icon, Position, SignalId, SignalKind,
    TileSelectionMode,
};
pub use version::Version;
