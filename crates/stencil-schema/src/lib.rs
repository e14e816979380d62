//! Stencil Schema - Declarative record shapes and structural validation
//!
//! A `RecordShape` describes the exact serializable form of one record
//! kind. `check` walks a record root against its shape and returns every
//! violation; `conforms` is the single-value fail-fast variant accessors
//! use before storing data.

mod shape;
mod validation;

pub use shape::{FieldShape, RecordShape, ValueShape};
pub use validation::{check, conforms, value_type_name, Violation};
