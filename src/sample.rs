//! The data model consumed by the induction engine.

// Attribute values, categories, and kind inference.
pub(crate) mod value;
// Sample traits and the map-backed sample struct.
pub(crate) mod sample_struct;

pub use value::{AttrKind, Category, Class, Val};
pub use sample_struct::{Attributes, MapSample, Sample};

/// Identifier of a feature eligible for splitting.
pub type Attr = String;
