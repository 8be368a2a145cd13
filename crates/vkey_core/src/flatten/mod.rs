mod capture;
mod error;
mod markers;
mod stringify;
mod value;
mod values;
mod walk;

/// serde-driven capture of arbitrary values into the runtime model.
pub use capture::{ValueSerializer, to_value};
/// Error and result aliases.
pub use error::{FlattenError, Result};
/// Wrappers marking interface-kind and stringer positions.
pub use markers::{Interface, Stringer};
/// Leaf stringification helpers.
pub use stringify::{render, to_strings};
/// Runtime value model.
pub use value::{FieldValue, Kind, MapValue, StructValue, Value};
/// Multi-valued output collection.
pub use values::Values;
/// Flattening entry points.
pub use walk::{SKIP_KEY, flatten_value, to_query_string, to_values};
