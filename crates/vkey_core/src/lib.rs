//! Flatten structs and maps into query-string style `key -> [values]` collections.

/// Value model, serde capture, and the recursive flattener.
pub mod flatten;
