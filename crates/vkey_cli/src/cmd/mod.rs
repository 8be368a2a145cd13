/// CLI error and result aliases.
pub mod error;
/// Flatten command.
pub mod flatten;
/// JSON document to value-model conversion.
pub mod input;

pub use error::Result;
