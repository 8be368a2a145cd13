use std::fmt::Display;

use thiserror::Error;

use crate::flatten::Kind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, FlattenError>;

/// Errors produced while capturing or flattening a value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlattenError {
	/// Top-level value was not a struct after indirection.
	#[error("value must be struct type (got {kind})")]
	InvalidInputKind {
		/// Kind found at the top level.
		kind: Kind,
	},
	/// A map key was not a string.
	#[error("map key type must be string (got {kind})")]
	InvalidMapKeyKind {
		/// Kind of the offending key.
		kind: Kind,
	},
	/// A `Serialize` impl failed while the value was being captured.
	#[error("capture: {message}")]
	Capture {
		/// Message reported by the serializer caller.
		message: String,
	},
}

impl serde::ser::Error for FlattenError {
	fn custom<T: Display>(msg: T) -> Self {
		Self::Capture { message: msg.to_string() }
	}
}
