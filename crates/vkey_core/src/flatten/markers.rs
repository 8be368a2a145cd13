use std::fmt;

use serde::{Serialize, Serializer};

/// Newtype name [`crate::flatten::ValueSerializer`] captures as an interface.
pub(crate) const INTERFACE_TOKEN: &str = "$vkey::private::Interface";
/// Newtype name [`crate::flatten::ValueSerializer`] captures as a stringer.
pub(crate) const STRINGER_TOKEN: &str = "$vkey::private::Stringer";

/// Dynamic container around a value of any kind; `None` is a nil interface.
///
/// Struct and map contents are flattened into the parent, a [`Stringer`]
/// contributes its text under the field key, and a nil interface contributes
/// nothing. Other serializers see the inner `Option<T>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Interface<T>(pub Option<T>);

impl<T> Interface<T> {
	/// Interface holding `value`.
	pub fn new(value: T) -> Self {
		Self(Some(value))
	}

	/// Nil interface.
	pub fn nil() -> Self {
		Self(None)
	}
}

impl<T: Serialize> Serialize for Interface<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_newtype_struct(INTERFACE_TOKEN, &self.0)
	}
}

/// Value flattened through its [`fmt::Display`] text instead of its structure.
///
/// Other serializers see a plain string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Stringer<T>(pub T);

impl<T: fmt::Display> fmt::Display for Stringer<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

impl<T: fmt::Display> Serialize for Stringer<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_newtype_struct(STRINGER_TOKEN, &DisplayStr(&self.0))
	}
}

struct DisplayStr<'a, T>(&'a T);

impl<T: fmt::Display> Serialize for DisplayStr<'_, T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self.0)
	}
}
