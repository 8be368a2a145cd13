use serde::Serialize;

use crate::flatten::stringify::to_strings;
use crate::flatten::value::{MapValue, StructValue, Value};
use crate::flatten::{FlattenError, Result, Values, to_value};

/// Export key that excludes a struct field from the output.
pub const SKIP_KEY: &str = "-";

static NIL: Value = Value::Null;

/// Flatten any serializable struct into [`Values`].
pub fn to_values<T: ?Sized + Serialize>(value: &T) -> Result<Values> {
	let value = to_value(value)?;
	flatten_value(&value)
}

/// Flatten a serializable struct straight into an encoded query string.
pub fn to_query_string<T: ?Sized + Serialize>(value: &T) -> Result<String> {
	Ok(to_values(value)?.encode())
}

/// Flatten a captured struct value into [`Values`].
///
/// The dynamic container and one level of pointer indirection are stripped
/// first; anything other than a struct then fails with
/// [`FlattenError::InvalidInputKind`]. Nested structs and maps merge their
/// keys into the parent without prefixing.
pub fn flatten_value(value: &Value) -> Result<Values> {
	match indirect(value) {
		Value::Struct(item) => struct_to_values(item),
		other => Err(FlattenError::InvalidInputKind { kind: other.kind() }),
	}
}

fn indirect(value: &Value) -> &Value {
	let value = match value {
		Value::Interface(Some(inner)) => &**inner,
		other => other,
	};
	match value {
		Value::Ptr(Some(inner)) => &**inner,
		Value::Ptr(None) | Value::Interface(None) => &NIL,
		other => other,
	}
}

fn sub_to_values(value: &Value) -> Result<Values> {
	match value {
		Value::Struct(item) => struct_to_values(item),
		Value::Map(map) => map_to_values(map),
		_ => Ok(Values::new()),
	}
}

fn struct_to_values(item: &StructValue) -> Result<Values> {
	let mut values = Values::new();
	for field in &item.fields {
		if !field.exported {
			continue;
		}
		let key = field.export_key();
		if key == SKIP_KEY {
			continue;
		}
		insert_value(&mut values, key, &field.value)?;
	}
	Ok(values)
}

fn map_to_values(map: &MapValue) -> Result<Values> {
	let mut keys = Vec::with_capacity(map.entries.len());
	for (key, _) in &map.entries {
		keys.push(map_key(key).ok_or_else(|| FlattenError::InvalidMapKeyKind { kind: key.kind() })?);
	}

	let mut values = Values::new();
	for (key, (_, value)) in keys.into_iter().zip(&map.entries) {
		insert_value(&mut values, key, value)?;
	}
	Ok(values)
}

/// String-kind keys: plain strings and string types carrying their own text.
fn map_key(key: &Value) -> Option<&str> {
	match key {
		Value::String(text) | Value::Stringer(text) => Some(text),
		_ => None,
	}
}

fn insert_value(dst: &mut Values, key: &str, value: &Value) -> Result<()> {
	match value {
		Value::Interface(inner) => insert_interface_values(dst, key, inner.as_deref()),
		Value::Struct(_) | Value::Map(_) => {
			dst.merge(sub_to_values(value)?);
			Ok(())
		}
		_ => {
			dst.append(key, to_strings(value));
			Ok(())
		}
	}
}

fn insert_interface_values(dst: &mut Values, key: &str, inner: Option<&Value>) -> Result<()> {
	match inner {
		None => {}
		Some(Value::Stringer(text)) => dst.add(key, &**text),
		Some(value @ (Value::Struct(_) | Value::Map(_))) => dst.merge(sub_to_values(value)?),
		Some(value) => dst.append(key, to_strings(value)),
	}
	Ok(())
}
