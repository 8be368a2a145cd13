use serde::ser::{self, Serialize};

use crate::flatten::markers::{INTERFACE_TOKEN, STRINGER_TOKEN};
use crate::flatten::value::{FieldValue, MapValue, StructValue, Value};
use crate::flatten::{FlattenError, Result};

/// Capture any serializable value into the runtime [`Value`] model.
///
/// Field names are the serialized names, so `#[serde(rename = "...")]`
/// declares the export key and `#[serde(skip)]` hides a field entirely.
pub fn to_value<T: ?Sized + Serialize>(value: &T) -> Result<Value> {
	value.serialize(ValueSerializer)
}

/// `serde::Serializer` producing a [`Value`] tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
	type Ok = Value;
	type Error = FlattenError;

	type SerializeSeq = SerializeArray;
	type SerializeTuple = SerializeArray;
	type SerializeTupleStruct = SerializeArray;
	type SerializeTupleVariant = SerializeTupleVariant;
	type SerializeMap = SerializeMap;
	type SerializeStruct = SerializeStruct;
	type SerializeStructVariant = SerializeStructVariant;

	fn serialize_bool(self, v: bool) -> Result<Value> {
		Ok(Value::Bool(v))
	}

	fn serialize_i8(self, v: i8) -> Result<Value> {
		Ok(Value::I64(v.into()))
	}

	fn serialize_i16(self, v: i16) -> Result<Value> {
		Ok(Value::I64(v.into()))
	}

	fn serialize_i32(self, v: i32) -> Result<Value> {
		Ok(Value::I64(v.into()))
	}

	fn serialize_i64(self, v: i64) -> Result<Value> {
		Ok(Value::I64(v))
	}

	fn serialize_i128(self, v: i128) -> Result<Value> {
		Ok(Value::I128(v))
	}

	fn serialize_u8(self, v: u8) -> Result<Value> {
		Ok(Value::U64(v.into()))
	}

	fn serialize_u16(self, v: u16) -> Result<Value> {
		Ok(Value::U64(v.into()))
	}

	fn serialize_u32(self, v: u32) -> Result<Value> {
		Ok(Value::U64(v.into()))
	}

	fn serialize_u64(self, v: u64) -> Result<Value> {
		Ok(Value::U64(v))
	}

	fn serialize_u128(self, v: u128) -> Result<Value> {
		Ok(Value::U128(v))
	}

	fn serialize_f32(self, v: f32) -> Result<Value> {
		Ok(Value::F32(v))
	}

	fn serialize_f64(self, v: f64) -> Result<Value> {
		Ok(Value::F64(v))
	}

	fn serialize_char(self, v: char) -> Result<Value> {
		Ok(Value::Char(v))
	}

	fn serialize_str(self, v: &str) -> Result<Value> {
		Ok(Value::String(v.into()))
	}

	fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
		Ok(Value::Array(v.iter().map(|byte| Value::U64(u64::from(*byte))).collect()))
	}

	fn serialize_none(self) -> Result<Value> {
		Ok(Value::Ptr(None))
	}

	fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Value> {
		Ok(Value::Ptr(Some(Box::new(value.serialize(self)?))))
	}

	fn serialize_unit(self) -> Result<Value> {
		Ok(Value::Null)
	}

	fn serialize_unit_struct(self, name: &'static str) -> Result<Value> {
		Ok(Value::Struct(StructValue::new(name)))
	}

	fn serialize_unit_variant(self, _name: &'static str, _variant_index: u32, variant: &'static str) -> Result<Value> {
		Ok(Value::String(variant.into()))
	}

	fn serialize_newtype_struct<T: ?Sized + Serialize>(self, name: &'static str, value: &T) -> Result<Value> {
		match name {
			INTERFACE_TOKEN => match value.serialize(self)? {
				Value::Ptr(inner) => Ok(Value::Interface(inner)),
				other => Ok(Value::Interface(Some(Box::new(other)))),
			},
			STRINGER_TOKEN => match value.serialize(self)? {
				Value::String(text) => Ok(Value::Stringer(text)),
				other => Ok(other),
			},
			_ => value.serialize(self),
		}
	}

	fn serialize_newtype_variant<T: ?Sized + Serialize>(
		self,
		_name: &'static str,
		_variant_index: u32,
		variant: &'static str,
		value: &T,
	) -> Result<Value> {
		let inner = value.serialize(self)?;
		Ok(variant_map(variant, inner))
	}

	fn serialize_seq(self, len: Option<usize>) -> Result<SerializeArray> {
		Ok(SerializeArray {
			items: Vec::with_capacity(len.unwrap_or(0)),
		})
	}

	fn serialize_tuple(self, len: usize) -> Result<SerializeArray> {
		self.serialize_seq(Some(len))
	}

	fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeArray> {
		self.serialize_seq(Some(len))
	}

	fn serialize_tuple_variant(self, _name: &'static str, _variant_index: u32, variant: &'static str, len: usize) -> Result<SerializeTupleVariant> {
		Ok(SerializeTupleVariant {
			variant,
			items: Vec::with_capacity(len),
		})
	}

	fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
		Ok(SerializeMap {
			map: MapValue {
				entries: Vec::with_capacity(len.unwrap_or(0)),
			},
			pending_key: None,
			flattened: len.is_none(),
		})
	}

	fn serialize_struct(self, name: &'static str, len: usize) -> Result<SerializeStruct> {
		Ok(SerializeStruct {
			item: struct_with_capacity(name, len),
		})
	}

	fn serialize_struct_variant(self, _name: &'static str, _variant_index: u32, variant: &'static str, len: usize) -> Result<SerializeStructVariant> {
		Ok(SerializeStructVariant {
			variant,
			item: struct_with_capacity(variant, len),
		})
	}
}

fn struct_with_capacity(name: &str, len: usize) -> StructValue {
	StructValue {
		type_name: name.into(),
		fields: Vec::with_capacity(len),
	}
}

/// Externally tagged variant payload: a one-entry map keyed by variant name.
fn variant_map(variant: &str, inner: Value) -> Value {
	Value::Map(MapValue {
		entries: vec![(Value::String(variant.into()), inner)],
	})
}

/// Sequence, tuple, and tuple-struct builder.
pub struct SerializeArray {
	items: Vec<Value>,
}

impl ser::SerializeSeq for SerializeArray {
	type Ok = Value;
	type Error = FlattenError;

	fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
		self.items.push(to_value(value)?);
		Ok(())
	}

	fn end(self) -> Result<Value> {
		Ok(Value::Array(self.items))
	}
}

impl ser::SerializeTuple for SerializeArray {
	type Ok = Value;
	type Error = FlattenError;

	fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
		ser::SerializeSeq::serialize_element(self, value)
	}

	fn end(self) -> Result<Value> {
		ser::SerializeSeq::end(self)
	}
}

impl ser::SerializeTupleStruct for SerializeArray {
	type Ok = Value;
	type Error = FlattenError;

	fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
		ser::SerializeSeq::serialize_element(self, value)
	}

	fn end(self) -> Result<Value> {
		ser::SerializeSeq::end(self)
	}
}

/// Tuple-variant builder.
pub struct SerializeTupleVariant {
	variant: &'static str,
	items: Vec<Value>,
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
	type Ok = Value;
	type Error = FlattenError;

	fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
		self.items.push(to_value(value)?);
		Ok(())
	}

	fn end(self) -> Result<Value> {
		Ok(variant_map(self.variant, Value::Array(self.items)))
	}
}

/// Map builder.
///
/// serde emits structs with `#[serde(flatten)]` fields as maps of unknown
/// length; those are rebuilt as structs so field rules still apply.
pub struct SerializeMap {
	map: MapValue,
	pending_key: Option<Value>,
	flattened: bool,
}

impl ser::SerializeMap for SerializeMap {
	type Ok = Value;
	type Error = FlattenError;

	fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<()> {
		self.pending_key = Some(to_value(key)?);
		Ok(())
	}

	fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
		let key = self.pending_key.take().ok_or_else(|| FlattenError::Capture {
			message: "map value serialized before its key".to_owned(),
		})?;
		self.map.entries.push((key, to_value(value)?));
		Ok(())
	}

	fn end(self) -> Result<Value> {
		if !self.flattened {
			return Ok(Value::Map(self.map));
		}
		let mut item = struct_with_capacity("", self.map.entries.len());
		for (key, value) in self.map.entries {
			match key {
				Value::String(name) => item.fields.push(FieldValue::new(&name, value)),
				other => return Err(FlattenError::InvalidMapKeyKind { kind: other.kind() }),
			}
		}
		Ok(Value::Struct(item))
	}
}

/// Struct builder.
pub struct SerializeStruct {
	item: StructValue,
}

impl ser::SerializeStruct for SerializeStruct {
	type Ok = Value;
	type Error = FlattenError;

	fn serialize_field<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<()> {
		self.item.fields.push(FieldValue::new(key, to_value(value)?));
		Ok(())
	}

	fn end(self) -> Result<Value> {
		Ok(Value::Struct(self.item))
	}
}

/// Struct-variant builder.
pub struct SerializeStructVariant {
	variant: &'static str,
	item: StructValue,
}

impl ser::SerializeStructVariant for SerializeStructVariant {
	type Ok = Value;
	type Error = FlattenError;

	fn serialize_field<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<()> {
		self.item.fields.push(FieldValue::new(key, to_value(value)?));
		Ok(())
	}

	fn end(self) -> Result<Value> {
		Ok(variant_map(self.variant, Value::Struct(self.item)))
	}
}
