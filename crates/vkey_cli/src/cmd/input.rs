use serde_json::Value as Json;
use vkey::flatten::{FieldValue, MapValue, StructValue, Value};

/// Type name given to the struct built from a top-level JSON object.
pub const DOCUMENT_TYPE: &str = "Document";

/// Map a parsed JSON document onto the value model.
///
/// A top-level object becomes a struct of exported, untagged fields holding
/// interface values. Nested objects become string-keyed maps of interfaces,
/// arrays become sequences of interfaces, and `null` is a nil interface.
/// Any other top-level document maps to its plain value, which the flattener
/// rejects.
pub fn document_to_value(document: Json) -> Value {
	match document {
		Json::Object(fields) => {
			let mut item = StructValue::new(DOCUMENT_TYPE);
			item.fields = fields.into_iter().map(|(name, value)| FieldValue::new(&name, interface_of(value))).collect();
			Value::Struct(item)
		}
		other => concrete(other),
	}
}

fn interface_of(value: Json) -> Value {
	match value {
		Json::Null => Value::Interface(None),
		other => Value::interface(concrete(other)),
	}
}

fn concrete(value: Json) -> Value {
	match value {
		Json::Null => Value::Null,
		Json::Bool(v) => Value::Bool(v),
		Json::Number(number) => {
			if let Some(v) = number.as_i64() {
				Value::I64(v)
			} else if let Some(v) = number.as_u64() {
				Value::U64(v)
			} else {
				Value::F64(number.as_f64().unwrap_or(f64::NAN))
			}
		}
		Json::String(text) => Value::from(text),
		Json::Array(items) => Value::Array(items.into_iter().map(interface_of).collect()),
		Json::Object(entries) => Value::Map(MapValue {
			entries: entries.into_iter().map(|(key, value)| (Value::from(key), interface_of(value))).collect(),
		}),
	}
}
