use crate::flatten::Value;

/// Coerce a leaf value into zero or more strings.
///
/// Absent values and nil pointers yield nothing, pointers are dereferenced,
/// sequences concatenate their elements, and every other value (interfaces
/// included) yields its [`render`] text.
pub fn to_strings(value: &Value) -> Vec<String> {
	let mut out = Vec::new();
	push_strings(value, &mut out);
	out
}

fn push_strings(value: &Value, out: &mut Vec<String>) {
	match value {
		Value::Null | Value::Ptr(None) => {}
		Value::Ptr(Some(inner)) => push_strings(inner, out),
		Value::Array(items) => {
			for item in items {
				push_strings(item, out);
			}
		}
		other => out.push(render(other)),
	}
}

/// Canonical textual form of a value.
///
/// Scalars print in their natural form. Composite values print as
/// `{a b}` for structs, `[a b]` for sequences and `map[k:v]` for maps (entries
/// sorted by rendered key). Nil prints as `<nil>`.
pub fn render(value: &Value) -> String {
	let mut out = String::new();
	render_into(value, &mut out);
	out
}

fn render_into(value: &Value, out: &mut String) {
	match value {
		Value::Null | Value::Ptr(None) | Value::Interface(None) => out.push_str("<nil>"),
		Value::Bool(v) => out.push_str(if *v { "true" } else { "false" }),
		Value::I64(v) => out.push_str(&v.to_string()),
		Value::U64(v) => out.push_str(&v.to_string()),
		Value::I128(v) => out.push_str(&v.to_string()),
		Value::U128(v) => out.push_str(&v.to_string()),
		Value::F32(v) => out.push_str(&v.to_string()),
		Value::F64(v) => out.push_str(&v.to_string()),
		Value::Char(v) => out.push(*v),
		Value::String(v) | Value::Stringer(v) => out.push_str(v),
		Value::Ptr(Some(inner)) | Value::Interface(Some(inner)) => render_into(inner, out),
		Value::Array(items) => {
			out.push('[');
			push_joined(items.iter().map(render), out);
			out.push(']');
		}
		Value::Struct(item) => {
			out.push('{');
			push_joined(item.fields.iter().map(|field| render(&field.value)), out);
			out.push('}');
		}
		Value::Map(map) => {
			let mut entries: Vec<(String, String)> = map.entries.iter().map(|(key, value)| (render(key), render(value))).collect();
			entries.sort();
			out.push_str("map[");
			push_joined(entries.into_iter().map(|(key, value)| format!("{key}:{value}")), out);
			out.push(']');
		}
	}
}

fn push_joined(parts: impl Iterator<Item = String>, out: &mut String) {
	for (idx, part) in parts.enumerate() {
		if idx > 0 {
			out.push(' ');
		}
		out.push_str(&part);
	}
}
