use std::fmt;

/// Runtime kind of a [`Value`], used for dispatch and error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// Absent or invalid value.
	Invalid,
	/// Boolean.
	Bool,
	/// Signed integer.
	Int,
	/// Unsigned integer.
	Uint,
	/// Floating point number.
	Float,
	/// Single Unicode scalar.
	Char,
	/// UTF-8 string.
	String,
	/// Pointer or optional.
	Pointer,
	/// Dynamic container holding a value of any kind.
	Interface,
	/// Ordered sequence.
	Array,
	/// Key/value mapping.
	Map,
	/// Named-field record.
	Struct,
	/// Value with a canonical string representation.
	Stringer,
}

impl Kind {
	/// Lowercase label used in messages.
	pub fn label(self) -> &'static str {
		match self {
			Kind::Invalid => "invalid",
			Kind::Bool => "bool",
			Kind::Int => "int",
			Kind::Uint => "uint",
			Kind::Float => "float",
			Kind::Char => "char",
			Kind::String => "string",
			Kind::Pointer => "ptr",
			Kind::Interface => "interface",
			Kind::Array => "array",
			Kind::Map => "map",
			Kind::Struct => "struct",
			Kind::Stringer => "stringer",
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Captured runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Absent value (unit).
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer up to 64 bits.
	I64(i64),
	/// Unsigned integer up to 64 bits.
	U64(u64),
	/// 128-bit signed integer.
	I128(i128),
	/// 128-bit unsigned integer.
	U128(u128),
	/// Single-precision float.
	F32(f32),
	/// Double-precision float.
	F64(f64),
	/// Unicode scalar.
	Char(char),
	/// UTF-8 string.
	String(Box<str>),
	/// Optional indirection; `None` is a nil pointer.
	Ptr(Option<Box<Value>>),
	/// Dynamically typed slot; `None` is a nil interface.
	Interface(Option<Box<Value>>),
	/// Sequence elements in order.
	Array(Vec<Value>),
	/// Keyed entries.
	Map(MapValue),
	/// Named fields.
	Struct(StructValue),
	/// Display text of a stringer-capable value.
	Stringer(Box<str>),
}

/// Struct value: a type name and its declared fields in order.
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue {
	/// Declared type name; empty for structs rebuilt from flattened serde maps.
	pub type_name: Box<str>,
	/// Fields in declaration order.
	pub fields: Vec<FieldValue>,
}

/// One declared struct field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Declared field name.
	pub name: Box<str>,
	/// Export key annotation; overrides `name` when present.
	pub tag: Option<Box<str>>,
	/// Whether the field is visible outside its defining module.
	pub exported: bool,
	/// Field payload.
	pub value: Value,
}

/// Map value with entries in iteration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapValue {
	/// Key/value pairs in iteration order.
	pub entries: Vec<(Value, Value)>,
}

impl Value {
	/// Runtime kind of this value.
	pub fn kind(&self) -> Kind {
		match self {
			Value::Null => Kind::Invalid,
			Value::Bool(_) => Kind::Bool,
			Value::I64(_) | Value::I128(_) => Kind::Int,
			Value::U64(_) | Value::U128(_) => Kind::Uint,
			Value::F32(_) | Value::F64(_) => Kind::Float,
			Value::Char(_) => Kind::Char,
			Value::String(_) => Kind::String,
			Value::Ptr(_) => Kind::Pointer,
			Value::Interface(_) => Kind::Interface,
			Value::Array(_) => Kind::Array,
			Value::Map(_) => Kind::Map,
			Value::Struct(_) => Kind::Struct,
			Value::Stringer(_) => Kind::Stringer,
		}
	}

	/// Wrap `value` in a non-nil interface.
	pub fn interface(value: impl Into<Value>) -> Self {
		Value::Interface(Some(Box::new(value.into())))
	}

	/// Wrap `value` in a non-nil pointer.
	pub fn ptr(value: impl Into<Value>) -> Self {
		Value::Ptr(Some(Box::new(value.into())))
	}

	/// Value whose textual form is `text`.
	pub fn stringer(text: impl Into<String>) -> Self {
		Value::Stringer(text.into().into_boxed_str())
	}

	/// Borrow the string payload of a `String` value.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(text) => Some(text),
			_ => None,
		}
	}
}

impl StructValue {
	/// Empty struct of the given type.
	pub fn new(type_name: impl Into<String>) -> Self {
		Self {
			type_name: type_name.into().into_boxed_str(),
			fields: Vec::new(),
		}
	}

	/// Append an exported, untagged field.
	pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
		self.fields.push(FieldValue::new(name, value));
		self
	}

	/// Append an exported field carrying an export key annotation.
	pub fn with_tagged_field(mut self, name: &str, tag: &str, value: impl Into<Value>) -> Self {
		self.fields.push(FieldValue::new(name, value).tagged(tag));
		self
	}

	/// Append an unexported field.
	pub fn with_private_field(mut self, name: &str, value: impl Into<Value>) -> Self {
		self.fields.push(FieldValue::new(name, value).private());
		self
	}
}

impl FieldValue {
	/// Exported, untagged field.
	pub fn new(name: &str, value: impl Into<Value>) -> Self {
		Self {
			name: name.into(),
			tag: None,
			exported: true,
			value: value.into(),
		}
	}

	/// Set the export key annotation.
	pub fn tagged(mut self, tag: &str) -> Self {
		self.tag = Some(tag.into());
		self
	}

	/// Mark the field unexported.
	pub fn private(mut self) -> Self {
		self.exported = false;
		self
	}

	/// Key this field is exported under: the tag if declared, else the name.
	pub fn export_key(&self) -> &str {
		self.tag.as_deref().unwrap_or(&self.name)
	}
}

impl MapValue {
	/// Empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append one entry.
	pub fn with_entry(mut self, key: impl Into<Value>, value: impl Into<Value>) -> Self {
		self.entries.push((key.into(), value.into()));
		self
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the map has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

macro_rules! impl_from {
	($variant:ident: $($ty:ty),+) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Value::$variant(value.into())
				}
			}
		)+
	};
}

impl_from!(Bool: bool);
impl_from!(I64: i8, i16, i32, i64);
impl_from!(U64: u8, u16, u32, u64);
impl_from!(F32: f32);
impl_from!(F64: f64);
impl_from!(Char: char);
impl_from!(String: &str, String);
impl_from!(Struct: StructValue);
impl_from!(Map: MapValue);

impl From<i128> for Value {
	fn from(value: i128) -> Self {
		Value::I128(value)
	}
}

impl From<u128> for Value {
	fn from(value: u128) -> Self {
		Value::U128(value)
	}
}

impl<T: Into<Value>> From<Vec<T>> for Value {
	fn from(items: Vec<T>) -> Self {
		Value::Array(items.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		Value::Ptr(value.map(|inner| Box::new(inner.into())))
	}
}
