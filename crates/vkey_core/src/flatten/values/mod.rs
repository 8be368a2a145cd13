use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Multi-valued string map produced by flattening.
///
/// Adding to an existing key appends. Values under one key keep insertion
/// order; iteration order across keys is unspecified. [`Values::encode`] and
/// the `Serialize` impl sort keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
	inner: HashMap<String, Vec<String>>,
}

impl Values {
	/// Empty collection.
	pub fn new() -> Self {
		Self::default()
	}

	/// First value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.inner.get(key).and_then(|values| values.first()).map(String::as_str)
	}

	/// All values stored under `key`; empty when the key is absent.
	pub fn get_all(&self, key: &str) -> &[String] {
		self.inner.get(key).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Append one value under `key`.
	pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.inner.entry(key.into()).or_default().push(value.into());
	}

	/// Replace every value under `key` with `value`.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.inner.insert(key.into(), vec![value.into()]);
	}

	/// Remove `key`, returning its values.
	pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
		self.inner.remove(key)
	}

	/// Whether `key` is present, even with no values.
	pub fn contains_key(&self, key: &str) -> bool {
		self.inner.contains_key(key)
	}

	/// Append `values` under `key`, creating the key even if `values` is empty.
	pub fn append<I>(&mut self, key: &str, values: I)
	where
		I: IntoIterator<Item = String>,
	{
		match self.inner.get_mut(key) {
			Some(existing) => existing.extend(values),
			None => {
				self.inner.insert(key.to_owned(), values.into_iter().collect());
			}
		}
	}

	/// Append every key of `other` into `self`.
	pub fn merge(&mut self, other: Values) {
		for (key, values) in other.inner {
			self.inner.entry(key).or_default().extend(values);
		}
	}

	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Whether no keys are present.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Iterate keys in unspecified order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.inner.keys().map(String::as_str)
	}

	/// Iterate `(key, values)` pairs in unspecified order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.inner.iter().map(|(key, values)| (key.as_str(), values.as_slice()))
	}

	/// Pairs sorted by key.
	fn sorted(&self) -> Vec<(&String, &Vec<String>)> {
		let mut pairs: Vec<_> = self.inner.iter().collect();
		pairs.sort_by(|left, right| left.0.cmp(right.0));
		pairs
	}

	/// Encode as `application/x-www-form-urlencoded`, sorted by key.
	///
	/// Keys with no values emit nothing.
	pub fn encode(&self) -> String {
		let mut serializer = url::form_urlencoded::Serializer::new(String::new());
		for (key, values) in self.sorted() {
			for value in values {
				serializer.append_pair(key, value);
			}
		}
		serializer.finish()
	}

	/// Unwrap into the backing map.
	pub fn into_inner(self) -> HashMap<String, Vec<String>> {
		self.inner
	}
}

impl fmt::Display for Values {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.encode())
	}
}

impl Serialize for Values {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let sorted = self.sorted();
		let mut map = serializer.serialize_map(Some(sorted.len()))?;
		for (key, values) in sorted {
			map.serialize_entry(key, values)?;
		}
		map.end()
	}
}

impl From<Values> for HashMap<String, Vec<String>> {
	fn from(values: Values) -> Self {
		values.inner
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Values {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut values = Values::new();
		for (key, value) in iter {
			values.add(key, value);
		}
		values
	}
}

impl IntoIterator for Values {
	type Item = (String, Vec<String>);
	type IntoIter = hash_map::IntoIter<String, Vec<String>>;

	fn into_iter(self) -> Self::IntoIter {
		self.inner.into_iter()
	}
}

#[cfg(test)]
mod tests;
