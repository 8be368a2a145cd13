use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use vkey::flatten::{Values, flatten_value};

use crate::cmd::Result;
use crate::cmd::input::document_to_value;

/// Output rendering for flattened values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
	/// `application/x-www-form-urlencoded`, keys sorted.
	Query,
	/// JSON object of string arrays, keys sorted.
	Json,
	/// One unencoded `key=value` line per value, keys sorted.
	Lines,
}

/// Read a JSON document, flatten it, and print the result.
pub fn run(path: Option<PathBuf>, format: OutputFormat, key: Option<String>) -> Result<()> {
	let bytes = read_input(path.as_deref())?;
	let document: serde_json::Value = serde_json::from_slice(&bytes)?;
	let values = flatten_value(&document_to_value(document))?;
	debug!(keys = values.len(), "flattened document");

	let rendered = match key {
		Some(key) => {
			if !values.contains_key(&key) {
				warn!(%key, "key not present in flattened output");
			}
			render_key(&values, &key)
		}
		None => render_values(&values, format)?,
	};
	print!("{rendered}");
	Ok(())
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
	let bytes = match path {
		Some(path) if path != Path::new("-") => {
			debug!(path = %path.display(), "reading document");
			std::fs::read(path)?
		}
		_ => {
			debug!("reading document from stdin");
			let mut buf = Vec::new();
			std::io::stdin().read_to_end(&mut buf)?;
			buf
		}
	};
	debug!(bytes = bytes.len(), "document read");
	Ok(bytes)
}

/// Render every key of `values` in `format`, newline terminated.
pub fn render_values(values: &Values, format: OutputFormat) -> Result<String> {
	let mut out = match format {
		OutputFormat::Query => values.encode(),
		OutputFormat::Json => serde_json::to_string_pretty(values)?,
		OutputFormat::Lines => {
			let mut pairs: Vec<(&str, &[String])> = values.iter().collect();
			pairs.sort_by_key(|(key, _)| *key);
			let mut out = String::new();
			for (key, items) in pairs {
				for item in items {
					out.push_str(&format!("{key}={item}\n"));
				}
			}
			return Ok(out);
		}
	};
	out.push('\n');
	Ok(out)
}

/// Values stored under `key`, one per line.
pub fn render_key(values: &Values, key: &str) -> String {
	values.get_all(key).iter().fold(String::new(), |mut out, item| {
		out.push_str(item);
		out.push('\n');
		out
	})
}

#[cfg(test)]
mod tests {
	use vkey::flatten::Values;

	use super::{OutputFormat, render_key, render_values};

	fn sample() -> Values {
		[("b", "x y"), ("a", "1"), ("b", "2")].into_iter().collect()
	}

	#[test]
	fn query_format_is_encoded_and_sorted() {
		let out = render_values(&sample(), OutputFormat::Query).expect("query renders");
		assert_eq!(out, "a=1&b=x+y&b=2\n");
	}

	#[test]
	fn lines_format_is_unencoded() {
		let out = render_values(&sample(), OutputFormat::Lines).expect("lines render");
		assert_eq!(out, "a=1\nb=x y\nb=2\n");
	}

	#[test]
	fn json_format_round_trips_through_serde_json() {
		let out = render_values(&sample(), OutputFormat::Json).expect("json renders");
		let parsed: serde_json::Value = serde_json::from_str(&out).expect("output is json");
		assert_eq!(parsed, serde_json::json!({"a": ["1"], "b": ["x y", "2"]}));
	}

	#[test]
	fn key_filter_prints_each_value() {
		assert_eq!(render_key(&sample(), "b"), "x y\n2\n");
		assert_eq!(render_key(&sample(), "missing"), "");
	}
}
