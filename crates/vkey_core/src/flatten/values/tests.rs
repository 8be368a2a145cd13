use crate::flatten::Values;

#[test]
fn add_appends_under_existing_key() {
	let mut values = Values::new();
	values.add("tag", "a");
	values.add("tag", "b");
	assert_eq!(values.get("tag"), Some("a"));
	assert_eq!(values.get_all("tag"), ["a", "b"]);
	assert_eq!(values.len(), 1);
}

#[test]
fn set_replaces_and_remove_drops() {
	let mut values: Values = [("k", "1"), ("k", "2")].into_iter().collect();
	values.set("k", "3");
	assert_eq!(values.get_all("k"), ["3"]);
	assert_eq!(values.remove("k"), Some(vec!["3".to_owned()]));
	assert!(!values.contains_key("k"));
	assert!(values.get_all("k").is_empty());
	assert_eq!(values.get("k"), None);
}

#[test]
fn append_with_no_values_still_creates_key() {
	let mut values = Values::new();
	values.append("empty", Vec::new());
	assert!(values.contains_key("empty"));
	assert!(values.get_all("empty").is_empty());
	assert_eq!(values.encode(), "");
}

#[test]
fn merge_appends_per_key() {
	let mut left: Values = [("x", "1"), ("y", "2")].into_iter().collect();
	let right: Values = [("x", "3"), ("z", "4")].into_iter().collect();
	left.merge(right);
	assert_eq!(left.get_all("x"), ["1", "3"]);
	assert_eq!(left.get_all("y"), ["2"]);
	assert_eq!(left.get_all("z"), ["4"]);
}

#[test]
fn encode_sorts_keys_and_escapes() {
	let values: Values = [("q", "a b&c"), ("Age", "30"), ("q", "é")].into_iter().collect();
	assert_eq!(values.encode(), "Age=30&q=a+b%26c&q=%C3%A9");
	assert_eq!(values.to_string(), values.encode());
}

#[test]
fn serializes_as_sorted_json_object() {
	let values: Values = [("b", "2"), ("a", "1"), ("a", "0")].into_iter().collect();
	let json = serde_json::to_string(&values).expect("values serialize");
	assert_eq!(json, r#"{"a":["1","0"],"b":["2"]}"#);
}

#[test]
fn iter_visits_every_key() {
	let values: Values = [("a", "1"), ("b", "2")].into_iter().collect();
	let mut keys: Vec<&str> = values.keys().collect();
	keys.sort_unstable();
	assert_eq!(keys, ["a", "b"]);
	assert_eq!(values.iter().map(|(_, items)| items.len()).sum::<usize>(), 2);
	assert_eq!(values.into_inner().len(), 2);
}
