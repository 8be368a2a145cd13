#![allow(missing_docs)]

use std::thread;

use serde::Serialize;
use vkey::flatten::{FlattenError, Interface, Kind, Stringer, Values, to_query_string, to_values};

#[derive(Serialize, Clone)]
struct Address {
	city: String,
	#[serde(rename = "zip")]
	postcode: String,
}

#[derive(Serialize, Clone)]
struct Customer {
	#[serde(rename = "n")]
	name: String,
	#[serde(rename = "Age")]
	age: u8,
	#[serde(rename = "-")]
	hidden: String,
	#[serde(skip)]
	#[allow(dead_code)]
	internal_id: u64,
	tags: Vec<String>,
	address: Address,
	billing: Interface<Address>,
	since: Interface<Stringer<u16>>,
	referrer: Option<String>,
}

fn customer() -> Customer {
	Customer {
		name: "Al".to_owned(),
		age: 30,
		hidden: "x".to_owned(),
		internal_id: 99,
		tags: vec!["a".to_owned(), "b".to_owned()],
		address: Address {
			city: "Carrot City".to_owned(),
			postcode: "12345".to_owned(),
		},
		billing: Interface::new(Address {
			city: "Lavender Town".to_owned(),
			postcode: "54321".to_owned(),
		}),
		since: Interface::new(Stringer(2019)),
		referrer: Some("friend".to_owned()),
	}
}

#[test]
fn customer_flattens_into_unprefixed_keys() {
	let values = to_values(&customer()).expect("customer flattens");

	assert_eq!(values.get("n"), Some("Al"));
	assert_eq!(values.get("Age"), Some("30"));
	assert_eq!(values.get_all("tags"), ["a", "b"]);
	assert_eq!(values.get_all("city"), ["Carrot City", "Lavender Town"]);
	assert_eq!(values.get_all("zip"), ["12345", "54321"]);
	assert_eq!(values.get("since"), Some("2019"));
	assert_eq!(values.get("referrer"), Some("friend"));
	for hidden in ["-", "hidden", "internal_id", "address", "billing", "name", "postcode"] {
		assert!(!values.contains_key(hidden), "unexpected key {hidden}");
	}
}

#[test]
fn customer_encodes_sorted_query_string() {
	let query = to_query_string(&customer()).expect("customer encodes");
	assert_eq!(
		query,
		"Age=30&city=Carrot+City&city=Lavender+Town&n=Al&referrer=friend&since=2019&tags=a&tags=b&zip=12345&zip=54321"
	);
}

#[test]
fn bare_scalars_are_rejected() {
	assert_eq!(to_values(&7_i32).expect_err("int rejected"), FlattenError::InvalidInputKind { kind: Kind::Int });
	assert_eq!(
		to_values(&vec![1_u8]).expect_err("vec rejected"),
		FlattenError::InvalidInputKind { kind: Kind::Array }
	);
}

#[test]
fn flattening_runs_concurrently_on_independent_inputs() {
	let handles: Vec<_> = (0..4_u8)
		.map(|age| {
			let mut input = customer();
			input.age = age;
			thread::spawn(move || to_values(&input))
		})
		.collect();

	let results: Vec<Values> = handles
		.into_iter()
		.map(|handle| handle.join().expect("thread joins").expect("customer flattens"))
		.collect();
	for (age, values) in results.iter().enumerate() {
		assert_eq!(values.get("Age"), Some(age.to_string().as_str()));
	}
}
