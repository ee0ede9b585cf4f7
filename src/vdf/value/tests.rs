use crate::vdf::{ErrorKind, Kind, Table, Value, VdfError, WideString};

#[test]
fn insert_replaces_in_place() {
	let mut table = Table::new().with("a", 1).with("b", 2).with("c", 3);
	let previous = table.insert("b", "two");

	assert_eq!(previous, Some(Value::Int32(2)));
	assert_eq!(table.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
	assert_eq!(table.get("b").and_then(Value::as_text), Some("two"));
}

#[test]
fn try_insert_rejects_duplicate_key() {
	let mut table = Table::new();
	table.try_insert("appid", 7_i64).expect("first insert succeeds");

	let err = table.try_insert("appid", 8_i64).expect_err("duplicate should fail");
	assert!(matches!(&err, VdfError::DuplicateKey { key } if key == "appid"));
	assert_eq!(err.kind(), ErrorKind::TypeMismatch);
	assert_eq!(table.get("appid"), Some(&Value::Int64(7)));
}

#[test]
fn remove_keeps_order_of_remaining_entries() {
	let mut table: Table = [("x", 1), ("y", 2), ("z", 3)].into_iter().collect();
	assert_eq!(table.remove("x"), Some(Value::Int32(1)));
	assert_eq!(table.keys().collect::<Vec<_>>(), ["y", "z"]);
}

#[test]
fn table_entry_creates_and_reuses() {
	let mut root = Table::new();
	root.table_entry("shortcuts").expect("created").insert("0", Table::new());
	assert_eq!(root.table_entry("shortcuts").expect("reused").len(), 1);
}

#[test]
fn table_entry_rejects_leaf() {
	let mut root = Table::new().with("shortcuts", 5);
	let err = root.table_entry("shortcuts").expect_err("leaf is not a table");
	assert!(matches!(
		err,
		VdfError::UnexpectedKind {
			expected: "table",
			got: "int32",
			..
		}
	));
}

#[test]
fn from_utf16_picks_text_for_valid_units() {
	let units: Vec<u16> = "Stream Deck".encode_utf16().collect();
	assert_eq!(Value::from_utf16(&units), Value::Text("Stream Deck".to_owned()));
}

#[test]
fn from_utf16_falls_back_to_wide_text_for_lone_surrogate() {
	let units = [0x0041, 0xD800, 0x0042];
	let value = Value::from_utf16(&units);

	assert_eq!(value.kind(), Kind::WideText);
	let wide = value.as_wide_text().expect("wide text");
	assert_eq!(wide.units(), units);
	assert_eq!(wide.to_string_checked(), None);
	assert_eq!(wide.to_string_lossy(), "A\u{FFFD}B");
}

#[test]
fn wrapper_kinds_stay_distinct() {
	assert_eq!(Value::pointer(5).kind(), Kind::Pointer);
	assert_eq!(Value::color(5).kind(), Kind::Color);
	assert_eq!(Value::from(5).kind(), Kind::Int32);
	assert_eq!(Value::from(5_u64).kind(), Kind::UInt64);
	assert_eq!(Value::from(5_i64).kind(), Kind::Int64);
	assert_ne!(Value::pointer(5), Value::Int32(5));
	assert_eq!(Value::Int64(5).as_int32(), None);
}

#[test]
fn wide_string_from_str_round_trips() {
	let wide = WideString::from("caf\u{e9}");
	assert_eq!(wide.to_string_checked().as_deref(), Some("caf\u{e9}"));
}
