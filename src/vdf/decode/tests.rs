use std::io::{Cursor, Read};

use crate::vdf::{DecodeOptions, ErrorKind, Table, Terminator, Value, VdfError, decode, decode_bytes};

fn entry(tag: u8, key: &str) -> Vec<u8> {
	let mut out = vec![tag];
	out.extend_from_slice(key.as_bytes());
	out.push(0);
	out
}

fn no_merge() -> DecodeOptions {
	DecodeOptions {
		merge_duplicate_keys: false,
		..DecodeOptions::default()
	}
}

#[test]
fn empty_stream_is_empty_root() {
	let table = decode_bytes(&[], &DecodeOptions::default()).expect("empty decodes");
	assert!(table.is_empty());
}

#[test]
fn missing_root_terminator_is_accepted() {
	let mut bytes = entry(0x02, "n");
	bytes.extend_from_slice(&9_i32.to_le_bytes());

	let table = decode_bytes(&bytes, &DecodeOptions::default()).expect("decodes");
	assert_eq!(table.get("n"), Some(&Value::Int32(9)));
}

#[test]
fn seeded_shortcuts_file() {
	let table = decode_bytes(b"\x00shortcuts\x00\x08\x08", &DecodeOptions::default()).expect("decodes");
	assert_eq!(table.get_table("shortcuts"), Some(&Table::new()));
}

#[test]
fn explicit_root_terminator_stops_before_trailing_bytes() {
	let mut bytes = entry(0x01, "a");
	bytes.extend_from_slice(b"b\0");
	bytes.extend_from_slice(&[0x08, 0xAA, 0xBB]);

	let mut cursor = Cursor::new(bytes);
	let table = decode(&mut cursor, &DecodeOptions::default()).expect("decodes");
	assert_eq!(table.get("a").and_then(Value::as_text), Some("b"));

	let mut rest = Vec::new();
	cursor.read_to_end(&mut rest).expect("read rest");
	assert_eq!(rest, [0xAA, 0xBB]);
}

#[test]
fn strict_mode_rejects_trailing_data() {
	let mut bytes = entry(0x02, "a");
	bytes.extend_from_slice(&1_i32.to_le_bytes());
	bytes.extend_from_slice(&[0x08, 0xAA]);

	let strict = DecodeOptions {
		reject_trailing_data: true,
		..DecodeOptions::default()
	};
	let err = decode_bytes(&bytes, &strict).expect_err("trailing byte");
	assert!(matches!(err, VdfError::TrailingData { at: 8 }));
	assert_eq!(err.kind(), ErrorKind::MalformedStream);
}

#[test]
fn strict_mode_accepts_clean_end() {
	let strict = DecodeOptions {
		reject_trailing_data: true,
		..DecodeOptions::default()
	};
	decode_bytes(b"\x00t\x00\x08\x08", &strict).expect("no trailing data");
}

#[test]
fn unknown_tag_reports_offset_zero() {
	let err = decode_bytes(&[0xFF, b'k', 0], &DecodeOptions::default()).expect_err("bad tag");
	assert!(matches!(err, VdfError::UnknownTag { tag: 0xFF, at: 0 }));
}

#[test]
fn unknown_tag_inside_nested_table() {
	let mut bytes = entry(0x00, "t");
	bytes.push(0x09);

	let err = decode_bytes(&bytes, &DecodeOptions::default()).expect_err("bad tag");
	assert!(matches!(err, VdfError::UnknownTag { tag: 0x09, at: 3 }));
}

#[test]
fn truncated_string_value_fails() {
	let err = decode_bytes(b"\x01k\x00", &DecodeOptions::default()).expect_err("no value");
	assert!(matches!(err, VdfError::UnterminatedString { what: "string", at: 3 }));
}

#[test]
fn unterminated_key_fails() {
	let err = decode_bytes(b"\x02abc", &DecodeOptions::default()).expect_err("no key terminator");
	assert!(matches!(err, VdfError::UnterminatedString { what: "key", at: 1 }));
}

#[test]
fn truncated_int_fails() {
	let mut bytes = entry(0x02, "n");
	bytes.extend_from_slice(&[1, 2]);

	let err = decode_bytes(&bytes, &DecodeOptions::default()).expect_err("short payload");
	assert!(matches!(err, VdfError::TruncatedValue { kind: "int32", at: 3, need: 4, got: 2 }));
}

#[test]
fn unterminated_nested_table_fails() {
	let mut bytes = entry(0x00, "a");
	bytes.extend(entry(0x00, "b"));
	bytes.push(0x08);

	let err = decode_bytes(&bytes, &DecodeOptions::default()).expect_err("one table still open");
	assert!(matches!(err, VdfError::UnterminatedTable { at: 7, open: 1 }));
}

#[test]
fn wrapper_tags_decode_to_their_kinds() {
	let mut bytes = entry(0x04, "ptr");
	bytes.extend_from_slice(&7_i32.to_le_bytes());
	bytes.extend(entry(0x06, "col"));
	bytes.extend_from_slice(&(-1_i32).to_le_bytes());
	bytes.extend(entry(0x07, "u"));
	bytes.extend_from_slice(&u64::MAX.to_le_bytes());
	bytes.extend(entry(0x0A, "i"));
	bytes.extend_from_slice(&i64::MIN.to_le_bytes());
	bytes.extend(entry(0x03, "f"));
	bytes.extend_from_slice(&0.25_f32.to_le_bytes());
	bytes.push(0x08);

	let table = decode_bytes(&bytes, &DecodeOptions::default()).expect("decodes");
	assert_eq!(table.get("ptr"), Some(&Value::Pointer(7)));
	assert_eq!(table.get("col"), Some(&Value::Color(-1)));
	assert_eq!(table.get("u"), Some(&Value::UInt64(u64::MAX)));
	assert_eq!(table.get("i"), Some(&Value::Int64(i64::MIN)));
	assert_eq!(table.get("f"), Some(&Value::Float32(0.25)));
}

fn duplicate_table_stream() -> Vec<u8> {
	let mut bytes = entry(0x00, "dup");
	bytes.extend(entry(0x02, "a"));
	bytes.extend_from_slice(&1_i32.to_le_bytes());
	bytes.push(0x08);
	bytes.extend(entry(0x02, "mid"));
	bytes.extend_from_slice(&0_i32.to_le_bytes());
	bytes.extend(entry(0x00, "dup"));
	bytes.extend(entry(0x02, "b"));
	bytes.extend_from_slice(&2_i32.to_le_bytes());
	bytes.push(0x08);
	bytes.push(0x08);
	bytes
}

#[test]
fn duplicate_tables_merge_when_enabled() {
	let table = decode_bytes(&duplicate_table_stream(), &DecodeOptions::default()).expect("decodes");

	let dup = table.get_table("dup").expect("merged table");
	assert_eq!(dup.get("a"), Some(&Value::Int32(1)));
	assert_eq!(dup.get("b"), Some(&Value::Int32(2)));
	assert_eq!(table.keys().collect::<Vec<_>>(), ["dup", "mid"]);
}

#[test]
fn duplicate_tables_replace_when_disabled() {
	let table = decode_bytes(&duplicate_table_stream(), &no_merge()).expect("decodes");

	let dup = table.get_table("dup").expect("replacement table");
	assert_eq!(dup.len(), 1);
	assert_eq!(dup.get("b"), Some(&Value::Int32(2)));
	assert_eq!(table.keys().collect::<Vec<_>>(), ["dup", "mid"]);
}

#[test]
fn merge_does_not_reuse_leaf_under_same_key() {
	let mut bytes = entry(0x02, "x");
	bytes.extend_from_slice(&3_i32.to_le_bytes());
	bytes.extend(entry(0x00, "x"));
	bytes.push(0x08);
	bytes.push(0x08);

	let table = decode_bytes(&bytes, &DecodeOptions::default()).expect("decodes");
	assert_eq!(table.get_table("x"), Some(&Table::new()));
}

#[test]
fn duplicate_leaf_overwrites() {
	let mut bytes = entry(0x01, "name");
	bytes.extend_from_slice(b"old\0");
	bytes.extend(entry(0x01, "name"));
	bytes.extend_from_slice(b"new\0");

	let table = decode_bytes(&bytes, &DecodeOptions::default()).expect("decodes");
	assert_eq!(table.len(), 1);
	assert_eq!(table.get("name").and_then(Value::as_text), Some("new"));
}

#[test]
fn alternate_terminator_closes_tables() {
	let mut bytes = entry(0x00, "t");
	bytes.extend(entry(0x02, "n"));
	bytes.extend_from_slice(&4_i32.to_le_bytes());
	bytes.extend_from_slice(&[0x0B, 0x0B]);

	let alternate = DecodeOptions {
		terminator: Terminator::Alternate,
		..DecodeOptions::default()
	};
	let table = decode_bytes(&bytes, &alternate).expect("decodes");
	assert_eq!(table.get_table("t").and_then(|t| t.get("n")), Some(&Value::Int32(4)));

	let err = decode_bytes(&bytes, &DecodeOptions::default()).expect_err("standard setting rejects 0x0b");
	assert!(matches!(err, VdfError::UnknownTag { tag: 0x0B, .. }));
}

#[test]
fn standard_terminator_is_unknown_in_alternate_mode() {
	let alternate = DecodeOptions {
		terminator: Terminator::Alternate,
		..DecodeOptions::default()
	};
	let err = decode_bytes(b"\x00t\x00\x08", &alternate).expect_err("0x08 is not a terminator here");
	assert!(matches!(err, VdfError::UnknownTag { tag: 0x08, at: 3 }));
}

#[test]
fn decode_starts_at_current_position() {
	let mut cursor = Cursor::new(b"JUNK\x01k\x00v\x00\x08".to_vec());
	let mut skip = [0_u8; 4];
	cursor.read_exact(&mut skip).expect("skip");

	let table = decode(&mut cursor, &DecodeOptions::default()).expect("decodes");
	assert_eq!(table.get("k").and_then(Value::as_text), Some("v"));

	let err = decode(Cursor::new(b"JUNK".to_vec()), &DecodeOptions::default()).expect_err("J is not a tag");
	assert!(matches!(err, VdfError::UnknownTag { tag: b'J', at: 0 }));
}
