//! Typed JSON form of a table, shared by `show --json` and `build`.
//!
//! Tables are arrays of `{"key", "type", "value"}` entries so that key order
//! and wrapper kinds survive the trip through JSON. Wide text is an array of
//! UTF-16 code units, which keeps unpaired surrogates intact.

use serde::{Deserialize, Serialize};
use vdfbin::vdf::{Kind, Result, Table, Value, VdfError, WideString};

/// One table entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct EntryJson {
	pub key: String,
	#[serde(rename = "type")]
	pub kind: String,
	pub value: serde_json::Value,
}

/// Whole document accepted by `build`; extra fields are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct DocumentJson {
	pub root: Vec<EntryJson>,
}

pub(crate) fn table_to_json(table: &Table) -> Vec<EntryJson> {
	table
		.iter()
		.map(|(key, value)| EntryJson {
			key: key.to_owned(),
			kind: value.kind().as_str().to_owned(),
			value: value_to_json(value),
		})
		.collect()
}

fn value_to_json(value: &Value) -> serde_json::Value {
	match value {
		Value::Table(table) => serde_json::json!(table_to_json(table)),
		Value::Text(v) => serde_json::json!(v),
		Value::WideText(v) => serde_json::json!(v.units()),
		Value::Int32(v) | Value::Pointer(v) | Value::Color(v) => serde_json::json!(v),
		Value::Float32(v) => serde_json::json!(v),
		Value::UInt64(v) => serde_json::json!(v),
		Value::Int64(v) => serde_json::json!(v),
	}
}

pub(crate) fn json_to_table(entries: Vec<EntryJson>) -> Result<Table> {
	let mut table = Table::new();
	for entry in entries {
		let value = json_to_value(&entry)?;
		table.try_insert(entry.key, value)?;
	}
	Ok(table)
}

fn json_to_value(entry: &EntryJson) -> Result<Value> {
	let Some(kind) = Kind::ALL.into_iter().find(|kind| kind.as_str() == entry.kind) else {
		return Err(invalid(entry, format!("unknown type {:?}", entry.kind)));
	};

	let value = &entry.value;
	Ok(match kind {
		Kind::Table => {
			let children: Vec<EntryJson> = serde_json::from_value(value.clone())?;
			Value::Table(json_to_table(children)?)
		}
		Kind::Text => Value::Text(expect_str(entry)?.to_owned()),
		Kind::WideText => Value::WideText(expect_units(entry)?),
		Kind::Int32 => Value::Int32(expect_i32(entry)?),
		Kind::Pointer => Value::Pointer(expect_i32(entry)?),
		Kind::Color => Value::Color(expect_i32(entry)?),
		Kind::Float32 => Value::Float32(value.as_f64().ok_or_else(|| invalid(entry, "expected a number".to_owned()))? as f32),
		Kind::UInt64 => Value::UInt64(value.as_u64().ok_or_else(|| invalid(entry, "expected an unsigned 64-bit integer".to_owned()))?),
		Kind::Int64 => Value::Int64(value.as_i64().ok_or_else(|| invalid(entry, "expected a signed 64-bit integer".to_owned()))?),
	})
}

fn expect_str(entry: &EntryJson) -> Result<&str> {
	entry.value.as_str().ok_or_else(|| invalid(entry, "expected a string".to_owned()))
}

fn expect_units(entry: &EntryJson) -> Result<WideString> {
	let units: Option<Vec<u16>> = entry.value.as_array().and_then(|items| {
		items
			.iter()
			.map(|item| item.as_u64().and_then(|unit| u16::try_from(unit).ok()))
			.collect()
	});
	units
		.map(WideString::from_units)
		.ok_or_else(|| invalid(entry, "expected an array of UTF-16 code units".to_owned()))
}

fn expect_i32(entry: &EntryJson) -> Result<i32> {
	entry
		.value
		.as_i64()
		.and_then(|v| i32::try_from(v).ok())
		.ok_or_else(|| invalid(entry, "expected a signed 32-bit integer".to_owned()))
}

fn invalid(entry: &EntryJson, reason: String) -> VdfError {
	VdfError::InvalidEntry {
		key: entry.key.clone(),
		reason,
	}
}
