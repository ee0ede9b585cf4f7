use indexmap::IndexMap;

use crate::vdf::{Result, VdfError};

/// Storable value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
	/// Nested table.
	Table,
	/// UTF-8 string.
	Text,
	/// UTF-16 string.
	WideText,
	/// 32-bit signed integer.
	Int32,
	/// 32-bit float.
	Float32,
	/// 32-bit integer tagged as a pointer.
	Pointer,
	/// 32-bit integer tagged as a color.
	Color,
	/// 64-bit unsigned integer.
	UInt64,
	/// 64-bit signed integer.
	Int64,
}

impl Kind {
	/// Every kind, in wire tag order.
	pub const ALL: [Kind; 9] = [
		Kind::Table,
		Kind::Text,
		Kind::Int32,
		Kind::Float32,
		Kind::Pointer,
		Kind::WideText,
		Kind::Color,
		Kind::UInt64,
		Kind::Int64,
	];

	/// Render kind as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Table => "table",
			Self::Text => "text",
			Self::WideText => "wide_text",
			Self::Int32 => "int32",
			Self::Float32 => "float32",
			Self::Pointer => "pointer",
			Self::Color => "color",
			Self::UInt64 => "uint64",
			Self::Int64 => "int64",
		}
	}
}

/// String stored as raw UTF-16 code units.
///
/// Unlike [`String`], this can hold unpaired surrogates, which is what forces
/// a string onto the wide wire encoding in the first place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WideString(Vec<u16>);

impl WideString {
	/// Wrap raw code units.
	pub fn from_units(units: Vec<u16>) -> Self {
		Self(units)
	}

	/// Borrow raw code units.
	pub fn units(&self) -> &[u16] {
		&self.0
	}

	/// Decode to a `String` when the units are valid UTF-16.
	pub fn to_string_checked(&self) -> Option<String> {
		String::from_utf16(&self.0).ok()
	}

	/// Decode to a `String`, replacing unpaired surrogates.
	pub fn to_string_lossy(&self) -> String {
		String::from_utf16_lossy(&self.0)
	}
}

impl From<&str> for WideString {
	fn from(value: &str) -> Self {
		Self(value.encode_utf16().collect())
	}
}

/// Decoded or constructed binary VDF value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Nested table.
	Table(Table),
	/// String written as UTF-8.
	Text(String),
	/// String written as UTF-16.
	WideText(WideString),
	/// 32-bit signed integer.
	Int32(i32),
	/// 32-bit float.
	Float32(f32),
	/// 32-bit integer tagged as a pointer.
	Pointer(i32),
	/// 32-bit integer tagged as a color.
	Color(i32),
	/// 64-bit unsigned integer.
	UInt64(u64),
	/// 64-bit signed integer.
	Int64(i64),
}

impl Value {
	/// Build a pointer-tagged integer.
	pub fn pointer(value: i32) -> Self {
		Self::Pointer(value)
	}

	/// Build a color-tagged integer.
	pub fn color(value: i32) -> Self {
		Self::Color(value)
	}

	/// Build a string value from UTF-16 code units.
	///
	/// Valid UTF-16 becomes [`Value::Text`]; anything UTF-8 cannot carry
	/// losslessly becomes [`Value::WideText`].
	pub fn from_utf16(units: &[u16]) -> Self {
		match String::from_utf16(units) {
			Ok(text) => Self::Text(text),
			Err(_) => Self::WideText(WideString::from_units(units.to_vec())),
		}
	}

	/// Kind of this value.
	pub fn kind(&self) -> Kind {
		match self {
			Self::Table(_) => Kind::Table,
			Self::Text(_) => Kind::Text,
			Self::WideText(_) => Kind::WideText,
			Self::Int32(_) => Kind::Int32,
			Self::Float32(_) => Kind::Float32,
			Self::Pointer(_) => Kind::Pointer,
			Self::Color(_) => Kind::Color,
			Self::UInt64(_) => Kind::UInt64,
			Self::Int64(_) => Kind::Int64,
		}
	}

	/// Borrow as a table.
	pub fn as_table(&self) -> Option<&Table> {
		match self {
			Self::Table(table) => Some(table),
			_ => None,
		}
	}

	/// Mutably borrow as a table.
	pub fn as_table_mut(&mut self) -> Option<&mut Table> {
		match self {
			Self::Table(table) => Some(table),
			_ => None,
		}
	}

	/// Borrow UTF-8 text.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			_ => None,
		}
	}

	/// Borrow wide text.
	pub fn as_wide_text(&self) -> Option<&WideString> {
		match self {
			Self::WideText(text) => Some(text),
			_ => None,
		}
	}

	/// Plain `Int32` payload.
	pub fn as_int32(&self) -> Option<i32> {
		match self {
			Self::Int32(value) => Some(*value),
			_ => None,
		}
	}

	/// `Float32` payload.
	pub fn as_float32(&self) -> Option<f32> {
		match self {
			Self::Float32(value) => Some(*value),
			_ => None,
		}
	}

	/// `Pointer` payload.
	pub fn as_pointer(&self) -> Option<i32> {
		match self {
			Self::Pointer(value) => Some(*value),
			_ => None,
		}
	}

	/// `Color` payload.
	pub fn as_color(&self) -> Option<i32> {
		match self {
			Self::Color(value) => Some(*value),
			_ => None,
		}
	}

	/// `UInt64` payload.
	pub fn as_uint64(&self) -> Option<u64> {
		match self {
			Self::UInt64(value) => Some(*value),
			_ => None,
		}
	}

	/// `Int64` payload.
	pub fn as_int64(&self) -> Option<i64> {
		match self {
			Self::Int64(value) => Some(*value),
			_ => None,
		}
	}
}

impl From<Table> for Value {
	fn from(value: Table) -> Self {
		Self::Table(value)
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::Text(value.to_owned())
	}
}

impl From<WideString> for Value {
	fn from(value: WideString) -> Self {
		Self::WideText(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Self::Int32(value)
	}
}

impl From<f32> for Value {
	fn from(value: f32) -> Self {
		Self::Float32(value)
	}
}

impl From<u64> for Value {
	fn from(value: u64) -> Self {
		Self::UInt64(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Int64(value)
	}
}

/// Ordered key/value container with unique keys.
///
/// Iteration follows insertion order, which is also the order the encoder
/// writes entries in. Replacing an existing key keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
	entries: IndexMap<String, Value>,
}

impl Table {
	/// Create an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the table has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Insert or replace `key`, returning the previous value.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.entries.insert(key.into(), value.into())
	}

	/// Insert `key`, refusing to replace an existing entry.
	pub fn try_insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
		let key = key.into();
		if self.entries.contains_key(&key) {
			return Err(VdfError::DuplicateKey { key });
		}
		self.entries.insert(key, value.into());
		Ok(())
	}

	/// Chainable insert for building literal trees.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(key, value);
		self
	}

	/// Look up a value.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.entries.get(key)
	}

	/// Look up a value mutably.
	pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
		self.entries.get_mut(key)
	}

	/// Look up a nested table.
	pub fn get_table(&self, key: &str) -> Option<&Table> {
		self.get(key).and_then(Value::as_table)
	}

	/// Look up a nested table mutably.
	pub fn get_table_mut(&mut self, key: &str) -> Option<&mut Table> {
		self.get_mut(key).and_then(Value::as_table_mut)
	}

	/// Whether `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Remove `key`, keeping the order of the remaining entries.
	pub fn remove(&mut self, key: &str) -> Option<Value> {
		self.entries.shift_remove(key)
	}

	/// Nested table under `key`, created empty when absent.
	pub fn table_entry(&mut self, key: &str) -> Result<&mut Table> {
		let value = self.entries.entry(key.to_owned()).or_insert_with(|| Value::Table(Table::new()));
		match value {
			Value::Table(table) => Ok(table),
			other => Err(VdfError::UnexpectedKind {
				key: key.to_owned(),
				expected: Kind::Table.as_str(),
				got: other.kind().as_str(),
			}),
		}
	}

	/// Iterate entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.entries.iter().map(|(key, value)| (key.as_str(), value))
	}

	/// Iterate keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Table {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut table = Table::new();
		for (key, value) in iter {
			table.insert(key, value);
		}
		table
	}
}

#[cfg(test)]
mod tests;
