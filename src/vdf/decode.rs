use std::io::{Cursor, Read, Seek};

use tracing::{debug, trace};

use crate::vdf::reader::StreamReader;
use crate::vdf::{Result, Table, Tag, Terminator, Value, VdfError, WideString};

/// Decoder policy flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
	/// Fold repeated table keys into the first table instead of replacing it.
	pub merge_duplicate_keys: bool,
	/// Terminator byte closing tables in this stream.
	pub terminator: Terminator,
	/// Fail when bytes remain after the root table closes.
	pub reject_trailing_data: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			merge_duplicate_keys: true,
			terminator: Terminator::Standard,
			reject_trailing_data: false,
		}
	}
}

struct OpenTable {
	key: String,
	table: Table,
}

/// Decode one root table from `reader`, starting at its current position.
///
/// Reaching end of stream with only the root open is a normal end, since
/// real files often omit the final root terminator.
pub fn decode<R: Read + Seek>(reader: R, options: &DecodeOptions) -> Result<Table> {
	let mut reader = StreamReader::new(reader)?;
	let start = reader.pos();
	let end_byte = options.terminator.byte();

	let mut root = Table::new();
	let mut stack: Vec<OpenTable> = Vec::new();
	let mut closed_root = false;

	loop {
		let at = reader.pos();
		let Some(byte) = reader.read_byte()? else {
			if !stack.is_empty() {
				return Err(VdfError::UnterminatedTable { at, open: stack.len() });
			}
			break;
		};

		if byte == end_byte {
			match stack.pop() {
				Some(closed) => {
					current(&mut root, &mut stack).insert(closed.key, closed.table);
					continue;
				}
				None => {
					closed_root = true;
					break;
				}
			}
		}

		let tag = match Tag::from_byte(byte) {
			Some(tag) if !tag.is_terminator() => tag,
			_ => return Err(VdfError::UnknownTag { tag: byte, at }),
		};

		let key = reader.read_string("key")?;
		let parent = current(&mut root, &mut stack);

		let value = match tag {
			Tag::TableOpen => {
				let table = if options.merge_duplicate_keys
					&& let Some(existing) = parent.get_table_mut(&key)
				{
					trace!(key = %key, "merging duplicate table key");
					std::mem::take(existing)
				} else {
					if parent.insert(key.clone(), Table::new()).is_some() {
						trace!(key = %key, "replacing duplicate table key");
					}
					Table::new()
				};
				stack.push(OpenTable { key, table });
				continue;
			}
			Tag::Text => Value::Text(reader.read_string("string")?),
			Tag::WideText => Value::WideText(WideString::from_units(reader.read_wide_string()?)),
			Tag::Int32 => Value::Int32(reader.read_i32_le("int32")?),
			Tag::Pointer => Value::Pointer(reader.read_i32_le("pointer")?),
			Tag::Color => Value::Color(reader.read_i32_le("color")?),
			Tag::UInt64 => Value::UInt64(reader.read_u64_le()?),
			Tag::Int64 => Value::Int64(reader.read_i64_le()?),
			Tag::Float32 => Value::Float32(reader.read_f32_le()?),
			Tag::End | Tag::EndAlt => unreachable!("terminators are handled before key decode"),
		};

		if parent.insert(key, value).is_some() {
			trace!("replaced duplicate leaf key");
		}
	}

	if closed_root && options.reject_trailing_data {
		let at = reader.pos();
		if reader.read_byte()?.is_some() {
			reader.unread_byte()?;
			return Err(VdfError::TrailingData { at });
		}
	}

	debug!(bytes = reader.pos() - start, entries = root.len(), terminator = options.terminator.as_str(), "decoded binary vdf");
	Ok(root)
}

/// Decode one root table from an in-memory buffer.
pub fn decode_bytes(bytes: &[u8], options: &DecodeOptions) -> Result<Table> {
	decode(Cursor::new(bytes), options)
}

fn current<'a>(root: &'a mut Table, stack: &'a mut [OpenTable]) -> &'a mut Table {
	match stack.last_mut() {
		Some(open) => &mut open.table,
		None => root,
	}
}

#[cfg(test)]
mod tests;
