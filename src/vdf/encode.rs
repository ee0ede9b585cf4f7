use std::io::Write;

use tracing::debug;

use crate::vdf::reader::UTF16_BOM;
use crate::vdf::{Result, Table, Tag, Terminator, Value, VdfError};

/// Encoder policy flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
	/// Terminator byte closing tables in this stream.
	pub terminator: Terminator,
}

/// Encode `root` to `writer`.
///
/// An empty root produces no bytes at all. Bytes are streamed as the tree is
/// walked, so a failure part way through leaves a partial stream behind; use
/// [`encode_to_vec`] when the output must be all-or-nothing.
pub fn encode<W: Write>(root: &Table, mut writer: W, options: &EncodeOptions) -> Result<()> {
	if root.is_empty() {
		debug!("encoded empty root as zero bytes");
		return Ok(());
	}

	let end = [options.terminator.byte()];
	write_entries(&mut writer, root, &end)?;
	writer.write_all(&end)?;

	debug!(entries = root.len(), terminator = options.terminator.as_str(), "encoded binary vdf");
	Ok(())
}

/// Encode `root` into a fresh buffer.
pub fn encode_to_vec(root: &Table, options: &EncodeOptions) -> Result<Vec<u8>> {
	let mut out = Vec::new();
	encode(root, &mut out, options)?;
	Ok(out)
}

fn write_entries<W: Write>(writer: &mut W, table: &Table, end: &[u8; 1]) -> Result<()> {
	for (key, value) in table.iter() {
		match value {
			Value::Table(child) => {
				write_head(writer, Tag::TableOpen, key)?;
				write_entries(writer, child, end)?;
				writer.write_all(end)?;
			}
			Value::Text(text) => {
				if text.contains('\0') {
					return Err(VdfError::InteriorNul { what: "text", key: key.to_owned() });
				}
				write_head(writer, Tag::Text, key)?;
				writer.write_all(text.as_bytes())?;
				writer.write_all(&[0])?;
			}
			Value::WideText(text) => {
				if text.units().contains(&0) {
					return Err(VdfError::InteriorNul {
						what: "wide text",
						key: key.to_owned(),
					});
				}
				write_head(writer, Tag::WideText, key)?;
				// leading BOM is stripped again on read
				let bytes: Vec<u8> = std::iter::once(UTF16_BOM)
					.chain(text.units().iter().copied())
					.flat_map(|unit| unit.to_le_bytes())
					.collect();
				writer.write_all(&bytes)?;
				writer.write_all(&[0, 0])?;
			}
			Value::Int32(v) => write_fixed(writer, Tag::Int32, key, &v.to_le_bytes())?,
			Value::Pointer(v) => write_fixed(writer, Tag::Pointer, key, &v.to_le_bytes())?,
			Value::Color(v) => write_fixed(writer, Tag::Color, key, &v.to_le_bytes())?,
			Value::Float32(v) => write_fixed(writer, Tag::Float32, key, &v.to_le_bytes())?,
			Value::UInt64(v) => write_fixed(writer, Tag::UInt64, key, &v.to_le_bytes())?,
			Value::Int64(v) => write_fixed(writer, Tag::Int64, key, &v.to_le_bytes())?,
		}
	}
	Ok(())
}

fn write_head<W: Write>(writer: &mut W, tag: Tag, key: &str) -> Result<()> {
	if key.contains('\0') {
		return Err(VdfError::InteriorNul { what: "key", key: key.to_owned() });
	}
	writer.write_all(&[tag.byte()])?;
	writer.write_all(key.as_bytes())?;
	writer.write_all(&[0])?;
	Ok(())
}

fn write_fixed<W: Write>(writer: &mut W, tag: Tag, key: &str, payload: &[u8]) -> Result<()> {
	write_head(writer, tag, key)?;
	writer.write_all(payload)?;
	Ok(())
}
