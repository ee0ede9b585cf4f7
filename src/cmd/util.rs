use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use tracing::debug;
use vdfbin::vdf::{DecodeOptions, EncodeOptions, Result, Table, decode, encode_to_vec};

/// Open and decode a binary VDF file.
pub(crate) fn load_table(path: &Path, options: &DecodeOptions) -> Result<Table> {
	let file = File::open(path)?;
	decode(BufReader::new(file), options)
}

/// Encode fully in memory, then replace `path` in one write.
pub(crate) fn save_table(path: &Path, table: &Table, options: &EncodeOptions) -> Result<()> {
	let bytes = encode_to_vec(table, options)?;
	fs::write(path, &bytes)?;
	debug!(path = %path.display(), bytes = bytes.len(), "wrote binary vdf");
	Ok(())
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

/// Shorten `input` to `max_len` scalar values.
pub(crate) fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
