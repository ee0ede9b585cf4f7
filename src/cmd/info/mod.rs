use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use vdfbin::vdf::{DecodeOptions, Kind, Result, Table, Terminator, Value};

use crate::cmd::util::{emit_json, load_table};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Tables are closed with 0x0B instead of 0x08.
	#[arg(long = "alt")]
	pub alternate: bool,
	#[arg(long)]
	pub json: bool,
}

/// Print file size, top-level keys, and per-kind entry counts.
pub fn run(args: Args) -> Result<()> {
	let Args { path, alternate, json } = args;

	let terminator = Terminator::from_alternate(alternate);
	let options = DecodeOptions {
		terminator,
		..DecodeOptions::default()
	};
	let size = fs::metadata(&path)?.len();
	let table = load_table(&path, &options)?;
	let stats = TableStats::collect(&table);

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			size,
			terminator: terminator.as_str(),
			top_level_keys: table.keys().map(str::to_owned).collect(),
			tables: stats.tables,
			max_depth: stats.max_depth,
			kinds: stats.kinds.iter().map(|(kind, count)| (kind.as_str(), *count)).collect(),
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	println!("size: {size}");
	println!("terminator: {}", terminator.as_str());
	println!("top_level_keys: {}", table.keys().collect::<Vec<_>>().join(", "));
	println!("tables: {}", stats.tables);
	println!("max_depth: {}", stats.max_depth);
	println!("kinds:");
	for (kind, count) in &stats.kinds {
		println!("  {}: {count}", kind.as_str());
	}

	Ok(())
}

/// Entry counts over a whole tree; the root itself is not counted.
#[derive(Debug, Default, PartialEq, Eq)]
struct TableStats {
	tables: usize,
	max_depth: usize,
	kinds: BTreeMap<Kind, usize>,
}

impl TableStats {
	fn collect(root: &Table) -> Self {
		let mut stats = Self::default();
		let mut pending: Vec<(&Table, usize)> = vec![(root, 0)];

		while let Some((table, depth)) = pending.pop() {
			stats.max_depth = stats.max_depth.max(depth);
			for (_, value) in table.iter() {
				*stats.kinds.entry(value.kind()).or_insert(0) += 1;
				if let Value::Table(child) = value {
					stats.tables += 1;
					pending.push((child, depth + 1));
				}
			}
		}

		stats
	}
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	size: u64,
	terminator: &'static str,
	top_level_keys: Vec<String>,
	tables: usize,
	max_depth: usize,
	kinds: BTreeMap<&'static str, usize>,
}

#[cfg(test)]
mod tests;
