use std::path::PathBuf;

use vdfbin::vdf::{DecodeOptions, Result, Terminator};

use crate::cmd::json::{EntryJson, table_to_json};
use crate::cmd::print::{PrintOptions, render_table};
use crate::cmd::util::{emit_json, load_table};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Tables are closed with 0x0B instead of 0x08.
	#[arg(long = "alt")]
	pub alternate: bool,
	/// Let a repeated table key replace the earlier table instead of merging.
	#[arg(long = "no-merge")]
	pub no_merge: bool,
	/// Fail if bytes follow the root terminator.
	#[arg(long)]
	pub strict: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long)]
	pub json: bool,
}

/// Decode a file and print its tree.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		alternate,
		no_merge,
		strict,
		max_depth,
		json,
	} = args;

	let terminator = Terminator::from_alternate(alternate);
	let options = DecodeOptions {
		merge_duplicate_keys: !no_merge,
		terminator,
		reject_trailing_data: strict,
	};
	let table = load_table(&path, &options)?;

	if json {
		let payload = ShowJson {
			path: path.display().to_string(),
			terminator: terminator.as_str(),
			root: table_to_json(&table),
		};
		return emit_json(&payload);
	}

	let mut print_options = PrintOptions::default();
	if let Some(depth) = max_depth {
		print_options.max_print_depth = depth;
	}
	print!("{}", render_table(&table, print_options));
	Ok(())
}

#[derive(serde::Serialize)]
struct ShowJson {
	path: String,
	terminator: &'static str,
	root: Vec<EntryJson>,
}
