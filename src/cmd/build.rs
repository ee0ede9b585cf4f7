use std::fs;
use std::path::PathBuf;

use vdfbin::vdf::{EncodeOptions, Result, Terminator};

use crate::cmd::json::{DocumentJson, json_to_table};
use crate::cmd::util::save_table;

#[derive(clap::Args)]
pub struct Args {
	/// Typed JSON document, as printed by `show --json`.
	pub input: PathBuf,
	pub output: PathBuf,
	/// Close tables with 0x0B instead of 0x08.
	#[arg(long = "alt")]
	pub alternate: bool,
}

/// Encode a typed JSON document as binary VDF.
pub fn run(args: Args) -> Result<()> {
	let Args { input, output, alternate } = args;

	let document: DocumentJson = serde_json::from_slice(&fs::read(&input)?)?;
	let table = json_to_table(document.root)?;
	let options = EncodeOptions {
		terminator: Terminator::from_alternate(alternate),
	};
	save_table(&output, &table, &options)?;

	println!("wrote {} ({} top-level entries)", output.display(), table.len());
	Ok(())
}
