use std::path::{Path, PathBuf};

use tracing::info;
use vdfbin::shortcut::{ArtworkNames, EMPTY_SHORTCUTS_FILE, Shortcut, append_shortcut};
use vdfbin::vdf::{DecodeOptions, EncodeOptions, Result, Table, Terminator, decode_bytes};

use crate::cmd::appid::{ArtworkJson, print_artwork};
use crate::cmd::util::{emit_json, load_table, save_table};

#[derive(clap::Args)]
pub struct Args {
	/// `shortcuts.vdf` to edit; created when missing.
	pub path: PathBuf,
	#[arg(long)]
	pub name: String,
	#[arg(long)]
	pub exe: String,
	/// Working directory; defaults to the executable's directory.
	#[arg(long = "start-dir")]
	pub start_dir: Option<String>,
	#[arg(long)]
	pub icon: Option<String>,
	#[arg(long = "launch-options")]
	pub launch_options: Option<String>,
	#[arg(long = "tag")]
	pub tags: Vec<String>,
	/// Tables are closed with 0x0B instead of 0x08.
	#[arg(long = "alt")]
	pub alternate: bool,
	#[arg(long)]
	pub json: bool,
}

/// Append a shortcut record and rewrite the file.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		name,
		exe,
		start_dir,
		icon,
		launch_options,
		tags,
		alternate,
		json,
	} = args;

	let terminator = Terminator::from_alternate(alternate);
	let mut root = if path.exists() {
		load_table(
			&path,
			&DecodeOptions {
				terminator,
				..DecodeOptions::default()
			},
		)?
	} else {
		info!(path = %path.display(), "creating new shortcuts file");
		seed_table()?
	};

	let start_dir = start_dir.unwrap_or_else(|| default_start_dir(&exe));
	let mut shortcut = Shortcut::new(name, &exe, &start_dir);
	shortcut.icon = icon.unwrap_or_default();
	shortcut.launch_options = launch_options.unwrap_or_default();
	shortcut.tags = tags;

	let key = append_shortcut(&mut root, &shortcut)?;
	save_table(&path, &root, &EncodeOptions { terminator })?;

	let ids = shortcut.ids();
	let artwork = ArtworkNames::for_id(ids.artwork_id());

	if json {
		let payload = AddShortcutJson {
			path: path.display().to_string(),
			key,
			appid: ids.shortcut_id(),
			artwork_id: ids.artwork_id(),
			artwork: ArtworkJson::from_names(&artwork),
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	println!("key: {key}");
	println!("appid: {}", ids.shortcut_id());
	println!("artwork_id: {}", ids.artwork_id());
	print_artwork(&artwork);
	Ok(())
}

/// Parsed form of a fresh shortcuts file; saved later with the chosen terminator.
fn seed_table() -> Result<Table> {
	decode_bytes(EMPTY_SHORTCUTS_FILE, &DecodeOptions::default())
}

fn default_start_dir(exe: &str) -> String {
	match Path::new(exe.trim_matches('"')).parent() {
		Some(parent) if !parent.as_os_str().is_empty() => format!("{}/", parent.display()),
		_ => "./".to_owned(),
	}
}

#[derive(serde::Serialize)]
struct AddShortcutJson {
	path: String,
	key: String,
	appid: i32,
	artwork_id: u32,
	artwork: ArtworkJson,
}
