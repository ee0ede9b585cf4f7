use vdfbin::shortcut::{ArtworkNames, ShortcutIds, quote_path};
use vdfbin::vdf::Result;

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	#[arg(long)]
	pub exe: String,
	#[arg(long)]
	pub name: String,
	#[arg(long)]
	pub json: bool,
}

/// Print the identifiers Steam derives for a shortcut.
pub fn run(args: Args) -> Result<()> {
	let Args { exe, name, json } = args;

	let ids = ShortcutIds::derive(&quote_path(&exe), &name);
	let artwork = ArtworkNames::for_id(ids.artwork_id());

	if json {
		let payload = AppIdJson {
			exe: quote_path(&exe),
			name,
			appid: ids.shortcut_id(),
			artwork_id: ids.artwork_id(),
			game_id: ids.preliminary(),
			artwork: ArtworkJson::from_names(&artwork),
		};
		return emit_json(&payload);
	}

	println!("appid: {}", ids.shortcut_id());
	println!("artwork_id: {}", ids.artwork_id());
	println!("game_id: {}", ids.preliminary());
	print_artwork(&artwork);
	Ok(())
}

pub(crate) fn print_artwork(artwork: &ArtworkNames) {
	println!("artwork:");
	println!("  grid_portrait: {}", artwork.grid_portrait);
	println!("  grid_wide: {}", artwork.grid_wide);
	println!("  hero: {}", artwork.hero);
	println!("  logo: {}", artwork.logo);
}

#[derive(serde::Serialize)]
pub(crate) struct ArtworkJson {
	grid_portrait: String,
	grid_wide: String,
	hero: String,
	logo: String,
}

impl ArtworkJson {
	pub(crate) fn from_names(names: &ArtworkNames) -> Self {
		Self {
			grid_portrait: names.grid_portrait.clone(),
			grid_wide: names.grid_wide.clone(),
			hero: names.hero.clone(),
			logo: names.logo.clone(),
		}
	}
}

#[derive(serde::Serialize)]
struct AppIdJson {
	exe: String,
	name: String,
	appid: i32,
	artwork_id: u32,
	game_id: u64,
	artwork: ArtworkJson,
}
