//! Steam non-Steam-game shortcuts as stored in `userdata/<id>/config/shortcuts.vdf`.
//!
//! The codec knows nothing about these records; this module builds them as
//! plain [`Table`] trees and derives the identifiers Steam expects.

use crc32fast::Hasher;
use tracing::debug;

use crate::vdf::{Result, Table, Value};

/// Top-level key holding all shortcut records.
pub const SHORTCUTS_KEY: &str = "shortcuts";

/// Contents of a fresh `shortcuts.vdf` with no records.
pub const EMPTY_SHORTCUTS_FILE: &[u8] = b"\x00shortcuts\x00\x08\x08";

/// Identifiers derived from a shortcut's executable and name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutIds {
	preliminary: u64,
}

impl ShortcutIds {
	/// Derive identifiers from the CRC-32 of `exe` followed by `app_name`.
	pub fn derive(exe: &str, app_name: &str) -> Self {
		let mut hasher = Hasher::new();
		hasher.update(exe.as_bytes());
		hasher.update(app_name.as_bytes());
		let top = u64::from(hasher.finalize() | 0x8000_0000);

		Self {
			preliminary: (top << 32) | 0x0200_0000,
		}
	}

	/// Full 64-bit game id.
	pub fn preliminary(self) -> u64 {
		self.preliminary
	}

	/// Unsigned id used in grid artwork file names.
	pub fn artwork_id(self) -> u32 {
		(self.preliminary >> 32) as u32
	}

	/// Signed id stored as `appid` in the shortcut record.
	pub fn shortcut_id(self) -> i32 {
		// top bit is always set, so this is artwork_id - 2^32
		self.artwork_id() as i32
	}
}

/// Grid artwork file names Steam looks up for a shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkNames {
	/// Portrait library capsule.
	pub grid_portrait: String,
	/// Wide library capsule.
	pub grid_wide: String,
	/// Library hero banner.
	pub hero: String,
	/// Logo drawn over the hero.
	pub logo: String,
}

impl ArtworkNames {
	/// File names for `artwork_id`.
	pub fn for_id(artwork_id: u32) -> Self {
		Self {
			grid_portrait: format!("{artwork_id}p.png"),
			grid_wide: format!("{artwork_id}.png"),
			hero: format!("{artwork_id}_hero.png"),
			logo: format!("{artwork_id}_logo.png"),
		}
	}
}

/// Wrap a path in double quotes the way Steam stores `Exe` and `StartDir`.
pub fn quote_path(path: &str) -> String {
	if path.len() >= 2 && path.starts_with('"') && path.ends_with('"') {
		return path.to_owned();
	}
	format!("\"{path}\"")
}

/// One shortcut record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
	/// Display name in the library.
	pub app_name: String,
	/// Quoted executable path.
	pub exe: String,
	/// Quoted working directory.
	pub start_dir: String,
	/// Icon image path.
	pub icon: String,
	/// Desktop entry the shortcut was created from.
	pub shortcut_path: String,
	/// Extra command-line arguments.
	pub launch_options: String,
	/// Hidden from the library.
	pub is_hidden: bool,
	/// Use desktop controller configuration.
	pub allow_desktop_config: bool,
	/// Enable the in-game overlay.
	pub allow_overlay: bool,
	/// Launch in VR.
	pub open_vr: bool,
	/// Devkit shortcut.
	pub devkit: bool,
	/// Devkit game identifier.
	pub devkit_game_id: String,
	/// Devkit app id override.
	pub devkit_override_app_id: i32,
	/// Unix time of the last launch.
	pub last_play_time: i32,
	/// Flatpak application id.
	pub flatpak_app_id: String,
	/// Library collections.
	pub tags: Vec<String>,
}

impl Shortcut {
	/// Record with Steam's defaults; `exe` and `start_dir` are quoted.
	pub fn new(app_name: impl Into<String>, exe: &str, start_dir: &str) -> Self {
		Self {
			app_name: app_name.into(),
			exe: quote_path(exe),
			start_dir: quote_path(start_dir),
			icon: String::new(),
			shortcut_path: String::new(),
			launch_options: String::new(),
			is_hidden: false,
			allow_desktop_config: true,
			allow_overlay: true,
			open_vr: false,
			devkit: false,
			devkit_game_id: String::new(),
			devkit_override_app_id: 0,
			last_play_time: 0,
			flatpak_app_id: String::new(),
			tags: Vec::new(),
		}
	}

	/// Identifiers derived from the stored `exe` and `app_name`.
	pub fn ids(&self) -> ShortcutIds {
		ShortcutIds::derive(&self.exe, &self.app_name)
	}

	/// Record as a table, in the field order Steam writes.
	pub fn to_table(&self) -> Table {
		let tags: Table = self.tags.iter().enumerate().map(|(idx, tag)| (idx.to_string(), tag.as_str())).collect();

		Table::new()
			.with("appid", Value::Int32(self.ids().shortcut_id()))
			.with("AppName", self.app_name.as_str())
			.with("Exe", self.exe.as_str())
			.with("StartDir", self.start_dir.as_str())
			.with("icon", self.icon.as_str())
			.with("ShortcutPath", self.shortcut_path.as_str())
			.with("LaunchOptions", self.launch_options.as_str())
			.with("IsHidden", flag(self.is_hidden))
			.with("AllowDesktopConfig", flag(self.allow_desktop_config))
			.with("AllowOverlay", flag(self.allow_overlay))
			.with("OpenVR", flag(self.open_vr))
			.with("Devkit", flag(self.devkit))
			.with("DevkitGameID", self.devkit_game_id.as_str())
			.with("DevkitOverrideAppID", self.devkit_override_app_id)
			.with("LastPlayTime", self.last_play_time)
			.with("FlatpakAppID", self.flatpak_app_id.as_str())
			.with("tags", tags)
	}
}

/// Append `shortcut` under the root's `shortcuts` table, returning its key.
///
/// Keys are decimal indices starting at the current record count plus one,
/// skipping any index already taken.
pub fn append_shortcut(root: &mut Table, shortcut: &Shortcut) -> Result<String> {
	let shortcuts = root.table_entry(SHORTCUTS_KEY)?;

	let mut index = shortcuts.len() + 1;
	while shortcuts.contains_key(&index.to_string()) {
		index += 1;
	}
	let key = index.to_string();

	shortcuts.insert(key.clone(), shortcut.to_table());
	debug!(key = %key, app_name = %shortcut.app_name, appid = shortcut.ids().shortcut_id(), "appended shortcut");
	Ok(key)
}

fn flag(value: bool) -> i32 {
	i32::from(value)
}
