/// Shortcut append command.
pub mod add_shortcut;
/// Shortcut identifier command.
pub mod appid;
/// JSON to binary VDF command.
pub mod build;
/// File-level summary command.
pub mod info;
/// Typed JSON conversion shared by `show` and `build`.
pub mod json;
/// Text rendering of decoded tables.
pub mod print;
/// Tree printing command.
pub mod show;
pub(crate) mod util;
