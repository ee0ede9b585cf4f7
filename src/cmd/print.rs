use std::fmt::Write as _;

use vdfbin::vdf::{Table, Value};

use crate::cmd::util::truncate;

/// Output truncation and formatting limits for decoded tables.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of entries printed for a single table.
	pub max_entries_per_table: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum nesting depth expanded before tables are summarized.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_entries_per_table: 200,
			max_string_len: 200,
			max_print_depth: 16,
		}
	}
}

/// Render `table` as indented `key = kind value` lines.
pub fn render_table(table: &Table, options: PrintOptions) -> String {
	let mut out = String::new();
	render_entries(&mut out, table, 0, options);
	out
}

fn render_entries(out: &mut String, table: &Table, depth: u32, options: PrintOptions) {
	let pad = "  ".repeat(depth as usize);

	for (key, value) in table.iter().take(options.max_entries_per_table) {
		match value {
			Value::Table(child) if child.is_empty() => {
				let _ = writeln!(out, "{pad}{key} {{}}");
			}
			Value::Table(child) if depth + 1 >= options.max_print_depth => {
				let _ = writeln!(out, "{pad}{key} {{ ... {} entries }}", child.len());
			}
			Value::Table(child) => {
				let _ = writeln!(out, "{pad}{key} {{");
				render_entries(out, child, depth + 1, options);
				let _ = writeln!(out, "{pad}}}");
			}
			leaf => {
				let _ = writeln!(out, "{pad}{key} = {} {}", leaf.kind().as_str(), render_leaf(leaf, options));
			}
		}
	}

	if table.len() > options.max_entries_per_table {
		let _ = writeln!(out, "{pad}... {} more entries", table.len() - options.max_entries_per_table);
	}
}

fn render_leaf(value: &Value, options: PrintOptions) -> String {
	match value {
		Value::Text(v) => format!("{:?}", truncate(v, options.max_string_len)),
		Value::WideText(v) => format!("{:?}", truncate(&v.to_string_lossy(), options.max_string_len)),
		Value::Int32(v) | Value::Pointer(v) => v.to_string(),
		Value::Color(v) => format!("0x{:08x}", *v as u32),
		Value::Float32(v) => v.to_string(),
		Value::UInt64(v) => v.to_string(),
		Value::Int64(v) => v.to_string(),
		Value::Table(v) => format!("{{ {} entries }}", v.len()),
	}
}
