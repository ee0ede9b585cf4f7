use vdfbin::vdf::{Kind, Table, Value};

use super::TableStats;

#[test]
fn stats_count_nested_entries() {
	let root = Table::new().with(
		"shortcuts",
		Table::new()
			.with("1", Table::new().with("appid", Value::Int32(-5)).with("AppName", "a").with("tags", Table::new()))
			.with("2", Table::new().with("appid", Value::Int32(-6))),
	);

	let stats = TableStats::collect(&root);
	assert_eq!(stats.tables, 4);
	assert_eq!(stats.max_depth, 3);
	assert_eq!(stats.kinds.get(&Kind::Int32), Some(&2));
	assert_eq!(stats.kinds.get(&Kind::Text), Some(&1));
	assert_eq!(stats.kinds.get(&Kind::Table), Some(&4));
}

#[test]
fn stats_of_empty_root() {
	assert_eq!(TableStats::collect(&Table::new()), TableStats::default());
}
