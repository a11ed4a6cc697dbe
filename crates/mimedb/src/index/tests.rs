use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::source::parse_str;

fn entries(pairs: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
	pairs
		.iter()
		.map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
		.collect()
}

#[test]
fn last_type_definition_wins_and_extensions_accumulate() {
	let records = parse_str("# comment\ntext/html\thtm html\napplication/json\tjson\ntext/html\thtm\n");
	let table = MimeTable::from_records(&records);

	assert_eq!(
		table.mime_types,
		entries(&[("application/json", &["json"]), ("text/html", &["htm"])])
	);
	assert_eq!(
		table.extensions,
		entries(&[
			("htm", &["text/html", "text/html"]),
			("html", &["text/html"]),
			("json", &["application/json"]),
		])
	);
}

#[test]
fn policies_can_be_swapped_per_index() {
	let records = parse_str("a/x\tone\na/x\ttwo\nb/y\tone\n");

	assert_eq!(
		index_by_type(&records, DuplicatePolicy::AllOccurrences),
		entries(&[("a/x", &["one", "two"]), ("b/y", &["one"])])
	);
	assert_eq!(
		index_by_extension(&records, DuplicatePolicy::LastWins),
		entries(&[("one", &["b/y"]), ("two", &["a/x"])])
	);
}

#[test]
fn record_without_extensions_only_reaches_type_index() {
	let records = parse_str("application/x-empty\t\n");
	let table = MimeTable::from_records(&records);

	assert_eq!(table.mime_types, entries(&[("application/x-empty", &[])]));
	assert!(table.extensions.is_empty());
	assert_eq!(table.extensions_for_type("application/x-empty"), Some(&[] as &[String]));
}

#[test]
fn keys_iterate_in_ascending_order() {
	let records = parse_str("video/mp4\tmp4\naudio/ogg\togg oga\napplication/zip\tzip\n");
	let table = MimeTable::from_records(&records);

	let types: Vec<_> = table.mime_types.keys().map(String::as_str).collect();
	assert_eq!(types, ["application/zip", "audio/ogg", "video/mp4"]);
	let exts: Vec<_> = table.extensions.keys().map(String::as_str).collect();
	assert_eq!(exts, ["mp4", "oga", "ogg", "zip"]);
}

#[test]
fn lookups_miss_with_none() {
	let table = MimeTable::from_records(&parse_str("text/plain\ttxt\n"));
	assert_eq!(table.types_for_extension("doesnotexist"), None);
	assert_eq!(table.types_for_extension("doesnotexist").unwrap_or_default(), &[] as &[String]);
	assert_eq!(table.extensions_for_type("text/nope"), None);
}

fn token() -> impl Strategy<Value = String> {
	"[a-z0-9]{1,4}"
}

fn registry_lines() -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
	prop::collection::vec(("[a-c]/[a-c]{1,2}", prop::collection::vec(token(), 0..4)), 0..12)
}

fn render_lines(lines: &[(String, Vec<String>)]) -> String {
	lines
		.iter()
		.map(|(ty, exts)| format!("{ty}\t{}\n", exts.join(" ")))
		.collect()
}

proptest! {
	#[test]
	fn extension_lists_are_consistent_with_type_lists(lines in registry_lines()) {
		let table = MimeTable::from_records(&parse_str(&render_lines(&lines)));
		for (ty, exts) in &table.mime_types {
			for ext in exts {
				let types = table.types_for_extension(ext).unwrap_or_default();
				prop_assert!(types.contains(ty));
			}
		}
	}

	#[test]
	fn type_keys_hold_last_occurrence(lines in registry_lines()) {
		let table = MimeTable::from_records(&parse_str(&render_lines(&lines)));
		let mut expected = BTreeMap::new();
		for (ty, exts) in &lines {
			expected.insert(ty.clone(), exts.clone());
		}
		prop_assert_eq!(table.mime_types, expected);
	}

	#[test]
	fn extension_lists_count_every_occurrence(lines in registry_lines()) {
		let table = MimeTable::from_records(&parse_str(&render_lines(&lines)));
		let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
		for (_, exts) in &lines {
			for ext in exts {
				*counts.entry(ext.as_str()).or_default() += 1;
			}
		}
		prop_assert_eq!(table.extensions.len(), counts.len());
		for (ext, count) in counts {
			prop_assert_eq!(table.extensions[ext].len(), count);
		}
	}
}
