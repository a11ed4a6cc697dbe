//! Registry source parsing.
//!
//! The registry is the Apache httpd `mime.types` file: one media type per
//! line, followed by tab-separated columns whose last one is a
//! space-separated list of extensions. Lines starting with `#` are comments.

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// One data line of the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
	/// Media type from the first column (e.g. `text/html`).
	pub content_type: String,
	/// Extensions from the last column, in source order.
	///
	/// Not deduplicated. Doubled spaces in the source leave empty tokens.
	pub extensions: Vec<String>,
}

/// Line counts gathered while parsing a registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
	pub comments: usize,
	pub blank: usize,
	pub records: usize,
	/// Data lines kept in degraded form: no tab separator, or empty
	/// extension tokens.
	pub degraded: usize,
}

/// Reads and parses the registry file at `path`.
pub fn parse_registry(path: &Path) -> Result<Vec<Record>> {
	parse_registry_with_stats(path).map(|(records, _)| records)
}

/// Like [`parse_registry`], also returning line counts.
pub fn parse_registry_with_stats(path: &Path) -> Result<(Vec<Record>, ParseStats)> {
	let text = fs::read_to_string(path).map_err(|source| Error::SourceUnreadable {
		path: path.to_path_buf(),
		source,
	})?;
	Ok(parse_str_with_stats(&text))
}

/// Parses registry text into records, in source order.
pub fn parse_str(text: &str) -> Vec<Record> {
	parse_str_with_stats(text).0
}

/// Like [`parse_str`], also returning line counts.
pub fn parse_str_with_stats(text: &str) -> (Vec<Record>, ParseStats) {
	let mut stats = ParseStats::default();
	let mut records = Vec::new();

	for (idx, line) in text.lines().enumerate() {
		if line.starts_with('#') {
			stats.comments += 1;
			continue;
		}
		if line.trim().is_empty() {
			stats.blank += 1;
			continue;
		}

		let (record, degraded) = parse_line(line);
		if degraded {
			stats.degraded += 1;
			tracing::debug!(line = idx + 1, content_type = %record.content_type, "degraded registry line");
		}
		stats.records += 1;
		records.push(record);
	}

	(records, stats)
}

/// Splits one data line into a record. The flag is set when the line had to
/// be degraded.
fn parse_line(line: &str) -> (Record, bool) {
	let mut fields = line.split('\t');
	// `split` always yields at least one field.
	let first = fields.next().unwrap_or_default();
	let last = fields.next_back();
	let has_tab = last.is_some();

	let content_type = first.trim();
	let column = last.unwrap_or(first).trim();

	let extensions: Vec<String> = if column.is_empty() {
		Vec::new()
	} else {
		column.split(' ').map(str::to_owned).collect()
	};
	let degraded = !has_tab || extensions.iter().any(String::is_empty);

	let record = Record {
		content_type: content_type.to_owned(),
		extensions,
	};
	(record, degraded)
}
