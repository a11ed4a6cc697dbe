//! Type and extension indexes derived from registry records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::source::Record;

/// Media type to extensions.
pub type TypeIndex = BTreeMap<String, Vec<String>>;

/// Extension to media types.
pub type ExtensionIndex = BTreeMap<String, Vec<String>>;

/// How an index treats a key that more than one record contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// The last contribution replaces earlier ones.
	LastWins,
	/// Every contribution is appended, duplicates included, in record order.
	AllOccurrences,
}

/// Both lookup directions of the MIME types database.
///
/// This is the in-memory form of the generated artifact. Keys are kept in
/// ascending byte order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MimeTable {
	#[serde(rename = "mime-types")]
	pub mime_types: TypeIndex,
	pub extensions: ExtensionIndex,
}

impl MimeTable {
	/// Builds both indexes from records in source order.
	///
	/// A media type listed on several lines keeps only its last extension
	/// list, while an extension listed on several lines keeps every media
	/// type that mentions it, once per mention.
	pub fn from_records(records: &[Record]) -> Self {
		Self {
			mime_types: index_by_type(records, DuplicatePolicy::LastWins),
			extensions: index_by_extension(records, DuplicatePolicy::AllOccurrences),
		}
	}

	/// Media types registered for `extension`.
	pub fn types_for_extension(&self, extension: &str) -> Option<&[String]> {
		self.extensions.get(extension).map(Vec::as_slice)
	}

	/// Extensions registered for `content_type`.
	pub fn extensions_for_type(&self, content_type: &str) -> Option<&[String]> {
		self.mime_types.get(content_type).map(Vec::as_slice)
	}
}

/// Indexes each record's extension list under its media type.
pub fn index_by_type(records: &[Record], policy: DuplicatePolicy) -> TypeIndex {
	let mut index = TypeIndex::new();
	for record in records {
		insert(&mut index, &record.content_type, record.extensions.iter().cloned(), policy);
	}
	index
}

/// Indexes each record's media type under every extension it lists.
pub fn index_by_extension(records: &[Record], policy: DuplicatePolicy) -> ExtensionIndex {
	let mut index = ExtensionIndex::new();
	for record in records {
		for extension in &record.extensions {
			insert(&mut index, extension, std::iter::once(record.content_type.clone()), policy);
		}
	}
	index
}

fn insert(index: &mut BTreeMap<String, Vec<String>>, key: &str, values: impl Iterator<Item = String>, policy: DuplicatePolicy) {
	match policy {
		DuplicatePolicy::LastWins => {
			index.insert(key.to_owned(), values.collect());
		}
		DuplicatePolicy::AllOccurrences => match index.get_mut(key) {
			Some(existing) => existing.extend(values),
			None => {
				index.insert(key.to_owned(), values.collect());
			}
		},
	}
}

#[cfg(test)]
mod tests;
