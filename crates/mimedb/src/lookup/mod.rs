//! Lazily loaded lookups over the generated artifact.

use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock, OnceLock};

use crate::index::MimeTable;
use crate::location::{Location, location};
use crate::{Error, Result, artifact};

/// Read-only view over one generated artifact.
///
/// Nothing is read until the first query. The artifact is then loaded
/// exactly once, even under concurrent first queries, and kept for the
/// lifetime of the value. A failed load is kept too: every later query
/// reports the same failure instead of retrying.
#[derive(Debug)]
pub struct MimeDb {
	path: PathBuf,
	table: OnceLock<std::result::Result<MimeTable, Arc<Error>>>,
}

impl MimeDb {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			table: OnceLock::new(),
		}
	}

	/// Database over the artifact at `location`.
	pub fn at(location: &Location) -> Self {
		Self::new(location.artifact_path())
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Whether the artifact has been loaded (or has failed to load).
	pub fn is_loaded(&self) -> bool {
		self.table.get().is_some()
	}

	/// The loaded table, loading it on first use.
	///
	/// A failed load is reported as [`Error::Unavailable`] wrapping the
	/// original error, on the first query and on every query after it.
	pub fn table(&self) -> Result<&MimeTable> {
		let loaded = self.table.get_or_init(|| {
			tracing::debug!(path = %self.path.display(), "loading MIME types artifact");
			artifact::load(&self.path).map_err(|e| {
				tracing::error!(path = %self.path.display(), error = %e, "MIME types artifact unavailable");
				Arc::new(e)
			})
		});

		loaded.as_ref().map_err(|source| Error::Unavailable {
			path: self.path.clone(),
			source: Arc::clone(source),
		})
	}

	/// Media types registered for `extension`, or `None` if it is unknown.
	///
	/// Callers wanting a fallback value use `unwrap_or`.
	pub fn types_for_extension(&self, extension: &str) -> Result<Option<&[String]>> {
		Ok(self.table()?.types_for_extension(extension))
	}

	/// Extensions registered for `content_type`, or `None` if it is unknown.
	pub fn extensions_for_type(&self, content_type: &str) -> Result<Option<&[String]>> {
		Ok(self.table()?.extensions_for_type(content_type))
	}
}

static GLOBAL: LazyLock<MimeDb> = LazyLock::new(|| MimeDb::at(location()));

/// Process-wide database over the artifact at [`location()`].
pub fn global() -> &'static MimeDb {
	&GLOBAL
}

/// [`MimeDb::types_for_extension`] on the process-wide database.
pub fn types_for_extension(extension: &str) -> Result<Option<&'static [String]>> {
	global().types_for_extension(extension)
}

/// [`MimeDb::extensions_for_type`] on the process-wide database.
pub fn extensions_for_type(content_type: &str) -> Result<Option<&'static [String]>> {
	global().extensions_for_type(content_type)
}
