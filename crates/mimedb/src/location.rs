//! Well-known on-disk location of the MIME types data.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Directory under the installation root holding the data files.
pub const DATA_FOLDER: &str = "data";

/// Base name shared by the raw registry and the generated artifact.
pub const DATA_FILENAME: &str = "mime-types";

/// Extension of the raw registry download.
pub const SOURCE_EXTENSION: &str = "txt";

/// Extension of the generated artifact.
pub const ARTIFACT_EXTENSION: &str = "toml";

/// Upstream registry maintained by the Apache httpd project.
pub const DATA_URL: &str = "https://svn.apache.org/repos/asf/httpd/httpd/trunk/docs/conf/mime.types";

static DEFAULT: LazyLock<Location> = LazyLock::new(|| Location::new(env!("CARGO_MANIFEST_DIR")));

/// Data file location, split into folder and extensionless file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
	pub folder: PathBuf,
	pub filename: String,
}

impl Location {
	/// Location of the data files under installation root `root`.
	pub fn new(root: impl AsRef<Path>) -> Self {
		Self {
			folder: root.as_ref().join(DATA_FOLDER),
			filename: DATA_FILENAME.to_string(),
		}
	}

	/// Full path without extension.
	pub fn path(&self) -> PathBuf {
		self.folder.join(&self.filename)
	}

	/// Path of the raw registry (`.txt`).
	pub fn source_path(&self) -> PathBuf {
		self.path().with_extension(SOURCE_EXTENSION)
	}

	/// Path of the generated artifact (`.toml`).
	pub fn artifact_path(&self) -> PathBuf {
		self.path().with_extension(ARTIFACT_EXTENSION)
	}
}

/// Location inside this crate's installation directory.
pub fn location() -> &'static Location {
	&DEFAULT
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn derives_paths_from_root() {
		let loc = Location::new("/opt/mimedb");
		assert_eq!(loc.folder, PathBuf::from("/opt/mimedb/data"));
		assert_eq!(loc.filename, "mime-types");
		assert_eq!(loc.path(), PathBuf::from("/opt/mimedb/data/mime-types"));
		assert_eq!(loc.source_path(), PathBuf::from("/opt/mimedb/data/mime-types.txt"));
		assert_eq!(loc.artifact_path(), PathBuf::from("/opt/mimedb/data/mime-types.toml"));
	}

	#[test]
	fn default_location_is_stable() {
		assert_eq!(location(), location());
		assert!(location().folder.ends_with(DATA_FOLDER));
		assert_eq!(location().folder.parent(), Some(Path::new(env!("CARGO_MANIFEST_DIR"))));
	}
}
