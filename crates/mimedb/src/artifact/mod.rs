//! Generated artifact format.
//!
//! The artifact is a plain-text table, a strict subset of TOML, with one
//! section per index and one `"key" = ["value", ...]` line per entry:
//!
//! ```text
//! # DO NOT EDIT! ...
//!
//! [mime-types]
//! "text/html" = ["htm", "html"]
//!
//! [extensions]
//! "htm" = ["text/html"]
//! "html" = ["text/html"]
//! ```
//!
//! Every key and value goes through [`escape`] when rendered. Loading is
//! plain TOML decoding into [`MimeTable`], so the loaded table is identical
//! to the one that was rendered.

mod escape;

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub use escape::escape;
use tempfile::NamedTempFile;

use crate::index::MimeTable;
use crate::{Error, Result};

/// First line of every generated artifact.
pub const HEADER: &str = "# DO NOT EDIT! This file has been automatically generated. Run `mimedb update` to fetch a new version.";

/// Section holding the media type to extensions index.
pub const SECTION_MIME_TYPES: &str = "mime-types";

/// Section holding the extension to media types index.
pub const SECTION_EXTENSIONS: &str = "extensions";

/// Renders `table` in artifact form.
///
/// Output depends only on the table contents.
pub fn render(table: &MimeTable) -> String {
	let mut out = String::new();
	out.push_str(HEADER);
	out.push('\n');
	render_section(&mut out, SECTION_MIME_TYPES, &table.mime_types);
	render_section(&mut out, SECTION_EXTENSIONS, &table.extensions);
	out
}

fn render_section(out: &mut String, name: &str, entries: &BTreeMap<String, Vec<String>>) {
	out.push('\n');
	out.push('[');
	out.push_str(name);
	out.push_str("]\n");

	for (key, values) in entries {
		push_quoted(out, key);
		out.push_str(" = [");
		for (i, value) in values.iter().enumerate() {
			if i > 0 {
				out.push_str(", ");
			}
			push_quoted(out, value);
		}
		out.push_str("]\n");
	}
}

fn push_quoted(out: &mut String, value: &str) {
	out.push('"');
	out.push_str(&escape(value));
	out.push('"');
}

/// Decodes artifact text back into a table.
///
/// Unknown sections and duplicate keys are rejected.
pub fn parse(text: &str) -> Result<MimeTable> {
	Ok(toml::from_str(text)?)
}

/// Reads and parses the artifact at `path`.
pub fn load(path: &Path) -> Result<MimeTable> {
	let text = fs::read_to_string(path).map_err(|source| Error::ArtifactMissing {
		path: path.to_path_buf(),
		source,
	})?;
	parse(&text)
}

/// Replaces the file at `path` with `contents`.
///
/// The contents go to a temporary file in the same directory first and are
/// renamed into place, so readers see either the old or the new artifact.
/// The replacement keeps the mode of the file it replaces; a new file gets
/// [`ARTIFACT_MODE`].
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
	let write_err = |source: io::Error| Error::ArtifactWrite {
		path: path.to_path_buf(),
		source,
	};

	let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
	let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
	tmp.write_all(contents.as_bytes()).map_err(write_err)?;
	#[cfg(unix)]
	tmp.as_file().set_permissions(target_permissions(path)).map_err(write_err)?;
	tmp.as_file().sync_all().map_err(write_err)?;
	tmp.persist(path).map_err(|e| write_err(e.error))?;

	tracing::debug!(path = %path.display(), bytes = contents.len(), "artifact written");
	Ok(())
}

/// Mode of a newly created artifact.
#[cfg(unix)]
pub const ARTIFACT_MODE: u32 = 0o644;

#[cfg(unix)]
fn target_permissions(path: &Path) -> fs::Permissions {
	use std::os::unix::fs::PermissionsExt;

	match fs::metadata(path) {
		Ok(meta) => meta.permissions(),
		Err(_) => fs::Permissions::from_mode(ARTIFACT_MODE),
	}
}
