//! Full rebuild of the artifact from a registry file.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::index::MimeTable;
use crate::source::{ParseStats, parse_registry_with_stats};
use crate::{Result, artifact};

/// Pipeline step, reported before it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
	Parsing,
	Indexing,
	Writing,
	RemovingSource,
}

impl fmt::Display for Stage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Stage::Parsing => "parsing registry source",
			Stage::Indexing => "building type and extension indexes",
			Stage::Writing => "writing artifact",
			Stage::RemovingSource => "removing registry source",
		})
	}
}

#[derive(Debug, Clone, Default)]
pub struct Options {
	/// Leave the registry file in place after a successful run.
	pub keep_source: bool,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
	pub artifact: PathBuf,
	pub stats: ParseStats,
	pub mime_types: usize,
	pub extensions: usize,
	pub source_removed: bool,
}

/// Rebuilds the artifact at `artifact_path` from the registry at
/// `source_path`, then deletes the registry file.
pub fn regenerate(source_path: &Path, artifact_path: &Path) -> Result<Summary> {
	regenerate_with(source_path, artifact_path, &Options::default(), |_| {})
}

/// [`regenerate`] with options and a per-stage progress callback.
///
/// An unreadable source aborts before anything is written, and a failed
/// write leaves any previous artifact untouched. Removing the source is
/// best effort once the artifact is in place.
pub fn regenerate_with(source_path: &Path, artifact_path: &Path, options: &Options, mut on_stage: impl FnMut(Stage)) -> Result<Summary> {
	let mut enter = |stage: Stage| {
		tracing::info!(%stage, "regenerate");
		on_stage(stage);
	};

	enter(Stage::Parsing);
	let (records, stats) = parse_registry_with_stats(source_path)?;
	if stats.degraded > 0 {
		tracing::warn!(degraded = stats.degraded, source = %source_path.display(), "registry contained malformed lines");
	}

	enter(Stage::Indexing);
	let table = MimeTable::from_records(&records);

	enter(Stage::Writing);
	artifact::write_atomic(artifact_path, &artifact::render(&table))?;

	let mut source_removed = false;
	if !options.keep_source {
		enter(Stage::RemovingSource);
		match fs::remove_file(source_path) {
			Ok(()) => source_removed = true,
			Err(e) => tracing::warn!(source = %source_path.display(), error = %e, "failed to remove registry source"),
		}
	}

	let summary = Summary {
		artifact: artifact_path.to_path_buf(),
		stats,
		mime_types: table.mime_types.len(),
		extensions: table.extensions.len(),
		source_removed,
	};
	tracing::info!(
		artifact = %summary.artifact.display(),
		records = stats.records,
		mime_types = summary.mime_types,
		extensions = summary.extensions,
		"MIME types artifact regenerated"
	);
	Ok(summary)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::Error;
	use crate::location::Location;
	use crate::lookup::MimeDb;

	const REGISTRY: &str = "# comment\ntext/html\thtm html\napplication/json\tjson\ntext/html\thtm\n";

	fn setup() -> (tempfile::TempDir, Location) {
		let dir = tempfile::tempdir().unwrap();
		let location = Location::new(dir.path());
		fs::create_dir_all(&location.folder).unwrap();
		fs::write(location.source_path(), REGISTRY).unwrap();
		(dir, location)
	}

	#[test]
	fn writes_artifact_and_removes_source() {
		let (_dir, location) = setup();

		let summary = regenerate(&location.source_path(), &location.artifact_path()).unwrap();

		assert_eq!(summary.mime_types, 2);
		assert_eq!(summary.extensions, 3);
		assert_eq!(summary.stats.records, 3);
		assert!(summary.source_removed);
		assert!(!location.source_path().exists());

		let db = MimeDb::at(&location);
		assert_eq!(db.extensions_for_type("text/html").unwrap(), Some(&["htm".to_string()][..]));
	}

	#[test]
	fn reports_every_stage_in_order() {
		let (_dir, location) = setup();
		let mut stages = Vec::new();

		regenerate_with(&location.source_path(), &location.artifact_path(), &Options::default(), |s| stages.push(s)).unwrap();

		assert_eq!(stages, [Stage::Parsing, Stage::Indexing, Stage::Writing, Stage::RemovingSource]);
	}

	#[test]
	fn keep_source_skips_removal() {
		let (_dir, location) = setup();
		let mut stages = Vec::new();
		let options = Options { keep_source: true };

		let summary = regenerate_with(&location.source_path(), &location.artifact_path(), &options, |s| stages.push(s)).unwrap();

		assert!(!summary.source_removed);
		assert!(location.source_path().exists());
		assert!(!stages.contains(&Stage::RemovingSource));
	}

	#[test]
	fn unreadable_source_writes_nothing() {
		let dir = tempfile::tempdir().unwrap();
		let location = Location::new(dir.path());
		fs::create_dir_all(&location.folder).unwrap();

		let err = regenerate(&location.source_path(), &location.artifact_path()).unwrap_err();

		assert!(matches!(err, Error::SourceUnreadable { .. }), "{err}");
		assert!(!location.artifact_path().exists());
	}

	#[test]
	fn failed_write_keeps_source() {
		let dir = tempfile::tempdir().unwrap();
		let source = dir.path().join("mime-types.txt");
		fs::write(&source, REGISTRY).unwrap();
		let artifact = dir.path().join("missing").join("mime-types.toml");

		let err = regenerate(&source, &artifact).unwrap_err();

		assert!(matches!(err, Error::ArtifactWrite { .. }), "{err}");
		assert!(source.exists());
	}

	#[test]
	fn rerun_is_byte_identical() {
		let (_dir, location) = setup();
		let options = Options { keep_source: true };

		regenerate_with(&location.source_path(), &location.artifact_path(), &options, |_| {}).unwrap();
		let first = fs::read(location.artifact_path()).unwrap();
		regenerate_with(&location.source_path(), &location.artifact_path(), &options, |_| {}).unwrap();

		assert_eq!(fs::read(location.artifact_path()).unwrap(), first);
	}
}
