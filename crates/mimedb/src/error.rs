use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

/// Errors raised while generating or loading the MIME type tables.
///
/// Malformed registry lines are not represented here: the parser degrades
/// them to a best-effort [`Record`](crate::source::Record) instead of failing.
#[derive(Debug, Error)]
pub enum Error {
	#[error("registry source {} is unreadable: {source}", .path.display())]
	SourceUnreadable {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("failed to write artifact {}: {source}", .path.display())]
	ArtifactWrite {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("MIME types artifact {} is missing: {source}", .path.display())]
	ArtifactMissing {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("malformed artifact: {0}")]
	MalformedArtifact(#[from] toml::de::Error),

	/// The one-time load behind a [`MimeDb`](crate::MimeDb) failed earlier.
	/// The original failure is shared by every later lookup.
	#[error("MIME types artifact {} could not be loaded: {source}", .path.display())]
	Unavailable {
		path: PathBuf,
		#[source]
		source: Arc<Error>,
	},
}

impl Error {
	/// The underlying failure, looking through [`Error::Unavailable`].
	pub fn root(&self) -> &Error {
		match self {
			Self::Unavailable { source, .. } => source.root(),
			other => other,
		}
	}
}

/// Result type for MIME table operations.
pub type Result<T> = std::result::Result<T, Error>;
