//! CLI schema for the mimedb binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mimedb::Location;
use mimedb::location::DATA_URL;

/// Default bound on the registry download, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

#[derive(Parser, Debug)]
#[command(name = "mimedb")]
#[command(about = "MIME type and file extension database generated from the Apache httpd registry")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Installation root holding the `data/` directory
	#[arg(long, global = true, env = "MIMEDB_ROOT", value_name = "DIR")]
	pub root: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

impl Cli {
	/// Data location, honouring `--root`.
	pub fn location(&self) -> Location {
		match &self.root {
			Some(root) => Location::new(root),
			None => mimedb::location().clone(),
		}
	}
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Download the registry source
	Fetch {
		#[command(flatten)]
		download: DownloadArgs,

		/// Destination file (defaults to `data/mime-types.txt`)
		#[arg(long, short, value_name = "PATH")]
		output: Option<PathBuf>,
	},
	/// Generate the artifact from a local registry source
	Regenerate {
		/// Registry source (defaults to `data/mime-types.txt`)
		#[arg(long, short, value_name = "PATH")]
		source: Option<PathBuf>,

		/// Artifact destination (defaults to `data/mime-types.toml`)
		#[arg(long, short, value_name = "PATH")]
		output: Option<PathBuf>,

		/// Keep the registry source after generating
		#[arg(long)]
		keep_source: bool,
	},
	/// Fetch the registry and regenerate the artifact
	Update {
		#[command(flatten)]
		download: DownloadArgs,

		/// Keep the registry source after generating
		#[arg(long)]
		keep_source: bool,
	},
	/// List the media types registered for an extension
	Types {
		/// Extension without the leading dot (e.g. `html`)
		extension: String,
	},
	/// List the extensions registered for a media type
	Extensions {
		/// Media type (e.g. `text/html`)
		content_type: String,
	},
	/// Print where the database lives
	Location {
		/// Print folder and file name on separate lines
		#[arg(long)]
		structured: bool,
	},
}

/// Registry download settings.
#[derive(clap::Args, Debug, Clone)]
pub struct DownloadArgs {
	/// Registry URL
	#[arg(long, default_value = DATA_URL)]
	pub url: String,

	/// Download timeout in seconds
	#[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_name = "SECS")]
	pub timeout: u64,
}
