//! mimedb binary.
//!
//! Fetches the Apache httpd `mime.types` registry, regenerates the lookup
//! artifact from it, and answers lookups against the artifact.

mod cli;
mod fetch;

use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command, DownloadArgs};
use mimedb::{Location, MimeDb, Options, Stage};

fn main() -> anyhow::Result<ExitCode> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let location = cli.location();
	match cli.command {
		Command::Fetch { download, output } => {
			let dest = output.unwrap_or_else(|| location.source_path());
			fetch_source(&download, &dest)?;
		}
		Command::Regenerate {
			source,
			output,
			keep_source,
		} => {
			let source = source.unwrap_or_else(|| location.source_path());
			let output = output.unwrap_or_else(|| location.artifact_path());
			generate(&source, &output, keep_source)?;
		}
		Command::Update { download, keep_source } => {
			let source = location.source_path();
			fetch_source(&download, &source)?;
			generate(&source, &location.artifact_path(), keep_source)?;
		}
		Command::Types { extension } => {
			let db = MimeDb::at(&location);
			return print_all(db.types_for_extension(&extension)?);
		}
		Command::Extensions { content_type } => {
			let db = MimeDb::at(&location);
			return print_all(db.extensions_for_type(&content_type)?);
		}
		Command::Location { structured } => print_location(&location, structured),
	}

	Ok(ExitCode::SUCCESS)
}

fn fetch_source(download: &DownloadArgs, dest: &Path) -> anyhow::Result<()> {
	println!("Fetching new source version of the Apache HTTP Server MIME types database...");
	let bytes = fetch::download(&download.url, dest, Duration::from_secs(download.timeout))?;
	println!("Saved {bytes} bytes to {}.", dest.display());
	Ok(())
}

fn generate(source: &Path, output: &Path, keep_source: bool) -> anyhow::Result<()> {
	let options = Options { keep_source };
	let summary = mimedb::regenerate_with(source, output, &options, |stage| {
		println!("{}", progress_line(stage, source, output));
	})
	.with_context(|| format!("failed to regenerate {}", output.display()))?;

	println!(
		"The MIME types database has been updated ({}): {} types, {} extensions.",
		summary.artifact.display(),
		summary.mime_types,
		summary.extensions
	);
	Ok(())
}

/// Progress line printed when `stage` starts.
fn progress_line(stage: Stage, source: &Path, output: &Path) -> String {
	match stage {
		Stage::Parsing => format!("Generating MIME types artifact from {}...", source.display()),
		Stage::Indexing => "Building type and extension indexes...".to_string(),
		Stage::Writing => format!("Writing MIME types artifact to {}...", output.display()),
		Stage::RemovingSource => "Removing MIME types source file...".to_string(),
	}
}

/// Prints one value per line; a miss prints nothing and fails.
fn print_all(values: Option<&[String]>) -> anyhow::Result<ExitCode> {
	let Some(values) = values else {
		return Ok(ExitCode::FAILURE);
	};
	for value in values {
		println!("{value}");
	}
	Ok(ExitCode::SUCCESS)
}

fn print_location(location: &Location, structured: bool) {
	if structured {
		println!("folder: {}", location.folder.display());
		println!("filename: {}", location.filename);
	} else {
		println!("{}", location.path().display());
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("mimedb=debug,info")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
