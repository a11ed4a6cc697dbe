//! Registry download.

use std::fs::{self, File};
use std::path::Path;
use std::time::Duration;

use anyhow::Context;

/// Downloads `url` into `dest`, creating the parent directory as needed.
///
/// Returns the number of bytes written.
pub fn download(url: &str, dest: &Path, timeout: Duration) -> anyhow::Result<u64> {
	tracing::info!(%url, dest = %dest.display(), timeout_secs = timeout.as_secs(), "downloading registry");

	let client = reqwest::blocking::Client::builder()
		.timeout(timeout)
		.build()
		.context("failed to build HTTP client")?;
	let mut response = client
		.get(url)
		.send()
		.and_then(|r| r.error_for_status())
		.with_context(|| format!("failed to download {url}"))?;

	if let Some(parent) = dest.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent).with_context(|| format!("failed to create {}", parent.display()))?;
	}

	let mut file = File::create(dest).with_context(|| format!("failed to create {}", dest.display()))?;
	let bytes = response
		.copy_to(&mut file)
		.with_context(|| format!("failed to write {}", dest.display()))?;

	tracing::debug!(bytes, "registry downloaded");
	Ok(bytes)
}
