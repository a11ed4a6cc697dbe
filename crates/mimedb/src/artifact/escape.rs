//! String escaping for quoted artifact values.

use std::borrow::Cow;
use std::fmt::Write;

/// Escapes `value` for embedding between double quotes.
///
/// Backslashes and double quotes get a leading backslash. Control characters
/// are written as `\t`, `\n`, `\r` or `\uXXXX` so every value stays on one
/// line. Every sequence produced is a TOML basic-string escape, so the
/// artifact decoder reverses it. Returns the input unchanged when nothing
/// needs escaping.
pub fn escape(value: &str) -> Cow<'_, str> {
	if !value.chars().any(needs_escape) {
		return Cow::Borrowed(value);
	}

	let mut out = String::with_capacity(value.len() + 8);
	for c in value.chars() {
		match c {
			'\\' => out.push_str("\\\\"),
			'"' => out.push_str("\\\""),
			'\t' => out.push_str("\\t"),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			c if c.is_control() => {
				let _ = write!(out, "\\u{:04X}", c as u32);
			}
			c => out.push(c),
		}
	}
	Cow::Owned(out)
}

fn needs_escape(c: char) -> bool {
	c == '\\' || c == '"' || c.is_control()
}
