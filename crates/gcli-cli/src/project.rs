//! Facts about the Go project in the working directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::error::CliError;

/// Module path declared in `<dir>/go.mod`.
pub fn project_name(dir: &Path) -> Option<String> {
	let content = fs::read_to_string(dir.join("go.mod")).ok()?;
	content.lines().find_map(|line| {
		let rest = line.trim().strip_prefix("module")?;
		if !rest.starts_with(char::is_whitespace) {
			return None;
		}
		let module = rest.trim().trim_matches('"');
		(!module.is_empty()).then(|| module.to_string())
	})
}

/// Directories under `base` holding an `entry_file` that declares `func main()`.
///
/// Keys are paths relative to `base` (`.` for `base` itself), values are the
/// directory as it should be handed to the toolchain (`./cmd/server`).
/// Hidden directories are skipped.
pub fn find_main(base: &Path, entry_file: &str) -> Result<BTreeMap<String, String>, CliError> {
	let mut found = BTreeMap::new();
	let walker = WalkDir::new(base)
		.into_iter()
		.filter_entry(|e| e.depth() == 0 || !is_hidden(e));

	for entry in walker {
		let entry = entry?;
		if !entry.file_type().is_file() || entry.file_name() != entry_file {
			continue;
		}
		let content = match fs::read_to_string(entry.path()) {
			Ok(c) => c,
			Err(e) => {
				tracing::debug!("skipping {}: {}", entry.path().display(), e);
				continue;
			}
		};
		if !declares_main(&content) {
			continue;
		}
		let Some(dir) = entry.path().parent() else {
			continue;
		};
		let rel = dir.strip_prefix(base).unwrap_or(dir);
		if rel.as_os_str().is_empty() {
			found.insert(".".to_string(), ".".to_string());
		} else {
			let key = rel.display().to_string();
			found.insert(key.clone(), format!("./{}", key));
		}
	}
	Ok(found)
}

fn is_hidden(entry: &DirEntry) -> bool {
	entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}

fn declares_main(source: &str) -> bool {
	source.lines().any(|l| l.trim_start().starts_with("func main()"))
}
