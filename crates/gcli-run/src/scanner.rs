use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::RunError;

/// The files monitored for one run invocation. Built once by [`scan`] and
/// never recomputed: files created later in unwalked locations are not seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchSet {
	paths: BTreeSet<PathBuf>,
}

impl WatchSet {
	pub fn contains(&self, path: &Path) -> bool {
		self.paths.contains(path)
	}

	pub fn len(&self) -> usize {
		self.paths.len()
	}

	pub fn is_empty(&self) -> bool {
		self.paths.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
		self.paths.iter()
	}
}

impl FromIterator<PathBuf> for WatchSet {
	fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
		Self { paths: iter.into_iter().collect() }
	}
}

/// Walk `root` and collect every non-directory entry whose extension is in
/// `extensions`. Extensions may be given with or without the leading dot.
///
/// Any walk error aborts the scan.
pub fn scan(root: &Path, extensions: &[String]) -> Result<WatchSet, RunError> {
	let scan_err = |source: std::io::Error| RunError::Scan { root: root.to_path_buf(), source };
	let abs_root = root.canonicalize().map_err(scan_err)?;

	let mut paths = BTreeSet::new();
	for entry in WalkDir::new(&abs_root) {
		let entry = entry.map_err(|e| scan_err(e.into()))?;
		if entry.file_type().is_dir() {
			continue;
		}
		if has_watched_extension(entry.path(), extensions) {
			paths.insert(entry.into_path());
		}
	}

	tracing::debug!(root = %abs_root.display(), files = paths.len(), "scanned watch root");
	Ok(WatchSet { paths })
}

pub fn has_watched_extension(path: &Path, extensions: &[String]) -> bool {
	let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
		return false;
	};
	extensions.iter().any(|w| w.trim_start_matches('.') == ext)
}
