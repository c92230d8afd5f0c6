use std::io;
use std::path::PathBuf;

/// Setup and launch failures. Everything that happens after the loop is
/// running is either logged or ends in an orderly shutdown, so only these
/// ever reach the caller.
#[derive(Debug)]
pub enum RunError {
	/// The watch root could not be walked.
	Scan { root: PathBuf, source: io::Error },
	/// The file-system notification backend could not be created.
	Watch(notify::Error),
	/// Interrupt/terminate handlers could not be registered.
	Signal(io::Error),
	/// The target program could not be launched.
	Launch { program: String, source: io::Error },
}

impl std::fmt::Display for RunError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			RunError::Scan { root, source } => write!(f, "cannot walk {}: {}", root.display(), source),
			RunError::Watch(e) => write!(f, "cannot create watcher: {}", e),
			RunError::Signal(e) => write!(f, "cannot register signal handlers: {}", e),
			RunError::Launch { program, source } => write!(f, "cmd run failed: {}: {}", program, source),
		}
	}
}

impl std::error::Error for RunError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			RunError::Scan { source, .. } | RunError::Launch { source, .. } => Some(source),
			RunError::Watch(e) => Some(e),
			RunError::Signal(e) => Some(e),
		}
	}
}

impl From<notify::Error> for RunError {
	fn from(e: notify::Error) -> Self {
		RunError::Watch(e)
	}
}
